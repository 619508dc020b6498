//! Team API endpoints.

use axum::extract::{Path, State};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::Team;
use crate::AppState;

/// GET /api/teams - List all teams.
pub async fn list_teams(State(state): State<AppState>) -> ApiResult<Vec<Team>> {
    let store = state.store.read().await;
    success(store.teams().to_vec())
}

/// GET /api/teams/:id - Get a single team.
pub async fn get_team(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Team> {
    let store = state.store.read().await;
    match store.get_team(&id) {
        Some(team) => success(team.clone()),
        None => error(AppError::NotFound(format!("Team {} not found", id))),
    }
}
