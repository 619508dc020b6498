//! Current-selection API endpoints.
//!
//! The selection pointers track which retro and team the UI is focused on.
//! The store accepts any value verbatim; resolving ids against the
//! collections happens here, so an unknown id answers 404 instead of
//! installing a dangling selection.

use axum::{extract::State, Json};
use serde::Serialize;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Retro, SelectRetroRequest, SelectTeamRequest, Team};
use crate::AppState;

/// Both selection pointers plus the loading flag, as the frontend reads them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub current_retro: Option<Retro>,
    pub current_team: Option<Team>,
    pub loading: bool,
}

/// GET /api/selection - Read the current selection.
pub async fn get_selection(State(state): State<AppState>) -> ApiResult<Selection> {
    let store = state.store.read().await;
    success(Selection {
        current_retro: store.current_retro().cloned(),
        current_team: store.current_team().cloned(),
        loading: store.loading(),
    })
}

/// PUT /api/selection/retro - Set or clear the current retro.
pub async fn select_retro(
    State(state): State<AppState>,
    Json(request): Json<SelectRetroRequest>,
) -> ApiResult<Selection> {
    let mut store = state.store.write().await;

    let retro = match request.retro_id {
        Some(id) => match store.get_retro(&id) {
            Some(retro) => Some(retro.clone()),
            None => return error(AppError::NotFound(format!("Retro {} not found", id))),
        },
        None => None,
    };
    store.set_current_retro(retro);

    success(Selection {
        current_retro: store.current_retro().cloned(),
        current_team: store.current_team().cloned(),
        loading: store.loading(),
    })
}

/// PUT /api/selection/team - Set or clear the current team.
pub async fn select_team(
    State(state): State<AppState>,
    Json(request): Json<SelectTeamRequest>,
) -> ApiResult<Selection> {
    let mut store = state.store.write().await;

    let team = match request.team_id {
        Some(id) => match store.get_team(&id) {
            Some(team) => Some(team.clone()),
            None => return error(AppError::NotFound(format!("Team {} not found", id))),
        },
        None => None,
    };
    store.set_current_team(team);

    success(Selection {
        current_retro: store.current_retro().cloned(),
        current_team: store.current_team().cloned(),
        loading: store.loading(),
    })
}
