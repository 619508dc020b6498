//! Retro and retro item API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{NewRetro, NewRetroItem, Retro, RetroItem, RetroItemPatch};
use crate::AppState;

/// GET /api/retros - List all retros.
pub async fn list_retros(State(state): State<AppState>) -> ApiResult<Vec<Retro>> {
    let store = state.store.read().await;
    success(store.retros().to_vec())
}

/// GET /api/retros/:id - Get a single retro.
pub async fn get_retro(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Retro> {
    let store = state.store.read().await;
    match store.get_retro(&id) {
        Some(retro) => success(retro.clone()),
        None => error(AppError::NotFound(format!("Retro {} not found", id))),
    }
}

/// POST /api/retros - Create a new retro.
pub async fn create_retro(
    State(state): State<AppState>,
    Json(request): Json<NewRetro>,
) -> ApiResult<Retro> {
    // Validate required fields; the store itself trusts its caller.
    if request.title.trim().is_empty() {
        return error(AppError::Validation("Title is required".to_string()));
    }

    let mut store = state.store.write().await;
    let retro = store.add_retro(request);
    success(retro)
}

/// POST /api/retros/:id/items - Add an item to a retro.
pub async fn add_retro_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<NewRetroItem>,
) -> ApiResult<RetroItem> {
    if request.content.trim().is_empty() {
        return error(AppError::Validation("Content is required".to_string()));
    }

    let mut store = state.store.write().await;
    match store.add_retro_item(&id, request) {
        Some(item) => success(item),
        None => error(AppError::NotFound(format!("Retro {} not found", id))),
    }
}

/// PUT /api/retros/:id/items/:item_id - Update an item.
pub async fn update_retro_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(request): Json<RetroItemPatch>,
) -> ApiResult<RetroItem> {
    let mut store = state.store.write().await;
    match store.update_retro_item(&id, &item_id, request) {
        Some(item) => success(item),
        None => error(AppError::NotFound(format!(
            "Item {} not found in retro {}",
            item_id, id
        ))),
    }
}

/// DELETE /api/retros/:id/items/:item_id - Delete an item.
pub async fn delete_retro_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult<()> {
    let mut store = state.store.write().await;
    if store.delete_retro_item(&id, &item_id) {
        success(())
    } else {
        error(AppError::NotFound(format!(
            "Item {} not found in retro {}",
            item_id, id
        )))
    }
}

/// POST /api/retros/:id/items/:item_id/vote - Vote on an item.
pub async fn vote_retro_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult<RetroItem> {
    let mut store = state.store.write().await;
    match store.vote_retro_item(&id, &item_id) {
        Some(item) => success(item),
        None => error(AppError::NotFound(format!(
            "Item {} not found in retro {}",
            item_id, id
        ))),
    }
}
