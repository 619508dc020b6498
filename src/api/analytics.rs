//! Analytics API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::analytics::{self, AnalyticsSummary};
use crate::AppState;

/// GET /api/analytics - Derive the aggregate payload from current state.
///
/// Recomputed on every call; nothing is cached.
pub async fn get_analytics(State(state): State<AppState>) -> ApiResult<AnalyticsSummary> {
    let store = state.store.read().await;
    success(analytics::summarize(store.retros()))
}
