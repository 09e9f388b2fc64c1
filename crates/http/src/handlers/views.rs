use axum::{Json, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::response_types::ViewsResponse;

/// Current count; does not increment.
pub async fn get_views(State(state): State<Arc<AppState>>) -> Json<ViewsResponse> {
    Json(ViewsResponse { views: state.views.get_count().await })
}

/// Increments, then returns the value this visitor should see.
pub async fn increment_views(State(state): State<Arc<AppState>>) -> Json<ViewsResponse> {
    Json(ViewsResponse { views: state.views.increment().await })
}
