use axum::{Json, extract::State};
use serde_json::Value;
use std::sync::Arc;

use crate::AppState;
use crate::api_error::ApiError;

/// Presence of the configured Discord user, passed through from the presence API.
pub async fn get_presence(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    let presence = state.presence.fetch_raw(&state.profile.discord_id).await?;
    Ok(Json(presence))
}
