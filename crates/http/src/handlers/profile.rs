use axum::{Json, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::response_types::ProfileResponse;

pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&state.profile))
}
