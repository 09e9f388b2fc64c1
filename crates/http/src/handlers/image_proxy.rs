//! Plain-text error contract: the page only checks the status.

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use linkbio_core::constants::IMAGE_PROXY_CACHE_CONTROL;
use linkbio_service::ServiceError;

use crate::AppState;
use crate::query_types::ImageProxyQuery;

pub async fn proxy_image(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ImageProxyQuery>,
) -> Response {
    let Some(url) = query.url.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Missing URL").into_response();
    };

    match state.image_proxy.fetch(&url).await {
        Ok(image) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, image.content_type),
                (header::CACHE_CONTROL, IMAGE_PROXY_CACHE_CONTROL.to_owned()),
            ],
            image.body,
        )
            .into_response(),
        Err(ServiceError::Upstream { status }) => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (code, format!("Failed to fetch image: {status}")).into_response()
        },
        Err(ServiceError::InvalidInput(_)) => {
            (StatusCode::BAD_REQUEST, "Missing URL").into_response()
        },
        Err(e) => {
            tracing::error!(url = %url, error = %e, "image proxy error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        },
    }
}
