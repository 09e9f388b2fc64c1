//! Profile page - embedded HTML/CSS/JS
//!
//! The page reads `/api/profile`, polls `/api/presence` every 15 seconds and
//! bumps the counter once per load with `POST /api/views`. The profile audio
//! starts on the first click.

use axum::response::Html;

/// Embedded HTML for the profile page
pub const PAGE_HTML: &str = include_str!("page.html");

pub async fn serve_page() -> Html<&'static str> {
    Html(PAGE_HTML)
}
