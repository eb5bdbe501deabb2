//! Browser form page.
//!
//! A static page that posts to `/api/submit` and lists `/api/users`.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
