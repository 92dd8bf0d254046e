use axum::response::Html;

use crate::render;

/// `GET /messages`
pub async fn messages_page() -> Html<String> {
    Html(render::messages_info_page())
}
