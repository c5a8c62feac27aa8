use crate::segreti::views;
use axum::response::{Html, IntoResponse};

// axum handler for the landing page
pub async fn home() -> impl IntoResponse {
    Html(views::HOME)
}

// no session state exists, so logging out is just going home
pub async fn logout() -> impl IntoResponse {
    Html(views::HOME)
}
