pub mod handlers;
pub mod views;

use crate::credentials::Codec;
use crate::store::{MongoUserStore, UserStore};
use anyhow::Result;
use axum::{routing::get, Extension, Router};
use self::handlers::{health, home, login, login_form, logout, register, register_form};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "",
};

/// Build the application router around a store and codec.
pub fn router(store: Arc<dyn UserStore>, codec: Codec) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/login", get(login_form).post(login))
        .route("/register", get(register_form).post(register))
        .route("/logout", get(logout))
        .layer(Extension(store))
        .layer(Extension(codec))
        .layer(TraceLayer::new_for_http())
}

/// Connect the store and serve until shutdown.
///
/// # Errors
/// Returns an error if the store connection or the listener fails.
pub async fn new(port: u16, dsn: &str, codec: Codec) -> Result<()> {
    let store = MongoUserStore::connect(dsn).await?;

    let app = router(Arc::new(store), codec);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!(port, "listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
