use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config::Config, error, info, management::TokenManager};

/// Shared application state handed to every handler.
///
/// The manager mutex is the single concurrency guard of the relay: refresh
/// exchanges and store writes only happen while it is held.
pub struct AppState {
    pub manager: Mutex<TokenManager>,
    pub http: reqwest::Client,
    pub config: Config,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/current-track", get(api::current_track))
        .layer(Extension(state))
}

pub async fn start_api_server(state: Arc<AppState>) {
    let port = state.config.port;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    info!("Server is running on port {}", port);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
