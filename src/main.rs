use std::sync::Arc;

use reqwest::Client;
use tokio::sync::Mutex;

use nowplayd::{
    config::{self, Config},
    error, info,
    management::TokenManager,
    server::{self, AppState},
    spotify::auth::AuthClient,
    store::CredentialStore,
};

#[tokio::main]
async fn main() {
    config::load_env();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("Invalid configuration: {}", e),
    };

    // Persistence is not optional: serving without it would silently cost a
    // re-authentication on every restart.
    let store = match CredentialStore::connect(config.store_path.clone()).await {
        Ok(store) => store,
        Err(e) => error!("Credential store unavailable: {}", e),
    };

    let manager = match TokenManager::restore(AuthClient::new(&config), store).await {
        Ok(manager) => manager,
        Err(e) => error!("Failed to load stored credentials: {}", e),
    };

    if manager.has_refresh_token() {
        info!("Restored refresh token from store.");
    } else {
        info!("No stored credentials. Visit /login to authenticate.");
    }

    let state = Arc::new(AppState {
        manager: Mutex::new(manager),
        http: Client::new(),
        config,
    });

    server::start_api_server(state).await;
}
