use std::{
    collections::HashMap,
    net::SocketAddr,
    path::Path,
    sync::{Arc, Mutex},
};

use axum::Router;
use nowplayd::config::Config;

/// Serves a router on an ephemeral local port and returns its address.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// Configuration pointing every endpoint at a local fake upstream.
pub fn test_config(upstream: SocketAddr, store_dir: &Path) -> Config {
    Config {
        port: 0,
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_uri: "http://127.0.0.1:3000/callback".to_string(),
        store_path: store_dir.to_path_buf(),
        auth_url: format!("http://{upstream}/authorize"),
        token_url: format!("http://{upstream}/api/token"),
        api_url: format!("http://{upstream}"),
    }
}

/// Recorded form bodies of every token-endpoint call the fake upstream saw.
pub type Grants = Arc<Mutex<Vec<HashMap<String, String>>>>;

pub fn record_grants() -> Grants {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn grant_types(grants: &Grants) -> Vec<String> {
    grants
        .lock()
        .unwrap()
        .iter()
        .filter_map(|form| form.get("grant_type").cloned())
        .collect()
}
