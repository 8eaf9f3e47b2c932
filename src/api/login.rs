use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::{config, server::AppState};

pub async fn login(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let params = vec![
        ("response_type", "code"),
        ("client_id", state.config.client_id.as_str()),
        ("scope", config::SCOPE),
        ("redirect_uri", state.config.redirect_uri.as_str()),
    ];
    let query = serde_urlencoded::to_string(&params).unwrap_or_default();

    let auth_url = format!("{}?{}", state.config.auth_url, query);

    // Plain 302; axum's Redirect helpers emit 303/307/308.
    (StatusCode::FOUND, [(header::LOCATION, auth_url)])
}
