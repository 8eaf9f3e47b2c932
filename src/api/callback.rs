use std::{collections::HashMap, sync::Arc};

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{server::AppState, success, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let Some(code) = params.get("code") else {
        return "No code received.".into_response();
    };

    let mut manager = state.manager.lock().await;
    match manager.authorize(code).await {
        Ok(()) => {
            success!("Authentication successful");
            "Authentication successful. You can close this tab.".into_response()
        }
        Err(e) => {
            // The code was consumed by the failed attempt; no retry.
            warning!("Token exchange failed: {}", e);
            (StatusCode::BAD_GATEWAY, "Token exchange failed.").into_response()
        }
    }
}
