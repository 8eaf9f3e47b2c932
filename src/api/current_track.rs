use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    error::AuthError,
    server::AppState,
    spotify::player::{self, Playback},
    warning,
};

pub async fn current_track(Extension(state): Extension<Arc<AppState>>) -> Response {
    let (access_token, generation) = {
        let mut manager = state.manager.lock().await;
        match manager.acquire().await {
            Ok(acquired) => acquired,
            Err(e) => return auth_failure(e),
        }
    };

    match play(&state, &access_token).await {
        Ok(Playback::Expired) => {}
        outcome => return render(outcome),
    }

    // Expired access token: one refresh, one retry. Concurrent observers of
    // the same expiry share a single exchange via the generation check.
    let (access_token, _) = {
        let mut manager = state.manager.lock().await;
        match manager.refresh_stale(generation).await {
            Ok(acquired) => acquired,
            Err(e) => return auth_failure(e),
        }
    };

    render(play(&state, &access_token).await)
}

async fn play(state: &AppState, access_token: &str) -> Result<Playback, reqwest::Error> {
    player::currently_playing(&state.http, &state.config.api_url, access_token).await
}

fn render(outcome: Result<Playback, reqwest::Error>) -> Response {
    match outcome {
        Ok(Playback::Playing(payload)) => Json(payload).into_response(),
        Ok(Playback::Idle) => StatusCode::NO_CONTENT.into_response(),
        Ok(Playback::Expired) => (
            StatusCode::BAD_GATEWAY,
            "Upstream rejected the refreshed token.",
        )
            .into_response(),
        Ok(Playback::Failed(status)) => (
            StatusCode::BAD_GATEWAY,
            format!("Upstream returned {status}."),
        )
            .into_response(),
        Err(e) => {
            warning!("Currently-playing request failed: {}", e);
            (StatusCode::BAD_GATEWAY, "Upstream request failed.").into_response()
        }
    }
}

fn auth_failure(e: AuthError) -> Response {
    match e {
        AuthError::NoCredential => (
            StatusCode::UNAUTHORIZED,
            "No token available. Authenticate via /login.",
        )
            .into_response(),
        AuthError::Refresh(e) => {
            warning!("Token refresh failed: {}", e);
            (StatusCode::BAD_GATEWAY, "Token refresh failed.").into_response()
        }
    }
}
