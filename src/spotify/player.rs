use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

const PLAYER_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a currently-playing request, classified by upstream status.
///
/// `Expired` is the reactive expiry signal: the relay never tracks token
/// lifetimes itself, it acts on the resource server's 401.
#[derive(Debug)]
pub enum Playback {
    /// 200 with a playback payload, passed through untouched.
    Playing(Value),
    /// 204, nothing is playing.
    Idle,
    /// 401, the access token was rejected as expired or invalid.
    Expired,
    /// Any other upstream status.
    Failed(StatusCode),
}

/// Fetches the currently playing track for the authenticated account.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `api_url` - Web API base URL
/// * `access_token` - Bearer token for the resource call
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Playback)` - Upstream answered; see [`Playback`] for the cases
/// - `Err(reqwest::Error)` - Network error or an unreadable 200 body
pub async fn currently_playing(
    client: &Client,
    api_url: &str,
    access_token: &str,
) -> Result<Playback, reqwest::Error> {
    let url = format!("{api_url}/me/player/currently-playing");
    let res = client
        .get(&url)
        .bearer_auth(access_token)
        .timeout(PLAYER_TIMEOUT)
        .send()
        .await?;

    match res.status() {
        StatusCode::OK => Ok(Playback::Playing(res.json::<Value>().await?)),
        StatusCode::NO_CONTENT => Ok(Playback::Idle),
        StatusCode::UNAUTHORIZED => Ok(Playback::Expired),
        status => Ok(Playback::Failed(status)),
    }
}
