use std::time::Duration;

use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{config::Config, error::TokenError, types::TokenResponse};

/// Upper bound on a single token-endpoint request. A hung exchange surfaces
/// as `TokenError::Transport` instead of stalling the request handler.
const TOKEN_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the Spotify token endpoint.
///
/// Encapsulates the two grant shapes the relay needs: exchanging a one-time
/// authorization code and exchanging a refresh token. Both requests are
/// authenticated with the application credentials transmitted as HTTP Basic
/// (`base64(client_id:client_secret)`), as the accounts service requires for
/// confidential clients.
pub struct AuthClient {
    client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl AuthClient {
    pub fn new(config: &Config) -> Self {
        AuthClient {
            client: Client::new(),
            token_url: config.token_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        }
    }

    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the OAuth 2.0 authorization-code flow by exchanging the
    /// code received on the callback for a token pair. This is the final
    /// step of the interactive authorization.
    ///
    /// # Arguments
    ///
    /// * `code` - Authorization code received from the OAuth callback
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(TokenResponse)` - Access token and, usually, a refresh token
    /// - `Err(TokenError)` - Transport failure, upstream rejection, or a
    ///   malformed response body
    ///
    /// # Retry Semantics
    ///
    /// Never retried: the authorization code is single-use and the failed
    /// attempt has already consumed it. A second attempt with the same code
    /// is invalid by protocol design, so the error is surfaced to the
    /// caller instead.
    ///
    /// # Example
    ///
    /// ```
    /// let token = auth_client.exchange_code("AQA...auth_code").await?;
    /// println!("Access token: {}", token.access_token);
    /// ```
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, TokenError> {
        self.token_request(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", &self.redirect_uri),
        ])
        .await
    }

    /// Exchanges a refresh token for a new access token.
    ///
    /// Allows the relay to maintain authenticated access without requiring
    /// the user to re-authorize after the short-lived access token expires.
    ///
    /// # Arguments
    ///
    /// * `refresh_token` - Valid refresh token obtained from a previous
    ///   exchange
    ///
    /// # Returns
    ///
    /// Returns a `Result` containing:
    /// - `Ok(TokenResponse)` - Fresh access token; `refresh_token` is only
    ///   populated when the upstream rotates it, absence means the existing
    ///   one stays valid
    /// - `Err(TokenError)` - Transport failure, upstream rejection, or a
    ///   malformed response body
    ///
    /// # Error Conditions
    ///
    /// Common failures include network connectivity issues, a revoked or
    /// invalid refresh token, and accounts-service outages. The caller
    /// decides recovery; in particular the stored refresh token must not be
    /// discarded just because one exchange failed.
    ///
    /// # Example
    ///
    /// ```
    /// let token = auth_client.refresh_token("AQC...refresh_token").await?;
    /// ```
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, TokenError> {
        self.token_request(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .await
    }

    async fn token_request(&self, form: &[(&str, &str)]) -> Result<TokenResponse, TokenError> {
        let res = self
            .client
            .post(&self.token_url)
            .header(reqwest::header::AUTHORIZATION, self.basic_auth())
            .timeout(TOKEN_TIMEOUT)
            .form(form)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(TokenError::Rejected { status, body });
        }

        serde_json::from_str(&body).map_err(TokenError::Malformed)
    }

    fn basic_auth(&self) -> String {
        let pair = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(pair))
    }
}
