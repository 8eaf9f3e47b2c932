//! Configuration management for the currently-playing relay.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. All settings are collected into a
//! single [`Config`] value at startup which is then handed to the request
//! handlers as part of the shared application state, so nothing in the
//! request path reads the process environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::ConfigError;

/// OAuth scope requested during authorization.
///
/// The relay only ever reads the playback state, so the scope is fixed
/// rather than configurable.
pub const SCOPE: &str = "user-read-currently-playing";

/// Runtime configuration for the relay, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// OAuth client identifier registered with Spotify.
    pub client_id: String,
    /// OAuth client secret registered with Spotify.
    pub client_secret: String,
    /// Redirect URI registered for the OAuth application; Spotify sends the
    /// authorization code here.
    pub redirect_uri: String,
    /// Directory holding the durable credential store.
    pub store_path: PathBuf,
    /// Spotify authorization endpoint (user consent page).
    pub auth_url: String,
    /// Spotify token endpoint (code and refresh exchanges).
    pub token_url: String,
    /// Spotify Web API base URL (resource server).
    pub api_url: String,
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error; in that case the configuration is
/// expected to come from the real process environment.
///
/// # Example
///
/// ```
/// use nowplayd::config;
///
/// config::load_env();
/// ```
pub fn load_env() {
    let _ = dotenv::dotenv();
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Required variables are `CLIENT_ID`, `CLIENT_SECRET` and
    /// `REDIRECT_URI`. Optional variables and their defaults:
    ///
    /// - `PORT` - listen port, defaults to `3000`
    /// - `TOKEN_STORE_PATH` - credential store directory, defaults to
    ///   `spot_token` under the platform's local data directory
    /// - `SPOTIFY_AUTH_URL` - defaults to the public authorize endpoint
    /// - `SPOTIFY_TOKEN_URL` - defaults to the public token endpoint
    /// - `SPOTIFY_API_URL` - defaults to the public Web API base URL
    ///
    /// The endpoint overrides exist so that the whole service can be pointed
    /// at a local stand-in for Spotify.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when a required variable is absent
    /// and [`ConfigError::InvalidPort`] when `PORT` does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use nowplayd::config::Config;
    ///
    /// let config = Config::from_env()?;
    /// println!("listening on port {}", config.port);
    /// ```
    pub fn from_env() -> Result<Config, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        let store_path = match env::var("TOKEN_STORE_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => {
                let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
                path.push("spot_token");
                path
            }
        };

        Ok(Config {
            port,
            client_id: require("CLIENT_ID")?,
            client_secret: require("CLIENT_SECRET")?,
            redirect_uri: require("REDIRECT_URI")?,
            store_path,
            auth_url: env::var("SPOTIFY_AUTH_URL")
                .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string()),
            token_url: env::var("SPOTIFY_TOKEN_URL")
                .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string()),
            api_url: env::var("SPOTIFY_API_URL")
                .unwrap_or_else(|_| "https://api.spotify.com/v1".to_string()),
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::Missing(name))
}
