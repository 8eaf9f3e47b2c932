//! # Spotify Integration Module
//!
//! This module is the integration layer between the relay and Spotify's
//! services. It owns all HTTP communication with the accounts service and
//! the Web API, and translates wire-level outcomes into the crate's
//! credential vocabulary.
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Client for the token endpoint's two grant shapes:
//! - **Code Exchange**: Exchanges the one-time authorization code received
//!   on the callback for a token pair
//! - **Refresh Exchange**: Mints a new access token from the stored refresh
//!   token without user interaction
//! - **Client Authentication**: Both grants authenticate with the
//!   application credentials as HTTP Basic
//! - **Error Mapping**: Non-success statuses and malformed bodies become
//!   `TokenError` values, never panics
//!
//! ### Player Module
//!
//! [`player`] - The single resource-server call the relay makes:
//! - **Currently Playing**: Fetches the playback state as an opaque JSON
//!   payload
//! - **Status Classification**: Distinguishes a playing payload, an idle
//!   204, and the 401 that signals an expired access token
//!
//! ## Authentication Strategy
//!
//! The relay is a confidential server-side client: it holds a client secret
//! and uses the plain authorization-code flow. Token expiry is handled
//! reactively - the lifecycle manager in [`crate::management`] refreshes
//! when the player call reports `Expired`, so no clock arithmetic on
//! `expires_in` is needed anywhere.
//!
//! ## Error Types
//!
//! - **`TokenError`** - token-endpoint transport failures, rejections, and
//!   malformed responses
//! - **`reqwest::Error`** - network-level failures of the resource call
//!
//! ## Dependencies
//!
//! - **reqwest** - HTTP client with JSON support and async capabilities
//! - **serde_json** - JSON serialization and deserialization
//! - **base64** - HTTP Basic credential encoding

pub mod auth;
pub mod player;
