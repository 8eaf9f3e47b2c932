//! # API Module
//!
//! This module provides the HTTP endpoints served by the relay. It is the
//! thin I/O layer over the token lifecycle: every handler converts
//! credential and upstream failures into plain HTTP responses, so nothing
//! below it ever needs to know about status codes.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Redirects the browser to Spotify's consent page with the
//!   fixed scope. This is where every authorization starts.
//! - [`callback`] - Receives the one-time authorization code from Spotify
//!   and triggers the code exchange. A missing code and a failed exchange
//!   are both answered with plain text; the exchange is never retried since
//!   the code is single-use.
//!
//! ### Playback
//!
//! - [`current_track`] - Passes the upstream currently-playing payload
//!   through. A 401 from the resource server triggers exactly one
//!   transparent refresh followed by exactly one retry.
//!
//! ### Monitoring
//!
//! - [`health`] - Health check endpoint returning service name and version.
//!
//! ## Architecture
//!
//! The module is built using the [Axum](https://docs.rs/axum) web framework.
//! Handlers receive the shared application state through an `Extension`
//! layer; the token lifecycle manager inside it is guarded by an async
//! mutex, which is what serializes concurrent refresh attempts.
//!
//! ## Related Modules
//!
//! - [`crate::management`] - Token lifecycle state machine
//! - [`crate::spotify`] - Spotify API integration

mod callback;
mod current_track;
mod health;
mod login;

pub use callback::callback;
pub use current_track::current_track;
pub use health::health;
pub use login::login;
