//! Credential gates for route groups.
//!
//! # Modules
//!
//! - [`gate`]: The [`Gate`] trait and the [`enforce`] middleware that runs one
//! - [`basic_auth`]: Static username/password over HTTP Basic Auth
//! - [`session`]: The `sessionID` cookie issued at login
//! - [`bearer`]: HS512 bearer tokens issued at login
//!
//! # Flow
//!
//! 1. The router attaches gates to a route group in registration order
//! 2. Each gate checks the request headers and either rejects or forwards
//! 3. A forwarded request carries the gate's principal as an extension
//!
//! # Example
//!
//! ```ignore
//! use axum::Extension;
//! use bluebot_auth::TokenClaims;
//!
//! async fn secret_page(Extension(claims): Extension<TokenClaims>) -> &'static str {
//!     tracing::info!(name = %claims.name, "Token accepted");
//!     "You are on the secret page"
//! }
//! ```

pub mod basic_auth;
pub mod bearer;
pub mod gate;
pub mod session;

pub use basic_auth::BasicAuthGate;
pub use bearer::BearerTokenGate;
pub use gate::{Gate, enforce};
pub use session::SessionCookieGate;
