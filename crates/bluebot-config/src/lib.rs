//! # BlueBot Config
//!
//! Read-only configuration for the BlueBot server. Every struct has a
//! `Default` carrying the built-in values and a `from_env()` constructor that
//! lets individual values be overridden from the environment.
//!
//! - [`server`]: Listen address and the `Server` response header
//! - [`credentials`]: The single trusted username/password pair
//! - [`session`]: Session cookie name, value and lifetime
//! - [`jwt`]: Token signing secret, lifetime and subject claims
//!
//! # Example
//!
//! ```ignore
//! use bluebot_config::{CredentialsConfig, JwtConfig, ServerConfig, SessionConfig};
//!
//! let server_config = ServerConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//! ```

pub mod credentials;
pub mod jwt;
pub mod server;
pub mod session;

pub use credentials::CredentialsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use session::SessionConfig;

pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
