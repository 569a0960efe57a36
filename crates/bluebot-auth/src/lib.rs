//! # BlueBot Auth
//!
//! The three credential checks behind BlueBot's route gates, plus the
//! issuing side used by login.
//!
//! - [`basic`]: HTTP Basic Auth against the configured username/password
//! - [`session`]: Issuing and checking the opaque `sessionID` cookie
//! - [`jwt`]: Signing and verifying HS512 bearer tokens
//! - [`claims`]: Token claims, which double as the authenticated principal
//!
//! Every check is a pure function of the request headers and read-only
//! configuration. Failures come back as [`bluebot_core::AppError`] values
//! already carrying the status and message the client should see.
//!
//! # Example
//!
//! ```ignore
//! use bluebot_auth::{create_token, verify_token};
//! use bluebot_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(chrono::Utc::now(), &config)?;
//! let claims = verify_token(&token, &config)?;
//! println!("{} ({})", claims.name, claims.id);
//! ```

pub mod basic;
pub mod claims;
pub mod jwt;
pub mod session;

pub use basic::{BasicPrincipal, verify_basic_auth};
pub use claims::TokenClaims;
pub use jwt::{bearer_token, create_token, sign_claims, verify_token};
pub use session::{SessionPrincipal, issue_session_cookie, verify_session_cookie};
