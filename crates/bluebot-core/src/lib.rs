//! # BlueBot Core
//!
//! Foundational types shared by every BlueBot crate.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use bluebot_core::AppError;
//!
//! let error = AppError::unauthorized("Invalid or expired token");
//! let text_error = AppError::unauthorized("Needed cookie not present").plain_text();
//! ```

pub mod errors;

pub use errors::{AppError, ErrorFormat};
