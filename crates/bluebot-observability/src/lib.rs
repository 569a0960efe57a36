//! BlueBot Observability
//!
//! Console logging for the BlueBot server. Every crate logs through the
//! `tracing` macros; this crate installs the subscriber that prints them.
//!
//! # Examples
//!
//! ```no_run
//! bluebot_observability::init_console_logging();
//! tracing::info!("Starting server");
//! ```

pub mod basic_logging;

pub use basic_logging::{default_filter, init_console_logging};
