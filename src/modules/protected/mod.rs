//! Landing pages behind the three credential gates.
//!
//! Each page lives in its own route group so the router can attach a
//! different gate to each: Basic Auth for `/admin`, the session cookie for
//! `/cookies` and the bearer token for `/jwt`.

pub mod controller;
pub mod router;
