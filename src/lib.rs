//! # BlueBot
//!
//! A small axum service showing three ways of putting credentials in front
//! of a route group, side by side on one router.
//!
//! ## Routes
//!
//! | Method | Path | Gate | Response |
//! |--------|------|------|----------|
//! | GET | `/alive` | none | `I am alive!` |
//! | GET | `/cats/{format}` | none | cat from `name`/`type` query as text or JSON |
//! | GET | `/login` | none | session cookie + bearer token for the configured user |
//! | POST | `/cats`, `/dogs`, `/hamster` | none | 202 once the JSON body decodes |
//! | GET | `/admin/main` | Basic Auth | `You found an grouped link` |
//! | GET | `/cookies` | session cookie | `Cookies page` |
//! | GET | `/jwt` | bearer token | `You are on the secret page` |
//!
//! Every response carries a `Server: BlueBot 1.0` header.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── extract.rs        # JsonBody<T> request body extractor
//! ├── logging.rs        # Request logging middleware
//! ├── middleware/       # Gate trait and the three credential gates
//! ├── modules/          # Feature modules (health, pets, auth, protected)
//! ├── router.rs         # Route groups and the application router
//! └── state.rs          # Read-only configuration shared by handlers
//! ```
//!
//! The checks themselves live in `bluebot-auth`, configuration in
//! `bluebot-config` and the error type in `bluebot-core`.
//!
//! ## Configuration
//!
//! All values have built-in defaults equal to the fixed values of the echo
//! tutorial this server mirrors, which had no environment configuration.
//! Here they can be overridden from the environment or a `.env` file:
//!
//! ```bash
//! SERVER_PORT=8080
//! ADMIN_USERNAME=jack
//! ADMIN_PASSWORD=1234
//! SESSION_COOKIE_VALUE=some_string
//! JWT_SECRET=mySecret
//! LOG_LEVEL=info
//! ```

pub mod extract;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

pub use bluebot_auth;
pub use bluebot_config;
pub use bluebot_core;
