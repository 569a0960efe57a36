use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crates whose events are shown at the configured level.
const WORKSPACE_TARGETS: [&str; 3] = ["bluebot", "bluebot_core", "bluebot_auth"];

/// Filter directives used when `RUST_LOG` is unset.
///
/// Workspace crates log at `log_level`; noisy dependencies are held at warn.
pub fn default_filter(log_level: &str) -> String {
    let mut directives: Vec<String> = WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, log_level))
        .collect();
    directives.push("tower_http=warn".to_string());
    directives.push("hyper=warn".to_string());
    directives.join(",")
}

/// Initialize console logging.
///
/// # Configuration
///
/// - **Log Level**: `LOG_LEVEL` environment variable (default: "info")
/// - **Filtering**: `RUST_LOG` replaces the default directives entirely
/// - **Format**: Compact, with file and line of the emitting call site
pub fn init_console_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(&log_level)));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).init();
}
