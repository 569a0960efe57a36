use std::env;

use crate::env_or;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SERVER_HEADER: &str = "BlueBot 1.0";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Value of the `Server` header stamped on every response.
    pub server_header: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            server_header: DEFAULT_SERVER_HEADER.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env_or("SERVER_HOST", &defaults.host),
            port: env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            server_header: env_or("SERVER_HEADER", &defaults.server_header),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
