use bluebot_config::{CredentialsConfig, JwtConfig, ServerConfig, SessionConfig};

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub server_config: ServerConfig,
    pub credentials: CredentialsConfig,
    pub session_config: SessionConfig,
    pub jwt_config: JwtConfig,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            server_config: ServerConfig::from_env(),
            credentials: CredentialsConfig::from_env(),
            session_config: SessionConfig::from_env(),
            jwt_config: JwtConfig::from_env(),
        }
    }
}
