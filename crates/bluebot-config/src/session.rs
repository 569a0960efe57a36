use crate::env_or;

pub const SESSION_COOKIE_NAME: &str = "sessionID";
/// 48 hours.
pub const SESSION_COOKIE_LIFETIME: i64 = 48 * 60 * 60;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// The opaque value login hands out and the cookie gate expects back.
    pub cookie_value: String,
    /// Seconds from issuance until the cookie expires.
    pub cookie_lifetime: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: SESSION_COOKIE_NAME.to_string(),
            cookie_value: "some_string".to_string(),
            cookie_lifetime: SESSION_COOKIE_LIFETIME,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cookie_value: env_or("SESSION_COOKIE_VALUE", &defaults.cookie_value),
            ..defaults
        }
    }
}
