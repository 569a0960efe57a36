use crate::env_or;

/// 24 hours. Deliberately shorter than the session cookie lifetime.
pub const TOKEN_EXPIRY: i64 = 24 * 60 * 60;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Seconds from issuance until the token expires.
    pub token_expiry: i64,
    /// `name` claim written into issued tokens.
    pub subject_name: String,
    /// `id` claim written into issued tokens.
    pub subject_id: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "mySecret".to_string(),
            token_expiry: TOKEN_EXPIRY,
            subject_name: "jack".to_string(),
            subject_id: "main_user_id".to_string(),
        }
    }
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env_or("JWT_SECRET", &defaults.secret),
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SESSION_COOKIE_LIFETIME;

    #[test]
    fn test_token_outlived_by_cookie() {
        let config = JwtConfig::default();
        assert_eq!(config.token_expiry, 86_400);
        assert_eq!(SESSION_COOKIE_LIFETIME, 2 * config.token_expiry);
    }
}
