use crate::env_or;

/// The one username/password pair accepted by Basic Auth and by login.
#[derive(Clone, Debug)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: "jack".to_string(),
            password: "1234".to_string(),
        }
    }
}

impl CredentialsConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            username: env_or("ADMIN_USERNAME", &defaults.username),
            password: env_or("ADMIN_PASSWORD", &defaults.password),
        }
    }

    /// Both halves must match; neither is trimmed or case-folded.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_exact_pair_only() {
        let config = CredentialsConfig::default();
        assert!(config.matches("jack", "1234"));
        assert!(!config.matches("jack", "12345"));
        assert!(!config.matches("Jack", "1234"));
        assert!(!config.matches("", ""));
        assert!(!config.matches("1234", "jack"));
    }
}
