//! JWT claim structure for BlueBot bearer tokens.

use serde::{Deserialize, Serialize};

/// Claims carried by a token issued at login.
///
/// Once the token gate has verified a token, these claims are handed to the
/// downstream handler as the authenticated principal.
///
/// # Fields
///
/// - `name`: Display name of the logged-in user
/// - `id`: Stable user identifier
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub name: String,
    pub id: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl TokenClaims {
    /// Seconds between issuance and expiry.
    pub fn lifetime(&self) -> usize {
        self.exp.saturating_sub(self.iat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = TokenClaims {
            name: "jack".to_string(),
            id: "main_user_id".to_string(),
            exp: 1234567890,
            iat: 1234481490,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""name":"jack""#));
        assert!(serialized.contains(r#""id":"main_user_id""#));
        assert!(serialized.contains(r#""exp":1234567890"#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"name":"jack","id":"main_user_id","exp":9999999999,"iat":9999913599}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.name, "jack");
        assert_eq!(claims.id, "main_user_id");
        assert_eq!(claims.exp, 9999999999);
        assert_eq!(claims.lifetime(), 86_400);
    }

    #[test]
    fn test_claims_missing_exp_rejected() {
        let json = r#"{"name":"jack","id":"main_user_id","iat":1}"#;
        assert!(serde_json::from_str::<TokenClaims>(json).is_err());
    }
}
