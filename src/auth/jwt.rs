//! JWT token issuance and verification

use crate::core::error::{MyflixError, Result};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username the token was issued for
    pub sub: String,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: usize,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Issues and verifies signed bearer tokens.
///
/// Constructed once at startup from the signing secret and token lifetime,
/// then shared through application state. Stateless: tokens are not stored
/// server-side and cannot be revoked before expiry.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: chrono::Duration,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the signing secret and TTL in days
    pub fn new(secret: &str, token_ttl_days: i64) -> Self {
        let mut validation = Validation::default();
        // No clock leeway: a token expired by one second is already invalid
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: chrono::Duration::days(token_ttl_days),
            validation,
        }
    }

    /// Issue a token for an already-verified identity.
    ///
    /// This performs no credential checking; callers must have verified the
    /// username before asking for a token.
    pub fn issue(&self, username: &str) -> Result<String> {
        let now = chrono::Utc::now();
        let expiration = now.checked_add_signed(self.ttl).ok_or_else(|| {
            MyflixError::AuthenticationError("Failed to calculate token expiration".to_string())
        })?;

        let claims = Claims {
            sub: username.to_string(),
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| MyflixError::AuthenticationError(format!("Failed to generate token: {}", e)))
    }

    /// Verify a token's signature and expiry and extract its claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| MyflixError::AuthenticationError(format!("Invalid token: {}", e)))?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 7)
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let tokens = service();
        let token = tokens.issue("johndoe123").unwrap();
        let claims = tokens.verify(&token).unwrap();

        assert_eq!(claims.sub, "johndoe123");
        assert!(claims.exp > claims.iat);
        // 7-day window
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_expired_token_rejected_even_with_valid_signature() {
        let tokens = service();

        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            sub: "johndoe123".to_string(),
            iat: now - 60,
            exp: now - 1,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = tokens.verify(&token).unwrap_err();
        assert!(matches!(err, MyflixError::AuthenticationError(_)));
    }

    #[test]
    fn test_token_signed_with_different_secret_rejected() {
        let ours = service();
        let theirs = TokenService::new("other-secret", 7);

        let token = theirs.issue("johndoe123").unwrap();
        let err = ours.verify(&token).unwrap_err();
        assert!(matches!(err, MyflixError::AuthenticationError(_)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = service();
        assert!(tokens.verify("").is_err());
        assert!(tokens.verify("not.a.jwt").is_err());
        assert!(tokens.verify("aaaa.bbbb").is_err());
    }

    proptest! {
        // Token subject always round-trips for any legal username
        #[test]
        fn prop_subject_roundtrips(username in "[A-Za-z0-9]{5,32}") {
            let tokens = service();
            let token = tokens.issue(&username).unwrap();
            let claims = tokens.verify(&token).unwrap();
            prop_assert_eq!(claims.sub, username);
        }
    }
}
