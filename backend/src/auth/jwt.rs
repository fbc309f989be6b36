//! JWT access token handling
//!
//! Tokens are issued by the account service that owns login; this backend
//! shares its signing secret and only needs to verify bearer tokens. Issuing
//! is kept for tooling and tests.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

const ACCESS_TOKEN_TYPE: &str = "access";

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Token type: only "access" tokens are accepted here
    pub token_type: String,
}

impl Claims {
    /// Parse the subject as a user id
    pub fn user_id(&self) -> Result<Uuid> {
        Uuid::parse_str(&self.sub).map_err(|_| anyhow::anyhow!("Invalid user ID in token"))
    }
}

/// JWT service with keys derived once at startup
///
/// Keys are wrapped in Arc so cloning into every request is cheap.
#[derive(Clone)]
pub struct JwtService {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    access_token_expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_token_expiry_secs: i64) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            access_token_expiry_secs,
        }
    }

    /// Issue an access token for a user
    pub fn issue_access_token(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.access_token_expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue access token: {}", e))
    }

    /// Validate an access token and return its claims
    pub fn validate_access_token(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        if token_data.claims.token_type != ACCESS_TOKEN_TYPE {
            return Err(anyhow::anyhow!("Not an access token"));
        }
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_validate_access_token() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue_access_token(user_id).unwrap();
        let claims = service.validate_access_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert_eq!(claims.token_type, "access");
    }

    #[test]
    fn test_other_token_types_rejected() {
        let service = create_test_service();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: now + 60,
            iat: now,
            token_type: "refresh".to_string(),
        };
        let token = encode(&Header::default(), &claims, &service.encoding).unwrap();

        assert!(service.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let token = JwtService::new("other-secret", 3600)
            .issue_access_token(Uuid::new_v4())
            .unwrap();
        assert!(create_test_service().validate_access_token(&token).is_err());
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        assert!(service.validate_access_token("invalid.token.here").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Default validation allows 60s of leeway
        let service = JwtService::new("test-secret", -3600);
        let token = service.issue_access_token(Uuid::new_v4()).unwrap();
        assert!(service.validate_access_token(&token).is_err());
    }
}
