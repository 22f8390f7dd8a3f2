//! JWT token handling

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use evhub_shared::constants::TOKEN_TYPE_ACCESS;
use evhub_shared::EntityId;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

impl Claims {
    pub fn user_id(&self) -> Result<EntityId, JwtError> {
        self.sub
            .parse()
            .map_err(|_| JwtError::ValidationError(format!("invalid subject: {}", self.sub)))
    }
}

pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    pub fn new(secret: &str, access_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry: access_expiry,
        }
    }

    pub fn generate_access_token(&self, user_id: EntityId) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::ValidationError(e.to_string()),
            })?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(JwtError::ValidationError(format!(
                "unexpected token type: {}",
                claims.token_type
            )));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_validate() {
        let jwt = JwtService::new("secret", 60);
        let token = jwt.generate_access_token(42).unwrap();
        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.token_type, TOKEN_TYPE_ACCESS);
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let token = JwtService::new("secret", 60).generate_access_token(1).unwrap();
        let other = JwtService::new("another-secret", 60);
        assert!(matches!(
            other.validate_token(&token),
            Err(JwtError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_expired_token() {
        // Past the default 60s leeway.
        let jwt = JwtService::new("secret", -3600);
        let token = jwt.generate_access_token(1).unwrap();
        assert!(matches!(jwt.validate_token(&token), Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_rejects_garbage() {
        let jwt = JwtService::new("secret", 60);
        assert!(jwt.validate_token("not.a.token").is_err());
    }
}
