//! JWT session token service.

use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use feedline_core::domain::Identity;
use feedline_core::ports::{AuthError, TokenService};

/// Token service configuration. The signing secret is supplied by the
/// environment, never embedded in source.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            expiration_hours: 1,
        }
    }
}

/// Serialized claim set: exactly the subject and email, plus timestamps.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// HS256 token service over a single process-wide secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: JwtConfig,
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            encoding_key,
            decoding_key,
            config,
        }
    }

    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").unwrap_or_else(|_| "change-me-in-production".to_string());

        if secret == "change-me-in-production" {
            tracing::warn!("Using default JWT secret. Set JWT_SECRET for production use.");
        }

        let config = JwtConfig {
            secret,
            expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1),
        };
        Self::new(config)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = now + TimeDelta::hours(self.config.expiration_hours);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::InvalidSignature(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        // No clock leeway: a token is invalid the moment `exp` passes.
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::InvalidSignature(e.to_string()),
            })?;

        let claims = token_data.claims;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|e| AuthError::InvalidSignature(e.to_string()))?;
        let issued_at = timestamp(claims.iat)?;
        let expires_at = timestamp(claims.exp)?;

        Ok(Identity {
            user_id,
            email: claims.email,
            issued_at,
            expires_at,
        })
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, AuthError> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| AuthError::InvalidSignature("timestamp out of range".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with(secret: &str, expiration_hours: i64) -> JwtTokenService {
        JwtTokenService::new(JwtConfig {
            secret: secret.to_string(),
            expiration_hours,
        })
    }

    #[test]
    fn issued_token_verifies_to_the_same_identity() {
        let service = service_with("test-secret-key", 1);
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id, "alice@example.com").unwrap();
        let identity = service.verify(&token).unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "alice@example.com");
        assert_eq!(
            (identity.expires_at - identity.issued_at).num_hours(),
            1,
            "expiry is fixed at one hour from issuance"
        );
    }

    #[test]
    fn garbage_tokens_are_invalid() {
        let service = service_with("test-secret-key", 1);

        let result = service.verify("not-a-token");
        assert!(matches!(result, Err(AuthError::InvalidSignature(_))));
    }

    #[test]
    fn token_signed_with_a_different_secret_never_verifies() {
        let issuer = service_with("secret-one", 1);
        let verifier = service_with("secret-two", 1);

        let token = issuer.issue(Uuid::new_v4(), "alice@example.com").unwrap();

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(AuthError::InvalidSignature(_))));
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let service = service_with("test-secret-key", -2);

        let token = service.issue(Uuid::new_v4(), "alice@example.com").unwrap();

        let result = service.verify(&token);
        assert!(matches!(result, Err(AuthError::Expired)));
    }

    #[test]
    fn token_expired_one_minute_ago_is_rejected() {
        // One minute past expiry is within jsonwebtoken's default leeway;
        // verification must still reject it.
        let service = service_with("test-secret-key", 1);
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "alice@example.com".to_string(),
            iat: now - 3660,
            exp: now - 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret-key"),
        )
        .unwrap();

        let result = service.verify(&token);
        assert!(matches!(result, Err(AuthError::Expired)));
    }
}
