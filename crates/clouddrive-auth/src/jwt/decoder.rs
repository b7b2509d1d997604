//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use clouddrive_core::config::AuthConfig;
use clouddrive_core::error::{AppError, ErrorKind};

use super::claims::Claims;

/// Validates JWT access tokens.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a token string, checking signature and expiry.
    ///
    /// Every failure mode — malformed input, expired, mis-signed — comes
    /// back as a typed [`AppError`] with [`ErrorKind::Authentication`].
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::new(ErrorKind::Authentication, "Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::new(ErrorKind::Authentication, "Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::new(ErrorKind::Authentication, "Invalid token signature")
                    }
                    _ => AppError::new(
                        ErrorKind::Authentication,
                        format!("Token validation failed: {e}"),
                    ),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use clouddrive_core::config::AuthConfig;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            jwt_ttl_minutes: 60,
        }
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let user_id = Uuid::new_v4();
        let (token, exp) = encoder.issue(user_id).unwrap();
        let claims = decoder.verify(&token).unwrap();

        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.exp, exp.timestamp());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        // Well-formed, correctly signed, but expired an hour ago.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);

        let other = AuthConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..test_config()
        };
        let decoder = JwtDecoder::new(&other);

        let (token, _) = encoder.issue(Uuid::new_v4()).unwrap();
        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.verify("not-a-jwt").is_err());
        assert!(decoder.verify("").is_err());
    }
}
