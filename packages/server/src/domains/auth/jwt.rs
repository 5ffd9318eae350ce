use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime of a session token (and of the cookie that carries it)
pub const SESSION_TTL_HOURS: i64 = 5;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // Subject (email)
    pub email: String, // Identity used for ownership checks
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
    pub iss: String,   // Issuer
    pub jti: String,   // JWT ID (unique token identifier)
}

/// JWT Service - creates and verifies session tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl JwtService {
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Create a session token for `email`, valid for [`SESSION_TTL_HOURS`]
    pub fn create_token(&self, email: &str) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::hours(SESSION_TTL_HOURS);
        let email = email.trim().to_string();

        let claims = Claims {
            sub: email.clone(),
            email,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a token; fails when tampered, foreign or expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let token = service.create_token(" donor@example.org ").unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.email, "donor@example.org");
        assert_eq!(claims.sub, "donor@example.org");
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_invalid_token() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        assert!(service.verify_token("invalid_token").is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new("secret1", "test_issuer".to_string());
        let service2 = JwtService::new("secret2", "test_issuer".to_string());

        let token = service1.create_token("donor@example.org").unwrap();
        assert!(service2.verify_token(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer() {
        let service1 = JwtService::new("secret", "issuer_a".to_string());
        let service2 = JwtService::new("secret", "issuer_b".to_string());

        let token = service1.create_token("donor@example.org").unwrap();
        assert!(service2.verify_token(&token).is_err());
    }

    #[test]
    fn test_expiry_is_five_hours() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let token = service.create_token("donor@example.org").unwrap();
        let claims = service.verify_token(&token).unwrap();

        let expires_in = claims.exp - chrono::Utc::now().timestamp();
        assert!(expires_in > 4 * 3600 + 3590);
        assert!(expires_in <= 5 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new("test_secret_key", "test_issuer".to_string());
        let past = chrono::Utc::now() - chrono::Duration::hours(SESSION_TTL_HOURS + 1);
        let claims = Claims {
            sub: "donor@example.org".to_string(),
            email: "donor@example.org".to_string(),
            exp: past.timestamp(),
            iat: (past - chrono::Duration::hours(SESSION_TTL_HOURS)).timestamp(),
            iss: "test_issuer".to_string(),
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key".as_bytes()),
        )
        .unwrap();

        assert!(service.verify_token(&token).is_err());
    }
}
