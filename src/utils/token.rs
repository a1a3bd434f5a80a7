use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::types::error::AppError;
use crate::types::token::Claims;

/// Mints and checks the self-contained bearer tokens handed out at login.
/// Verification is pure computation; nothing here touches storage.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    pub fn issue(&self, user_id: Uuid) -> Result<String, AppError> {
        self.issue_with_ttl(user_id, self.ttl)
    }

    pub fn issue_with_ttl(&self, user_id: Uuid, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("token encode failed: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<Uuid, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by hand below: exp <= now is dead, no leeway,
        // so a token issued with a zero ttl never grants access.
        validation.validate_exp = false;

        let data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => AppError::BadSignature,
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::TokenMalformed,
            })?;

        if data.claims.exp <= Utc::now().timestamp() {
            return Err(AppError::TokenExpired);
        }

        Uuid::parse_str(&data.claims.sub).map_err(|_| AppError::TokenMalformed)
    }
}
