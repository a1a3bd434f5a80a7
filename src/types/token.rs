use serde::{Deserialize, Serialize};

/// Payload of an issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id the token is bound to.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
