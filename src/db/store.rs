use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::error::AppError;

/// A user record as handed back to callers. The password hash stays
/// inside the store.
#[derive(Debug, Clone)]
pub struct StoredUser {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Credential storage. Backed by Postgres in production and by a
/// process-local map for tests and local development; selected at
/// startup via `STORE_BACKEND`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Atomic check-then-insert keyed on the already-normalized identity.
    /// `DuplicateIdentity` when the identity is taken, including when two
    /// registrations race.
    async fn register(&self, username: &str, password_hash: &str) -> Result<Uuid, AppError>;

    /// Checks a credential pair. One generic `AuthFailure` for unknown
    /// identity and wrong password alike.
    async fn verify(&self, username: &str, password: &str) -> Result<Uuid, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<StoredUser>, AppError>;

    /// Used after token verification to catch accounts removed since the
    /// token was issued.
    async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.get(id).await?.is_some())
    }
}
