use std::sync::Arc;

use uuid::Uuid;

use crate::config::AuthConfig;
use crate::db::store::{StoredUser, UserStore};
use crate::types::error::AppError;
use crate::utils::password;
use crate::utils::token::TokenService;

const USERNAME_MIN_LEN: usize = 3;
const USERNAME_MAX_LEN: usize = 50;
const PASSWORD_MAX_LEN: usize = 200;

/// Registration, login and token authentication. Stateless across calls;
/// all durable state lives behind the [`UserStore`].
#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    tokens: TokenService,
    password_min_len: usize,
}

impl AuthService {
    pub fn new(store: Arc<dyn UserStore>, cfg: &AuthConfig) -> Self {
        Self {
            store,
            tokens: TokenService::new(&cfg.jwt_secret, cfg.token_ttl_secs),
            password_min_len: cfg.password_min_len,
        }
    }

    /// Identities are trimmed and ASCII-lowercased before storage and
    /// every lookup, so registration uniqueness and login agree.
    fn normalize(identity: &str) -> String {
        identity.trim().to_ascii_lowercase()
    }

    pub async fn register(&self, identity: &str, password: &str) -> Result<Uuid, AppError> {
        let username = Self::normalize(identity);
        if username.len() < USERNAME_MIN_LEN || username.len() > USERNAME_MAX_LEN {
            return Err(AppError::Validation(format!(
                "username must be {USERNAME_MIN_LEN}-{USERNAME_MAX_LEN} characters"
            )));
        }
        if password.len() < self.password_min_len {
            return Err(AppError::InvalidCredential(format!(
                "password must be at least {} characters",
                self.password_min_len
            )));
        }
        if password.len() > PASSWORD_MAX_LEN {
            return Err(AppError::InvalidCredential(format!(
                "password must be at most {PASSWORD_MAX_LEN} characters"
            )));
        }

        let hash = password::hash(password)?;
        self.store.register(&username, &hash).await
    }

    pub async fn login(&self, identity: &str, password: &str) -> Result<(String, StoredUser), AppError> {
        let username = Self::normalize(identity);
        let user_id = self.store.verify(&username, password).await?;
        let user = self
            .store
            .get(user_id)
            .await?
            .ok_or(AppError::AccountRemoved)?;
        let token = self.tokens.issue(user_id)?;
        Ok((token, user))
    }

    /// Token check plus a freshness check against the store, so tokens
    /// for since-removed accounts stop working even though verification
    /// itself is stateless.
    pub async fn authenticate(&self, token: &str) -> Result<Uuid, AppError> {
        let user_id = self.tokens.verify(token)?;
        if !self.store.exists(user_id).await? {
            return Err(AppError::AccountRemoved);
        }
        Ok(user_id)
    }

    pub async fn current_user(&self, user_id: Uuid) -> Result<StoredUser, AppError> {
        self.store
            .get(user_id)
            .await?
            .ok_or(AppError::AccountRemoved)
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
