use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::store::{StoredUser, UserStore};
use crate::types::error::AppError;
use crate::utils::password;

struct MemUser {
    id: Uuid,
    password_hash: String,
    created_at: DateTime<Utc>,
}

/// In-memory credential store. Everything resets when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, MemUser>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn register(&self, username: &str, password_hash: &str) -> Result<Uuid, AppError> {
        // Check and insert under one write lock; two racing registrations
        // of the same identity cannot both pass the check.
        let mut users = self.users.write().expect("user map lock poisoned");
        if users.contains_key(username) {
            return Err(AppError::DuplicateIdentity);
        }
        let id = Uuid::new_v4();
        users.insert(
            username.to_owned(),
            MemUser {
                id,
                password_hash: password_hash.to_owned(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    async fn verify(&self, username: &str, password: &str) -> Result<Uuid, AppError> {
        let found = {
            let users = self.users.read().expect("user map lock poisoned");
            users
                .get(username)
                .map(|u| (u.id, u.password_hash.clone()))
        };

        let (id, hash) = match found {
            Some(pair) => pair,
            None => {
                password::verify(password, password::dummy_hash())?;
                return Err(AppError::AuthFailure);
            }
        };

        if password::verify(password, &hash)? {
            Ok(id)
        } else {
            Err(AppError::AuthFailure)
        }
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredUser>, AppError> {
        let users = self.users.read().expect("user map lock poisoned");
        Ok(users.iter().find(|(_, u)| u.id == id).map(|(name, u)| {
            StoredUser {
                id: u.id,
                username: name.clone(),
                created_at: u.created_at,
            }
        }))
    }
}
