use async_trait::async_trait;
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use super::postgres_service::PostgresService;
use super::store::{StoredUser, UserStore};
use crate::types::error::AppError;
use crate::utils::password;

impl PostgresService {
    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: Uuid) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id).one(&self.db).await?)
    }
}

#[async_trait]
impl UserStore for PostgresService {
    async fn register(&self, username: &str, password_hash: &str) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        // No pre-check: the unique index on username is what closes the
        // concurrent-registration race. A violating insert comes back as
        // DuplicateIdentity through the DbErr mapping.
        User::insert(UserActive {
            id: Set(id),
            username: Set(username.to_owned()),
            password_hash: Set(password_hash.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        Ok(id)
    }

    async fn verify(&self, username: &str, password: &str) -> Result<Uuid, AppError> {
        let user = match self.get_user_by_username(username).await? {
            Some(user) => user,
            None => {
                password::verify(password, password::dummy_hash())?;
                return Err(AppError::AuthFailure);
            }
        };

        if password::verify(password, &user.password_hash)? {
            Ok(user.id)
        } else {
            Err(AppError::AuthFailure)
        }
    }

    async fn get(&self, id: Uuid) -> Result<Option<StoredUser>, AppError> {
        Ok(self.get_user_by_id(id).await?.map(|u| StoredUser {
            id: u.id,
            username: u.username,
            created_at: u.created_at,
        }))
    }
}
