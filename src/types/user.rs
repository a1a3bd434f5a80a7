use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct RUserRegister {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserRegisterRes {
    pub user_id: Uuid,
}

#[derive(Serialize, Deserialize)]
pub struct RUserLogin {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct UserLoginRes {
    pub token: String,
    pub token_type: String,
    pub username: String,
}

#[derive(Serialize, Deserialize)]
pub struct MeRes {
    pub username: String,
    pub created_at: DateTime<Utc>,
}
