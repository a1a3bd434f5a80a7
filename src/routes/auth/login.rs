use actix_web::{post, web};

use crate::auth::AuthService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserLogin, UserLoginRes};

#[post("")]
async fn login(
    auth: web::Data<AuthService>,
    body: web::Json<RUserLogin>,
) -> ApiResult<UserLoginRes> {
    let (token, user) = auth.login(&body.username, &body.password).await?;
    Ok(ApiResponse::Ok(UserLoginRes {
        token,
        token_type: "bearer".to_string(),
        username: user.username,
    }))
}
