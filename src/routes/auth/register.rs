use actix_web::{post, web};

use crate::auth::AuthService;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{RUserRegister, UserRegisterRes};

#[post("")]
async fn register(
    auth: web::Data<AuthService>,
    body: web::Json<RUserRegister>,
) -> ApiResult<UserRegisterRes> {
    let user_id = auth.register(&body.username, &body.password).await?;
    Ok(ApiResponse::Created(UserRegisterRes { user_id }))
}
