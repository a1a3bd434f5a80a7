use actix_web::{get, web, HttpMessage};

use crate::auth::AuthService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::MeRes;
use crate::utils::webutils::AuthedUser;

#[get("")]
async fn me(req: actix_web::HttpRequest, auth: web::Data<AuthService>) -> ApiResult<MeRes> {
    let AuthedUser(user_id) = req
        .extensions()
        .get::<AuthedUser>()
        .copied()
        .ok_or(AppError::AuthFailure)?;

    let user = auth.current_user(user_id).await?;
    Ok(ApiResponse::Ok(MeRes {
        username: user.username,
        created_at: user.created_at,
    }))
}
