use actix_web::{dev::ServiceRequest, web, HttpMessage};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use uuid::Uuid;

use crate::auth::AuthService;
use crate::types::error::AppError;

/// Identity of the authenticated caller, placed in request extensions by
/// the bearer middleware for handlers behind it.
#[derive(Clone, Copy, Debug)]
pub struct AuthedUser(pub Uuid);

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let auth = match req.app_data::<web::Data<AuthService>>() {
        Some(auth) => auth.clone(),
        None => {
            return Err((
                AppError::Internal("auth service not configured".to_string()).into(),
                req,
            ))
        }
    };

    match auth.authenticate(credentials.token()).await {
        Ok(user_id) => {
            req.extensions_mut().insert(AuthedUser(user_id));
            Ok(req)
        }
        Err(e) => Err((e.into(), req)),
    }
}
