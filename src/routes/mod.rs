use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod auth;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let bearer_auth = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/api/auth")
            .service(web::scope("/register").service(auth::register::register))
            .service(web::scope("/login").service(auth::login::login))
            .service(
                web::scope("/me")
                    .service(auth::me::me)
                    .wrap(bearer_auth),
            ),
    );
}
