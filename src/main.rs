use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use market_auth::auth::AuthService;
use market_auth::config::{EnvConfig, StoreConfig};
use market_auth::db::memory::MemoryStore;
use market_auth::db::postgres_service::PostgresService;
use market_auth::db::store::UserStore;
use market_auth::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let store: Arc<dyn UserStore> = match &config.store {
        StoreConfig::Memory => {
            log::warn!("STORE_BACKEND=memory: users are lost on restart");
            Arc::new(MemoryStore::new())
        }
        StoreConfig::Postgres { uri } => Arc::new(
            PostgresService::new(uri)
                .await
                .expect("Failed to initialize PostgresService"),
        ),
    };

    let auth = AuthService::new(store, &config.auth);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(auth.clone()))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
