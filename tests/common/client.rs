use actix_web::{web, App};
use market_auth::auth::AuthService;
use market_auth::routes::configure_routes;
use uuid::Uuid;

pub struct TestClient {
    pub auth: AuthService,
}

impl TestClient {
    pub fn new(auth: AuthService) -> Self {
        TestClient { auth }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.auth.clone()))
            .configure(configure_routes)
    }

    /// Registers through the service layer and logs in, returning the new
    /// user id and a live bearer token.
    #[allow(dead_code)]
    pub async fn create_test_user(&self, username: &str, password: &str) -> (Uuid, String) {
        let user_id = self
            .auth
            .register(username, password)
            .await
            .expect("Failed to register test user");
        let (token, _user) = self
            .auth
            .login(username, password)
            .await
            .expect("Failed to log in test user");
        (user_id, token)
    }
}
