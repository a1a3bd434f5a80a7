use std::sync::Arc;

use market_auth::auth::AuthService;
use market_auth::config::AuthConfig;
use market_auth::db::memory::MemoryStore;

pub mod client;

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "test-signing-secret".to_string(),
        token_ttl_secs: 3600,
        password_min_len: 6,
    }
}

/// Context backed by the in-memory store, so flows run without any
/// external services.
pub struct TestContext {
    pub auth: AuthService,
}

impl TestContext {
    pub fn new() -> TestContext {
        let store = Arc::new(MemoryStore::new());
        TestContext {
            auth: AuthService::new(store, &test_auth_config()),
        }
    }
}

// Test data helpers
pub mod test_data {
    use market_auth::types::user::{RUserLogin, RUserRegister};

    #[allow(dead_code)]
    pub fn sample_register() -> RUserRegister {
        RUserRegister {
            username: "alice".to_string(),
            password: "Secr3t!".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn register_with(username: &str, password: &str) -> RUserRegister {
        RUserRegister {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn login_with(username: &str, password: &str) -> RUserLogin {
        RUserLogin {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}
