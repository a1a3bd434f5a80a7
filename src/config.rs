use std::env;
use std::fmt;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub store: StoreConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub enum StoreConfig {
    /// Process-local map. Users reset on restart.
    Memory,
    Postgres { uri: String },
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub password_min_len: usize,
}

// Hand-written so the signing secret can never end up in a log line.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("password_min_len", &self.password_min_len)
            .finish()
    }
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    fn get_env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
        env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let store = match env::var("STORE_BACKEND").as_deref() {
            Ok("postgres") => StoreConfig::Postgres {
                uri: Self::get_env("POSTGRES_URI"),
            },
            _ => StoreConfig::Memory,
        };

        EnvConfig {
            port: Self::get_env_or("PORT", 8080),
            store,
            auth: AuthConfig {
                jwt_secret: Self::get_env("JWT_SECRET"),
                token_ttl_secs: Self::get_env_or("TOKEN_TTL_SECS", 86_400),
                password_min_len: Self::get_env_or("PASSWORD_MIN_LEN", 6),
            },
        }
    }
}
