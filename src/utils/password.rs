use std::sync::OnceLock;

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// Hash to burn a verification against when an identity does not exist,
/// so the unknown-user and wrong-password paths cost the same.
pub fn dummy_hash() -> &'static str {
    DUMMY_HASH.get_or_init(|| {
        hash("placeholder-credential").expect("hashing a fixed string cannot fail")
    })
}
