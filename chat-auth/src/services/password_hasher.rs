use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use once_cell::sync::Lazy;

use crate::errors::PasswordHashError;

// Hashing is CPU-bound; every helper runs on the blocking pool.

// Stand-in hash for logins whose phone number is unknown, so they cost one
// argon2 verification like any other login.
static DUMMY_HASH: Lazy<Option<String>> =
    Lazy::new(|| hash_blocking("no-such-user-placeholder").ok());

pub async fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash_blocking(&password)).await?
}

/// True when `password` matches `stored_hash`. Parameters are read from the hash.
pub async fn compare_hash_and_password(
    stored_hash: &str,
    password: &str,
) -> Result<bool, PasswordHashError> {
    let stored_hash = stored_hash.to_owned();
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || verify_blocking(&stored_hash, &password)).await?
}

/// Runs a full verification against a throwaway hash and discards the result.
pub async fn verify_against_dummy(password: &str) -> Result<(), PasswordHashError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || {
        let dummy = DUMMY_HASH.as_deref().ok_or(PasswordHashError::Hash)?;
        verify_blocking(dummy, &password).map(|_| ())
    })
    .await?
}

fn hash_blocking(password: &str) -> Result<String, PasswordHashError> {
    let argon2 = Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|_| PasswordHashError::Hash)?,
    );
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| PasswordHashError::Hash)?
        .to_string();
    Ok(password_hash)
}

fn verify_blocking(stored_hash: &str, password: &str) -> Result<bool, PasswordHashError> {
    let parsed_hash =
        PasswordHash::new(stored_hash).map_err(|_| PasswordHashError::InvalidStoredHash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
