use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordHashError {
    #[error("failed to hash password")]
    Hash,

    #[error("stored password hash is not a valid PHC string")]
    InvalidStoredHash,

    #[error("password hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
