use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Authorization token is required in header")]
    Missing,

    #[error("Token type is required")]
    WrongScheme,
}
