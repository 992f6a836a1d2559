use thiserror::Error;

/// Outcome of minting, decoding or authenticating a token.
///
/// `Expired` is kept apart from `InvalidSignature` so a caller can tell a stale
/// credential from a forged one.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature does not verify")]
    InvalidSignature,

    #[error("token is malformed")]
    Malformed,

    #[error("token claims are not valid for this use")]
    InvalidToken,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}
