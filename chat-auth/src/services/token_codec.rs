//! Signed, compact token encoding.
//!
//! Tokens are HS256 JWTs (`header.claims.signature`, base64url segments). The
//! codec is a set of pure functions over `(token, secret, now)`; it knows
//! nothing about users, lifetimes or which secret belongs to which kind. That
//! is the job of the caller, usually `AuthService` with a `TokenPolicy`.
//!
//! Decoding is two-staged:
//! 1. [`decode_at`] checks structure, signature, then expiry, and reports each
//!    failure as its own `TokenError` variant.
//! 2. [`authenticate`] checks that what was decoded is the kind of token the
//!    caller expects before handing out the claims.
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::{Claims, TokenKind};
use crate::errors::TokenError;
use crate::utils::Secret;

pub const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// A token whose signature verified and which had not expired when decoded.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    algorithm: Algorithm,
    claims: Claims,
}

impl DecodedToken {
    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}

/// Serialize and sign `claims` with `secret`.
pub fn mint(claims: &Claims, secret: &Secret) -> Result<String, TokenError> {
    encode(
        &Header::new(SIGNING_ALGORITHM),
        claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(TokenError::Signing)
}

/// [`decode_at`] evaluated at the current wall-clock time.
pub fn decode(token: &str, secret: &Secret) -> Result<DecodedToken, TokenError> {
    decode_at(token, secret, Utc::now().timestamp())
}

/// Verify `token` against `secret` as of the Unix timestamp `now`.
///
/// A token is live while `now < exp`; from `exp` onwards it is `Expired`.
/// Expiry is only reported for tokens whose signature verified.
pub fn decode_at(token: &str, secret: &Secret, now: i64) -> Result<DecodedToken, TokenError> {
    let data = jsonwebtoken::decode::<Claims>(
        token.trim(),
        &DecodingKey::from_secret(secret.as_ref()),
        &validation(),
    )
    .map_err(classify)?;

    if data.claims.expires_at() <= now {
        return Err(TokenError::Expired);
    }

    Ok(DecodedToken {
        algorithm: data.header.alg,
        claims: data.claims,
    })
}

/// Second-stage check on a decoded token.
///
/// Rejects with `InvalidToken` unless the token was signed with the expected
/// algorithm, names a subject, and is of the `expected` kind.
pub fn authenticate(decoded: DecodedToken, expected: TokenKind) -> Result<Claims, TokenError> {
    if decoded.algorithm != SIGNING_ALGORITHM {
        return Err(TokenError::InvalidToken);
    }
    if decoded.claims.kind() != expected {
        return Err(TokenError::InvalidToken);
    }
    if decoded.claims.subject_id().trim().is_empty() {
        return Err(TokenError::InvalidToken);
    }
    Ok(decoded.claims)
}

// Expiry is checked by `decode_at` against the caller's clock, not by
// jsonwebtoken against the system clock.
fn validation() -> Validation {
    let mut validation = Validation::new(SIGNING_ALGORITHM);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);
    validation
}

fn classify(err: jsonwebtoken::errors::Error) -> TokenError {
    match err.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}
