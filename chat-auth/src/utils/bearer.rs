use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::errors::CredentialError;

use super::consts::BEARER_SCHEME;

/// Pulls the bearer credential out of the `Authorization` header.
///
/// The scheme is matched case-insensitively and must be separated from the
/// credential by whitespace. The credential itself is returned trimmed and
/// otherwise untouched.
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, CredentialError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(CredentialError::Missing)?
        .to_str()
        .map_err(|_| CredentialError::WrongScheme)?
        .trim();

    if value.is_empty() {
        return Err(CredentialError::Missing);
    }

    let (scheme, rest) = match value.split_once(char::is_whitespace) {
        Some((scheme, rest)) => (scheme, rest),
        None => (value, ""),
    };
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return Err(CredentialError::WrongScheme);
    }

    let credential = rest.trim();
    if credential.is_empty() {
        return Err(CredentialError::Missing);
    }
    Ok(credential.to_owned())
}

/// The raw bearer credential of a request, not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = CredentialError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_bearer(&parts.headers).map(BearerToken)
    }
}
