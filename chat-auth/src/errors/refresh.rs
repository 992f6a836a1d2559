use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ErrorResponse;

use super::{CredentialError, TokenError};

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("refresh token rejected: {0}")]
    Token(#[source] TokenError),

    #[error("failed to issue access token: {0}")]
    Signing(#[source] TokenError),
}

impl IntoResponse for RefreshError {
    fn into_response(self) -> axum::response::Response {
        // Expired and forged refresh tokens look the same to the client: re-login.
        let (status, message) = match &self {
            RefreshError::Credential(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            RefreshError::Token(_) => (
                StatusCode::UNAUTHORIZED,
                "Invalid or expired refresh token".to_owned(),
            ),
            RefreshError::Signing(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong, please try again later.".to_owned(),
            ),
        };

        let body = ErrorResponse {
            error: message,
            field: None,
        };
        (status, Json(body)).into_response()
    }
}
