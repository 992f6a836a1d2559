use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::ErrorResponse;

use super::{CredentialError, TokenError};

#[derive(Error, Debug)]
pub enum VerifyTokenError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("access token rejected: {0}")]
    Token(#[source] TokenError),
}

impl IntoResponse for VerifyTokenError {
    fn into_response(self) -> axum::response::Response {
        let message = match &self {
            VerifyTokenError::Credential(e) => e.to_string(),
            VerifyTokenError::Token(TokenError::Expired) => "Access token has expired".to_owned(),
            VerifyTokenError::Token(_) => "Invalid token provided".to_owned(),
        };

        let body = ErrorResponse {
            error: message,
            field: None,
        };
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}
