use axum::extract::rejection::JsonRejection;
use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use crate::domain::{ErrorResponse, UserStoreError};

use super::{PasswordHashError, TokenError};

/// Why a login was refused. Logged, never sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    UnknownIdentifier,
    WrongPassword,
}

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The body could not be read as a login request at all.
    #[error("Request body is not a valid login request")]
    MalformedBody(StatusCode),

    #[error("Phone number or password does not match")]
    AuthenticationFailed(AuthFailure),

    #[error("Something went wrong, please try again later.")]
    Signing(#[source] TokenError),

    #[error("Something went wrong, please try again later.")]
    UserStore(#[source] UserStoreError),

    #[error("Something went wrong, please try again later.")]
    Internal(#[source] PasswordHashError),
}

impl From<JsonRejection> for LoginError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "login body rejected");
        LoginError::MalformedBody(rejection.status())
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let (status, field) = match &self {
            LoginError::Validation { field, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some((*field).to_owned()))
            }
            LoginError::MalformedBody(status) => (*status, None),
            LoginError::AuthenticationFailed(_) => (StatusCode::UNAUTHORIZED, None),
            LoginError::Signing(_) | LoginError::UserStore(_) | LoginError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorResponse {
            error: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}
