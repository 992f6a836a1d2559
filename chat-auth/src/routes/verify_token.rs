use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::{
    app_state::AppState, domain::Claims, domain::VerifyTokenResponse, errors::VerifyTokenError,
};

/// Claims of a verified access token, for handlers that require a logged-in user.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Claims);

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = VerifyTokenError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .auth_service
            .verify_access_from_headers(&parts.headers)
            .map(AuthenticatedUser)
    }
}

pub async fn verify_token(AuthenticatedUser(claims): AuthenticatedUser) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(VerifyTokenResponse {
            subject_id: claims.subject_id().to_owned(),
            expires_at: claims.expires_at(),
        }),
    )
}
