use crate::app_state::AppState;
use crate::domain::{LoginCredentials, LoginRequestBody, LoginResponse};
use crate::errors::LoginError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn login(
    State(state): State<AppState>,
    request: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<impl IntoResponse, LoginError> {
    let Json(request) = request?;
    let credentials = LoginCredentials::parse(request)?;
    let outcome = state.auth_service.login(credentials).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse::new(&outcome.user, outcome.tokens)),
    ))
}
