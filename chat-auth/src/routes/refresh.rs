use crate::app_state::AppState;
use crate::domain::RefreshResponse;
use crate::errors::{CredentialError, RefreshError};
use crate::utils::BearerToken;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

pub async fn refresh(
    State(state): State<AppState>,
    bearer: Result<BearerToken, CredentialError>,
) -> Result<impl IntoResponse, RefreshError> {
    let BearerToken(presented) = bearer.map_err(|e| {
        tracing::warn!(reason = ?e, "refresh rejected: no usable credential");
        RefreshError::Credential(e)
    })?;
    let grant = state.auth_service.refresh(&presented)?;

    Ok((StatusCode::OK, Json(RefreshResponse::from(grant))))
}
