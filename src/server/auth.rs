//! Login endpoint and bearer-token checks

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiResult, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    match state.auth.login(&payload.email, &payload.password) {
        Some(token) => Ok(Json(LoginResponse { token })),
        None => Err(ApiError::unauthorized("invalid credentials")),
    }
}

/// Reject the request unless it carries the admin bearer token
pub(super) fn require_bearer(state: &AppState, headers: &HeaderMap) -> ApiResult<()> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

    let token = value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("missing bearer token"))?;

    if state.auth.verify(token) {
        Ok(())
    } else {
        Err(ApiError::unauthorized("invalid bearer token"))
    }
}
