//! Contact-form relay endpoint

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::mailer::ContactMessage;

use super::{ApiError, ApiResult, AppState};

/// POST /send-message
///
/// Individual SMTP errors are logged but not differentiated to the caller.
pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Value>> {
    let msg: ContactMessage =
        serde_json::from_value(body).map_err(|err| ApiError::validation(err.to_string()))?;

    match state.mailer.send(&msg).await {
        Ok(()) => Ok(Json(serde_json::json!({ "success": true }))),
        Err(err) => {
            tracing::error!("contact mail relay failed: {err}");
            Err(ApiError::internal("failed to send message"))
        }
    }
}
