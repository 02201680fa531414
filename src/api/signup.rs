use axum::{Json, extract::State};
use serde::Deserialize;
use std::sync::Arc;

use super::{AccountDto, ApiError, ApiResponse, AppState, ConfirmCodeResponse, MessageResponse};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Deserialize)]
pub struct ConfirmCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /auth/email/request
/// Issue a verification code and mail it to the address
pub async fn request_code(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EmailRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.verification().request_code(&payload.email).await?;

    Ok(Json(ApiResponse::success(MessageResponse {
        message: "Verification code sent".to_string(),
    })))
}

/// POST /auth/email/confirm
/// Check a submitted code against the pending one. A mismatch is a
/// regular `verified: false` answer, not an error.
pub async fn confirm_code(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ConfirmCodeRequest>,
) -> Result<Json<ApiResponse<ConfirmCodeResponse>>, ApiError> {
    let verified = state
        .verification()
        .confirm_code(&payload.email, &payload.code)
        .await?;

    Ok(Json(ApiResponse::success(ConfirmCodeResponse { verified })))
}

/// POST /auth/signup
/// Create an account for a previously verified email address
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<ApiResponse<AccountDto>>, ApiError> {
    let account = state
        .signup()
        .sign_up(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok(Json(ApiResponse::success(account.into())))
}
