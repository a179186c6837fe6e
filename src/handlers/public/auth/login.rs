// handlers/public/auth/login.rs - POST /api/login handler

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};

/// Login body; a `password` may be sent but there is no credential store to check it against
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub status: &'static str,
    pub token: String,
    pub expires_in: i64,
}

/**
 * POST /api/login - Stub login that issues a bearer token
 *
 * Expected Input:
 * ```json
 * { "username": "editor", "password": "..." }
 * ```
 *
 * Any non-blank username is accepted. The returned token unlocks the
 * mutating article routes when SECURITY_REQUIRE_AUTH is on.
 */
pub async fn login_post(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<LoginResponse> {
    let Json(request) = payload?;

    let username = request
        .username
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ApiError::bad_request("username is required"))?;

    let claims = Claims::new(username, state.security.jwt_expiry_hours)?;
    let token = generate_jwt(&claims, &state.security)?;

    tracing::info!("Issued token for {}", username);

    Ok(ApiResponse::success(LoginResponse {
        status: "You are logged in.",
        token,
        expires_in: claims.expires_in(),
    }))
}
