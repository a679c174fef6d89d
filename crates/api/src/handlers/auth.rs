//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use lineup_core::customer::Customer;
use lineup_core::error::CoreError;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Best-effort client address for the login audit trail.
///
/// Honours `x-forwarded-for` (first hop) when a proxy sets it; otherwise
/// falls back to the loopback placeholder.
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "127.0.0.1".to_string())
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Every attempt, including failures and
/// unknown emails, leaves exactly one login audit record.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<Customer>> {
    let ip = client_ip(&headers);
    let customer = state
        .services
        .auth
        .login(&input.email, &input.password, &ip)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;
    Ok(Json(customer))
}
