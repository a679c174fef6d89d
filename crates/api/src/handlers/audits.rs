//! Read-only handlers over the audit trails.

use axum::extract::{Query, State};
use axum::Json;
use lineup_core::audit::{BookingAudit, LoginAudit};
use lineup_core::types::EntityId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/audits/login`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAuditQuery {
    /// Customer id as a string, or the `UNKNOWN:<email>` sentinel.
    pub user_id: Option<String>,
}

/// Query parameters for `GET /api/audits/booking`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAuditQuery {
    pub booking_id: Option<EntityId>,
}

/// GET /api/audits/login
pub async fn login_audits(
    State(state): State<AppState>,
    Query(params): Query<LoginAuditQuery>,
) -> AppResult<Json<Vec<LoginAudit>>> {
    Ok(Json(
        state
            .services
            .audit
            .login_audits(params.user_id.as_deref())
            .await?,
    ))
}

/// GET /api/audits/booking
pub async fn booking_audits(
    State(state): State<AppState>,
    Query(params): Query<BookingAuditQuery>,
) -> AppResult<Json<Vec<BookingAudit>>> {
    Ok(Json(
        state.services.audit.booking_audits(params.booking_id).await?,
    ))
}
