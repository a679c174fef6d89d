//! Append-only audit trail: login attempts and booking mutations.
//!
//! Audit records are immutable once written; the repository traits expose no
//! update or delete. Every booking mutation and every login attempt produces
//! exactly one record -- the recorder is invoked synchronously by the owning
//! service before its call returns.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Actions and statuses
// ---------------------------------------------------------------------------

/// Booking mutation kinds recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    Created,
    Updated,
    Cancelled,
}

impl AuditAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AuditAction::Created => "CREATED",
            AuditAction::Updated => "UPDATED",
            AuditAction::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> CoreResult<Self> {
        match s {
            "CREATED" => Ok(AuditAction::Created),
            "UPDATED" => Ok(AuditAction::Updated),
            "CANCELLED" => Ok(AuditAction::Cancelled),
            other => Err(CoreError::Validation(format!(
                "Unknown audit action: {other}"
            ))),
        }
    }
}

/// Outcome of a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginStatus {
    Success,
    Failure,
}

impl LoginStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LoginStatus::Success => "SUCCESS",
            LoginStatus::Failure => "FAILURE",
        }
    }

    pub fn parse(s: &str) -> CoreResult<Self> {
        match s {
            "SUCCESS" => Ok(LoginStatus::Success),
            "FAILURE" => Ok(LoginStatus::Failure),
            other => Err(CoreError::Validation(format!(
                "Unknown login status: {other}"
            ))),
        }
    }
}

/// User reference recorded for a login attempt against an unknown email.
///
/// Unknown identities have no customer id, so the attempt is logged under a
/// sentinel built from the attempted email.
pub fn unknown_user_ref(email: &str) -> String {
    format!("UNKNOWN:{email}")
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Immutable record of one booking mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAudit {
    pub id: EntityId,
    pub booking_id: EntityId,
    pub action: AuditAction,
    pub timestamp: Timestamp,
    pub details: String,
}

/// Immutable record of one login attempt.
///
/// `user_ref` is the customer id rendered as a string, or the
/// `UNKNOWN:<email>` sentinel for attempts against unknown identities.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAudit {
    pub id: EntityId,
    pub user_ref: String,
    pub timestamp: Timestamp,
    pub status: LoginStatus,
    pub ip_address: String,
}

// ---------------------------------------------------------------------------
// Repository traits (append-only)
// ---------------------------------------------------------------------------

/// Persistence capability for booking audit records.
#[async_trait::async_trait]
pub trait BookingAuditRepo: Send + Sync {
    async fn append(&self, audit: BookingAudit) -> CoreResult<BookingAudit>;
    async fn find_by_booking(&self, booking_id: EntityId) -> CoreResult<Vec<BookingAudit>>;
    async fn find_all(&self) -> CoreResult<Vec<BookingAudit>>;
}

/// Persistence capability for login audit records.
#[async_trait::async_trait]
pub trait LoginAuditRepo: Send + Sync {
    async fn append(&self, audit: LoginAudit) -> CoreResult<LoginAudit>;
    async fn find_by_user_ref(&self, user_ref: &str) -> CoreResult<Vec<LoginAudit>>;
    async fn find_all(&self) -> CoreResult<Vec<LoginAudit>>;
}

// ---------------------------------------------------------------------------
// AuditRecorder
// ---------------------------------------------------------------------------

/// Appends audit records on behalf of the auth gateway and booking lifecycle.
pub struct AuditRecorder {
    login_audits: Arc<dyn LoginAuditRepo>,
    booking_audits: Arc<dyn BookingAuditRepo>,
}

impl AuditRecorder {
    pub fn new(
        login_audits: Arc<dyn LoginAuditRepo>,
        booking_audits: Arc<dyn BookingAuditRepo>,
    ) -> Self {
        Self {
            login_audits,
            booking_audits,
        }
    }

    /// Record a login attempt, stamped with the current time.
    pub async fn log_login(
        &self,
        user_ref: String,
        status: LoginStatus,
        ip_address: String,
    ) -> CoreResult<LoginAudit> {
        tracing::debug!(%user_ref, status = status.as_str(), "recording login attempt");
        self.login_audits
            .append(LoginAudit {
                id: EntityId::new_v4(),
                user_ref,
                timestamp: Utc::now(),
                status,
                ip_address,
            })
            .await
    }

    /// Record a booking mutation, stamped with the current time.
    pub async fn log_booking_action(
        &self,
        booking_id: EntityId,
        action: AuditAction,
        details: String,
    ) -> CoreResult<BookingAudit> {
        tracing::debug!(%booking_id, action = action.as_str(), "recording booking action");
        self.booking_audits
            .append(BookingAudit {
                id: EntityId::new_v4(),
                booking_id,
                action,
                timestamp: Utc::now(),
                details,
            })
            .await
    }

    /// Login audit records, optionally filtered by user reference.
    pub async fn login_audits(&self, user_ref: Option<&str>) -> CoreResult<Vec<LoginAudit>> {
        match user_ref {
            Some(user_ref) => self.login_audits.find_by_user_ref(user_ref).await,
            None => self.login_audits.find_all().await,
        }
    }

    /// Booking audit records, optionally filtered by booking id.
    pub async fn booking_audits(
        &self,
        booking_id: Option<EntityId>,
    ) -> CoreResult<Vec<BookingAudit>> {
        match booking_id {
            Some(id) => self.booking_audits.find_by_booking(id).await,
            None => self.booking_audits.find_all().await,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{MemoryBookingAuditRepo, MemoryLoginAuditRepo};

    fn recorder() -> AuditRecorder {
        AuditRecorder::new(
            Arc::new(MemoryLoginAuditRepo::default()),
            Arc::new(MemoryBookingAuditRepo::default()),
        )
    }

    #[tokio::test]
    async fn log_login_appends_one_record() {
        let recorder = recorder();
        recorder
            .log_login("user-1".into(), LoginStatus::Success, "127.0.0.1".into())
            .await
            .unwrap();

        let all = recorder.login_audits(None).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].user_ref, "user-1");
        assert_eq!(all[0].status, LoginStatus::Success);
    }

    #[tokio::test]
    async fn login_audits_filter_by_user_ref() {
        let recorder = recorder();
        recorder
            .log_login("user-1".into(), LoginStatus::Success, "127.0.0.1".into())
            .await
            .unwrap();
        recorder
            .log_login(
                unknown_user_ref("ghost@example.com"),
                LoginStatus::Failure,
                "127.0.0.1".into(),
            )
            .await
            .unwrap();

        let hits = recorder
            .login_audits(Some("UNKNOWN:ghost@example.com"))
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].status, LoginStatus::Failure);
    }

    #[tokio::test]
    async fn booking_audits_filter_by_booking_id() {
        let recorder = recorder();
        let booking_a = EntityId::new_v4();
        let booking_b = EntityId::new_v4();

        recorder
            .log_booking_action(booking_a, AuditAction::Created, "created".into())
            .await
            .unwrap();
        recorder
            .log_booking_action(booking_b, AuditAction::Created, "created".into())
            .await
            .unwrap();
        recorder
            .log_booking_action(booking_a, AuditAction::Updated, "updated".into())
            .await
            .unwrap();

        let hits = recorder.booking_audits(Some(booking_a)).await.unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].action, AuditAction::Created);
        assert_eq!(hits[1].action, AuditAction::Updated);
    }

    #[test]
    fn sentinel_embeds_the_attempted_email() {
        assert_eq!(unknown_user_ref("a@x.com"), "UNKNOWN:a@x.com");
    }

    #[test]
    fn action_and_status_parse_round_trip() {
        assert_eq!(AuditAction::parse("CREATED").unwrap(), AuditAction::Created);
        assert_eq!(AuditAction::parse("UPDATED").unwrap(), AuditAction::Updated);
        assert_eq!(
            AuditAction::parse("CANCELLED").unwrap(),
            AuditAction::Cancelled
        );
        assert!(AuditAction::parse("DELETED").is_err());
        assert_eq!(LoginStatus::parse("SUCCESS").unwrap(), LoginStatus::Success);
        assert!(LoginStatus::parse("OK").is_err());
    }
}
