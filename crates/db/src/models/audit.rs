use chrono::{DateTime, Utc};
use lineup_core::audit::{AuditAction, BookingAudit, LoginAudit, LoginStatus};
use lineup_core::error::CoreError;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `booking_audits` table.
#[derive(Debug, FromRow)]
pub struct BookingAuditRow {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub details: String,
}

impl TryFrom<BookingAuditRow> for BookingAudit {
    type Error = CoreError;

    fn try_from(row: BookingAuditRow) -> Result<Self, Self::Error> {
        Ok(BookingAudit {
            id: row.id,
            booking_id: row.booking_id,
            action: AuditAction::parse(&row.action)?,
            timestamp: row.timestamp,
            details: row.details,
        })
    }
}

/// Row of the `login_audits` table.
#[derive(Debug, FromRow)]
pub struct LoginAuditRow {
    pub id: Uuid,
    pub user_ref: String,
    pub timestamp: DateTime<Utc>,
    pub status: String,
    pub ip_address: String,
}

impl TryFrom<LoginAuditRow> for LoginAudit {
    type Error = CoreError;

    fn try_from(row: LoginAuditRow) -> Result<Self, Self::Error> {
        Ok(LoginAudit {
            id: row.id,
            user_ref: row.user_ref,
            timestamp: row.timestamp,
            status: LoginStatus::parse(&row.status)?,
            ip_address: row.ip_address,
        })
    }
}
