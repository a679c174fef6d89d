//! Adapters for the append-only `booking_audits` and `login_audits` tables.
//!
//! Audit rows are never updated or deleted; the only write is an INSERT.

use lineup_core::audit::{BookingAudit, BookingAuditRepo, LoginAudit, LoginAuditRepo};
use lineup_core::error::CoreResult;
use lineup_core::types::EntityId;
use sqlx::PgPool;

use crate::models::audit::{BookingAuditRow, LoginAuditRow};
use crate::storage_err;

/// Column list for `booking_audits` SELECT queries.
const BOOKING_COLUMNS: &str = "id, booking_id, action, timestamp, details";

/// Column list for `login_audits` SELECT queries.
const LOGIN_COLUMNS: &str = "id, user_ref, timestamp, status, ip_address";

/// [`BookingAuditRepo`] backed by PostgreSQL.
pub struct PgBookingAuditRepo {
    pool: PgPool,
}

impl PgBookingAuditRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BookingAuditRepo for PgBookingAuditRepo {
    async fn append(&self, audit: BookingAudit) -> CoreResult<BookingAudit> {
        sqlx::query(
            "INSERT INTO booking_audits (id, booking_id, action, timestamp, details) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(audit.id)
        .bind(audit.booking_id)
        .bind(audit.action.as_str())
        .bind(audit.timestamp)
        .bind(&audit.details)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(audit)
    }

    async fn find_by_booking(&self, booking_id: EntityId) -> CoreResult<Vec<BookingAudit>> {
        let query =
            format!("SELECT {BOOKING_COLUMNS} FROM booking_audits WHERE booking_id = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, BookingAuditRow>(&query)
            .bind(booking_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_all(&self) -> CoreResult<Vec<BookingAudit>> {
        let query = format!("SELECT {BOOKING_COLUMNS} FROM booking_audits ORDER BY seq");
        let rows = sqlx::query_as::<_, BookingAuditRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        rows.into_iter().map(TryInto::try_into).collect()
    }
}

/// [`LoginAuditRepo`] backed by PostgreSQL.
pub struct PgLoginAuditRepo {
    pool: PgPool,
}

impl PgLoginAuditRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl LoginAuditRepo for PgLoginAuditRepo {
    async fn append(&self, audit: LoginAudit) -> CoreResult<LoginAudit> {
        sqlx::query(
            "INSERT INTO login_audits (id, user_ref, timestamp, status, ip_address) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(audit.id)
        .bind(&audit.user_ref)
        .bind(audit.timestamp)
        .bind(audit.status.as_str())
        .bind(&audit.ip_address)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(audit)
    }

    async fn find_by_user_ref(&self, user_ref: &str) -> CoreResult<Vec<LoginAudit>> {
        let query =
            format!("SELECT {LOGIN_COLUMNS} FROM login_audits WHERE user_ref = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, LoginAuditRow>(&query)
            .bind(user_ref)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_all(&self) -> CoreResult<Vec<LoginAudit>> {
        let query = format!("SELECT {LOGIN_COLUMNS} FROM login_audits ORDER BY seq");
        let rows = sqlx::query_as::<_, LoginAuditRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        rows.into_iter().map(TryInto::try_into).collect()
    }
}
