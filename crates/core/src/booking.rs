//! Booking lifecycle: entity, repository trait, and the service owning the
//! status state machine.
//!
//! Creation always forces the status to `confirmed`; after that, any status
//! string may replace any other. The absence of a transition table is
//! deliberate and load-bearing: shops drive their own workflows and the
//! boundary never rejects a transition. Every successful mutation appends
//! exactly one audit record via [`AuditRecorder`].

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditAction, AuditRecorder};
use crate::error::{CoreError, CoreResult};
use crate::types::{EntityId, Timestamp};

/// Well-known booking statuses. The status field itself stays a free-form
/// string; these are the values the original workflows use.
pub mod statuses {
    pub const CONFIRMED: &str = "confirmed";
    pub const WAITING: &str = "waiting";
    pub const SERVING: &str = "serving";
    pub const COMPLETED: &str = "completed";
    pub const CANCELLED: &str = "cancelled";
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A scheduled or walk-in engagement between a customer and a shop's service
/// line. References are weak (ids only) and not validated on creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub shop_id: EntityId,
    pub service_line_id: EntityId,
    pub status: String,
    pub appointment_time: Option<Timestamp>,
    pub joined_at: Timestamp,
    pub estimated_minutes: Option<i32>,
}

/// Fields for creating a booking.
///
/// A caller-supplied `status` is accepted but always overwritten with
/// `confirmed`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    pub customer_id: EntityId,
    pub shop_id: EntityId,
    pub service_line_id: EntityId,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub appointment_time: Option<Timestamp>,
    #[serde(default)]
    pub estimated_minutes: Option<i32>,
}

// ---------------------------------------------------------------------------
// Repository trait
// ---------------------------------------------------------------------------

/// Persistence capability for bookings.
#[async_trait::async_trait]
pub trait BookingRepo: Send + Sync {
    async fn save(&self, booking: Booking) -> CoreResult<Booking>;
    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Booking>>;
    async fn find_all(&self) -> CoreResult<Vec<Booking>>;
    async fn find_by_customer(&self, customer_id: EntityId) -> CoreResult<Vec<Booking>>;
    async fn find_by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<Booking>>;
}

// ---------------------------------------------------------------------------
// BookingLifecycle
// ---------------------------------------------------------------------------

/// Owns the booking status state machine and its audit contract.
///
/// No locking: concurrent status updates on the same id race and the last
/// writer wins, but each successful update still appends its own audit row.
/// The audit trail is a log, not a lock.
pub struct BookingLifecycle {
    bookings: Arc<dyn BookingRepo>,
    audit: Arc<AuditRecorder>,
}

impl BookingLifecycle {
    pub fn new(bookings: Arc<dyn BookingRepo>, audit: Arc<AuditRecorder>) -> Self {
        Self { bookings, audit }
    }

    pub async fn list(&self) -> CoreResult<Vec<Booking>> {
        self.bookings.find_all().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<Option<Booking>> {
        self.bookings.find_by_id(id).await
    }

    pub async fn by_customer(&self, customer_id: EntityId) -> CoreResult<Vec<Booking>> {
        self.bookings.find_by_customer(customer_id).await
    }

    pub async fn by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<Booking>> {
        self.bookings.find_by_shop(shop_id).await
    }

    /// Create a booking: status is forced to `confirmed` and `joined_at` is
    /// stamped now, regardless of caller-supplied values. Appends exactly one
    /// `CREATED` audit record before returning.
    pub async fn create(&self, input: CreateBooking) -> CoreResult<Booking> {
        let booking = Booking {
            id: EntityId::new_v4(),
            customer_id: input.customer_id,
            shop_id: input.shop_id,
            service_line_id: input.service_line_id,
            status: statuses::CONFIRMED.to_string(),
            appointment_time: input.appointment_time,
            joined_at: Utc::now(),
            estimated_minutes: input.estimated_minutes,
        };
        let saved = self.bookings.save(booking).await?;

        self.audit
            .log_booking_action(
                saved.id,
                AuditAction::Created,
                format!("Booking created for customer {}", saved.customer_id),
            )
            .await?;

        tracing::info!(booking_id = %saved.id, customer_id = %saved.customer_id, "booking created");
        Ok(saved)
    }

    /// Replace the status of an existing booking with `new_status`.
    ///
    /// Any transition is allowed. Fails with [`CoreError::NotFound`] when the
    /// id is unknown, in which case no audit record is produced. On success,
    /// appends exactly one `UPDATED` audit record naming both statuses.
    pub async fn update_status(&self, id: EntityId, new_status: String) -> CoreResult<Booking> {
        let mut booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Booking",
                id,
            })?;

        let old_status = std::mem::replace(&mut booking.status, new_status);
        let updated = self.bookings.save(booking).await?;

        self.audit
            .log_booking_action(
                id,
                AuditAction::Updated,
                format!("Status changed from {} to {}", old_status, updated.status),
            )
            .await?;

        tracing::info!(booking_id = %id, from = %old_status, to = %updated.status, "booking status updated");
        Ok(updated)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
