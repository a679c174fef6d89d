//! Adapter for the `bookings` table.

use lineup_core::booking::{Booking, BookingRepo};
use lineup_core::error::CoreResult;
use lineup_core::types::EntityId;
use sqlx::PgPool;

use crate::models::booking::BookingRow;
use crate::storage_err;

/// Column list for `bookings` SELECT queries.
const COLUMNS: &str = "\
    id, customer_id, shop_id, service_line_id, status, \
    appointment_time, joined_at, estimated_minutes";

/// [`BookingRepo`] backed by PostgreSQL.
pub struct PgBookingRepo {
    pool: PgPool,
}

impl PgBookingRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl BookingRepo for PgBookingRepo {
    async fn save(&self, booking: Booking) -> CoreResult<Booking> {
        sqlx::query(
            "INSERT INTO bookings (id, customer_id, shop_id, service_line_id, status, \
                                   appointment_time, joined_at, estimated_minutes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             ON CONFLICT (id) DO UPDATE SET \
                 status = EXCLUDED.status, \
                 appointment_time = EXCLUDED.appointment_time, \
                 estimated_minutes = EXCLUDED.estimated_minutes",
        )
        .bind(booking.id)
        .bind(booking.customer_id)
        .bind(booking.shop_id)
        .bind(booking.service_line_id)
        .bind(&booking.status)
        .bind(booking.appointment_time)
        .bind(booking.joined_at)
        .bind(booking.estimated_minutes)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(booking)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Booking>> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        let row = sqlx::query_as::<_, BookingRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> CoreResult<Vec<Booking>> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY seq");
        let rows = sqlx::query_as::<_, BookingRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_customer(&self, customer_id: EntityId) -> CoreResult<Vec<Booking>> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE customer_id = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, BookingRow>(&query)
            .bind(customer_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<Booking>> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE shop_id = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, BookingRow>(&query)
            .bind(shop_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
