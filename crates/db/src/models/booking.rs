use chrono::{DateTime, Utc};
use lineup_core::booking::Booking;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `bookings` table.
#[derive(Debug, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub shop_id: Uuid,
    pub service_line_id: Uuid,
    pub status: String,
    pub appointment_time: Option<DateTime<Utc>>,
    pub joined_at: DateTime<Utc>,
    pub estimated_minutes: Option<i32>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            customer_id: row.customer_id,
            shop_id: row.shop_id,
            service_line_id: row.service_line_id,
            status: row.status,
            appointment_time: row.appointment_time,
            joined_at: row.joined_at,
            estimated_minutes: row.estimated_minutes,
        }
    }
}
