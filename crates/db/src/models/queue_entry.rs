use chrono::{DateTime, Utc};
use lineup_core::queue::QueueEntry;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `queue_entries` table.
#[derive(Debug, FromRow)]
pub struct QueueEntryRow {
    pub id: Uuid,
    pub service_line_id: Uuid,
    pub user_id: String,
    pub user_name: String,
    pub joined_at: DateTime<Utc>,
    pub status: String,
    pub estimated_minutes: i32,
}

impl From<QueueEntryRow> for QueueEntry {
    fn from(row: QueueEntryRow) -> Self {
        QueueEntry {
            id: row.id,
            service_line_id: row.service_line_id,
            user_id: row.user_id,
            user_name: row.user_name,
            joined_at: row.joined_at,
            status: row.status,
            estimated_minutes: row.estimated_minutes,
        }
    }
}
