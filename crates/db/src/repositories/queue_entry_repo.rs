//! Adapter for the `queue_entries` table.

use lineup_core::error::CoreResult;
use lineup_core::queue::{QueueEntry, QueueEntryRepo};
use lineup_core::types::EntityId;
use sqlx::PgPool;

use crate::models::queue_entry::QueueEntryRow;
use crate::storage_err;

/// Column list for `queue_entries` SELECT queries.
const COLUMNS: &str = "\
    id, service_line_id, user_id, user_name, joined_at, status, estimated_minutes";

/// [`QueueEntryRepo`] backed by PostgreSQL.
pub struct PgQueueEntryRepo {
    pool: PgPool,
}

impl PgQueueEntryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl QueueEntryRepo for PgQueueEntryRepo {
    async fn save(&self, entry: QueueEntry) -> CoreResult<QueueEntry> {
        sqlx::query(
            "INSERT INTO queue_entries (id, service_line_id, user_id, user_name, \
                                        joined_at, status, estimated_minutes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (id) DO UPDATE SET \
                 status = EXCLUDED.status, \
                 estimated_minutes = EXCLUDED.estimated_minutes",
        )
        .bind(entry.id)
        .bind(entry.service_line_id)
        .bind(&entry.user_id)
        .bind(&entry.user_name)
        .bind(entry.joined_at)
        .bind(&entry.status)
        .bind(entry.estimated_minutes)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(entry)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<QueueEntry>> {
        let query = format!("SELECT {COLUMNS} FROM queue_entries WHERE id = $1");
        let row = sqlx::query_as::<_, QueueEntryRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> CoreResult<Vec<QueueEntry>> {
        let query = format!("SELECT {COLUMNS} FROM queue_entries ORDER BY seq");
        let rows = sqlx::query_as::<_, QueueEntryRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_service_line(
        &self,
        service_line_id: EntityId,
    ) -> CoreResult<Vec<QueueEntry>> {
        let query = format!(
            "SELECT {COLUMNS} FROM queue_entries WHERE service_line_id = $1 ORDER BY seq"
        );
        let rows = sqlx::query_as::<_, QueueEntryRow>(&query)
            .bind(service_line_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<QueueEntry>> {
        let query = format!("SELECT {COLUMNS} FROM queue_entries WHERE user_id = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, QueueEntryRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()> {
        // Unconditional delete: absent ids are a no-op.
        sqlx::query("DELETE FROM queue_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }

    async fn delete_by_service_line(&self, service_line_id: EntityId) -> CoreResult<()> {
        sqlx::query("DELETE FROM queue_entries WHERE service_line_id = $1")
            .bind(service_line_id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }
}
