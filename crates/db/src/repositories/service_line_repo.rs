//! Adapter for the `service_lines` table.

use lineup_core::error::CoreResult;
use lineup_core::shop::{ServiceLine, ServiceLineRepo};
use lineup_core::types::EntityId;
use sqlx::PgPool;

use crate::models::service_line::ServiceLineRow;
use crate::storage_err;

/// Column list for `service_lines` SELECT queries.
const COLUMNS: &str = "id, shop_id, name, is_active, slot_duration, max_capacity";

/// [`ServiceLineRepo`] backed by PostgreSQL.
pub struct PgServiceLineRepo {
    pool: PgPool,
}

impl PgServiceLineRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ServiceLineRepo for PgServiceLineRepo {
    async fn save(&self, line: ServiceLine) -> CoreResult<ServiceLine> {
        sqlx::query(
            "INSERT INTO service_lines (id, shop_id, name, is_active, slot_duration, max_capacity) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 is_active = EXCLUDED.is_active, \
                 slot_duration = EXCLUDED.slot_duration, \
                 max_capacity = EXCLUDED.max_capacity",
        )
        .bind(line.id)
        .bind(line.shop_id)
        .bind(&line.name)
        .bind(line.is_active)
        .bind(line.slot_duration)
        .bind(line.max_capacity)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(line)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<ServiceLine>> {
        let query = format!("SELECT {COLUMNS} FROM service_lines WHERE id = $1");
        let row = sqlx::query_as::<_, ServiceLineRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<ServiceLine>> {
        let query = format!("SELECT {COLUMNS} FROM service_lines WHERE shop_id = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, ServiceLineRow>(&query)
            .bind(shop_id)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_shop(&self, shop_id: EntityId) -> CoreResult<()> {
        sqlx::query("DELETE FROM service_lines WHERE shop_id = $1")
            .bind(shop_id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }
}
