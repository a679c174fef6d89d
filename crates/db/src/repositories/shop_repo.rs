//! Adapter for the `shops` table.

use lineup_core::error::CoreResult;
use lineup_core::shop::{Shop, ShopRepo};
use lineup_core::types::EntityId;
use sqlx::PgPool;

use crate::models::shop::ShopRow;
use crate::storage_err;

/// Column list for `shops` SELECT queries.
const COLUMNS: &str = "\
    id, vendor_id, name, address, category, latitude, longitude, \
    opening_time, closing_time, is_verified";

/// [`ShopRepo`] backed by PostgreSQL.
pub struct PgShopRepo {
    pool: PgPool,
}

impl PgShopRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl ShopRepo for PgShopRepo {
    async fn save(&self, shop: Shop) -> CoreResult<Shop> {
        sqlx::query(
            "INSERT INTO shops (id, vendor_id, name, address, category, latitude, \
                                longitude, opening_time, closing_time, is_verified) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (id) DO UPDATE SET \
                 vendor_id = EXCLUDED.vendor_id, \
                 name = EXCLUDED.name, \
                 address = EXCLUDED.address, \
                 category = EXCLUDED.category, \
                 latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, \
                 opening_time = EXCLUDED.opening_time, \
                 closing_time = EXCLUDED.closing_time, \
                 is_verified = EXCLUDED.is_verified",
        )
        .bind(shop.id)
        .bind(&shop.vendor_id)
        .bind(&shop.name)
        .bind(&shop.address)
        .bind(&shop.category)
        .bind(shop.latitude)
        .bind(shop.longitude)
        .bind(&shop.opening_time)
        .bind(&shop.closing_time)
        .bind(shop.is_verified)
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(shop)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Shop>> {
        let query = format!("SELECT {COLUMNS} FROM shops WHERE id = $1");
        let row = sqlx::query_as::<_, ShopRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> CoreResult<Vec<Shop>> {
        let query = format!("SELECT {COLUMNS} FROM shops ORDER BY seq");
        let rows = sqlx::query_as::<_, ShopRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_category(&self, category: &str) -> CoreResult<Vec<Shop>> {
        let query = format!("SELECT {COLUMNS} FROM shops WHERE category = $1 ORDER BY seq");
        let rows = sqlx::query_as::<_, ShopRow>(&query)
            .bind(category)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()> {
        sqlx::query("DELETE FROM shops WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }
}
