use lineup_core::shop::Shop;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `shops` table.
#[derive(Debug, FromRow)]
pub struct ShopRow {
    pub id: Uuid,
    pub vendor_id: String,
    pub name: String,
    pub address: Option<String>,
    pub category: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub is_verified: bool,
}

impl From<ShopRow> for Shop {
    fn from(row: ShopRow) -> Self {
        Shop {
            id: row.id,
            vendor_id: row.vendor_id,
            name: row.name,
            address: row.address,
            category: row.category,
            latitude: row.latitude,
            longitude: row.longitude,
            opening_time: row.opening_time,
            closing_time: row.closing_time,
            is_verified: row.is_verified,
        }
    }
}
