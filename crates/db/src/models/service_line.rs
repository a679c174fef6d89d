use lineup_core::shop::ServiceLine;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `service_lines` table.
#[derive(Debug, FromRow)]
pub struct ServiceLineRow {
    pub id: Uuid,
    pub shop_id: Uuid,
    pub name: String,
    pub is_active: bool,
    pub slot_duration: Option<i32>,
    pub max_capacity: Option<i32>,
}

impl From<ServiceLineRow> for ServiceLine {
    fn from(row: ServiceLineRow) -> Self {
        ServiceLine {
            id: row.id,
            shop_id: row.shop_id,
            name: row.name,
            is_active: row.is_active,
            slot_duration: row.slot_duration,
            max_capacity: row.max_capacity,
        }
    }
}
