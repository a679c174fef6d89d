use lineup_core::customer::{Customer, Role};
use lineup_core::error::CoreError;
use sqlx::FromRow;
use uuid::Uuid;

/// Row of the `customers` table.
#[derive(Debug, FromRow)]
pub struct CustomerRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = CoreError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(Customer {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            password_hash: row.password_hash,
            role: Role::parse(&row.role)?,
        })
    }
}
