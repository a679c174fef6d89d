//! Adapter for the `customers` table.

use lineup_core::customer::{Customer, CustomerRepo};
use lineup_core::error::CoreResult;
use lineup_core::types::EntityId;
use sqlx::PgPool;

use crate::models::customer::CustomerRow;
use crate::storage_err;

/// Column list for `customers` SELECT queries.
const COLUMNS: &str = "id, name, email, phone, password_hash, role";

/// [`CustomerRepo`] backed by PostgreSQL.
pub struct PgCustomerRepo {
    pool: PgPool,
}

impl PgCustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CustomerRepo for PgCustomerRepo {
    async fn save(&self, customer: Customer) -> CoreResult<Customer> {
        sqlx::query(
            "INSERT INTO customers (id, name, email, phone, password_hash, role) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 email = EXCLUDED.email, \
                 phone = EXCLUDED.phone, \
                 password_hash = EXCLUDED.password_hash, \
                 role = EXCLUDED.role",
        )
        .bind(customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.password_hash)
        .bind(customer.role.as_str())
        .execute(&self.pool)
        .await
        .map_err(storage_err)?;
        Ok(customer)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Customer>> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        let row = sqlx::query_as::<_, CustomerRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Customer>> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE email = $1");
        let row = sqlx::query_as::<_, CustomerRow>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_err)?;
        row.map(TryInto::try_into).transpose()
    }

    async fn find_all(&self) -> CoreResult<Vec<Customer>> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY seq");
        let rows = sqlx::query_as::<_, CustomerRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_err)?;
        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_err)?;
        Ok(())
    }
}
