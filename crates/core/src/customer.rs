//! Customer identity: entity, repository trait, and the directory service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Account role of a customer record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Customer,
    Vendor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "CUSTOMER",
            Role::Vendor => "VENDOR",
        }
    }

    pub fn parse(s: &str) -> CoreResult<Self> {
        match s {
            "CUSTOMER" => Ok(Role::Customer),
            "VENDOR" => Ok(Role::Vendor),
            other => Err(CoreError::Validation(format!("Unknown role: {other}"))),
        }
    }
}

/// A registered customer or vendor account.
///
/// The credential hash never leaves the process: it is excluded from
/// serialization so boundary responses cannot leak it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

/// Fields required to create a customer. The id is generated by the directory.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
    pub role: Role,
}

/// Mutable profile fields. Identity and credentials are immutable here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
}

// ---------------------------------------------------------------------------
// Repository trait
// ---------------------------------------------------------------------------

/// Persistence capability for customers.
#[async_trait::async_trait]
pub trait CustomerRepo: Send + Sync {
    async fn save(&self, customer: Customer) -> CoreResult<Customer>;
    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Customer>>;
    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Customer>>;
    async fn find_all(&self) -> CoreResult<Vec<Customer>>;
    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()>;
}

// ---------------------------------------------------------------------------
// CustomerDirectory
// ---------------------------------------------------------------------------

/// Identity lookup and account management over [`CustomerRepo`].
pub struct CustomerDirectory {
    customers: Arc<dyn CustomerRepo>,
}

impl CustomerDirectory {
    pub fn new(customers: Arc<dyn CustomerRepo>) -> Self {
        Self { customers }
    }

    pub async fn list(&self) -> CoreResult<Vec<Customer>> {
        self.customers.find_all().await
    }

    pub async fn get(&self, id: EntityId) -> CoreResult<Option<Customer>> {
        self.customers.find_by_id(id).await
    }

    pub async fn find_by_email(&self, email: &str) -> CoreResult<Option<Customer>> {
        self.customers.find_by_email(email).await
    }

    pub async fn create(&self, input: CreateCustomer) -> CoreResult<Customer> {
        let customer = Customer {
            id: EntityId::new_v4(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            password_hash: input.password_hash,
            role: input.role,
        };
        self.customers.save(customer).await
    }

    /// Update profile fields of an existing customer.
    ///
    /// Returns `None` when the id is unknown.
    pub async fn update(
        &self,
        id: EntityId,
        details: UpdateCustomer,
    ) -> CoreResult<Option<Customer>> {
        let Some(mut customer) = self.customers.find_by_id(id).await? else {
            return Ok(None);
        };
        if let Some(name) = details.name {
            customer.name = name;
        }
        if let Some(email) = details.email {
            customer.email = email;
        }
        if let Some(phone) = details.phone {
            customer.phone = Some(phone);
        }
        if let Some(role) = details.role {
            customer.role = role;
        }
        self.customers.save(customer).await.map(Some)
    }

    pub async fn delete(&self, id: EntityId) -> CoreResult<()> {
        self.customers.delete_by_id(id).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
