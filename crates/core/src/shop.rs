//! Shops and their nested service lines: entities, repository traits, and the
//! registry service.
//!
//! A shop exclusively owns its service lines, and the lines own their queue
//! entries: deleting the shop removes both. A service line only carries a weak
//! back-reference (`shop_id`) -- it is never managed independently of its
//! owner.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::queue::QueueEntryRepo;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A vendor-operated service shop.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    pub id: EntityId,
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

/// A named queue-like offering within a shop ("haircut", "consultation", ...).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLine {
    pub id: EntityId,
    pub shop_id: EntityId,
    pub name: String,
    pub is_active: bool,
    /// Slot duration in minutes.
    pub slot_duration: Option<i32>,
    pub max_capacity: Option<i32>,
}

/// Fields for creating a shop, optionally with embedded service lines
/// (a denormalized convenience distinct from [`ShopRegistry::add_service_line`]).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShop {
    pub vendor_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub opening_time: Option<String>,
    #[serde(default)]
    pub closing_time: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub service_lines: Vec<CreateServiceLine>,
}

/// Fields for creating a service line under a shop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceLine {
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub slot_duration: Option<i32>,
    #[serde(default)]
    pub max_capacity: Option<i32>,
}

// ---------------------------------------------------------------------------
// Repository traits
// ---------------------------------------------------------------------------

/// Persistence capability for shops.
#[async_trait::async_trait]
pub trait ShopRepo: Send + Sync {
    async fn save(&self, shop: Shop) -> CoreResult<Shop>;
    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Shop>>;
    async fn find_all(&self) -> CoreResult<Vec<Shop>>;
    async fn find_by_category(&self, category: &str) -> CoreResult<Vec<Shop>>;
    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()>;
}

/// Persistence capability for service lines.
#[async_trait::async_trait]
pub trait ServiceLineRepo: Send + Sync {
    async fn save(&self, line: ServiceLine) -> CoreResult<ServiceLine>;
    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<ServiceLine>>;
    async fn find_by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<ServiceLine>>;
    async fn delete_by_shop(&self, shop_id: EntityId) -> CoreResult<()>;
}

// ---------------------------------------------------------------------------
// ShopRegistry
// ---------------------------------------------------------------------------

/// Owns the shop and service-line aggregates.
pub struct ShopRegistry {
    shops: Arc<dyn ShopRepo>,
    service_lines: Arc<dyn ServiceLineRepo>,
    queue_entries: Arc<dyn QueueEntryRepo>,
}

impl ShopRegistry {
    pub fn new(
        shops: Arc<dyn ShopRepo>,
        service_lines: Arc<dyn ServiceLineRepo>,
        queue_entries: Arc<dyn QueueEntryRepo>,
    ) -> Self {
        Self {
            shops,
            service_lines,
            queue_entries,
        }
    }

    pub async fn list_shops(&self) -> CoreResult<Vec<Shop>> {
        self.shops.find_all().await
    }

    pub async fn get_shop(&self, id: EntityId) -> CoreResult<Option<Shop>> {
        self.shops.find_by_id(id).await
    }

    pub async fn find_shops_by_category(&self, category: &str) -> CoreResult<Vec<Shop>> {
        self.shops.find_by_category(category).await
    }

    /// Persist a shop, then any embedded service lines with the owning shop
    /// reference set.
    pub async fn create_shop(&self, input: CreateShop) -> CoreResult<Shop> {
        let shop = Shop {
            id: EntityId::new_v4(),
            vendor_id: input.vendor_id,
            name: input.name,
            address: input.address,
            category: input.category,
            latitude: input.latitude,
            longitude: input.longitude,
            opening_time: input.opening_time,
            closing_time: input.closing_time,
            is_verified: input.is_verified,
        };
        let saved = self.shops.save(shop).await?;
        for line in input.service_lines {
            self.persist_line(saved.id, line).await?;
        }
        Ok(saved)
    }

    /// Attach a new service line to an existing shop.
    ///
    /// Fails with [`CoreError::NotFound`] when the shop does not exist; in
    /// that case the line is not persisted.
    pub async fn add_service_line(
        &self,
        shop_id: EntityId,
        input: CreateServiceLine,
    ) -> CoreResult<ServiceLine> {
        let shop = self
            .shops
            .find_by_id(shop_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Shop",
                id: shop_id,
            })?;
        self.persist_line(shop.id, input).await
    }

    pub async fn service_lines_by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<ServiceLine>> {
        self.service_lines.find_by_shop(shop_id).await
    }

    /// Delete a shop and, with it, every service line it owns and every queue
    /// entry in those lines. The cascade runs leaf-first so a failure never
    /// leaves entries pointing at a deleted line.
    pub async fn delete_shop(&self, id: EntityId) -> CoreResult<()> {
        for line in self.service_lines.find_by_shop(id).await? {
            self.queue_entries.delete_by_service_line(line.id).await?;
        }
        self.service_lines.delete_by_shop(id).await?;
        self.shops.delete_by_id(id).await
    }

    async fn persist_line(
        &self,
        shop_id: EntityId,
        input: CreateServiceLine,
    ) -> CoreResult<ServiceLine> {
        let line = ServiceLine {
            id: EntityId::new_v4(),
            shop_id,
            name: input.name,
            is_active: input.is_active,
            slot_duration: input.slot_duration,
            max_capacity: input.max_capacity,
        };
        self.service_lines.save(line).await
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
