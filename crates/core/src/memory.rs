//! In-memory repository adapters.
//!
//! These back the service unit tests and the api crate's integration tests,
//! and double as a storage-free demo mode. Records live in insertion order in
//! a `Mutex<Vec<_>>`, which is also the order every finder returns.
//!
//! `save` is an upsert keyed on id, matching the contract the PostgreSQL
//! adapters implement.

use std::sync::{Mutex, MutexGuard};

use crate::audit::{BookingAudit, BookingAuditRepo, LoginAudit, LoginAuditRepo};
use crate::auth::PasswordVerifier;
use crate::booking::{Booking, BookingRepo};
use crate::customer::{Customer, CustomerRepo};
use crate::error::{CoreError, CoreResult};
use crate::queue::{QueueEntry, QueueEntryRepo};
use crate::shop::{ServiceLine, ServiceLineRepo, Shop, ShopRepo};
use crate::types::EntityId;

fn lock<T>(items: &Mutex<Vec<T>>) -> CoreResult<MutexGuard<'_, Vec<T>>> {
    items
        .lock()
        .map_err(|_| CoreError::Internal("repository lock poisoned".into()))
}

fn upsert<T: Clone>(items: &mut Vec<T>, item: T, same_id: impl Fn(&T) -> bool) {
    match items.iter_mut().find(|existing| same_id(existing)) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

// ---------------------------------------------------------------------------
// Customers
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryCustomerRepo {
    items: Mutex<Vec<Customer>>,
}

#[async_trait::async_trait]
impl CustomerRepo for MemoryCustomerRepo {
    async fn save(&self, customer: Customer) -> CoreResult<Customer> {
        let mut items = lock(&self.items)?;
        let id = customer.id;
        upsert(&mut items, customer.clone(), |c| c.id == id);
        Ok(customer)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Customer>> {
        Ok(lock(&self.items)?.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> CoreResult<Option<Customer>> {
        Ok(lock(&self.items)?.iter().find(|c| c.email == email).cloned())
    }

    async fn find_all(&self) -> CoreResult<Vec<Customer>> {
        Ok(lock(&self.items)?.clone())
    }

    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()> {
        lock(&self.items)?.retain(|c| c.id != id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Shops and service lines
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryShopRepo {
    items: Mutex<Vec<Shop>>,
}

#[async_trait::async_trait]
impl ShopRepo for MemoryShopRepo {
    async fn save(&self, shop: Shop) -> CoreResult<Shop> {
        let mut items = lock(&self.items)?;
        let id = shop.id;
        upsert(&mut items, shop.clone(), |s| s.id == id);
        Ok(shop)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Shop>> {
        Ok(lock(&self.items)?.iter().find(|s| s.id == id).cloned())
    }

    async fn find_all(&self) -> CoreResult<Vec<Shop>> {
        Ok(lock(&self.items)?.clone())
    }

    async fn find_by_category(&self, category: &str) -> CoreResult<Vec<Shop>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|s| s.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()> {
        lock(&self.items)?.retain(|s| s.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryServiceLineRepo {
    items: Mutex<Vec<ServiceLine>>,
}

#[async_trait::async_trait]
impl ServiceLineRepo for MemoryServiceLineRepo {
    async fn save(&self, line: ServiceLine) -> CoreResult<ServiceLine> {
        let mut items = lock(&self.items)?;
        let id = line.id;
        upsert(&mut items, line.clone(), |l| l.id == id);
        Ok(line)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<ServiceLine>> {
        Ok(lock(&self.items)?.iter().find(|l| l.id == id).cloned())
    }

    async fn find_by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<ServiceLine>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|l| l.shop_id == shop_id)
            .cloned()
            .collect())
    }

    async fn delete_by_shop(&self, shop_id: EntityId) -> CoreResult<()> {
        lock(&self.items)?.retain(|l| l.shop_id != shop_id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryBookingRepo {
    items: Mutex<Vec<Booking>>,
}

#[async_trait::async_trait]
impl BookingRepo for MemoryBookingRepo {
    async fn save(&self, booking: Booking) -> CoreResult<Booking> {
        let mut items = lock(&self.items)?;
        let id = booking.id;
        upsert(&mut items, booking.clone(), |b| b.id == id);
        Ok(booking)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<Booking>> {
        Ok(lock(&self.items)?.iter().find(|b| b.id == id).cloned())
    }

    async fn find_all(&self) -> CoreResult<Vec<Booking>> {
        Ok(lock(&self.items)?.clone())
    }

    async fn find_by_customer(&self, customer_id: EntityId) -> CoreResult<Vec<Booking>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|b| b.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_by_shop(&self, shop_id: EntityId) -> CoreResult<Vec<Booking>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|b| b.shop_id == shop_id)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Queue entries
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryQueueEntryRepo {
    items: Mutex<Vec<QueueEntry>>,
}

#[async_trait::async_trait]
impl QueueEntryRepo for MemoryQueueEntryRepo {
    async fn save(&self, entry: QueueEntry) -> CoreResult<QueueEntry> {
        let mut items = lock(&self.items)?;
        let id = entry.id;
        upsert(&mut items, entry.clone(), |e| e.id == id);
        Ok(entry)
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<QueueEntry>> {
        Ok(lock(&self.items)?.iter().find(|e| e.id == id).cloned())
    }

    async fn find_all(&self) -> CoreResult<Vec<QueueEntry>> {
        Ok(lock(&self.items)?.clone())
    }

    async fn find_by_service_line(
        &self,
        service_line_id: EntityId,
    ) -> CoreResult<Vec<QueueEntry>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|e| e.service_line_id == service_line_id)
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: &str) -> CoreResult<Vec<QueueEntry>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_by_id(&self, id: EntityId) -> CoreResult<()> {
        lock(&self.items)?.retain(|e| e.id != id);
        Ok(())
    }

    async fn delete_by_service_line(&self, service_line_id: EntityId) -> CoreResult<()> {
        lock(&self.items)?.retain(|e| e.service_line_id != service_line_id);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Audit trails (append-only)
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MemoryBookingAuditRepo {
    items: Mutex<Vec<BookingAudit>>,
}

#[async_trait::async_trait]
impl BookingAuditRepo for MemoryBookingAuditRepo {
    async fn append(&self, audit: BookingAudit) -> CoreResult<BookingAudit> {
        lock(&self.items)?.push(audit.clone());
        Ok(audit)
    }

    async fn find_by_booking(&self, booking_id: EntityId) -> CoreResult<Vec<BookingAudit>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|a| a.booking_id == booking_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> CoreResult<Vec<BookingAudit>> {
        Ok(lock(&self.items)?.clone())
    }
}

#[derive(Default)]
pub struct MemoryLoginAuditRepo {
    items: Mutex<Vec<LoginAudit>>,
}

#[async_trait::async_trait]
impl LoginAuditRepo for MemoryLoginAuditRepo {
    async fn append(&self, audit: LoginAudit) -> CoreResult<LoginAudit> {
        lock(&self.items)?.push(audit.clone());
        Ok(audit)
    }

    async fn find_by_user_ref(&self, user_ref: &str) -> CoreResult<Vec<LoginAudit>> {
        Ok(lock(&self.items)?
            .iter()
            .filter(|a| a.user_ref == user_ref)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> CoreResult<Vec<LoginAudit>> {
        Ok(lock(&self.items)?.clone())
    }
}

// ---------------------------------------------------------------------------
// Credential verification
// ---------------------------------------------------------------------------

/// Verifier that compares the password with the stored value directly.
/// Test-only stand-in for the Argon2id verifier at the boundary.
pub struct PlainTextVerifier;

impl PasswordVerifier for PlainTextVerifier {
    fn verify(&self, password: &str, password_hash: &str) -> CoreResult<bool> {
        Ok(password == password_hash)
    }
}
