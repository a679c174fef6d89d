use std::sync::Arc;

use lineup_core::audit::AuditRecorder;
use lineup_core::auth::AuthGateway;
use lineup_core::booking::BookingLifecycle;
use lineup_core::customer::{CustomerDirectory, CustomerRepo};
use lineup_core::memory;
use lineup_core::queue::{QueueEngine, QueueEntryRepo};
use lineup_core::shop::ShopRegistry;
use lineup_db::repositories::{
    PgBookingAuditRepo, PgBookingRepo, PgCustomerRepo, PgLoginAuditRepo, PgQueueEntryRepo,
    PgServiceLineRepo, PgShopRepo,
};
use lineup_db::DbPool;

use crate::auth::password::Argon2Verifier;
use crate::config::ServerConfig;

/// The service components, wired once at process start and shared by
/// reference. There is no ambient lookup: every handler reaches its service
/// through this struct.
#[derive(Clone)]
pub struct Services {
    pub directory: Arc<CustomerDirectory>,
    pub registry: Arc<ShopRegistry>,
    pub bookings: Arc<BookingLifecycle>,
    pub queue: Arc<QueueEngine>,
    pub audit: Arc<AuditRecorder>,
    pub auth: Arc<AuthGateway>,
}

impl Services {
    /// Wire all services against PostgreSQL-backed repositories.
    pub fn postgres(pool: DbPool) -> Self {
        let customers: Arc<dyn CustomerRepo> = Arc::new(PgCustomerRepo::new(pool.clone()));
        let queue_entries: Arc<dyn QueueEntryRepo> =
            Arc::new(PgQueueEntryRepo::new(pool.clone()));
        let audit = Arc::new(AuditRecorder::new(
            Arc::new(PgLoginAuditRepo::new(pool.clone())),
            Arc::new(PgBookingAuditRepo::new(pool.clone())),
        ));

        Self {
            directory: Arc::new(CustomerDirectory::new(Arc::clone(&customers))),
            registry: Arc::new(ShopRegistry::new(
                Arc::new(PgShopRepo::new(pool.clone())),
                Arc::new(PgServiceLineRepo::new(pool.clone())),
                Arc::clone(&queue_entries),
            )),
            bookings: Arc::new(BookingLifecycle::new(
                Arc::new(PgBookingRepo::new(pool)),
                Arc::clone(&audit),
            )),
            queue: Arc::new(QueueEngine::new(queue_entries)),
            auth: Arc::new(AuthGateway::new(
                customers,
                Arc::clone(&audit),
                Arc::new(Argon2Verifier),
            )),
            audit,
        }
    }

    /// Wire all services against in-memory repositories.
    ///
    /// Used by the integration tests; also handy for running the server
    /// without a database.
    pub fn in_memory() -> Self {
        let customers: Arc<dyn CustomerRepo> = Arc::new(memory::MemoryCustomerRepo::default());
        let queue_entries: Arc<dyn QueueEntryRepo> =
            Arc::new(memory::MemoryQueueEntryRepo::default());
        let audit = Arc::new(AuditRecorder::new(
            Arc::new(memory::MemoryLoginAuditRepo::default()),
            Arc::new(memory::MemoryBookingAuditRepo::default()),
        ));

        Self {
            directory: Arc::new(CustomerDirectory::new(Arc::clone(&customers))),
            registry: Arc::new(ShopRegistry::new(
                Arc::new(memory::MemoryShopRepo::default()),
                Arc::new(memory::MemoryServiceLineRepo::default()),
                Arc::clone(&queue_entries),
            )),
            bookings: Arc::new(BookingLifecycle::new(
                Arc::new(memory::MemoryBookingRepo::default()),
                Arc::clone(&audit),
            )),
            queue: Arc::new(QueueEngine::new(queue_entries)),
            auth: Arc::new(AuthGateway::new(
                customers,
                Arc::clone(&audit),
                Arc::new(Argon2Verifier),
            )),
            audit,
        }
    }
}

/// Shared application state available to all axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub services: Services,
}
