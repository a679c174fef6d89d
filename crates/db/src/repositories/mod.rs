//! PostgreSQL adapters for the `lineup-core` repository traits.

mod audit_repo;
mod booking_repo;
mod customer_repo;
mod queue_entry_repo;
mod service_line_repo;
mod shop_repo;

pub use audit_repo::{PgBookingAuditRepo, PgLoginAuditRepo};
pub use booking_repo::PgBookingRepo;
pub use customer_repo::PgCustomerRepo;
pub use queue_entry_repo::PgQueueEntryRepo;
pub use service_line_repo::PgServiceLineRepo;
pub use shop_repo::PgShopRepo;
