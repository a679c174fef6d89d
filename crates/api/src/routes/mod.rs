//! Route definitions.
//!
//! Route hierarchy:
//!
//! ```text
//! /health                                          health check
//!
//! /api/auth/login                                  login (POST)
//!
//! /api/customers                                   list, create
//! /api/customers/{id}                              get, update, delete
//!
//! /api/shops                                       list (?category=), create
//! /api/shops/{id}                                  get, delete
//! /api/shops/{id}/service-lines                    list, add
//!
//! /api/bookings                                    list (?customerId= ?shopId=), create
//! /api/bookings/{id}                               get
//! /api/bookings/{id}/status                        update status (PUT)
//!
//! /api/queue-entries                               list, create
//! /api/queue-entries/{id}                          get, update, delete
//! /api/queue-entries/service-line/{serviceLineId}  entries for a line
//! /api/queue-entries/user/{userId}                 entries for a user
//!
//! /api/audits/login                                login audit trail (?userId=)
//! /api/audits/booking                              booking audit trail (?bookingId=)
//! ```

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the root-level health router.
pub fn health_router() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the `/api` route tree.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_router())
        .nest("/customers", customers_router())
        .nest("/shops", shops_router())
        .nest("/bookings", bookings_router())
        .nest("/queue-entries", queue_entries_router())
        .nest("/audits", audits_router())
}

fn auth_router() -> Router<AppState> {
    Router::new().route("/login", post(handlers::auth::login))
}

fn customers_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::customers::list).post(handlers::customers::create),
        )
        .route(
            "/{id}",
            get(handlers::customers::get)
                .put(handlers::customers::update)
                .delete(handlers::customers::delete),
        )
}

fn shops_router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::shops::list).post(handlers::shops::create))
        .route(
            "/{id}",
            get(handlers::shops::get).delete(handlers::shops::delete),
        )
        .route(
            "/{id}/service-lines",
            get(handlers::shops::service_lines).post(handlers::shops::add_service_line),
        )
}

fn bookings_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::bookings::list).post(handlers::bookings::create),
        )
        .route("/{id}", get(handlers::bookings::get))
        .route("/{id}/status", put(handlers::bookings::update_status))
}

fn queue_entries_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::queue_entries::list).post(handlers::queue_entries::create),
        )
        .route(
            "/service-line/{serviceLineId}",
            get(handlers::queue_entries::by_service_line),
        )
        .route("/user/{userId}", get(handlers::queue_entries::by_user))
        .route(
            "/{id}",
            get(handlers::queue_entries::get)
                .put(handlers::queue_entries::update)
                .delete(handlers::queue_entries::delete),
        )
}

fn audits_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(handlers::audits::login_audits))
        .route("/booking", get(handlers::audits::booking_audits))
}
