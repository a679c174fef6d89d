//! Handlers for the `/bookings` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lineup_core::booking::{Booking, CreateBooking};
use lineup_core::error::CoreError;
use lineup_core::types::EntityId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub customer_id: Option<EntityId>,
    pub shop_id: Option<EntityId>,
}

/// Request body for `PUT /api/bookings/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// GET /api/bookings
///
/// `?customerId=` and `?shopId=` narrow the listing; customer takes
/// precedence when both are present.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<BookingListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = if let Some(customer_id) = params.customer_id {
        state.services.bookings.by_customer(customer_id).await?
    } else if let Some(shop_id) = params.shop_id {
        state.services.bookings.by_shop(shop_id).await?
    } else {
        state.services.bookings.list().await?
    };
    Ok(Json(bookings))
}

/// GET /api/bookings/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .services
        .bookings
        .get(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Booking",
            id,
        })?;
    Ok(Json(booking))
}

/// POST /api/bookings
///
/// The created booking always comes back with status `confirmed`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(input).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// PUT /api/bookings/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<StatusUpdate>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .services
        .bookings
        .update_status(id, input.status)
        .await?;
    Ok(Json(booking))
}
