//! Handlers for the `/shops` resource and its nested service lines.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use lineup_core::error::CoreError;
use lineup_core::shop::{CreateServiceLine, CreateShop, ServiceLine, Shop};
use lineup_core::types::EntityId;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /api/shops`.
#[derive(Debug, Deserialize)]
pub struct ShopListQuery {
    pub category: Option<String>,
}

/// GET /api/shops
///
/// With `?category=`, returns only shops in that category.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ShopListQuery>,
) -> AppResult<Json<Vec<Shop>>> {
    let shops = match params.category.as_deref() {
        Some(category) => state.services.registry.find_shops_by_category(category).await?,
        None => state.services.registry.list_shops().await?,
    };
    Ok(Json(shops))
}

/// GET /api/shops/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Shop>> {
    let shop = state
        .services
        .registry
        .get_shop(id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Shop", id })?;
    Ok(Json(shop))
}

/// POST /api/shops
///
/// Embedded service lines, if any, are persisted along with the shop.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateShop>,
) -> AppResult<(StatusCode, Json<Shop>)> {
    let shop = state.services.registry.create_shop(input).await?;
    Ok((StatusCode::CREATED, Json(shop)))
}

/// DELETE /api/shops/{id}
///
/// Cascades to the shop's service lines.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.services.registry.delete_shop(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/shops/{id}/service-lines
pub async fn service_lines(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Vec<ServiceLine>>> {
    Ok(Json(state.services.registry.service_lines_by_shop(id).await?))
}

/// POST /api/shops/{id}/service-lines
///
/// 404 when the shop does not exist; the service line is not persisted in
/// that case.
pub async fn add_service_line(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(input): Json<CreateServiceLine>,
) -> AppResult<(StatusCode, Json<ServiceLine>)> {
    let line = state.services.registry.add_service_line(id, input).await?;
    Ok((StatusCode::CREATED, Json(line)))
}
