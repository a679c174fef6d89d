//! Handlers for the `/customers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lineup_core::customer::{CreateCustomer, Customer, Role, UpdateCustomer};
use lineup_core::error::CoreError;
use lineup_core::types::EntityId;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/customers`.
///
/// Carries the plaintext password; it is hashed here at the boundary and the
/// core only ever sees the hash.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub password: String,
    pub role: Role,
}

/// GET /api/customers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    Ok(Json(state.services.directory.list().await?))
}

/// GET /api/customers/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<Customer>> {
    let customer = state
        .services
        .directory
        .get(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Customer",
            id,
        })?;
    Ok(Json(customer))
}

/// POST /api/customers
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("password hashing error: {e}")))?;

    let customer = state
        .services
        .directory
        .create(CreateCustomer {
            name: input.name,
            email: input.email,
            phone: input.phone,
            password_hash,
            role: input.role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// PUT /api/customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(details): Json<UpdateCustomer>,
) -> AppResult<Json<Customer>> {
    let customer = state
        .services
        .directory
        .update(id, details)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Customer",
            id,
        })?;
    Ok(Json(customer))
}

/// DELETE /api/customers/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.services.directory.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
