//! # REST API for Item Management
//!
//! Endpoints for listing, creating, retrieving, updating, and deleting items.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use tracing::info;

use super::error::ApiError;
use super::mappers::item_mapper::ItemMapper;
use super::validation::{ItemBody, ItemId};
use crate::AppState;

/// List all items
pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    info!("GET /items/");

    let items = state.item_service.list_items()?;
    Ok(Json(ItemMapper::to_dto_list(items)))
}

/// Get an item by ID
pub async fn get_item(
    State(state): State<AppState>,
    ItemId(item_id): ItemId,
) -> Result<impl IntoResponse, ApiError> {
    info!("GET /items/{}", item_id);

    let item = state.item_service.get_item(item_id)?;
    Ok(Json(ItemMapper::to_dto(item)))
}

/// Create a new item
pub async fn create_item(
    State(state): State<AppState>,
    ItemBody(body): ItemBody,
) -> Result<impl IntoResponse, ApiError> {
    info!("POST /items/ - request: {:?}", body);

    let item = state
        .item_service
        .create_item(ItemMapper::to_create_command(body))?;
    Ok((StatusCode::CREATED, Json(ItemMapper::to_dto(item))))
}

/// Replace an existing item
pub async fn update_item(
    State(state): State<AppState>,
    ItemId(item_id): ItemId,
    ItemBody(body): ItemBody,
) -> Result<impl IntoResponse, ApiError> {
    info!("PUT /items/{} - request: {:?}", item_id, body);

    let item = state
        .item_service
        .update_item(ItemMapper::to_update_command(item_id, body))?;
    Ok(Json(ItemMapper::to_dto(item)))
}

/// Delete an item
pub async fn delete_item(
    State(state): State<AppState>,
    ItemId(item_id): ItemId,
) -> Result<impl IntoResponse, ApiError> {
    info!("DELETE /items/{}", item_id);

    state.item_service.delete_item(item_id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for paths that match no route
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
