//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{Item, ItemRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ItemId, ValidJson};
use crate::http::server::AppState;
use crate::models::ItemName;

/// Create/update request body
#[derive(Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: Option<String>,
}

/// Item response
#[derive(Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

/// Delete confirmation response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /items - list all items
async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = ItemRepo::new(&state.pool).list_all().await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /items/{id} - get a single item
async fn get_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = ItemRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or(ApiError::NotFound { resource: "Item" })?;

    Ok(Json(ItemResponse::from(item)))
}

/// POST /items - create a new item
async fn create_item(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<ItemPayload>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let name = ItemName::new(&payload.name)?;
    let item = ItemRepo::new(&state.pool)
        .create(name, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

/// PUT /items/{id} - overwrite name/description of an existing item
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
    ValidJson(payload): ValidJson<ItemPayload>,
) -> Result<Json<ItemResponse>, ApiError> {
    let name = ItemName::new(&payload.name)?;
    let item = ItemRepo::new(&state.pool)
        .update(id, name, payload.description)
        .await?
        .ok_or(ApiError::NotFound { resource: "Item" })?;

    Ok(Json(ItemResponse::from(item)))
}

/// DELETE /items/{id} - remove an item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId(id): ItemId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let deleted = ItemRepo::new(&state.pool).delete(id).await?;
    if !deleted {
        return Err(ApiError::NotFound { resource: "Item" });
    }

    Ok(Json(DeleteResponse {
        message: "Item deleted successfully",
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
}
