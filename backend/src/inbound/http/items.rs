//! Items API handlers.
//!
//! ```text
//! GET    /items
//! POST   /items       {"name":"Desk lamp","description":"Brass"}
//! PUT    /items/{id}  {"description":null}
//! DELETE /items/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Item, ItemDraft, ItemPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::records::{self, Removed, present};
use crate::inbound::http::state::HttpState;

/// Create body for `POST /items`. A client-supplied `id` is ignored.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[schema(example = "Desk lamp")]
    pub name: Option<String>,
    pub description: Option<String>,
    /// Defaults to the time of creation.
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<CreateItemRequest> for ItemDraft {
    fn from(value: CreateItemRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
            created_at: value.created_at,
        }
    }
}

/// Update body for `PUT /items/{id}`.
///
/// Only `name` and `description` are updatable; `null` clears `description`
/// and is rejected for `name`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(value: UpdateItemRequest) -> Self {
        Self {
            name: value.name,
            description: value.description,
        }
    }
}

/// List every item.
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All items", body = [crate::inbound::http::schemas::ItemSchema]),
        (status = 500, description = "Storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listItems"
)]
#[get("/items")]
pub async fn list_items(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    records::list(&state.items).await
}

/// Create an item.
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Created item", body = crate::inbound::http::schemas::ItemSchema),
        (status = 400, description = "Missing name or malformed JSON", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    payload: web::Json<CreateItemRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    debug!(body = ?payload, "create item");
    records::create(&state.items, ItemDraft::from(payload)).await
}

/// Partially update an item.
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = String, Path, description = "Item identifier (UUID)")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Updated item", body = crate::inbound::http::schemas::ItemSchema),
        (status = 400, description = "Name emptied or malformed JSON", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such item", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Malformed id or storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[put("/items/{id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let payload: UpdateItemRequest = records::patch_body(&req, &body)?;
    records::update(&state.items, &id, ItemPatch::from(payload)).await
}

/// Delete an item.
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = String, Path, description = "Item identifier (UUID)")),
    responses(
        (status = 200, description = "Item removed", body = crate::inbound::http::schemas::RemovedSchema),
        (status = 404, description = "No such item", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Malformed id or storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Removed>> {
    records::delete::<Item>(&state.items, &id).await
}

#[cfg(test)]
mod tests;
