//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP path and the schema wrappers from
//! [`crate::inbound::http::schemas`]. Swagger UI serves it at `/docs` in
//! debug builds.

use crate::inbound::http::items::{CreateItemRequest, UpdateItemRequest};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, ItemSchema, RemovedSchema, UserSchema,
};
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items and users API",
        description = "CRUD over items and users with required-field validation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::root,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
    ),
    components(schemas(
        ItemSchema,
        UserSchema,
        ErrorSchema,
        ErrorCodeSchema,
        RemovedSchema,
        CreateItemRequest,
        UpdateItemRequest,
        CreateUserRequest,
        UpdateUserRequest,
    )),
    tags(
        (name = "items", description = "Item records"),
        (name = "users", description = "User records"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;
