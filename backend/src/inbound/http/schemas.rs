//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and exist only for documentation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing or the body is not valid JSON.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No record has the requested identifier.
    #[schema(rename = "not_found")]
    NotFound,
    /// Storage failure, malformed identifier, or any other fault.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Human-readable message.
    #[schema(example = "Item validation failed: name is required")]
    error: String,
    code: ErrorCodeSchema,
    /// Identifier also returned in the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Item`].
#[derive(ToSchema)]
#[schema(as = Item, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ItemSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "Desk lamp")]
    name: String,
    description: Option<String>,
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T09:30:00Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "ada")]
    username: String,
    #[schema(example = "ada@example.com")]
    email: String,
}

/// Body of a successful delete.
#[derive(ToSchema)]
#[schema(as = Removed)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct RemovedSchema {
    #[schema(example = "Item removed")]
    message: String,
}
