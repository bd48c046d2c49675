//! Users API handlers.
//!
//! ```text
//! GET    /users
//! POST   /users       {"username":"ada","email":"ada@example.com"}
//! PUT    /users/{id}  {"email":"ada@analytical.engine"}
//! DELETE /users/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{User, UserDraft, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::records::{self, Removed, present};
use crate::inbound::http::state::HttpState;

/// Create body for `POST /users`.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            username: value.username,
            email: value.email,
        }
    }
}

/// Update body for `PUT /users/{id}`; both fields stay required.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub username: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(value: UpdateUserRequest) -> Self {
        Self {
            username: value.username,
            email: value.email,
        }
    }
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [crate::inbound::http::schemas::UserSchema]),
        (status = 500, description = "Storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    records::list(&state.users).await
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Created user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Missing username or email", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    debug!(body = ?payload, "create user");
    records::create(&state.users, UserDraft::from(payload)).await
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = crate::inbound::http::schemas::UserSchema),
        (status = 400, description = "Required field emptied", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Malformed id or storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    req: HttpRequest,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let payload: UpdateUserRequest = records::patch_body(&req, &body)?;
    records::update(&state.users, &id, UserPatch::from(payload)).await
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User removed", body = crate::inbound::http::schemas::RemovedSchema),
        (status = 404, description = "No such user", body = crate::inbound::http::schemas::ErrorSchema),
        (status = 500, description = "Malformed id or storage failure", body = crate::inbound::http::schemas::ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Removed>> {
    records::delete::<User>(&state.users, &id).await
}
