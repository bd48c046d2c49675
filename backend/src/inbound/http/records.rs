//! Handler plumbing shared by every record kind.
//!
//! The per-kind modules only declare routes and body shapes; the CRUD
//! contract itself lives here so items and users cannot drift apart.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, mime, web};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Error, Record, RecordGateway, RecordId, Removal};
use crate::inbound::http::ApiResult;

/// Body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removed {
    pub message: String,
}

impl Removed {
    pub fn of<R: Record>() -> Self {
        Self {
            message: format!("{} removed", R::KIND),
        }
    }
}

/// `404` for a missing record of kind `R`.
pub fn not_found<R: Record>() -> Error {
    Error::not_found(format!("{} not found", R::KIND))
}

/// Parse an `{id}` path segment.
///
/// A malformed identifier is not a validation failure and maps to `500`.
pub fn parse_id(raw: &str) -> Result<RecordId, Error> {
    RecordId::parse(raw).map_err(|err| Error::internal(err.to_string()))
}

/// Deserialise a field that may be absent, `null`, or a value.
///
/// Use with `#[serde(default, deserialize_with = "present")]`; absence leaves
/// the outer `Option` as `None`.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Decode an update body.
///
/// An empty body, or one not declared as JSON, is an empty patch and leaves
/// the record unchanged. A JSON body that does not parse is a `400`.
pub fn patch_body<T>(req: &HttpRequest, body: &[u8]) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    let is_json = matches!(
        req.mime_type(),
        Ok(Some(ty)) if ty.subtype() == mime::JSON || ty.suffix() == Some(mime::JSON)
    );
    if body.is_empty() || !is_json {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|err| Error::invalid_request(format!("invalid JSON body: {err}")))
}

pub(crate) async fn list<R>(gateway: &RecordGateway<R>) -> ApiResult<HttpResponse>
where
    R: Record + Serialize,
{
    let records = gateway.list_all().await?;
    Ok(HttpResponse::Ok().json(records))
}

pub(crate) async fn create<R>(gateway: &RecordGateway<R>, draft: R::Draft) -> ApiResult<HttpResponse>
where
    R: Record + Serialize,
{
    let record = gateway.insert(draft).await?;
    Ok(HttpResponse::Created().json(record))
}

pub(crate) async fn update<R>(
    gateway: &RecordGateway<R>,
    raw_id: &str,
    patch: R::Patch,
) -> ApiResult<HttpResponse>
where
    R: Record + Serialize,
{
    let id = parse_id(raw_id)?;
    match gateway.update_by_id(&id, patch).await? {
        Some(record) => Ok(HttpResponse::Ok().json(record)),
        None => Err(not_found::<R>()),
    }
}

pub(crate) async fn delete<R>(gateway: &RecordGateway<R>, raw_id: &str) -> ApiResult<web::Json<Removed>>
where
    R: Record,
{
    let id = parse_id(raw_id)?;
    match gateway.delete_by_id(&id).await? {
        Removal::Removed => Ok(web::Json(Removed::of::<R>())),
        Removal::NotFound => Err(not_found::<R>()),
    }
}
