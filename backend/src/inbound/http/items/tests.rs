//! Tests for items API handlers.

use super::*;
use crate::domain::ports::{MockRecordRepository, RecordPersistenceError};
use crate::domain::{ItemChanges, RecordId, User};
use crate::inbound::http::test_utils::{mock_state, test_app};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const ITEM_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn lamp() -> Item {
    Item::from_parts(
        RecordId::parse(ITEM_ID).expect("fixture id"),
        "Desk lamp".to_owned(),
        Some("Brass".to_owned()),
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
            .single()
            .expect("fixture timestamp"),
    )
}

async fn call(
    items: MockRecordRepository<Item>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(mock_state(items, MockRecordRepository::<User>::new()))).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body_json(response).await;
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn list_returns_every_item(lamp: Item) {
    let mut items = MockRecordRepository::<Item>::new();
    items
        .expect_list_all()
        .returning(move || Ok(vec![lamp.clone()]));

    let (status, body) = call(items, actix_test::TestRequest::get().uri("/items")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": ITEM_ID,
            "name": "Desk lamp",
            "description": "Brass",
            "createdAt": "2024-05-01T09:30:00Z",
        }])
    );
}

#[rstest]
#[actix_web::test]
async fn list_reports_storage_failures_as_500() {
    let mut items = MockRecordRepository::<Item>::new();
    items
        .expect_list_all()
        .returning(|| Err(RecordPersistenceError::connection("connection refused")));

    let (status, body) = call(items, actix_test::TestRequest::get().uri("/items")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = body.get("error").and_then(Value::as_str).expect("error");
    assert!(message.contains("connection refused"));
}

#[rstest]
#[actix_web::test]
async fn create_assigns_id_and_default_timestamp() {
    let mut items = MockRecordRepository::<Item>::new();
    items
        .expect_insert()
        .times(1)
        .returning(|record: &Item| Ok(record.clone()));

    let before = Utc::now();
    let (status, body) = call(
        items,
        actix_test::TestRequest::post()
            .uri("/items")
            .set_json(json!({ "id": ITEM_ID, "name": "Desk lamp" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("name"), Some(&json!("Desk lamp")));
    assert!(body.get("description").is_none());
    let id = body.get("id").and_then(Value::as_str).expect("id");
    assert_ne!(id, ITEM_ID, "client ids are ignored");
    assert!(RecordId::parse(id).is_ok());
    let created_at: DateTime<Utc> = body
        .get("createdAt")
        .and_then(Value::as_str)
        .expect("createdAt")
        .parse()
        .expect("RFC 3339 timestamp");
    assert!(created_at >= before);
}

#[rstest]
#[actix_web::test]
async fn create_keeps_a_supplied_timestamp() {
    let mut items = MockRecordRepository::<Item>::new();
    items
        .expect_insert()
        .returning(|record: &Item| Ok(record.clone()));

    let (status, body) = call(
        items,
        actix_test::TestRequest::post().uri("/items").set_json(json!({
            "name": "Desk lamp",
            "createdAt": "2020-01-02T03:04:05Z",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("createdAt"), Some(&json!("2020-01-02T03:04:05Z")));
}

#[rstest]
#[case::missing(json!({ "description": "no name" }))]
#[case::null(json!({ "name": null }))]
#[case::empty(json!({ "name": "" }))]
#[actix_web::test]
async fn create_without_a_name_is_rejected(#[case] payload: Value) {
    let mut items = MockRecordRepository::<Item>::new();
    items.expect_insert().never();

    let (status, body) = call(
        items,
        actix_test::TestRequest::post().uri("/items").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("error"),
        Some(&json!("Item validation failed: name is required"))
    );
}

#[rstest]
#[actix_web::test]
async fn create_with_a_malformed_body_is_rejected() {
    let mut items = MockRecordRepository::<Item>::new();
    items.expect_insert().never();

    let (status, body) = call(
        items,
        actix_test::TestRequest::post()
            .uri("/items")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": "),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[rstest]
#[actix_web::test]
async fn update_applies_only_supplied_fields(lamp: Item) {
    let mut items = MockRecordRepository::<Item>::new();
    items
        .expect_update_by_id()
        .withf(|id, changes| {
            id.to_string() == ITEM_ID
                && *changes
                    == ItemChanges {
                        name: None,
                        description: Some(None),
                    }
        })
        .returning(move |_, changes| {
            let mut updated = lamp.clone();
            crate::domain::Record::apply(&mut updated, changes);
            Ok(Some(updated))
        });

    let (status, body) = call(
        items,
        actix_test::TestRequest::put()
            .uri(&format!("/items/{ITEM_ID}"))
            .set_json(json!({ "description": null, "createdAt": "1999-01-01T00:00:00Z" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("name"), Some(&json!("Desk lamp")));
    assert!(body.get("description").is_none());
    assert_eq!(body.get("createdAt"), Some(&json!("2024-05-01T09:30:00Z")));
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_item_is_not_found() {
    let mut items = MockRecordRepository::<Item>::new();
    items.expect_update_by_id().returning(|_, _| Ok(None));

    let (status, body) = call(
        items,
        actix_test::TestRequest::put()
            .uri(&format!("/items/{ITEM_ID}"))
            .set_json(json!({ "name": "Floor lamp" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.get("error"), Some(&json!("Item not found")));
}

#[rstest]
#[actix_web::test]
async fn update_cannot_empty_the_name() {
    let mut items = MockRecordRepository::<Item>::new();
    items.expect_update_by_id().never();

    let (status, body) = call(
        items,
        actix_test::TestRequest::put()
            .uri(&format!("/items/{ITEM_ID}"))
            .set_json(json!({ "name": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body.get("error"),
        Some(&json!("Item validation failed: name is required"))
    );
}

#[rstest]
#[case::update(actix_test::TestRequest::put().uri("/items/not-a-uuid").set_json(json!({ "name": "x" })))]
#[case::delete(actix_test::TestRequest::delete().uri("/items/not-a-uuid"))]
#[actix_web::test]
async fn malformed_ids_are_internal_errors(#[case] request: actix_test::TestRequest) {
    let (status, body) = call(MockRecordRepository::<Item>::new(), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some());
}

#[rstest]
#[case(true, StatusCode::OK, json!({ "message": "Item removed" }))]
#[case(false, StatusCode::NOT_FOUND, json!({ "error": "Item not found" }))]
#[actix_web::test]
async fn delete_reports_outcome(
    #[case] existed: bool,
    #[case] expected_status: StatusCode,
    #[case] expected_body: Value,
) {
    let mut items = MockRecordRepository::<Item>::new();
    items
        .expect_delete_by_id()
        .times(1)
        .returning(move |_| Ok(existed));

    let (status, body) = call(
        items,
        actix_test::TestRequest::delete().uri(&format!("/items/{ITEM_ID}")),
    )
    .await;

    assert_eq!(status, expected_status);
    let key = if existed { "message" } else { "error" };
    assert_eq!(body.get(key), expected_body.get(key));
}

#[rstest]
#[case::no_body(actix_test::TestRequest::put().uri(&format!("/items/{ITEM_ID}")))]
#[case::plain_text(
    actix_test::TestRequest::put()
        .uri(&format!("/items/{ITEM_ID}"))
        .insert_header(("content-type", "text/plain"))
        .set_payload("name=Ghost")
)]
#[actix_web::test]
async fn update_without_a_json_body_changes_nothing(lamp: Item, #[case] request: actix_test::TestRequest) {
    let mut items = MockRecordRepository::<Item>::new();
    items
        .expect_update_by_id()
        .withf(|_, changes| *changes == ItemChanges::default())
        .returning(move |_, _| Ok(Some(lamp.clone())));

    let (status, body) = call(items, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.get("name"), Some(&json!("Desk lamp")));
    assert_eq!(body.get("description"), Some(&json!("Brass")));
}
