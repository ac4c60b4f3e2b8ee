use actix_web::{
    body::BoxBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::StatusCode,
    test,
    test::TestRequest,
    web,
    App,
    Error,
};
use airtable_tools::AirtableApiError;
use order_bridge_engine::{OrderProcessorApi, StoredRecord, TableConfig};
use serde_json::json;

use super::mocks::MockStore;
use crate::{data_objects::JsonResponse, errors::ServerError, routes::orders_create_webhook};

fn test_app(
    store: MockStore,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<BoxBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let processor = OrderProcessorApi::new(store, TableConfig::default());
    let json_config =
        web::JsonConfig::default().error_handler(|err, _req| ServerError::InvalidRequestBody(err.to_string()).into());
    App::new()
        .app_data(web::Data::new(processor))
        .app_data(json_config)
        .route("/webhook/orders_create", web::post().to(orders_create_webhook::<MockStore>))
}

async fn post_order(store: MockStore, body: serde_json::Value) -> (StatusCode, JsonResponse) {
    let service = test::init_service(test_app(store)).await;
    let req = TestRequest::post().uri("/webhook/orders_create").set_json(&body).to_request();
    let res = test::call_service(&service, req).await;
    let status = res.status();
    let body: JsonResponse = test::read_body_json(res).await;
    (status, body)
}

#[actix_web::test]
async fn processed_order_returns_success() {
    let _ = env_logger::try_init().ok();
    let mut store = MockStore::new();
    store.expect_create_record().times(2).returning(|table, _| {
        let id = if table == "Orders" { "recORDER00000X" } else { "recITEM000000X" };
        Ok(StoredRecord { id: id.to_string() })
    });
    let body = json!({
        "order_number": 1001,
        "email": "bob.norman@mail.example.com",
        "total_price": "19.99",
        "line_items": [{ "name": "Cap", "price": "19.99", "quantity": 1 }]
    });
    let (status, response) = post_order(store, body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(response.success);
    assert!(response.message.contains("1001"));
}

#[actix_web::test]
async fn unmappable_order_is_a_500_and_never_hits_the_store() {
    let _ = env_logger::try_init().ok();
    let mut store = MockStore::new();
    store.expect_create_record().times(0);
    let body = json!({ "email": "nobody@example.com" });
    let (status, response) = post_order(store, body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.success);
}

#[actix_web::test]
async fn store_rejection_is_a_500_with_the_store_message() {
    let _ = env_logger::try_init().ok();
    let mut store = MockStore::new();
    store.expect_create_record().times(1).returning(|_, _| {
        Err(AirtableApiError::QueryError { status: 422, message: "Unknown field name: \"Order ID\"".to_string() })
    });
    let body = json!({ "order_number": 1001 });
    let (status, response) = post_order(store, body).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!response.success);
    assert!(response.message.contains("Unknown field name"));
}

#[actix_web::test]
async fn malformed_body_is_a_400() {
    let _ = env_logger::try_init().ok();
    let service = test::init_service(test_app(MockStore::new())).await;
    let req = TestRequest::post()
        .uri("/webhook/orders_create")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{ this is not json")
        .to_request();
    let err = test::try_call_service(&service, req).await.expect_err("Expected a deserialization failure");
    assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
}
