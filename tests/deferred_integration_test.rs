//! End-to-end tests for the deferred-payment client against a stub server.

use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use gmo_clients::{
    deferred::{Buyer, DeferredClient, Delivery, DeliveryCustomer, Detail, RegisterRequest, ShopInfo},
    error::ClientError,
};

fn sample_request() -> RegisterRequest {
    RegisterRequest {
        shop_info: ShopInfo {
            shop_id: "shop-123".to_owned(),
            connect_password: "secret".to_owned(),
        },
        buyer: Buyer {
            shop_transaction_id: "tx-0001".to_owned(),
            shop_order_date: "2023-08-01".to_owned(),
            full_name: "山田太郎".to_owned(),
            billed_amount: "10000".to_owned(),
            ..Default::default()
        },
        deliveries: vec![Delivery {
            delivery_customer: None,
            details: vec![Detail {
                detail_name: "書籍".to_owned(),
                detail_price: "2500".to_owned(),
                detail_quantity: "4".to_owned(),
                ..Default::default()
            }],
        }],
    }
}

#[tokio::test]
async fn test_register_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "OK",
            "errors": [],
            "transactionResult": {
                "shopTransactionId": "tx-0001",
                "gmoTransactionId": "gmo-9999",
                "authorResult": "1"
            }
        })))
        .mount(&server)
        .await;

    let client = DeferredClient::with_base_url(&server.uri()).unwrap();
    let response = client.register(&sample_request()).await.unwrap();

    assert_eq!(response.result, "OK");
    assert!(response.errors.is_empty());
    let result = response.transaction_result.unwrap();
    assert_eq!(result.shop_transaction_id, "tx-0001");
    assert_eq!(result.gmo_transaction_id, "gmo-9999");
}

#[tokio::test]
async fn test_register_body_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "OK"})))
        .mount(&server)
        .await;

    let client = DeferredClient::with_base_url(&server.uri()).unwrap();
    client.register(&sample_request()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["shopInfo"]["shopId"], "shop-123");
    assert_eq!(body["buyer"]["shopTransactionId"], "tx-0001");
    assert_eq!(body["buyer"]["billedAmount"], "10000");
    assert_eq!(body["deliveries"][0]["details"][0]["detailName"], "書籍");
    // Absent recipient means no key at all, not a null.
    assert!(body["deliveries"][0].get("deliveryCustomer").is_none());
}

#[tokio::test]
async fn test_register_encodes_recipient_and_empty_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "OK"})))
        .mount(&server)
        .await;

    let mut request = sample_request();
    request.deliveries = vec![Delivery {
        delivery_customer: Some(DeliveryCustomer {
            full_name: "山田花子".to_owned(),
            tel: "0398765432".to_owned(),
            ..Default::default()
        }),
        details: vec![],
    }];

    let client = DeferredClient::with_base_url(&server.uri()).unwrap();
    client.register(&request).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["deliveries"][0]["deliveryCustomer"]["fullName"], "山田花子");
    // An empty line-item list is sent explicitly.
    assert_eq!(body["deliveries"][0]["details"], json!([]));
}

#[tokio::test]
async fn test_register_rejection_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/register"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "NG",
            "errors": [
                {"errorCode": "E01050002", "errorMessage": "billed amount over limit"},
                {"errorCode": "E01100001", "errorMessage": "zip code malformed"}
            ]
        })))
        .mount(&server)
        .await;

    let client = DeferredClient::with_base_url(&server.uri()).unwrap();
    let response = client.register(&sample_request()).await.unwrap();

    assert_eq!(response.result, "NG");
    assert_eq!(response.errors.len(), 2);
    assert_eq!(response.errors[0].error_code, "E01050002");
    assert_eq!(response.errors[0].error_message, "billed amount over limit");
    assert!(response.transaction_result.is_none());
}

#[tokio::test]
async fn test_register_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/register"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let client = DeferredClient::with_base_url(&server.uri()).unwrap();
    let err = client.register(&sample_request()).await.unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/order/register"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = DeferredClient::with_base_url(&server.uri()).unwrap();
    let err = client.register(&sample_request()).await.unwrap_err();
    assert!(matches!(err, ClientError::Decode(_)));
}
