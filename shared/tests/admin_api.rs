mod common;

use common::{api, MemoryTokens, BASE_URL};
use kofi_admin_shared::http::{FormPart, Method, RequestBody};
use kofi_admin_shared::api::QUOTE_REQUIRED;
use kofi_admin_shared::lifecycle::{parse_quote, OrderStatus, StatusAction};
use kofi_admin_shared::orders::OrderFilter;
use kofi_admin_shared::{ApiError, CreateOrderRequest};
use rust_decimal::Decimal;
use serde_json::json;

fn order_json(status: &str) -> serde_json::Value {
    json!({
        "_id": "65f1c2a9e4b0a1b2c3d4ab9f",
        "clientProfile": { "fullName": "Selam Tesfaye" },
        "status": status,
        "basePrice": 12500
    })
}

#[test]
fn test_login_with_valid_credentials_stores_token() {
    let tokens = MemoryTokens::default();
    let api = api(tokens.clone());
    api.http().transport().reply(200, json!({ "success": true, "token": "jwt-123" }));

    let credentials = kofi_admin_shared::api::Credentials {
        email: "admin@kofidesign.com".into(),
        password: "correct".into(),
    };
    tokio_test::block_on(api.login(&credentials)).unwrap();

    assert_eq!(tokens.current().as_deref(), Some("jwt-123"));
    let sent = api.http().transport().last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, format!("{}/admin/login", BASE_URL));
    assert_eq!(sent.body, RequestBody::Json(json!({ "email": "admin@kofidesign.com", "password": "correct" })));
}

#[test]
fn test_login_with_invalid_credentials_leaves_storage_alone() {
    let tokens = MemoryTokens::default();
    let api = api(tokens.clone());
    api.http()
        .transport()
        .reply(200, json!({ "success": false, "message": "Invalid credentials" }));

    let credentials = kofi_admin_shared::api::Credentials {
        email: "admin@kofidesign.com".into(),
        password: "wrong".into(),
    };
    let err = tokio_test::block_on(api.login(&credentials)).unwrap_err();

    assert_eq!(err.message_or("Login failed"), "Invalid credentials");
    assert_eq!(tokens.current(), None);
}

#[test]
fn test_success_without_token_is_not_a_login() {
    let tokens = MemoryTokens::default();
    let api = api(tokens.clone());
    api.http().transport().reply(200, json!({ "success": true }));

    let credentials = kofi_admin_shared::api::Credentials {
        email: "a@b.c".into(),
        password: "x".into(),
    };
    let err = tokio_test::block_on(api.login(&credentials)).unwrap_err();
    assert_eq!(err.code(), "PARSE_ERROR");
    assert_eq!(tokens.current(), None);
}

#[test]
fn test_requests_carry_bearer_token() {
    let api = api(MemoryTokens::with("jwt-9"));
    api.http()
        .transport()
        .reply(200, json!({ "success": true, "admin": { "secretQuestion": "First pet?" } }));

    let profile = tokio_test::block_on(api.me()).unwrap();

    assert!(profile.has_security_question());
    assert_eq!(api.http().transport().last().header("Authorization"), Some("Bearer jwt-9"));
}

#[test]
fn test_unauthorized_guarded_call_clears_token() {
    let tokens = MemoryTokens::with("expired");
    let api = api(tokens.clone());
    api.http()
        .transport()
        .reply(401, json!({ "success": false, "message": "Token expired" }));

    let err = tokio_test::block_on(api.dashboard_stats()).unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(tokens.current(), None);
}

#[test]
fn test_recovery_401_keeps_token() {
    let tokens = MemoryTokens::with("still-valid");
    let api = api(tokens.clone());
    api.http()
        .transport()
        .reply(401, json!({ "success": false, "message": "Incorrect answer" }));

    let request = kofi_admin_shared::api::ResetPasswordRequest {
        email: "admin@kofidesign.com".into(),
        secret_answer: "cat".into(),
        new_password: "n3w".into(),
    };
    let err = tokio_test::block_on(api.reset_password(&request)).unwrap_err();

    assert_eq!(err.server_message(), Some("Incorrect answer"));
    assert_eq!(tokens.current().as_deref(), Some("still-valid"));
}

#[test]
fn test_orders_query_per_filter() {
    let api = api(MemoryTokens::with("t"));
    let transport = api.http().transport();
    let page = json!({ "success": true, "data": [order_json("paid")], "meta": { "total": 31 } });
    transport.reply(200, page.clone()).reply(200, page.clone()).reply(200, page);

    let result = tokio_test::block_on(api.orders(2, 10, OrderFilter::Rush)).unwrap();
    assert_eq!(result.total, 31);
    assert_eq!(result.items[0].display_id(), "#KD-AB9F");
    assert_eq!(transport.last().url, format!("{}/orders?page=2&limit=10&rush=true", BASE_URL));

    tokio_test::block_on(api.orders(1, 10, OrderFilter::Pending)).unwrap();
    assert_eq!(transport.last().url, format!("{}/orders?page=1&limit=10&status=Pending", BASE_URL));

    tokio_test::block_on(api.orders(1, 10, OrderFilter::All)).unwrap();
    assert_eq!(transport.last().url, format!("{}/orders?page=1&limit=10", BASE_URL));
}

#[test]
fn test_clients_use_pagination_totals() {
    let api = api(MemoryTokens::with("t"));
    api.http().transport().reply(
        200,
        json!({
            "success": true,
            "data": [{ "_id": "u1", "fullName": "hana girma", "telegramId": "hana_g", "totalOrders": 2 }],
            "pagination": { "total": 45, "pages": 3 }
        }),
    );

    let page = tokio_test::block_on(api.clients(1, 20)).unwrap();

    assert_eq!(page.total, 45);
    assert_eq!(page.items[0].initial(), 'H');
    assert_eq!(api.http().transport().last().url, format!("{}/users?page=1&limit=20", BASE_URL));
}

#[test]
fn test_paid_order_starts_production() {
    let api = api(MemoryTokens::with("t"));
    api.http()
        .transport()
        .reply(200, json!({ "success": true, "data": order_json("in_progress") }));

    let action = OrderStatus::Paid.action().unwrap();
    assert_eq!(action.label(), "Start Production");
    let updated = tokio_test::block_on(api.perform("65f1c2a9e4b0a1b2c3d4ab9f", &action, None)).unwrap();

    assert_eq!(updated.status, OrderStatus::InProgress);
    let sent = api.http().transport().last();
    assert_eq!(sent.method, Method::Patch);
    assert_eq!(sent.url, format!("{}/orders/65f1c2a9e4b0a1b2c3d4ab9f/status", BASE_URL));
    assert_eq!(sent.body, RequestBody::Json(json!({ "status": "in_progress" })));
}

#[test]
fn test_quote_requires_positive_price() {
    let api = api(MemoryTokens::with("t"));

    let err = tokio_test::block_on(api.perform("o1", &StatusAction::SendQuote, Some(Decimal::ZERO))).unwrap_err();
    assert!(matches!(err, ApiError::Invalid(_)));
    assert_eq!(err.message_or("Could not update the order"), QUOTE_REQUIRED);

    // Unparseable input reaches `perform` as no price at all.
    let missing = tokio_test::block_on(api.perform("o1", &StatusAction::SendQuote, parse_quote("abc"))).unwrap_err();
    assert_eq!(missing.message_or("Could not update the order"), QUOTE_REQUIRED);
    assert_eq!(api.http().transport().requests(), 0);

    api.http()
        .transport()
        .reply(200, json!({ "success": true, "data": order_json("bill_sent") }));
    let price = Some(Decimal::new(125050, 2));
    let updated = tokio_test::block_on(api.perform("o1", &StatusAction::SendQuote, price)).unwrap();

    assert_eq!(updated.status, OrderStatus::BillSent);
    assert_eq!(api.http().transport().last().body, RequestBody::Json(json!({ "basePrice": 1250.5 })));
}

#[test]
fn test_failed_transition_reports_error() {
    let api = api(MemoryTokens::with("t"));
    api.http().transport().fail("connection reset");

    let err = tokio_test::block_on(api.confirm_deposit("o1")).unwrap_err();

    assert_eq!(err, ApiError::Network("connection reset".into()));
    assert_eq!(api.http().transport().last().url, format!("{}/orders/o1/confirm-deposit", BASE_URL));
}

#[test]
fn test_create_manual_order() {
    let api = api(MemoryTokens::with("t"));
    api.http().transport().reply(201, json!({ "success": true, "data": order_json("form_submitted") }));

    let mut request = CreateOrderRequest::default();
    request.full_name = "Walk In".into();
    request.measurements.set("bust", 90.0);
    tokio_test::block_on(api.create_order(&request)).unwrap();

    let sent = api.http().transport().last();
    assert_eq!(sent.url, format!("{}/orders/manual", BASE_URL));
    match sent.body {
        RequestBody::Json(body) => {
            assert_eq!(body["fullName"], "Walk In");
            assert_eq!(body["measurements"]["bust"], 90.0);
        }
        other => panic!("unexpected body {:?}", other),
    }
}

#[test]
fn test_collection_item_upload_is_multipart() {
    let api = api(MemoryTokens::with("t"));
    let transport = api.http().transport();
    transport
        .reply(200, json!({ "success": true }))
        .reply(200, json!({ "success": true }))
        .reply(200, json!({ "success": true }));

    let parts = vec![
        ("title".to_string(), FormPart::Text("Gold Gown".to_string())),
        ("photo".to_string(), FormPart::File("gown.jpg".to_string())),
        ("tags".to_string(), FormPart::Text("[\"gala\"]".to_string())),
    ];
    tokio_test::block_on(api.create_collection_item(parts.clone())).unwrap();
    let sent = transport.last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.header("Content-Type"), None);
    assert_eq!(sent.body, RequestBody::Multipart(parts));

    tokio_test::block_on(api.update_collection_item("c1", Vec::new())).unwrap();
    assert_eq!(transport.last().method, Method::Put);
    assert_eq!(transport.last().url, format!("{}/collections/c1", BASE_URL));

    tokio_test::block_on(api.delete_collection_item("c1")).unwrap();
    assert_eq!(transport.last().method, Method::Delete);
}

#[test]
fn test_revisions_for_order() {
    let api = api(MemoryTokens::with("t"));
    let transport = api.http().transport();
    transport
        .reply(
            200,
            json!({ "data": [{ "_id": "r1", "order": "o1", "changesRequested": "Shorten hem", "status": "pending" }] }),
        )
        .reply(200, json!({ "success": true }));

    let revisions = tokio_test::block_on(api.revisions("o1")).unwrap();
    assert_eq!(revisions.len(), 1);
    assert!(revisions[0].is_pending());
    assert_eq!(transport.last().url, format!("{}/revisions/order/o1", BASE_URL));

    tokio_test::block_on(api.update_revision_status("r1", "approved")).unwrap();
    assert_eq!(transport.last().url, format!("{}/revisions/admin/status/r1", BASE_URL));
    assert_eq!(transport.last().body, RequestBody::Json(json!({ "status": "approved" })));
}
