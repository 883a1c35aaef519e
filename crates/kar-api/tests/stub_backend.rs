//! End-to-end client behaviour against a local stub backend.

use std::io::Read;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kar_api::resources::{Grns, Indents, PurchaseOrders, RawMaterialBatches, Vendors};
use kar_api::{ApiClient, ApiError, Resource};
use kar_config::ApiConfig;
use kar_core::costing::{IndentCostInput, MaterialLine};
use kar_core::entities::IndentDraft;
use kar_core::pagination::ListParams;
use kar_core::status::Status;
use pretty_assertions::assert_eq;
use serde_json::json;

#[derive(Debug, Clone)]
struct Seen {
    method: String,
    url: String,
    authorization: Option<String>,
    body: String,
}

/// Serve `route` on a random local port until the test process exits.
fn stub<F>(route: F) -> (String, Arc<Mutex<Vec<Seen>>>)
where
    F: Fn(&str, &str) -> (u16, serde_json::Value) + Send + 'static,
{
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind stub");
    let port = server.server_addr().to_ip().expect("ip addr").port();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);

    std::thread::spawn(move || {
        for mut request in server.incoming_requests() {
            let mut body = String::new();
            let _ = request.as_reader().read_to_string(&mut body);
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());
            let method = request.method().as_str().to_string();
            let url = request.url().to_string();
            let (status, payload) = route(&method, &url);
            log.lock().unwrap().push(Seen {
                method,
                url,
                authorization,
                body,
            });
            let response = tiny_http::Response::from_string(payload.to_string())
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
    });

    (format!("http://127.0.0.1:{port}"), seen)
}

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    })
    .unwrap()
    .with_token(Some("tok-abc".into()))
}

#[tokio::test]
async fn list_sends_bearer_and_paging_query() {
    let (base, seen) = stub(|_, _| {
        (
            200,
            json!({
                "data": [{"_id": "v-1", "name": "Shree Metals", "gstin": "27AAPFU0939F1ZV"}],
                "pagination": {"total": 11, "page": 2, "limit": 5}
            }),
        )
    });

    let params = ListParams::new(2, 5).with_search(Some("shree"));
    let page = client(&base).list::<Vendors>(&params).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Shree Metals");
    assert_eq!(page.total, 11);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].url, "/vendor?page=1&limit=5&search=shree");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer tok-abc"));
}

#[tokio::test]
async fn forbidden_is_reported_as_unauthorized() {
    let (base, _) = stub(|_, _| (403, json!({"message": "role not allowed"})));
    let err = client(&base)
        .get::<Vendors>("v-1")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 403 }));
    assert_eq!(err.user_message(), "Unauthorized");
}

#[tokio::test]
async fn server_message_reaches_the_user() {
    let (base, _) = stub(|_, _| {
        (422, json!({"message": "GSTIN already registered"}))
    });
    let err = client(&base)
        .create::<Vendors, _>(&json!({"name": "Dup"}))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "GSTIN already registered");
}

#[tokio::test]
async fn mutation_invalidates_cached_lists_for_that_resource_only() {
    let (base, seen) = stub(|method, url| match (method, url) {
        ("POST", "/vendor") => (201, json!({"data": {"_id": "v-2", "name": "New"}})),
        _ => (200, json!({"data": []})),
    });
    let client = client(&base).with_cache_ttl(Duration::from_secs(60));
    let params = ListParams::default();

    client.list::<Vendors>(&params).await.unwrap();
    client.list::<Vendors>(&params).await.unwrap();
    client.list::<PurchaseOrders>(&params).await.unwrap();
    assert_eq!(seen.lock().unwrap().len(), 2, "second vendor list is cached");

    let created = client
        .create::<Vendors, _>(&json!({"name": "New"}))
        .await
        .unwrap();
    assert_eq!(created.id, "v-2");

    client.list::<Vendors>(&params).await.unwrap();
    client.list::<PurchaseOrders>(&params).await.unwrap();

    let urls: Vec<String> = seen.lock().unwrap().iter().map(|s| s.url.clone()).collect();
    assert_eq!(
        urls,
        vec![
            "/vendor?page=1&limit=10",
            "/purchase?page=1&limit=10",
            "/vendor",
            "/vendor?page=1&limit=10",
        ]
    );
}

#[tokio::test]
async fn unlisted_status_move_is_left_to_the_backend() {
    let (base, seen) = stub(|method, _| match method {
        "GET" => (200, json!({"_id": "grn-1", "status": "approved"})),
        _ => (200, json!({"_id": "grn-1", "status": "completed"})),
    });

    // GRN workflow lists nothing after approved; the backend still gets asked.
    let updated = client(&base)
        .set_status::<Grns>("grn-1", Status::Completed)
        .await
        .unwrap();
    assert_eq!(updated.status, Status::Completed);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[1].method, "PUT");
    assert_eq!(seen[1].body, r#"{"status":"completed"}"#);
}

#[tokio::test]
async fn backend_refusal_of_status_move_reaches_the_user() {
    let (base, _) = stub(|method, _| match method {
        "GET" => (200, json!({"_id": "po-1", "status": "in-progress"})),
        _ => (409, json!({"message": "Order is not approved"})),
    });
    let err = client(&base)
        .set_status::<PurchaseOrders>("po-1", Status::Closed)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.user_message(), "Order is not approved");
}

#[tokio::test]
async fn unrecognized_current_status_still_sends_the_move() {
    let (base, seen) = stub(|method, _| match method {
        "GET" => (200, json!({"_id": "ind-2", "status": "pending"})),
        _ => (200, json!({"_id": "ind-2", "status": "in_progress"})),
    });
    let updated = client(&base)
        .set_status::<Indents>("ind-2", Status::InProgress)
        .await
        .unwrap();
    assert_eq!(updated.status, Status::InProgress);
    assert_eq!(seen.lock().unwrap()[1].body, r#"{"status":"in_progress"}"#);
}

#[tokio::test]
async fn set_status_sends_canonical_token() {
    let (base, seen) = stub(|method, _| match method {
        "GET" => (200, json!({"_id": "ind-1", "status": "Submitted"})),
        _ => (200, json!({"data": {"_id": "ind-1", "status": "approved"}})),
    });
    let updated = client(&base)
        .set_status::<Indents>("ind-1", Status::Approved)
        .await
        .unwrap();
    assert_eq!(updated.status, Status::Approved);

    let seen = seen.lock().unwrap();
    assert_eq!(seen[1].method, "PUT");
    assert_eq!(seen[1].url, "/indent/ind-1");
    assert_eq!(seen[1].body, r#"{"status":"approved"}"#);
}

#[tokio::test]
async fn create_indent_posts_derived_figures() {
    let (base, seen) = stub(|_, _| (201, json!({"_id": "ind-9"})));
    let draft = IndentDraft {
        article: Some("art-1".into()),
        remarks: None,
        cost: IndentCostInput {
            items: vec![MaterialLine {
                rate: 50.into(),
                weight: 4.into(),
                ..Default::default()
            }],
            quantity: 2.into(),
            ..Default::default()
        },
    };
    let indent = client(&base).create_indent(draft).await.unwrap();
    assert_eq!(indent.id, "ind-9");

    let seen = seen.lock().unwrap();
    let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body["article"], "art-1");
    assert_eq!(body["finalCost"], 200.0);
    assert_eq!(body["ratePerQty"], 100.0);
}

#[tokio::test]
async fn quantity_edit_keeps_stored_costing() {
    let (base, seen) = stub(|method, _| match method {
        "GET" => (
            200,
            json!({"data": {
                "_id": "ind-4",
                "article": {"_id": "art-9", "name": "Gear housing"},
                "quantity": 2,
                "items": [{"materialId": "rm-1", "rate": 50, "weight": 4}],
                "skilled": {"persons": 1, "rate": 600},
                "gstPercent": 18,
                "finalCost": 944
            }}),
        ),
        _ => (200, json!({"_id": "ind-4", "quantity": 4})),
    });
    let changes = json!({"quantity": 4, "vehicleNo": "MH12AB1234"});
    let (indent, breakdown) = client(&base)
        .revise_indent("ind-4", changes.as_object().unwrap())
        .await
        .unwrap();
    assert_eq!(indent.id, "ind-4");
    assert_eq!(breakdown.final_cost, 944.into());

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].url, "/indent/ind-4");
    assert_eq!(seen[1].method, "PUT");
    let body: serde_json::Value = serde_json::from_str(&seen[1].body).unwrap();
    assert_eq!(body["quantity"], 4.0);
    assert_eq!(body["article"], "art-9");
    assert_eq!(body["items"][0]["materialId"], "rm-1");
    assert_eq!(body["items"][0]["rate"], 50.0);
    assert_eq!(body["skilled"]["rate"], 600.0);
    assert_eq!(body["finalCost"], 944.0);
    assert_eq!(body["ratePerQty"], 236.0);
    assert_eq!(body["vehicleNo"], "MH12AB1234");
}

#[tokio::test]
async fn malformed_costing_edit_is_refused_before_sending() {
    let (base, seen) = stub(|_, _| (200, json!({"_id": "ind-4", "quantity": 2})));
    let changes = json!({"items": "none"});
    let err = client(&base)
        .revise_indent("ind-4", changes.as_object().unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Rejected(_)));
    assert_eq!(seen.lock().unwrap().len(), 1, "only the read went out");
}

#[tokio::test]
async fn update_and_status_change_invalidate_cached_lists() {
    let (base, seen) = stub(|method, url| match (method, url) {
        ("GET", "/purchase/po-1") => (200, json!({"_id": "po-1", "status": "draft"})),
        ("PUT", _) => (200, json!({"_id": "po-1", "status": "submitted"})),
        _ => (200, json!({"data": []})),
    });
    let client = client(&base).with_cache_ttl(Duration::from_secs(60));
    let params = ListParams::default();
    let list_calls = |seen: &Arc<Mutex<Vec<Seen>>>| {
        seen.lock()
            .unwrap()
            .iter()
            .filter(|s| s.url == "/purchase?page=1&limit=10")
            .count()
    };

    client.list::<PurchaseOrders>(&params).await.unwrap();
    client.list::<PurchaseOrders>(&params).await.unwrap();
    assert_eq!(list_calls(&seen), 1);

    client
        .update::<PurchaseOrders, _>("po-1", &json!({"remarks": "urgent"}))
        .await
        .unwrap();
    client.list::<PurchaseOrders>(&params).await.unwrap();
    assert_eq!(list_calls(&seen), 2);

    client
        .set_status::<PurchaseOrders>("po-1", Status::Submitted)
        .await
        .unwrap();
    client.list::<PurchaseOrders>(&params).await.unwrap();
    client.list::<PurchaseOrders>(&params).await.unwrap();
    assert_eq!(list_calls(&seen), 3);
}

#[tokio::test]
async fn batches_are_filtered_by_material() {
    let (base, seen) = stub(|_, _| (200, json!([{"_id": "b-1", "quantity": 5}])));
    let page = client(&base)
        .batches_for_material("rm-7", ListParams::default())
        .await
        .unwrap();
    assert_eq!(page.items[0].id, "b-1");
    assert_eq!(
        seen.lock().unwrap()[0].url,
        format!("{}?page=1&limit=10&rawMaterial=rm-7", RawMaterialBatches::PATH)
    );
}

#[tokio::test]
async fn login_without_token_sends_no_authorization() {
    let (base, seen) = stub(|_, _| {
        (200, json!({"token": "fresh", "user": {"_id": "u-1", "role": "admin"}}))
    });
    let anonymous = ApiClient::new(&ApiConfig {
        base_url: base,
        ..Default::default()
    })
    .unwrap();
    let response = anonymous.login("a@x.in", "secret").await.unwrap();
    assert_eq!(response.token, "fresh");

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].url, "/auth/login");
    assert!(seen[0].authorization.is_none());
    let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body, json!({"email": "a@x.in", "password": "secret"}));
}
