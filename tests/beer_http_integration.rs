use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use beer_stock::application::context::AppContext;
use beer_stock::config::Stock;
use beer_stock::infrastructure::db::repositories::Repositories;
use beer_stock::interface::http;
use beer_stock::interface::http::state::AppState;
use serde_json::{Value, json};
use tower::util::ServiceExt;

fn app() -> Router {
    let ctx = AppContext::new(Repositories::in_memory(), Stock::default());
    http::app(AppState::new(ctx, None))
}

fn brahma() -> Value {
    json!({
        "name": "Brahma",
        "brand": "Ambev",
        "max": 50,
        "quantity": 10,
        "type": "LAGER"
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

async fn create_brahma(app: &Router) -> i64 {
    let (status, json) = send(app, json_request("POST", "/api/v1/beers", &brahma())).await;
    assert_eq!(status, StatusCode::CREATED);
    json["id"].as_i64().unwrap()
}

#[tokio::test]
async fn given_valid_beer_when_created_should_be_listed_and_fetchable() {
    let app = app();

    let (status, created) = send(&app, json_request("POST", "/api/v1/beers", &brahma())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Brahma");
    assert_eq!(created["type"], "LAGER");

    let (status, list) = send(&app, empty_request("GET", "/api/v1/beers")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, by_id) = send(&app, empty_request("GET", &format!("/api/v1/beers/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_id, created);

    let (status, by_name) = send(&app, empty_request("GET", "/api/v1/beers/name/Brahma")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_name["id"], id);
}

#[tokio::test]
async fn given_empty_store_when_listed_should_return_empty_array() {
    let app = app();

    let (status, list) = send(&app, empty_request("GET", "/api/v1/beers/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn given_client_supplied_id_when_created_should_ignore_it() {
    let app = app();
    let mut body = brahma();
    body["id"] = json!(999);

    let (status, created) = send(&app, json_request("POST", "/api/v1/beers", &body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(created["id"], 999);
}

#[tokio::test]
async fn given_duplicate_name_when_created_should_return_400_and_keep_one_row() {
    let app = app();
    create_brahma(&app).await;

    let (status, error) = send(&app, json_request("POST", "/api/v1/beers", &brahma())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["status"], 400);
    assert_eq!(
        error["message"],
        "Beer with name 'Brahma' already exist in the system."
    );
    let (_, list) = send(&app, empty_request("GET", "/api/v1/beers")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn given_missing_fields_when_created_should_list_every_violation() {
    let app = app();

    let (status, error) = send(&app, json_request("POST", "/api/v1/beers", &json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["message"], "One or more fields are invalid!");
    assert_eq!(error["errors"].as_array().unwrap().len(), 5);
    assert!(error["timestamp"].is_string());
}

#[tokio::test]
async fn given_unknown_type_when_created_should_return_400() {
    let app = app();
    let mut body = brahma();
    body["type"] = json!("PILSEN");

    let (status, error) = send(&app, json_request("POST", "/api/v1/beers", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["status"], 400);
}

#[tokio::test]
async fn given_malformed_json_when_created_should_return_400() {
    let app = app();
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/beers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, error) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["errors"].is_null());
}

#[tokio::test]
async fn given_missing_id_when_fetched_should_return_empty_404() {
    let app = app();

    let (status, body) = send(&app, empty_request("GET", "/api/v1/beers/5")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_null());
}

#[tokio::test]
async fn given_stock_room_when_incremented_should_return_updated_beer() {
    let app = app();
    let id = create_brahma(&app).await;

    let (status, beer) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/beers/{id}/increment"),
            &json!({"quantity": 40}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(beer["quantity"], 50);
}

#[tokio::test]
async fn given_increment_past_max_when_patched_should_return_400_and_keep_stock() {
    let app = app();
    let id = create_brahma(&app).await;

    let (status, error) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/beers/{id}/increment"),
            &json!({"quantity": 41}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error["message"],
        format!(
            "Cannot increment '41' on beer with id '{id}' because it already has '10' and '50' is the maximum."
        )
    );
    let (_, beer) = send(&app, empty_request("GET", &format!("/api/v1/beers/{id}"))).await;
    assert_eq!(beer["quantity"], 10);
}

#[tokio::test]
async fn given_stock_when_decremented_to_zero_should_return_updated_beer() {
    let app = app();
    let id = create_brahma(&app).await;

    let (status, beer) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/v1/beers/{id}/decrement"),
            &json!({"quantity": 10}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(beer["quantity"], 0);
}

#[tokio::test]
async fn given_missing_beer_when_adjusted_should_return_404() {
    let app = app();

    let (status, error) = send(
        &app,
        json_request(
            "PATCH",
            "/api/v1/beers/42/decrement",
            &json!({"quantity": 1}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["message"], "Beer with id '42' not found.");
}

#[tokio::test]
async fn given_existing_beer_when_deleted_should_return_204_then_404() {
    let app = app();
    let id = create_brahma(&app).await;

    let (status, _) = send(&app, empty_request("DELETE", &format!("/api/v1/beers/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, empty_request("GET", &format!("/api/v1/beers/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, error) =
        send(&app, empty_request("DELETE", &format!("/api/v1/beers/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["status"], 404);
}

#[tokio::test]
async fn given_running_app_when_health_and_ready_should_return_ok() {
    let app = app();

    let (status, health) = send(&app, empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({"status": "ok"}));

    let (status, ready) = send(&app, empty_request("GET", "/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready, json!({"status": "ready"}));
}

#[tokio::test]
async fn given_request_id_when_served_should_echo_header() {
    let app = app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-7")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "req-7");
}
