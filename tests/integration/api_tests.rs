//! API integration tests
//!
//! Each test gets its own in-memory database and drives the router
//! in-process.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use gearguard_server::{
    api::create_router,
    config::{AppConfig, DatabaseConfig},
    repository::{open_pool, Repository},
    AppState,
};

const BASE_URL: &str = "/api/v1";

async fn test_app() -> Router {
    let config = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        ..Default::default()
    };
    let pool = open_pool(&config.database)
        .await
        .expect("Failed to open in-memory database");
    create_router(AppState::new(config, Repository::new(pool)))
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(format!("{}{}", BASE_URL, path));
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

async fn create_lathe(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/equipment",
        Some(json!({
            "name": "Lathe-1",
            "serial": "SN-001",
            "category": "CNC",
            "team": "Alpha",
            "technician": "Bob",
            "purchase_date": "2023-03-01",
            "warranty_date": "2026-03-01"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("No equipment ID")
}

async fn create_request(app: &Router, subject: &str, equipment_id: i64) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/requests",
        Some(json!({
            "subject": subject,
            "equipment_id": equipment_id,
            "request_type": "Corrective"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().expect("No request ID")
}

async fn advance(app: &Router, id: i64, body: Value) -> (StatusCode, Value) {
    send(app, "POST", &format!("/requests/{}/advance", id), Some(body)).await
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, "GET", "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_duplicate_team() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/teams", Some(json!({ "name": "Alpha" }))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "POST", "/teams", Some(json!({ "name": "Alpha" }))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "DuplicateName");

    let (_, body) = send(&app, "GET", "/teams", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_technicians_by_team() {
    let app = test_app().await;
    for (name, team) in [("Bob", "Alpha"), ("Eve", "Beta"), ("Bob", "Alpha")] {
        let (status, _) = send(
            &app,
            "POST",
            "/technicians",
            Some(json!({ "name": name, "team": team })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, "GET", "/technicians/by-team?team=Alpha", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Bob", "Bob"]));

    let (_, body) = send(&app, "GET", "/technicians", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_create_request_snapshots_equipment() {
    let app = test_app().await;
    let equipment_id = create_lathe(&app).await;

    let (status, body) = send(
        &app,
        "POST",
        "/requests",
        Some(json!({
            "subject": "Noise issue",
            "equipment_id": equipment_id,
            "request_type": "Corrective"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "New");
    assert_eq!(body["team"], "Alpha");
    assert_eq!(body["technician"], "Bob");
    assert!(body["scheduled_date"].is_null());
}

#[tokio::test]
async fn test_preventive_request_needs_date() {
    let app = test_app().await;
    let equipment_id = create_lathe(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/requests",
        Some(json!({
            "subject": "Oil change",
            "equipment_id": equipment_id,
            "request_type": "Preventive"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "POST",
        "/requests",
        Some(json!({
            "subject": "Oil change",
            "equipment_id": equipment_id,
            "request_type": "Preventive",
            "scheduled_date": "2031-01-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = send(&app, "GET", "/calendar", None).await;
    assert_eq!(body[0]["subject"], "Oil change");
    assert_eq!(body[0]["equipment"], "Lathe-1");

    let (_, body) = send(&app, "GET", "/calendar?date=2031-01-11", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_repair_workflow() {
    let app = test_app().await;
    let equipment_id = create_lathe(&app).await;
    let id = create_request(&app, "Noise issue", equipment_id).await;

    let (status, body) = advance(&app, id, json!({ "to": "In Progress" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "In Progress");

    let (status, body) = advance(&app, id, json!({ "to": "Repaired" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "IllegalTransition");

    let (_, body) = send(&app, "GET", &format!("/requests/{}", id), None).await;
    assert_eq!(body["status"], "In Progress");

    let (status, body) = advance(&app, id, json!({ "to": "Repaired", "hours_spent": 2.5 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Repaired");
    assert_eq!(body["duration_hours"], 2.5);

    let (_, body) = send(&app, "GET", &format!("/equipment/{}", equipment_id), None).await;
    assert_eq!(body["scrapped"], false);

    let (_, body) = send(&app, "GET", &format!("/equipment/{}/maintenance", equipment_id), None).await;
    assert_eq!(body["open_requests"], 0);
    assert_eq!(body["requests"][0]["status"], "Repaired");
}

#[tokio::test]
async fn test_scrap_retires_equipment() {
    let app = test_app().await;
    let equipment_id = create_lathe(&app).await;
    let id = create_request(&app, "Cracked frame", equipment_id).await;

    let (status, body) = advance(&app, id, json!({ "to": "Scrap" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Scrap");

    let (_, body) = send(&app, "GET", &format!("/equipment/{}", equipment_id), None).await;
    assert_eq!(body["scrapped"], true);

    let (_, body) = send(&app, "GET", "/equipment", None).await;
    assert_eq!(body, json!([]));

    // No new work on scrapped equipment, history still listed
    let (status, _) = send(
        &app,
        "POST",
        "/requests",
        Some(json!({
            "subject": "Again",
            "equipment_id": equipment_id,
            "request_type": "Corrective"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, "GET", "/requests", None).await;
    assert_eq!(body[0]["equipment"], "Lathe-1");
    assert_eq!(body[0]["status"], "Scrap");
}

#[tokio::test]
async fn test_kanban_board() {
    let app = test_app().await;
    let equipment_id = create_lathe(&app).await;
    let first = create_request(&app, "Noise issue", equipment_id).await;
    let second = create_request(&app, "Leak", equipment_id).await;
    advance(&app, second, json!({ "to": "In Progress" })).await;

    let (status, body) = send(&app, "GET", "/kanban", None).await;
    assert_eq!(status, StatusCode::OK);

    let columns = body["columns"].as_array().unwrap();
    let stages: Vec<&str> = columns.iter().map(|c| c["stage"].as_str().unwrap()).collect();
    assert_eq!(stages, vec!["New", "In Progress", "Repaired", "Scrap"]);
    assert_eq!(columns[0]["cards"][0]["id"], first);
    assert_eq!(columns[1]["cards"][0]["id"], second);
    assert_eq!(columns[1]["cards"][0]["moves"], json!(["Repaired", "Scrap"]));
}

#[tokio::test]
async fn test_dashboard_filters_and_empty_states() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/dashboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["empty_state"]["kind"], "board_clear");

    let equipment_id = create_lathe(&app).await;
    create_request(&app, "Noise issue", equipment_id).await;

    let (_, body) = send(&app, "GET", "/dashboard?team=Alpha", None).await;
    assert_eq!(body["total"], 1);
    assert!(body["empty_state"].is_null());
    assert_eq!(body["options"]["teams"], json!(["Alpha"]));

    let (_, body) = send(&app, "GET", "/dashboard?team=Beta", None).await;
    assert_eq!(body["total"], 0);
    assert_eq!(body["empty_state"]["kind"], "no_match");
    assert_eq!(body["empty_state"]["tone"], "info");

    let (_, body) = send(&app, "GET", "/dashboard?status=Scrap", None).await;
    assert_eq!(body["empty_state"]["kind"], "status");

    let (_, body) = send(&app, "GET", "/dashboard?status=Scrap&status=Repaired", None).await;
    assert_eq!(body["empty_state"]["kind"], "caught_up");

    let (_, body) = send(&app, "GET", "/dashboard?overdue_only=true", None).await;
    assert_eq!(body["empty_state"]["kind"], "no_overdue");

    let (status, body) = send(&app, "GET", "/dashboard?status=Done", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_dashboard_filter_values_with_commas() {
    let app = test_app().await;
    let lathe = create_lathe(&app).await;
    create_request(&app, "Noise issue", lathe).await;

    let (status, body) = send(
        &app,
        "POST",
        "/equipment",
        Some(json!({
            "name": "Drill, 10mm",
            "category": "Other",
            "team": "Alpha, Night Shift",
            "technician": "Eve"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let drill = body["id"].as_i64().expect("No equipment ID");
    let id = create_request(&app, "Dull bit", drill).await;
    advance(&app, id, json!({ "to": "In Progress" })).await;

    let (_, body) = send(&app, "GET", "/dashboard", None).await;
    assert_eq!(body["options"]["equipment"], json!(["Drill, 10mm", "Lathe-1"]));

    let (status, body) = send(&app, "GET", "/dashboard?equipment=Drill%2C%2010mm", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["requests"][0]["subject"], "Dull bit");
    assert_eq!(body["filter"]["equipment"], json!(["Drill, 10mm"]));

    let (_, body) = send(
        &app,
        "GET",
        "/dashboard?team=Alpha%2C%20Night%20Shift&team=Alpha",
        None,
    )
    .await;
    assert_eq!(body["total"], 2);

    let (_, body) = send(&app, "GET", "/dashboard?status=New&status=In%20Progress", None).await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["filter"]["statuses"], json!(["New", "In Progress"]));
}

#[tokio::test]
async fn test_dashboard_hides_repaired_by_default() {
    let app = test_app().await;
    let equipment_id = create_lathe(&app).await;
    let id = create_request(&app, "Noise issue", equipment_id).await;
    advance(&app, id, json!({ "to": "In Progress" })).await;
    advance(&app, id, json!({ "to": "Repaired", "hours_spent": 1.0 })).await;

    let (_, body) = send(&app, "GET", "/dashboard", None).await;
    assert_eq!(body["total"], 0);

    let (_, body) = send(&app, "GET", "/dashboard?include_repaired=true", None).await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn test_not_found() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/equipment/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NotFound");

    let (status, _) = advance(&app, 42, json!({ "to": "In Progress" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
