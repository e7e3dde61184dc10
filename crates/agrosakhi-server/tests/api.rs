//! End-to-end tests of the REST surface against a seeded store

use agrosakhi_core::MemStorage;
use agrosakhi_server::{build_router, AppState, ServerConfig};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    app_with(ServerConfig::default())
}

fn app_with(config: ServerConfig) -> Router {
    let storage = Arc::new(MemStorage::seeded().unwrap());
    let state = AppState::new(storage, config).unwrap();
    build_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(&app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_current_user_hides_password() {
    let (status, user) = get(&app(), "/api/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], 1);
    assert_eq!(user["username"], "सुनीता देवी");
    assert!(user.get("password").is_none());
    assert!(user.get("totalHarvest").is_some());
}

#[tokio::test]
async fn test_create_user() {
    let app = app();
    let (status, user) = post(
        &app,
        "/api/user",
        json!({"username": "meena", "password": "secret", "location": "Nashik"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["id"], 2);
    assert_eq!(user["level"], 1);
    assert_eq!(user["points"], 0);

    let (status, body) = post(
        &app,
        "/api/user",
        json!({"username": "meena", "password": "other"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Username already exists");

    let (status, body) = post(&app, "/api/user", json!({"username": "no password"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid user data");
}

#[tokio::test]
async fn test_update_user() {
    let app = app();
    let (status, user) = send(
        &app,
        Method::PATCH,
        "/api/user",
        Some(json!({"points": 300})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["points"], 300);
    assert_eq!(user["username"], "सुनीता देवी");
}

#[tokio::test]
async fn test_devices() {
    let app = app();
    let (status, devices) = get(&app, "/api/devices").await;
    assert_eq!(status, StatusCode::OK);
    let devices = devices.as_array().unwrap();
    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0]["type"], "band");
    assert_eq!(devices[1]["type"], "station");

    let (status, device) = get(&app, "/api/devices/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(device["type"], "station");

    let (status, body) = get(&app, "/api/devices/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Device not found");

    let (status, _) = get(&app, "/api/devices/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_device() {
    let app = app();
    let (status, device) = send(
        &app,
        Method::PATCH,
        "/api/devices/1",
        Some(json!({"status": "disconnected"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(device["status"], "disconnected");
    assert_eq!(device["type"], "band");
}

#[tokio::test]
async fn test_static_history_series() {
    let (status, body) = get(&app(), "/api/devices/history").await;
    assert_eq!(status, StatusCode::OK);
    let history = &body["history"];
    assert_eq!(history["timestamps"].as_array().unwrap().len(), 5);
    assert_eq!(history["soilMoisture"], json!([40, 42, 45, 44, 42]));
}

#[tokio::test]
async fn test_device_history() {
    let app = app();
    let (status, body) = get(&app, "/api/devices/1/history").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deviceId"], 1);

    let (status, _) = get(&app, "/api/devices/999/history").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_start_task_flow() {
    let app = app();
    let (status, tasks) = get(&app, "/api/tasks").await;
    assert_eq!(status, StatusCode::OK);
    let statuses: Vec<&str> = tasks
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, ["completed", "pending", "important"]);

    let (status, task) = post(&app, "/api/tasks/2/start", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "completed");

    // Important tasks are returned unchanged
    let (status, task) = post(&app, "/api/tasks/3/start", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(task["status"], "important");

    let (status, body) = post(&app, "/api/tasks/999/start", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");
}

#[tokio::test]
async fn test_create_task() {
    let app = app();
    let (status, task) = post(
        &app,
        "/api/tasks",
        json!({"userId": 1, "title": "बीज खरीदें", "status": "pending"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["id"], 4);
    assert_eq!(task["hasVideo"], false);

    let (status, fetched) = get(&app, "/api/tasks/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "बीज खरीदें");

    let (status, body) = post(
        &app,
        "/api/tasks",
        json!({"userId": 1, "title": "x", "status": "someday"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid task data");
}

#[tokio::test]
async fn test_weather() {
    let app = app();
    let (status, weather) = get(&app, "/api/weather").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(weather["id"], 1);

    let mut replacement = weather.clone();
    replacement["temperature"] = json!("40°C");
    let (status, updated) = send(&app, Method::PUT, "/api/weather", Some(replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 1);
    assert_eq!(updated["temperature"], "40°C");
}

#[tokio::test]
async fn test_catalog_lists() {
    let app = app();
    for (uri, count) in [
        ("/api/advisories", 2),
        ("/api/courses", 4),
        ("/api/products", 4),
        ("/api/schemes", 2),
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body.as_array().unwrap().len(), count, "{uri}");
    }

    let (status, _) = get(&app, "/api/schemes/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_current_course() {
    let (status, course) = get(&app(), "/api/courses/current").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(course["id"], 1);
    assert_eq!(course["progress"], 65);
}

#[tokio::test]
async fn test_market_info() {
    let (status, market) = get(&app(), "/api/market").await;
    assert_eq!(status, StatusCode::OK);
    assert!(market["groupSale"]["total"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_voice_languages() {
    let app = app();
    let (status, hi) = post(&app, "/api/voice", json!({"transcript": "खाद?"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(hi["response"].as_str().unwrap().contains("NPK 15-15-15"));
    assert_eq!(hi["recommendations"][0]["type"], "task");
    assert_eq!(hi["recommendations"][1]["type"], "weather");

    let (_, en) = post(
        &app,
        "/api/voice",
        json!({"transcript": "fertilizer?", "language": "en"}),
    )
    .await;
    assert!(en["response"].as_str().unwrap().starts_with("For your rice crop"));

    let (status, _) = post(&app, "/api/voice", json!({"language": "en"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_ai_endpoints() {
    let app = app();

    let (status, image) = post(&app, "/api/ai/analyze-image", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let confidence = image["confidence"].as_f64().unwrap();
    assert!([0.89, 0.95, 0.78].contains(&confidence));

    let (status, soil) = post(&app, "/api/ai/analyze-soil", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(soil["metrics"]["ph"], 6.8);

    let (status, weather) = post(&app, "/api/ai/predict-weather", json!({"days": 30})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(weather["forecast"].as_array().unwrap().len(), 14);

    let (_, weather) = send(&app, Method::POST, "/api/ai/predict-weather", None).await;
    assert_eq!(weather["forecast"].as_array().unwrap().len(), 7);

    let (status, weather) = post(&app, "/api/ai/predict-weather", json!({"days": -1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(weather["forecast"].as_array().unwrap().len(), 7);

    let (status, market) = post(&app, "/api/ai/forecast-market", json!({"crop": "rice"})).await;
    assert_eq!(status, StatusCode::OK);
    let current = market["currentPrice"].as_i64().unwrap();
    let forecast = market["forecastedPrice"].as_i64().unwrap();
    assert!((1800..2300).contains(&current));
    assert!((current - 150..current + 150).contains(&forecast));

    let (status, answer) = post(
        &app,
        "/api/ai/crop-query",
        json!({"transcript": "pests?", "language": "en"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(answer["suggestedActions"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_voice_falls_back_when_model_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = app_with(ServerConfig {
        openai_api_key: Some("sk-test".to_string()),
        openai_base_url: format!("http://{addr}/v1"),
        ai_timeout_secs: 5,
        ..Default::default()
    });
    let (status, body) = post(
        &app,
        "/api/voice",
        json!({"transcript": "x", "language": "en"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].as_str().unwrap().starts_with("For your rice crop"));
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_static_dir_serves_client_with_index_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>AgroSakhi</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

    let app = app_with(ServerConfig {
        static_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    });

    for (uri, expected) in [
        ("/", "<html>AgroSakhi</html>"),
        ("/app.js", "console.log(1)"),
        ("/learning/courses", "<html>AgroSakhi</html>"),
    ] {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(std::str::from_utf8(&bytes).unwrap(), expected, "{uri}");
    }

    // API routes still win over the client fallback
    let (status, user) = get(&app, "/api/user").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], 1);
}

#[tokio::test]
async fn test_concurrent_signups_with_same_username() {
    let app = app();
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let app = app.clone();
            tokio::spawn(async move {
                post(
                    &app,
                    "/api/user",
                    json!({"username": "kamla", "password": format!("pw{n}")}),
                )
                .await
                .0
            })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await.unwrap());
    }
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::CREATED).count(), 1);
    assert_eq!(statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count(), 7);
}
