use axum::http::{Method, StatusCode};
use luxgate_server::services::ReadingLog;
use serde_json::json;

mod common;
use common::mock_app::{MockApp, read_json};

#[tokio::test]
async fn test_empty_history() {
    let app = MockApp::new().with_logging_app();

    let (status, body) = read_json(app.send(Method::GET, "/log", None).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_append_keeps_arrival_order() {
    let app = MockApp::new().with_logging_app();

    let readings = [
        json!({ "valor_luz": 812.0, "timestamp": "2025-06-01T12:00:00Z" }),
        json!({ "valor_luz": 95.0, "timestamp": 17 }),
        json!({ "valor_luz": 95.0, "timestamp": 17 }),
        json!({ "valor_luz": 430.0, "timestamp": "2025-05-31T08:00:00Z" }),
    ];

    for reading in readings.iter() {
        let (status, body) = read_json(app.send(Method::POST, "/log", Some(reading.clone())).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    let (status, body) = read_json(app.send(Method::GET, "/log", None).await).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(readings));
}

#[tokio::test]
async fn test_append_missing_fields() {
    let app = MockApp::new().with_logging_app();

    let response = app
        .send(Method::POST, "/log", Some(json!({ "valor_luz": 10.0, "timestamp": "1" })))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    for body in [
        json!({ "valor_luz": 10.0 }),
        json!({ "timestamp": "2" }),
        json!({}),
        json!({ "valor_luz": "dark", "timestamp": "3" }),
    ] {
        let (status, body) = read_json(app.send(Method::POST, "/log", Some(body)).await).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], json!(400));
    }

    assert_eq!(app.reading_log.len().await, 1);
}

#[tokio::test]
async fn test_missing_timestamp_message() {
    let app = MockApp::new().with_logging_app();

    let (_, body) = read_json(
        app.send(Method::POST, "/log", Some(json!({ "valor_luz": 10.0 })))
            .await,
    )
    .await;

    assert_eq!(body["error"]["message"], json!("Missing field `timestamp`"));
}

#[tokio::test]
async fn test_unsupported_method() {
    let app = MockApp::new().with_logging_app();

    let (status, body) = read_json(app.send(Method::PUT, "/log", None).await).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"]["code"], json!(405));
    assert!(app.reading_log.is_empty().await);
}
