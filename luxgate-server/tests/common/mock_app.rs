use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use luxgate_api::models::Threshold;
use luxgate_server::app::{create_control_app, create_gateway_app, create_logging_app};
use luxgate_server::services::{GatewayService, MemoryReadingLog, ReadingLog, ThresholdStore};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

pub struct MockApp {
    pub threshold_store: ThresholdStore,
    pub reading_log: Arc<dyn ReadingLog>,
    pub router: Router,
}

impl MockApp {
    pub fn new() -> Self {
        Self {
            threshold_store: ThresholdStore::new(Threshold::default()),
            reading_log: Arc::new(MemoryReadingLog::new()),
            router: Router::new(),
        }
    }

    pub fn with_control_app(mut self) -> Self {
        self.router = create_control_app(self.threshold_store.clone());
        self
    }

    pub fn with_logging_app(mut self) -> Self {
        self.router = create_logging_app(self.reading_log.clone());
        self
    }

    /// Serves both stores on ephemeral ports and routes the gateway to them.
    pub async fn with_gateway_app(mut self) -> Self {
        let control = spawn_upstream(create_control_app(self.threshold_store.clone())).await;
        let logging = spawn_upstream(create_logging_app(self.reading_log.clone())).await;

        let gateway_service = GatewayService::new(
            format!("http://{control}"),
            format!("http://{logging}"),
            None,
        )
        .unwrap();

        self.router = create_gateway_app(Arc::new(gateway_service));
        self
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().uri(uri).method(method);

        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn spawn_upstream(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

/// An address nothing listens on.
pub async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    address
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, value)
}
