use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use luxgate_api::models::{Reading, Threshold};
use luxgate_client::{ActuatorState, ClientError, Dashboard, GatewayClient};
use luxgate_server::app::{create_control_app, create_gateway_app, create_logging_app};
use luxgate_server::services::{GatewayService, MemoryReadingLog, ThresholdStore};
use tokio::net::TcpListener;

struct Deployment {
    threshold_store: ThresholdStore,
    gateway: SocketAddr,
}

async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

async fn closed_address() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

async fn deploy(control_online: bool) -> Deployment {
    let threshold_store = ThresholdStore::new(Threshold::default());

    let control = if control_online {
        serve(create_control_app(threshold_store.clone())).await
    } else {
        closed_address().await
    };
    let logging = serve(create_logging_app(Arc::new(MemoryReadingLog::new()))).await;

    let gateway_service =
        GatewayService::new(format!("http://{control}"), format!("http://{logging}"), None).unwrap();
    let gateway = serve(create_gateway_app(Arc::new(gateway_service))).await;

    Deployment {
        threshold_store,
        gateway,
    }
}

fn dashboard(deployment: &Deployment) -> Dashboard {
    Dashboard::new(GatewayClient::new(format!("http://{}", deployment.gateway)).unwrap())
}

#[tokio::test]
async fn test_refresh_empty_history() {
    let deployment = deploy(true).await;
    let mut dashboard = dashboard(&deployment);

    let status = dashboard.refresh().await.unwrap();

    assert_eq!(status.actuator_state, ActuatorState::Unknown);
    assert!(status.latest_reading().is_none());
    assert_eq!(status.threshold.limite_luz, 500.0);
}

#[tokio::test]
async fn test_refresh_after_readings() {
    let deployment = deploy(true).await;
    let mut dashboard = dashboard(&deployment);

    for reading in [
        Reading::new(720.0, "2025-06-01T18:00:00Z"),
        Reading::new(510.0, "2025-06-01T18:10:00Z"),
        Reading::new(300.0, "2025-06-01T18:20:00Z"),
    ] {
        dashboard.client().post_reading(&reading).await.unwrap();
    }

    let status = dashboard.refresh().await.unwrap();
    let values: Vec<f64> = status.history.iter().map(|r| r.valor_luz).collect();
    assert_eq!(values, vec![300.0, 510.0, 720.0]);
    assert_eq!(status.actuator_state, ActuatorState::On);

    dashboard.submit_threshold("300").await.unwrap();
    assert_eq!(dashboard.status().unwrap().actuator_state, ActuatorState::Off);
    assert_eq!(deployment.threshold_store.get_threshold().await.limite_luz, 300.0);
}

#[tokio::test]
async fn test_submit_threshold_input() {
    let deployment = deploy(true).await;
    let mut dashboard = dashboard(&deployment);

    assert!(matches!(
        dashboard.submit_threshold("  ").await,
        Err(ClientError::EmptyInput)
    ));
    assert!(matches!(
        dashboard.submit_threshold("bright").await,
        Err(ClientError::InvalidInput(ref input)) if input == "bright"
    ));
    assert_eq!(deployment.threshold_store.get_threshold().await.limite_luz, 500.0);

    let threshold = dashboard.submit_threshold(" 250.5 ").await.unwrap();
    assert_eq!(threshold.limite_luz, 250.5);
    assert_eq!(dashboard.threshold().limite_luz, 250.5);
}

#[tokio::test]
async fn test_threshold_outage_keeps_last_known_value() {
    let deployment = deploy(false).await;
    let mut dashboard = dashboard(&deployment);

    dashboard
        .client()
        .post_reading(&Reading::new(499.0, 1u64))
        .await
        .unwrap();

    let status = dashboard.refresh().await.unwrap();
    assert_eq!(status.threshold.limite_luz, 500.0);
    assert_eq!(status.actuator_state, ActuatorState::On);

    let error = dashboard.submit_threshold("10").await.unwrap_err();
    assert!(matches!(error, ClientError::Rejected { status: 503, .. }));
    assert!(error.is_request_failure());
}

#[tokio::test]
async fn test_gateway_unreachable() {
    let address = closed_address().await;
    let mut dashboard = Dashboard::new(GatewayClient::new(format!("http://{address}/")).unwrap());

    let error = dashboard.refresh().await.unwrap_err();
    assert!(matches!(error, ClientError::Network(_)));
    assert!(dashboard.status().is_none());
}

#[tokio::test]
async fn test_non_finite_reading_rejected() {
    let deployment = deploy(true).await;
    let client = GatewayClient::new(format!("http://{}", deployment.gateway)).unwrap();

    // Non-finite numbers go out as JSON null, which the log treats as missing
    match client.post_reading(&Reading::new(f64::NAN, 1u64)).await {
        Err(ClientError::Rejected { status, message }) => {
            assert_eq!(status, 400);
            assert_eq!(message, "Missing field `valor_luz`");
        }
        other => panic!("Expected rejection, got {other:?}"),
    }

    assert!(client.fetch_readings().await.unwrap().is_empty());
}
