use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use luxgate_api::models::Threshold;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

use crate::app::{create_control_app, create_gateway_app, create_logging_app};
use crate::configs::Settings;
use crate::configs::settings::socket_address;
use crate::services::{GatewayService, ThresholdStore, reading_log_for};

pub mod app;
pub mod configs;
pub mod errors;
pub mod handles;
pub mod services;

/// Starts every enabled service on its own listener and runs until one stops.
pub async fn run(settings: &Arc<Settings>) -> anyhow::Result<()> {
    let mut services = JoinSet::new();

    if settings.control.enabled {
        let control = &settings.control;
        let address = socket_address(&control.host, control.port)?;
        let threshold_store = ThresholdStore::new(Threshold::from(control.default_threshold));

        services.spawn(serve("control", address, create_control_app(threshold_store)));
    }

    if settings.logging.enabled {
        let logging = &settings.logging;
        let address = socket_address(&logging.host, logging.port)?;
        let reading_log = reading_log_for(logging.capacity);

        services.spawn(serve("logging", address, create_logging_app(reading_log)));
    }

    if settings.gateway.enabled {
        let gateway = &settings.gateway;
        let address = socket_address(&gateway.host, gateway.port)?;
        let gateway_service = Arc::new(
            GatewayService::from_settings(gateway).context("Failed to build gateway client")?,
        );

        services.spawn(serve("gateway", address, create_gateway_app(gateway_service)));
    }

    if services.is_empty() {
        anyhow::bail!("No service is enabled");
    }

    while let Some(result) = services.join_next().await {
        result??;
    }

    Ok(())
}

async fn serve(name: &'static str, address: SocketAddr, app: Router) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {name} service to {address}"))?;

    tracing::info!("{} listening on {:?}", name, address);

    axum::serve(listener, app).await?;

    Ok(())
}
