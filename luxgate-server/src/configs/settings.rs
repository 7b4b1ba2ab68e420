use std::env;
use std::net::{IpAddr, SocketAddr};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gateway {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub control_url: String,
    pub logging_url: String,
    /// Unset means the gateway waits on upstreams indefinitely.
    pub upstream_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    pub default_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logging {
    pub enabled: bool,
    pub host: String,
    pub port: u16,
    /// Keep only the most recent readings when set.
    pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub gateway: Gateway,
    pub control: Control,
    pub logging: Logging,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let settings: Settings = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(
                Environment::with_prefix("LUXGATE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if let Some(0) = settings.logging.capacity {
            return Err(ConfigError::Message("logging.capacity must be positive".into()));
        }

        Ok(settings)
    }
}

pub(crate) fn socket_address(host: &str, port: u16) -> Result<SocketAddr, std::net::AddrParseError> {
    let ip_addr = host.parse::<IpAddr>()?;

    Ok(SocketAddr::from((ip_addr, port)))
}
