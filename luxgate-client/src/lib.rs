pub mod dashboard;
pub mod error;
pub mod gateway;
pub mod render;
pub mod status;

pub use dashboard::Dashboard;
pub use error::{ClientError, Result};
pub use gateway::{DEFAULT_GATEWAY_URL, GatewayClient};
pub use status::{ActuatorState, DerivedStatus, format_timestamp};
