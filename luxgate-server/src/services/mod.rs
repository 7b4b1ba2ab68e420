mod gateway_service;
mod reading_log;
mod threshold_store;

pub use gateway_service::*;
pub use reading_log::*;
pub use threshold_store::*;
