mod gateway_handle;
mod reading_handle;
mod threshold_handle;

pub use gateway_handle::*;
pub use reading_handle::*;
pub use threshold_handle::*;

use crate::errors::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
