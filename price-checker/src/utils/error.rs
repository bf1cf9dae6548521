//! Unified error handling
//!
//! The station uses the shared error types directly:
//! - [`AppError`] - error with code, message and details
//! - [`ApiResponse`] - response envelope for the HTTP API
//!
//! # Usage
//!
//! ```ignore
//! // Validation failure naming the missing fields
//! Err(AppError::missing_fields(&["name", "price"]))
//!
//! // Success envelope
//! Ok(ok(product))
//! ```

use std::any::Any;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Success envelope with the default message
pub fn ok<T>(data: T) -> ApiResponse<T> {
    ApiResponse::success(data)
}

/// Success envelope with a custom message
pub fn ok_with_message<T>(data: T, message: impl Into<String>) -> ApiResponse<T> {
    ApiResponse::success_with_message(message, data)
}

/// Text of a caught panic payload
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
