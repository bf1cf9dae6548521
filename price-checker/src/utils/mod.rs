//! Utilities - error types and logging
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`ApiResponse`] - API response envelope (from shared::error)
//! - [`logger`] - tracing setup

pub mod error;
pub mod logger;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use error::{ok, ok_with_message, panic_message};
