//! Shared types for the price checker
//!
//! Domain models, error codes and the API response envelope used by the
//! remote client, the station front-ends and the HTTP API.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Category, CategoryKey, Product, ProductId, ProductRegistration};
