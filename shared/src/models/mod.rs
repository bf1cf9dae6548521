//! Data models
//!
//! Shared between the station front-ends and the HTTP API. JSON field names
//! are camelCase to match the browser view layer.

pub mod category;
pub mod product;

// Re-exports
pub use category::*;
pub use product::*;
