//! Open Food Facts client
//!
//! Resolves barcodes against the public product database and normalizes its
//! records into [`shared::models::Product`].

pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use http::OffClient;
