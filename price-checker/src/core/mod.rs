//! Core module - configuration, shared state and the HTTP server
//!
//! - [`Config`] - station configuration from the environment
//! - [`AppState`] - catalog, pipeline and registration service
//! - [`Server`] - HTTP API server
//! - [`ServerError`] - fatal errors

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::{Config, StationMode};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::AppState;
