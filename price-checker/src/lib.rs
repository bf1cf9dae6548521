//! Price Checker - barcode product lookup station
//!
//! # Overview
//!
//! A scanned or typed barcode goes through the resolution pipeline (remote
//! product database first, then the local store). Unknown barcodes open a
//! registration form whose result is stored in memory and shown as if it
//! had been resolved.
//!
//! # Module layout
//!
//! ```text
//! price-checker/src/
//! ├── core/          # config, shared state, HTTP server
//! ├── catalog/       # product store, category directory, seed data
//! ├── resolver/      # remote resolver seam
//! ├── pipeline.rs    # remote → store fallback
//! ├── registration.rs
//! ├── session.rs     # last-initiated-wins view state
//! ├── station/       # terminal front-end
//! ├── api/           # JSON API for a browser view layer
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod pipeline;
pub mod registration;
pub mod resolver;
pub mod session;
pub mod station;
pub mod utils;

pub use catalog::{Catalog, CategoryDirectory, ProductStore};
pub use core::{AppState, Config, Server, StationMode};
pub use pipeline::{ResolutionPipeline, ResolutionSource, Resolved};
pub use registration::RegistrationService;
pub use resolver::{OfflineResolver, RemoteResolver, ResolveError};
pub use session::{LookupOutcome, LookupTicket, ScanSession, SessionView};
pub use station::Station;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Start logging as configured
pub fn setup_environment(config: &Config) {
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    if config.log_dir.is_some() {
        tracing::info!(dir = ?config.log_dir, "Writing logs to file");
    }
}

pub fn print_banner() {
    println!(
        r#"
  ___     _           ___ _           _
 | _ \_ _(_)__ ___   / __| |_  ___ __| |_____ _ _
 |  _/ '_| / _/ -_) | (__| ' \/ -_) _| / / -_) '_|
 |_| |_| |_\__\___|  \___|_||_\___\__|_\_\___|_|
    "#
    );
}
