//! Product API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/products/{barcode} | GET | resolve a barcode (remote, then local store) |
//! | /api/products/{barcode} | POST | register a product under the barcode |

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<AppState> {
    Router::new().route("/{barcode}", get(handler::resolve).post(handler::register))
}
