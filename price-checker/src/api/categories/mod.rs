//! Category API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/categories | GET | category directory |
//! | /api/categories/{id}/products | GET | products filed under a category key |

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/categories", category_routes())
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}/products", get(handler::list_products))
}
