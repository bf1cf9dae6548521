//! API routes for the browser view layer
//!
//! - [`health`] - liveness
//! - [`products`] - barcode resolution and registration
//! - [`categories`] - category directory and per-category listings

pub mod categories;
pub mod health;
pub mod products;

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;
use crate::utils::{AppError, panic_message};

/// Full application router with state applied
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(categories::router())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Generic failure notice; the panic payload only goes to the log
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic_message(payload.as_ref());
    AppError::internal(format!("Handler panicked: {}", detail)).into_response()
}
