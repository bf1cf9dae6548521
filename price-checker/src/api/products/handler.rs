//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::models::{Product, ProductRegistration};

use crate::core::AppState;
use crate::pipeline::Resolved;
use crate::utils::{ApiResponse, AppError, AppResult, ok, ok_with_message};

/// GET /api/products/{barcode} - resolve a barcode
///
/// A 404 tells the view layer to open the registration form.
pub async fn resolve(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> AppResult<ApiResponse<Resolved>> {
    let barcode = barcode.trim();
    if barcode.is_empty() {
        return Err(AppError::invalid_barcode());
    }

    state
        .pipeline
        .resolve_barcode(barcode)
        .await
        .map(ok)
        .ok_or_else(|| AppError::product_not_found(barcode))
}

/// POST /api/products/{barcode} - register a product
///
/// A body that is not a JSON registration is answered in the envelope too.
pub async fn register(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
    payload: Result<Json<ProductRegistration>, JsonRejection>,
) -> AppResult<ApiResponse<Product>> {
    let Json(form) = payload
        .map_err(|e| AppError::validation(format!("Invalid request body: {}", e.body_text())))?;
    let product = state.registration.register(&barcode, form).await?;
    Ok(ok_with_message(product, "Product registered"))
}
