//! Category API Handlers

use axum::extract::{Path, State};
use shared::models::{Category, Product};

use crate::core::AppState;
use crate::utils::{ApiResponse, AppResult, ok};

/// GET /api/categories - all categories in display order
pub async fn list(State(state): State<AppState>) -> ApiResponse<Vec<Category>> {
    ok(state.catalog.categories().to_vec())
}

/// GET /api/categories/{id}/products - products under a category key
pub async fn list_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Vec<Product>>> {
    state.catalog.products_in_category(&id).map(ok)
}
