// price-checker/tests/remote_fallback.rs
// Resolution pipeline over the real HTTP client and a fake product database

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use off_client::{ClientConfig, OffClient};
use price_checker::{AppState, Catalog, ResolutionSource};
use serde_json::json;
use shared::models::{ProductId, ProductRegistration};

async fn product(Path(file): Path<String>) -> Response {
    let barcode = file.strip_suffix(".json").unwrap_or(&file).to_string();
    match barcode.as_str() {
        // Known remotely and seeded locally
        "7891000055123" => Json(json!({
            "status": 1,
            "code": "7891000055123",
            "product": {"product_name": "Arroz Remoto", "brands": ""}
        }))
        .into_response(),
        // Seeded locally, remote side is broken
        "7894900011517" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response(),
        "7896004001005" => (StatusCode::OK, "not json").into_response(),
        _ => Json(json!({"status": 0, "status_verbose": "product not found"})).into_response(),
    }
}

async fn spawn_fake_database() -> String {
    let app = Router::new().route("/api/v0/product/{file}", get(product));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn state_for(base_url: &str) -> AppState {
    let client = OffClient::new(&ClientConfig::new(base_url).with_timeout_ms(500)).unwrap();
    AppState::with_resolver(Catalog::seeded(), Arc::new(client))
}

async fn unreachable_base() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_remote_takes_precedence() {
    let state = state_for(&spawn_fake_database().await);

    let resolved = state.pipeline.resolve_barcode("7891000055123").await.unwrap();
    assert_eq!(resolved.source, ResolutionSource::Remote);
    assert_eq!(resolved.product.name, "Arroz Remoto");
    assert_eq!(resolved.product.brand, "Unknown brand");
    assert_eq!(resolved.product.price, "Consult store");
    assert_eq!(
        resolved.product.id,
        ProductId::Barcode("7891000055123".to_string())
    );
}

#[tokio::test]
async fn test_remote_not_found_falls_back_to_store() {
    let state = state_for(&spawn_fake_database().await);

    let resolved = state.pipeline.resolve_barcode("7898215150154").await.unwrap();
    assert_eq!(resolved.source, ResolutionSource::Local);
    assert_eq!(resolved.product.name, "Leite Integral Italac 1L");
}

#[tokio::test]
async fn test_remote_errors_fall_back_to_store() {
    let state = state_for(&spawn_fake_database().await);

    let beans = state.pipeline.resolve_barcode("7894900011517").await.unwrap();
    assert_eq!(beans.source, ResolutionSource::Local);

    let coffee = state.pipeline.resolve_barcode("7896004001005").await.unwrap();
    assert_eq!(coffee.product.brand, "Maratá");
}

#[tokio::test]
async fn test_unreachable_remote_uses_seeded_record() {
    let state = state_for(&unreachable_base().await);

    let resolved = state.pipeline.resolve_barcode("7891000055123").await.unwrap();
    assert_eq!(resolved.source, ResolutionSource::Local);
    assert_eq!(resolved.product.name, "Arroz Tio João Tipo 1");

    assert!(state.pipeline.resolve_barcode("0000000000000").await.is_none());
}

#[tokio::test]
async fn test_not_found_then_register() {
    let state = state_for(&spawn_fake_database().await);
    assert!(state.pipeline.resolve_barcode("0000000000000").await.is_none());

    let form = ProductRegistration {
        name: "Tapioca".to_string(),
        brand: "Lisa".to_string(),
        price: "45.90".to_string(),
        category: "grãos".to_string(),
        ..Default::default()
    };
    let product = state.registration.register("0000000000000", form).await.unwrap();
    assert_eq!(product.category_name, "Grains & Cereals");
    assert!(product.in_stock);

    let resolved = state.pipeline.resolve_barcode("0000000000000").await.unwrap();
    assert_eq!(resolved.source, ResolutionSource::Local);
    assert_eq!(resolved.product, product);
}
