// off-client/tests/open_food_facts.rs
// Client behavior against a local fake of the product database

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use off_client::{ClientConfig, ClientError, OffClient};
use serde_json::json;
use std::time::Duration;

async fn product(Path(file): Path<String>) -> Response {
    let barcode = file.strip_suffix(".json").unwrap_or(&file).to_string();
    match barcode.as_str() {
        "3017620429484" => Json(json!({
            "status": 1,
            "code": "3017620429484",
            "product": {
                "product_name": "Nutella",
                "brands": "Ferrero",
                "ingredients_text": "Sugar, palm oil, hazelnuts",
                "image_front_url": "https://images.example/nutella.jpg"
            }
        }))
        .into_response(),
        "404404" => StatusCode::NOT_FOUND.into_response(),
        "500500" => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        "badjson" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({"status": 0})).into_response()
        }
        _ => Json(json!({
            "status": 0,
            "status_verbose": "product not found",
            "code": barcode
        }))
        .into_response(),
    }
}

async fn spawn_fake_server() -> String {
    let app = Router::new().route("/api/v0/product/{file}", get(product));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> OffClient {
    OffClient::new(&ClientConfig::new(base_url).with_timeout_ms(500)).unwrap()
}

#[tokio::test]
async fn test_found_product_is_normalized() {
    let base = spawn_fake_server().await;
    let client = client_for(&base);

    let product = client.fetch_product("3017620429484").await.unwrap().unwrap();
    assert_eq!(product.name, "Nutella");
    assert_eq!(product.brand, "Ferrero");
    assert_eq!(product.description, "Sugar, palm oil, hazelnuts");
    assert_eq!(
        product.image.as_deref(),
        Some("https://images.example/nutella.jpg")
    );
    assert_eq!(product.category_name, "General Foods");
}

#[tokio::test]
async fn test_status_zero_is_not_found() {
    let base = spawn_fake_server().await;
    let client = client_for(&base);

    assert!(client.fetch_product("0000000000000").await.unwrap().is_none());
}

#[tokio::test]
async fn test_http_404_is_not_found() {
    let base = spawn_fake_server().await;
    let client = client_for(&base);

    assert!(client.fetch_product("404404").await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_is_resolution_error() {
    let base = spawn_fake_server().await;
    let client = client_for(&base);

    let err = client.fetch_product("500500").await.unwrap_err();
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_resolution_error() {
    let base = spawn_fake_server().await;
    let client = client_for(&base);

    let err = client.fetch_product("badjson").await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_timeout_is_resolution_error() {
    let base = spawn_fake_server().await;
    let client = OffClient::new(&ClientConfig::new(&base).with_timeout_ms(100)).unwrap();

    let err = client.fetch_product("slow").await.unwrap_err();
    match err {
        ClientError::Http(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_refused_is_resolution_error() {
    // Reserve a port, then free it so nothing listens there
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let err = client.fetch_product("7891000055123").await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
