//! HTTP client for the Open Food Facts product API

use crate::types::ProductResponse;
use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, Url};
use shared::models::Product;
use std::time::Duration;

/// HTTP client for barcode lookups against Open Food Facts (API v0)
#[derive(Debug, Clone)]
pub struct OffClient {
    client: Client,
    base_url: Url,
}

impl OffClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{}: cannot be a base",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base}/api/v0/product/{barcode}.json`, with the barcode encoded as a
    /// single path segment
    fn product_url(&self, barcode: &str) -> ClientResult<Url> {
        let file = format!("{}.json", barcode);
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "v0", "product", file.as_str()]);
        Ok(url)
    }

    /// Look up a barcode
    ///
    /// `Ok(None)` means the database answered and does not know the barcode
    /// (status flag 0, missing record, or HTTP 404). Transport failures,
    /// other non-success statuses and unparseable bodies are errors.
    pub async fn fetch_product(&self, barcode: &str) -> ClientResult<Option<Product>> {
        let url = self.product_url(barcode)?;
        tracing::debug!(%url, "Querying remote product database");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let parsed: ProductResponse = serde_json::from_str(&text)?;
        Ok(parsed.into_product(barcode))
    }
}
