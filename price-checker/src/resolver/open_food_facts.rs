use async_trait::async_trait;
use off_client::OffClient;
use shared::models::Product;

use super::{RemoteResolver, ResolveError};

#[async_trait]
impl RemoteResolver for OffClient {
    async fn resolve(&self, barcode: &str) -> Result<Option<Product>, ResolveError> {
        Ok(self.fetch_product(barcode).await?)
    }

    fn name(&self) -> &'static str {
        "open-food-facts"
    }
}
