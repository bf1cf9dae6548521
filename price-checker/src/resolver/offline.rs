use async_trait::async_trait;
use shared::models::Product;

use super::{RemoteResolver, ResolveError};

/// Resolver for stations running without a remote database.
///
/// Knows no barcode, so every lookup goes straight to the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineResolver;

#[async_trait]
impl RemoteResolver for OfflineResolver {
    async fn resolve(&self, _barcode: &str) -> Result<Option<Product>, ResolveError> {
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_knows_nothing() {
        let result = OfflineResolver.resolve("7891000055123").await.unwrap();
        assert!(result.is_none());
    }
}
