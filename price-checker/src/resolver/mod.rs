//! Remote resolver seam
//!
//! ```text
//!         ┌─────────────────────┐
//!         │ RemoteResolver trait│  ◄── used by the pipeline
//!         └─────────┬───────────┘
//!                   │
//!          ┌────────┴────────┐
//!          ▼                 ▼
//!      OffClient        OfflineResolver
//!  (Open Food Facts)   (remote disabled)
//! ```

mod offline;
mod open_food_facts;

pub use offline::OfflineResolver;

use async_trait::async_trait;
use off_client::ClientError;
use shared::models::Product;
use thiserror::Error;

/// Remote lookup failure, distinct from "not found".
///
/// Always recoverable: the pipeline logs it and falls back to the store.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("remote lookup failed: {0}")]
    Client(#[from] ClientError),
}

/// External product database keyed by barcode.
///
/// `Ok(None)` means the source answered and does not know the barcode.
#[async_trait]
pub trait RemoteResolver: Send + Sync {
    async fn resolve(&self, barcode: &str) -> Result<Option<Product>, ResolveError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
