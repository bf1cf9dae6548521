//! Resolution Pipeline
//!
//! Single entry point for barcode lookups:
//!
//! ```text
//! barcode ─► RemoteResolver ─┬─ Some ──────────────► Remote
//!                            └─ None / Err ─► Store ─┬─ Some ─► Local
//!                                                    └─ None ─► not found
//! ```
//!
//! Remote data takes precedence over local entries. Remote failures are
//! logged and absorbed; callers only ever see a product or "not found".

use std::sync::Arc;

use serde::Serialize;
use shared::models::Product;

use crate::catalog::ProductStore;
use crate::resolver::RemoteResolver;

/// Which source answered a lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Remote,
    Local,
}

/// A resolved product and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved {
    pub product: Product,
    pub source: ResolutionSource,
}

#[derive(Clone)]
pub struct ResolutionPipeline {
    remote: Arc<dyn RemoteResolver>,
    store: Arc<ProductStore>,
}

impl std::fmt::Debug for ResolutionPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionPipeline")
            .field("remote", &self.remote.name())
            .field("store", &self.store)
            .finish()
    }
}

impl ResolutionPipeline {
    pub fn new(remote: Arc<dyn RemoteResolver>, store: Arc<ProductStore>) -> Self {
        Self { remote, store }
    }

    /// Resolve `barcode`, or `None` when no source knows it.
    ///
    /// Input is trimmed; a blank barcode resolves to `None` without any
    /// network call.
    pub async fn resolve_barcode(&self, barcode: &str) -> Option<Resolved> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return None;
        }

        match self.remote.resolve(barcode).await {
            Ok(Some(product)) => {
                tracing::info!(barcode, source = self.remote.name(), "Resolved remotely");
                return Some(Resolved {
                    product,
                    source: ResolutionSource::Remote,
                });
            }
            Ok(None) => {
                tracing::debug!(barcode, "Remote database does not know barcode");
            }
            Err(e) => {
                tracing::warn!(barcode, error = %e, "Remote lookup failed, using local store");
            }
        }

        match self.store.find_by_barcode(barcode) {
            Some(product) => {
                tracing::info!(barcode, "Resolved from local store");
                Some(Resolved {
                    product,
                    source: ResolutionSource::Local,
                })
            }
            None => {
                tracing::info!(barcode, "Barcode not found");
                None
            }
        }
    }
}
