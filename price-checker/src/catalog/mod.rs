//! Catalog - the station's product data
//!
//! # Contents
//!
//! - [`ProductStore`] - ordered product sequence, grows via registration
//! - [`CategoryDirectory`] - fixed category metadata
//! - [`seed`] - initial products and categories
//!
//! [`Catalog`] owns both and hands out the pipeline and registration
//! service wired to the same store.

pub mod directory;
pub mod seed;
pub mod store;

pub use directory::CategoryDirectory;
pub use store::ProductStore;

use std::sync::Arc;

use shared::models::{Category, Product};

use crate::pipeline::ResolutionPipeline;
use crate::registration::RegistrationService;
use crate::resolver::RemoteResolver;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct Catalog {
    store: Arc<ProductStore>,
    directory: Arc<CategoryDirectory>,
}

impl Catalog {
    pub fn new(store: ProductStore, directory: CategoryDirectory) -> Self {
        Self {
            store: Arc::new(store),
            directory: Arc::new(directory),
        }
    }

    /// Catalog with the seed products and categories
    pub fn seeded() -> Self {
        Self::new(
            ProductStore::with_products(seed::products()),
            CategoryDirectory::new(seed::categories()),
        )
    }

    pub fn store(&self) -> &Arc<ProductStore> {
        &self.store
    }

    pub fn directory(&self) -> &CategoryDirectory {
        &self.directory
    }

    pub fn categories(&self) -> &[Category] {
        self.directory.list_all()
    }

    /// Products filed under `id`.
    ///
    /// Keys outside the directory are accepted as long as some product
    /// carries them, since registration keeps the caller's raw key.
    pub fn products_in_category(&self, id: &str) -> AppResult<Vec<Product>> {
        let products = self.store.list_by_category(id);
        if products.is_empty() && self.directory.get(id).is_none() {
            return Err(AppError::category_not_found(id));
        }
        Ok(products)
    }

    pub fn pipeline(&self, remote: Arc<dyn RemoteResolver>) -> ResolutionPipeline {
        ResolutionPipeline::new(remote, self.store.clone())
    }

    pub fn registration(&self) -> RegistrationService {
        RegistrationService::new(self.store.clone())
    }
}
