use std::sync::Arc;

use off_client::ClientConfig;

use crate::catalog::Catalog;
use crate::core::Config;
use crate::pipeline::ResolutionPipeline;
use crate::registration::RegistrationService;
use crate::resolver::{OfflineResolver, RemoteResolver};
use crate::utils::{AppError, AppResult};

/// Station state shared by the terminal front-end and the HTTP API
///
/// | Field | Meaning |
/// |-------|---------|
/// | catalog | product store and category directory |
/// | pipeline | remote → store lookups over the catalog's store |
/// | registration | appends to the same store |
///
/// Cloning is cheap; all clones see the same store.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub pipeline: ResolutionPipeline,
    pub registration: RegistrationService,
}

impl AppState {
    /// Seeded catalog plus the resolver selected by `config`
    pub fn initialize(config: &Config) -> AppResult<Self> {
        let remote: Arc<dyn RemoteResolver> = if config.remote_lookup {
            let client = ClientConfig::new(&config.off_base_url)
                .with_timeout_ms(config.remote_timeout_ms)
                .build_client()
                .map_err(|e| AppError::config(format!("Remote client: {}", e)))?;
            tracing::info!(base_url = client.base_url(), "Remote lookups enabled");
            Arc::new(client)
        } else {
            tracing::info!("Remote lookups disabled, resolving from the local store only");
            Arc::new(OfflineResolver)
        };

        Ok(Self::with_resolver(Catalog::seeded(), remote))
    }

    pub fn with_resolver(catalog: Catalog, remote: Arc<dyn RemoteResolver>) -> Self {
        Self {
            pipeline: catalog.pipeline(remote),
            registration: catalog.registration(),
            catalog,
        }
    }
}
