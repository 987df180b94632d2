//! Once-per-process player directory cache

use reqwest::Client;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{debug, instrument};

use crate::aggregation::directory::{PlayerDirectory, load_directory};
use crate::config::Config;
use crate::error::AppError;

/// Holds the player directory after its first successful load.
///
/// The catalog is fetched at most once; every later call hands out the same
/// read-only directory. A failed load leaves the cell empty.
#[derive(Debug, Default)]
pub struct DirectoryCache {
    cell: OnceCell<Arc<PlayerDirectory>>,
}

impl DirectoryCache {
    pub const fn new() -> Self {
        DirectoryCache {
            cell: OnceCell::const_new(),
        }
    }

    /// Creates a cache that is already populated, e.g. from a fixture.
    pub fn with_directory(directory: PlayerDirectory) -> Self {
        DirectoryCache {
            cell: OnceCell::new_with(Some(Arc::new(directory))),
        }
    }

    /// Returns the cached directory, loading it from the API on first use.
    #[instrument(skip(self, client, config))]
    pub async fn get_or_load(
        &self,
        client: &Client,
        config: &Config,
    ) -> Result<Arc<PlayerDirectory>, AppError> {
        if let Some(directory) = self.cell.get() {
            debug!("Player directory cache hit ({} players)", directory.len());
        }
        self.cell
            .get_or_try_init(|| async {
                load_directory(client, config).await.map(Arc::new)
            })
            .await
            .cloned()
    }

    /// Returns the directory if it has been loaded.
    pub fn get(&self) -> Option<Arc<PlayerDirectory>> {
        self.cell.get().cloned()
    }
}
