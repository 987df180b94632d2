//! Player directory: id → display name and price, built from the bulk catalog.

use reqwest::Client;
use std::collections::HashMap;
use tracing::{info, instrument};

use crate::config::Config;
use crate::constants::PRICE_SCALE;
use crate::data_fetcher::api::fetch_bootstrap;
use crate::data_fetcher::models::Element;
use crate::error::AppError;

/// A player as listed in the catalog. Price is in tenths of a currency unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub id: i64,
    pub name: String,
    pub price: i64,
}

impl From<Element> for PlayerRecord {
    fn from(element: Element) -> Self {
        PlayerRecord {
            id: element.id,
            name: element.web_name,
            price: element.now_cost,
        }
    }
}

/// Read-only lookup table of every player in the catalog.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<i64, PlayerRecord>,
}

impl PlayerDirectory {
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        elements.into_iter().map(PlayerRecord::from).collect()
    }

    /// Resolves a player id. An unknown id is a hard error.
    pub fn lookup(&self, player_id: i64) -> Result<&PlayerRecord, AppError> {
        self.players
            .get(&player_id)
            .ok_or_else(|| AppError::player_not_found(player_id))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<PlayerRecord> for PlayerDirectory {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        PlayerDirectory {
            players: iter.into_iter().map(|p| (p.id, p)).collect(),
        }
    }
}

/// Converts an API cost (tenths) into whole currency units.
pub fn price_in_units(tenths: i64) -> f64 {
    tenths as f64 / PRICE_SCALE
}

/// Fetches the bulk catalog and builds the directory.
///
/// Callers should go through [`crate::data_fetcher::cache::DirectoryCache`]
/// so the catalog is fetched once per process.
#[instrument(skip(client, config))]
pub async fn load_directory(client: &Client, config: &Config) -> Result<PlayerDirectory, AppError> {
    let bootstrap = fetch_bootstrap(client, config).await?;
    let directory = PlayerDirectory::from_elements(bootstrap.elements);
    info!("Loaded player directory with {} players", directory.len());
    Ok(directory)
}
