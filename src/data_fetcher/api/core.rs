//! Endpoint functions for the fantasy API.
//!
//! Each function issues exactly one request against `config.api_base_url`.

use reqwest::Client;
use tracing::{debug, instrument};

use super::fetch_utils::fetch;
use super::urls::{
    build_bootstrap_url, build_history_url, build_picks_url, build_standings_url,
    build_transfers_url,
};
use crate::config::Config;
use crate::data_fetcher::models::{
    BootstrapResponse, EntryHistoryResponse, PicksResponse, StandingsResponse, TransferEvent,
};
use crate::error::AppError;

/// Fetches the bulk player catalog.
#[instrument(skip(client, config))]
pub async fn fetch_bootstrap(client: &Client, config: &Config) -> Result<BootstrapResponse, AppError> {
    let url = build_bootstrap_url(&config.api_base_url);
    let response: BootstrapResponse = fetch(client, &url).await?;
    debug!("Catalog contains {} players", response.elements.len());
    Ok(response)
}

/// Fetches the first page of a classic league's standings.
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
    league_id: u64,
) -> Result<StandingsResponse, AppError> {
    let url = build_standings_url(&config.api_base_url, league_id);
    let response: StandingsResponse = fetch(client, &url).await?;
    if response.standings.has_next {
        debug!("League {league_id} has more standings pages; only the first is read");
    }
    Ok(response)
}

/// Fetches an entry's current-season history.
#[instrument(skip(client, config))]
pub async fn fetch_entry_history(
    client: &Client,
    config: &Config,
    entry_id: i64,
) -> Result<EntryHistoryResponse, AppError> {
    let url = build_history_url(&config.api_base_url, entry_id);
    fetch(client, &url).await
}

/// Fetches an entry's squad for one gameweek.
#[instrument(skip(client, config))]
pub async fn fetch_picks(
    client: &Client,
    config: &Config,
    entry_id: i64,
    event: u32,
) -> Result<PicksResponse, AppError> {
    let url = build_picks_url(&config.api_base_url, entry_id, event);
    fetch(client, &url).await
}

/// Fetches an entry's complete transfer log.
#[instrument(skip(client, config))]
pub async fn fetch_transfers(
    client: &Client,
    config: &Config,
    entry_id: i64,
) -> Result<Vec<TransferEvent>, AppError> {
    let url = build_transfers_url(&config.api_base_url, entry_id);
    fetch(client, &url).await
}
