//! End-to-end report pipeline: directory, collection, tables.

use tracing::{info, instrument};

use crate::aggregation::{LeagueCollection, PlayerDirectory, collect};
use crate::config::Config;
use crate::data_fetcher::{DirectoryCache, create_http_client_with_timeout};
use crate::error::AppError;
use crate::tables::{
    GapPolicy, OwnershipTable, PointsTable, Table, TransferLog, TransfersTable,
    build_ownership_table, build_points_table, build_transfer_log, build_transfers_table,
};

/// Every view built for one league.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueReport {
    pub league_id: u64,
    pub points: PointsTable,
    pub transfers: TransfersTable,
    pub ownership: OwnershipTable,
    pub transfer_log: TransferLog,
}

impl LeagueReport {
    /// Points, transfers and ownership tables, in that order.
    pub fn tables(&self) -> Vec<Table> {
        vec![
            self.points.to_table(),
            self.transfers.to_table(),
            self.ownership.to_table(),
        ]
    }
}

/// Builds all views from an already collected league.
pub fn build_report_from_collection(
    league_id: u64,
    collection: &LeagueCollection,
    directory: &PlayerDirectory,
    policy: GapPolicy,
) -> Result<LeagueReport, AppError> {
    let points = build_points_table(&collection.records, policy)?;
    let transfers = build_transfers_table(&collection.records)?;
    let ownership = build_ownership_table(&collection.records, &collection.ownership, directory)?;
    let transfer_log = build_transfer_log(&collection.records);

    Ok(LeagueReport {
        league_id,
        points,
        transfers,
        ownership,
        transfer_log,
    })
}

/// Fetches everything for `league_id` and builds the report.
///
/// The player directory is loaded through `cache` before any manager is
/// processed. No partial report is returned on failure.
#[instrument(skip(config, cache))]
pub async fn build_league_report(
    config: &Config,
    league_id: u64,
    policy: GapPolicy,
    cache: &DirectoryCache,
) -> Result<LeagueReport, AppError> {
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;

    let directory = cache.get_or_load(&client, config).await?;
    let collection = collect(&client, config, league_id, &directory).await?;
    let report = build_report_from_collection(league_id, &collection, &directory, policy)?;

    info!(
        "Built report for league {}: {} managers, {} gameweeks, {} owned players",
        league_id,
        report.points.rows.len(),
        report.points.gameweeks.len(),
        report.ownership.rows.len()
    );

    Ok(report)
}
