//! Manager event collector: walks the league standings and turns each
//! member's history, latest squad and transfer log into gameweek records.

use reqwest::Client;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

use super::directory::{PlayerDirectory, price_in_units};
use super::records::{GameweekRecord, ManagerEntry, OwnershipCount, TransferRecord, TransferSide};
use crate::config::Config;
use crate::constants::NO_CHIP;
use crate::data_fetcher::api::{fetch_entry_history, fetch_picks, fetch_standings, fetch_transfers};
use crate::data_fetcher::models::{EntryHistoryResponse, GameweekHistory, PicksResponse, TransferEvent};
use crate::error::AppError;

/// Everything collected for a league, in standings order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeagueCollection {
    /// Manager-major, gameweek-minor.
    pub records: Vec<GameweekRecord>,
    pub ownership: OwnershipCount,
}

/// Collects records for every member of `league_id`.
///
/// Managers are processed one after another; any failed request or
/// unresolved player aborts the whole collection.
#[instrument(skip(client, config, directory))]
pub async fn collect(
    client: &Client,
    config: &Config,
    league_id: u64,
    directory: &PlayerDirectory,
) -> Result<LeagueCollection, AppError> {
    let standings = fetch_standings(client, config, league_id).await?;
    let members = &standings.standings.results;
    info!("League {} has {} members", league_id, members.len());

    let mut collection = LeagueCollection::default();

    for standing in members {
        let manager = ManagerEntry::from(standing);
        debug!(
            "Collecting entry {} ({})",
            manager.entry_id, manager.team_name
        );

        let history = fetch_entry_history(client, config, manager.entry_id).await?;

        let picks = match history.current.last() {
            Some(latest) => Some(fetch_picks(client, config, manager.entry_id, latest.event).await?),
            None => {
                warn!(
                    "Entry {} ({}) has no gameweek history yet; skipping picks",
                    manager.entry_id, manager.team_name
                );
                None
            }
        };

        let transfers = fetch_transfers(client, config, manager.entry_id).await?;

        let (records, ownership) =
            build_manager_records(&manager, &history, picks.as_ref(), &transfers, directory)?;

        collection.records.extend(records);
        collection.ownership.merge(ownership);
    }

    info!(
        "Collected {} gameweek records and {} owned players",
        collection.records.len(),
        collection.ownership.len()
    );

    Ok(collection)
}

/// Builds one manager's gameweek records and squad ownership from fetched payloads.
///
/// `picks` must be the squad of the last gameweek in `history`. Every picked
/// or transferred player must resolve in `directory`.
pub fn build_manager_records(
    manager: &ManagerEntry,
    history: &EntryHistoryResponse,
    picks: Option<&PicksResponse>,
    transfers: &[TransferEvent],
    directory: &PlayerDirectory,
) -> Result<(Vec<GameweekRecord>, OwnershipCount), AppError> {
    let mut ownership = OwnershipCount::new();
    if let Some(picks) = picks {
        for pick in &picks.picks {
            directory.lookup(pick.element)?;
            ownership.record(pick.element);
        }
    }

    let mut transfers_by_gameweek = group_transfers(transfers, directory)?;

    let records = history
        .current
        .iter()
        .map(|gameweek| {
            let transfers = transfers_by_gameweek
                .remove(&gameweek.event)
                .unwrap_or_default();
            GameweekRecord {
                manager: manager.clone(),
                gameweek: gameweek.event,
                points: gameweek.points,
                num_transfers: transfers.len(),
                transfers,
                chip_played: chip_for(gameweek, history),
            }
        })
        .collect();

    if !transfers_by_gameweek.is_empty() {
        debug!(
            "Entry {} has transfers for gameweeks outside its history: {:?}",
            manager.entry_id,
            transfers_by_gameweek.keys().collect::<Vec<_>>()
        );
    }

    Ok((records, ownership))
}

/// Groups the transfer log by gameweek, keeping log order within a gameweek.
fn group_transfers(
    transfers: &[TransferEvent],
    directory: &PlayerDirectory,
) -> Result<BTreeMap<u32, Vec<TransferRecord>>, AppError> {
    let mut grouped: BTreeMap<u32, Vec<TransferRecord>> = BTreeMap::new();
    for transfer in transfers {
        let record = TransferRecord {
            player_in: TransferSide {
                name: directory.lookup(transfer.element_in)?.name.clone(),
                price: price_in_units(transfer.element_in_cost),
            },
            player_out: TransferSide {
                name: directory.lookup(transfer.element_out)?.name.clone(),
                price: price_in_units(transfer.element_out_cost),
            },
        };
        grouped.entry(transfer.event).or_default().push(record);
    }
    Ok(grouped)
}

fn chip_for(gameweek: &GameweekHistory, history: &EntryHistoryResponse) -> String {
    gameweek
        .chip
        .clone()
        .or_else(|| {
            history
                .chips
                .iter()
                .find(|chip| chip.event == gameweek.event)
                .map(|chip| chip.name.clone())
        })
        .unwrap_or_else(|| NO_CHIP.to_string())
}
