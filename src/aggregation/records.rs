//! Per-manager, per-gameweek records produced by the collector.

use std::collections::HashMap;

use crate::data_fetcher::models::StandingEntry;

/// One league member as listed in the standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerEntry {
    pub entry_id: i64,
    pub team_name: String,
    pub manager_name: String,
    pub total_points: i64,
    pub rank: Option<i64>,
}

impl From<&StandingEntry> for ManagerEntry {
    fn from(entry: &StandingEntry) -> Self {
        ManagerEntry {
            entry_id: entry.entry,
            team_name: entry.entry_name.clone(),
            manager_name: entry.player_name.clone(),
            total_points: entry.total,
            rank: entry.rank,
        }
    }
}

/// A player on one side of a transfer, price in whole currency units.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferSide {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransferRecord {
    pub player_in: TransferSide,
    pub player_out: TransferSide,
}

/// A manager's result for one gameweek.
#[derive(Debug, Clone, PartialEq)]
pub struct GameweekRecord {
    pub manager: ManagerEntry,
    pub gameweek: u32,
    pub points: i64,
    pub num_transfers: usize,
    pub transfers: Vec<TransferRecord>,
    /// Chip name, or the literal `"None"` when no chip was played.
    pub chip_played: String,
}

/// How many managers hold each player in their latest squad.
///
/// Iteration follows the order in which players were first counted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnershipCount {
    counts: Vec<(i64, u32)>,
    index: HashMap<i64, usize>,
}

impl OwnershipCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one more holder of `player_id`.
    pub fn record(&mut self, player_id: i64) {
        self.add(player_id, 1);
    }

    fn add(&mut self, player_id: i64, count: u32) {
        match self.index.get(&player_id) {
            Some(&slot) => self.counts[slot].1 += count,
            None => {
                self.index.insert(player_id, self.counts.len());
                self.counts.push((player_id, count));
            }
        }
    }

    /// Folds another accumulator into this one, keeping first-seen order.
    pub fn merge(&mut self, other: OwnershipCount) {
        for (player_id, count) in other.counts {
            self.add(player_id, count);
        }
    }

    pub fn get(&self, player_id: i64) -> u32 {
        self.index
            .get(&player_id)
            .map(|&slot| self.counts[slot].1)
            .unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.counts.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<i64> for OwnershipCount {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut ownership = OwnershipCount::new();
        for player_id in iter {
            ownership.record(player_id);
        }
        ownership
    }
}
