//! Wide per-gameweek tables built from collected gameweek records.
//!
//! Each builder produces a typed table which converts into a generic
//! [`Table`] of typed [`Cell`]s for presentation.

pub mod ownership;
pub mod points;
pub mod transfer_log;
pub mod transfers;

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::Hash;

use crate::aggregation::GameweekRecord;
use crate::error::AppError;

pub use ownership::{OwnershipRow, OwnershipTable, build_ownership_table};
pub use points::{PointsRow, PointsTable, build_points_table};
pub use transfer_log::{TransferLog, TransferLogRow, build_transfer_log};
pub use transfers::{TransfersRow, TransfersTable, build_transfers_table};

/// What to do with a (manager, gameweek) cell that has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Fail the build, naming the team and gameweek.
    #[default]
    Reject,
    /// Treat the missing cell as zero.
    ZeroFill,
}

/// A single typed table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Int(i64),
    Real(f64),
}

impl Cell {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Real(_))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Real(value)
    }
}

/// Presentation-ready table: named columns and rows of typed cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Sorted set of every gameweek present in the records.
pub(crate) fn gameweek_columns(records: &[GameweekRecord]) -> Vec<u32> {
    records
        .iter()
        .map(|r| r.gameweek)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// First pass of a pivot: row key → (label, gameweek → value), rows kept in
/// first-appearance order. The label is taken from the first insert for a key.
pub(crate) struct Pivot<K, L> {
    table: &'static str,
    order: Vec<K>,
    cells: HashMap<K, (L, BTreeMap<u32, i64>)>,
}

impl<K: Eq + Hash + Clone, L> Pivot<K, L> {
    pub(crate) fn new(table: &'static str) -> Self {
        Pivot {
            table,
            order: Vec::new(),
            cells: HashMap::new(),
        }
    }

    /// Stores one cell. A second value for the same row and gameweek is rejected.
    pub(crate) fn insert(
        &mut self,
        key: K,
        label: L,
        team_name: &str,
        gameweek: u32,
        value: i64,
    ) -> Result<(), AppError> {
        let (_, row) = match self.cells.get_mut(&key) {
            Some(row) => row,
            None => {
                self.order.push(key.clone());
                self.cells.entry(key).or_insert((label, BTreeMap::new()))
            }
        };
        if row.insert(gameweek, value).is_some() {
            return Err(AppError::duplicate_gameweek(self.table, team_name, gameweek));
        }
        Ok(())
    }

    /// Rows in first-appearance order with their labels and gameweek cells.
    pub(crate) fn into_rows(mut self) -> Vec<(L, BTreeMap<u32, i64>)> {
        self.order
            .iter()
            .filter_map(|key| self.cells.remove(key))
            .collect()
    }
}

/// Second pass of a pivot: one value per gameweek column under `policy`.
pub(crate) fn materialize_row(
    row: &BTreeMap<u32, i64>,
    gameweeks: &[u32],
    policy: GapPolicy,
    team_name: &str,
) -> Result<Vec<i64>, AppError> {
    gameweeks
        .iter()
        .map(|gameweek| match (row.get(gameweek), policy) {
            (Some(&value), _) => Ok(value),
            (None, GapPolicy::ZeroFill) => Ok(0),
            (None, GapPolicy::Reject) => {
                Err(AppError::missing_gameweek_points(team_name, *gameweek))
            }
        })
        .collect()
}
