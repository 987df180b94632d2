use std::collections::HashSet;
use tracing::warn;

use super::{Cell, Table};
use crate::aggregation::{GameweekRecord, OwnershipCount, PlayerDirectory};
use crate::constants::{columns, titles};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct OwnershipRow {
    pub player_id: i64,
    pub player_name: String,
    pub count: u32,
    /// `"count / total_managers"`.
    pub fraction: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct OwnershipTable {
    pub total_managers: usize,
    pub rows: Vec<OwnershipRow>,
}

/// Builds the most-owned players table.
///
/// The denominator is the number of distinct managers in `records`. Rows are
/// ordered by ownership percentage, highest first; equal percentages keep the
/// order in which players were first counted.
pub fn build_ownership_table(
    records: &[GameweekRecord],
    ownership: &OwnershipCount,
    directory: &PlayerDirectory,
) -> Result<OwnershipTable, AppError> {
    let total_managers = records
        .iter()
        .map(|r| r.manager.entry_id)
        .collect::<HashSet<_>>()
        .len();

    if total_managers == 0 {
        if !ownership.is_empty() {
            warn!(
                "Ownership counted for {} players but no manager has gameweek records",
                ownership.len()
            );
        }
        return Ok(OwnershipTable::default());
    }

    let mut rows = ownership
        .iter()
        .map(|(player_id, count)| {
            let player = directory.lookup(player_id)?;
            Ok(OwnershipRow {
                player_id,
                player_name: player.name.clone(),
                count,
                fraction: format!("{count} / {total_managers}"),
                percentage: 100.0 * f64::from(count) / total_managers as f64,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    rows.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    Ok(OwnershipTable {
        total_managers,
        rows,
    })
}

impl OwnershipTable {
    pub fn to_table(&self) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    Cell::from(row.player_name.as_str()),
                    Cell::from(row.fraction.as_str()),
                    Cell::Real(row.percentage),
                ]
            })
            .collect();

        Table {
            title: titles::OWNERSHIP.to_string(),
            columns: vec![
                columns::PLAYER_NAME.to_string(),
                columns::OWNERSHIP_FRACTION.to_string(),
                columns::OWNERSHIP_PERCENT.to_string(),
            ],
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{ManagerEntry, PlayerRecord};
    use crate::constants::NO_CHIP;

    fn directory() -> PlayerDirectory {
        [(1, "Salah"), (2, "Haaland"), (3, "Saka"), (4, "Palmer")]
            .into_iter()
            .map(|(id, name)| PlayerRecord {
                id,
                name: name.to_string(),
                price: 100,
            })
            .collect()
    }

    fn record(entry_id: i64, gameweek: u32) -> GameweekRecord {
        GameweekRecord {
            manager: ManagerEntry {
                entry_id,
                team_name: format!("Team {entry_id}"),
                manager_name: format!("Manager {entry_id}"),
                total_points: 0,
                rank: None,
            },
            gameweek,
            points: 0,
            num_transfers: 0,
            transfers: vec![],
            chip_played: NO_CHIP.to_string(),
        }
    }

    #[test]
    fn test_denominator_counts_distinct_managers() {
        let records = vec![record(1, 1), record(1, 2), record(2, 1), record(2, 2)];
        let ownership: OwnershipCount = [1, 2, 1].into_iter().collect();

        let table = build_ownership_table(&records, &ownership, &directory()).unwrap();

        assert_eq!(table.total_managers, 2);
        assert_eq!(table.rows[0].player_name, "Salah");
        assert_eq!(table.rows[0].fraction, "2 / 2");
        assert_eq!(table.rows[0].percentage, 100.0);
        assert_eq!(table.rows[1].fraction, "1 / 2");
        assert_eq!(table.rows[1].percentage, 50.0);
    }

    #[test]
    fn test_ties_keep_first_counted_order() {
        let records = vec![record(1, 1), record(2, 1), record(3, 1), record(4, 1)];
        let ownership: OwnershipCount = [3, 4, 1, 2, 2].into_iter().collect();

        let table = build_ownership_table(&records, &ownership, &directory()).unwrap();
        let names: Vec<&str> = table.rows.iter().map(|r| r.player_name.as_str()).collect();

        assert_eq!(names, vec!["Haaland", "Saka", "Palmer", "Salah"]);
        assert!(
            table
                .rows
                .windows(2)
                .all(|w| w[0].percentage >= w[1].percentage)
        );
    }

    #[test]
    fn test_unknown_player_is_lookup_error() {
        let records = vec![record(1, 1)];
        let ownership: OwnershipCount = [99].into_iter().collect();

        let error = build_ownership_table(&records, &ownership, &directory()).unwrap_err();
        assert!(matches!(error, AppError::PlayerNotFound { player_id: 99 }));
    }

    #[test]
    fn test_no_managers_yields_empty_table() {
        let ownership: OwnershipCount = [1].into_iter().collect();
        let table = build_ownership_table(&[], &ownership, &directory()).unwrap();
        assert!(table.rows.is_empty());
        assert_eq!(table.total_managers, 0);
    }

    #[test]
    fn test_to_table_cells() {
        let records = vec![record(1, 1), record(2, 1), record(3, 1)];
        let ownership: OwnershipCount = [2].into_iter().collect();

        let table = build_ownership_table(&records, &ownership, &directory())
            .unwrap()
            .to_table();

        assert_eq!(
            table.columns,
            vec!["Player Name", "Ownership (Fraction)", "Ownership (%)"]
        );
        assert_eq!(table.rows[0][0], Cell::from("Haaland"));
        assert_eq!(table.rows[0][1], Cell::from("1 / 3"));
        match table.rows[0][2] {
            Cell::Real(pct) => assert!((pct - 100.0 / 3.0).abs() < 1e-9),
            ref other => panic!("expected real cell, got {other:?}"),
        }
    }
}
