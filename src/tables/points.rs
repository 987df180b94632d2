use super::{Cell, GapPolicy, Pivot, Table, gameweek_columns, materialize_row};
use crate::aggregation::GameweekRecord;
use crate::constants::{columns, titles};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsRow {
    pub team_name: String,
    pub manager_name: String,
    pub total_points: i64,
    /// One value per entry of [`PointsTable::gameweeks`].
    pub gameweek_points: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointsTable {
    pub gameweeks: Vec<u32>,
    pub rows: Vec<PointsRow>,
}

/// Pivots gameweek points into one row per league entry, highest total first.
///
/// Rows with equal totals keep the order in which managers were collected.
pub fn build_points_table(
    records: &[GameweekRecord],
    policy: GapPolicy,
) -> Result<PointsTable, AppError> {
    let gameweeks = gameweek_columns(records);

    let mut pivot = Pivot::new("points");
    for record in records {
        let manager = &record.manager;
        pivot.insert(
            manager.entry_id,
            manager,
            &manager.team_name,
            record.gameweek,
            record.points,
        )?;
    }

    let mut rows = pivot
        .into_rows()
        .into_iter()
        .map(|(manager, cells)| {
            let gameweek_points =
                materialize_row(&cells, &gameweeks, policy, &manager.team_name)?;
            Ok(PointsRow {
                team_name: manager.team_name.clone(),
                manager_name: manager.manager_name.clone(),
                total_points: manager.total_points,
                gameweek_points,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    rows.sort_by(|a, b| b.total_points.cmp(&a.total_points));

    Ok(PointsTable { gameweeks, rows })
}

impl PointsTable {
    pub fn to_table(&self) -> Table {
        let mut header = vec![
            columns::TEAM_NAME.to_string(),
            columns::MANAGER_NAME.to_string(),
            columns::TOTAL_POINTS.to_string(),
        ];
        header.extend(self.gameweeks.iter().map(|&gw| columns::gameweek(gw)));

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    Cell::from(row.team_name.as_str()),
                    Cell::from(row.manager_name.as_str()),
                    Cell::Int(row.total_points),
                ];
                cells.extend(row.gameweek_points.iter().map(|&p| Cell::Int(p)));
                cells
            })
            .collect();

        Table {
            title: titles::POINTS.to_string(),
            columns: header,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::ManagerEntry;
    use crate::constants::NO_CHIP;

    fn record(entry_id: i64, team: &str, total: i64, gameweek: u32, points: i64) -> GameweekRecord {
        GameweekRecord {
            manager: ManagerEntry {
                entry_id,
                team_name: team.to_string(),
                manager_name: format!("{team} Manager"),
                total_points: total,
                rank: None,
            },
            gameweek,
            points,
            num_transfers: 0,
            transfers: vec![],
            chip_played: NO_CHIP.to_string(),
        }
    }

    #[test]
    fn test_points_pivot_and_order() {
        let records = vec![
            record(1, "Low", 90, 1, 50),
            record(1, "Low", 90, 2, 40),
            record(2, "High", 130, 2, 70),
            record(2, "High", 130, 1, 60),
        ];

        let table = build_points_table(&records, GapPolicy::Reject).unwrap();

        assert_eq!(table.gameweeks, vec![1, 2]);
        assert_eq!(table.rows[0].team_name, "High");
        assert_eq!(table.rows[0].gameweek_points, vec![60, 70]);
        assert_eq!(table.rows[1].team_name, "Low");
        assert_eq!(table.rows[1].gameweek_points, vec![50, 40]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let records = vec![
            record(1, "First", 100, 1, 100),
            record(2, "Second", 100, 1, 100),
            record(3, "Top", 120, 1, 120),
        ];

        let table = build_points_table(&records, GapPolicy::Reject).unwrap();
        let teams: Vec<&str> = table.rows.iter().map(|r| r.team_name.as_str()).collect();
        assert_eq!(teams, vec!["Top", "First", "Second"]);
    }

    #[test]
    fn test_missing_gameweek_rejected_by_default() {
        let records = vec![
            record(1, "Early", 100, 1, 50),
            record(1, "Early", 100, 2, 50),
            record(2, "Late", 40, 2, 40),
        ];

        let error = build_points_table(&records, GapPolicy::default()).unwrap_err();
        match error {
            AppError::MissingGameweekPoints {
                team_name,
                gameweek,
            } => {
                assert_eq!(team_name, "Late");
                assert_eq!(gameweek, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_gameweek_zero_filled_when_requested() {
        let records = vec![record(1, "Early", 100, 1, 50), record(2, "Late", 40, 2, 40)];

        let table = build_points_table(&records, GapPolicy::ZeroFill).unwrap();
        assert_eq!(table.rows[1].team_name, "Late");
        assert_eq!(table.rows[1].gameweek_points, vec![0, 40]);
    }

    #[test]
    fn test_entries_sharing_display_fields_stay_separate() {
        let records = vec![
            record(1, "Same", 100, 1, 60),
            record(1, "Same", 100, 2, 40),
            record(2, "Same", 100, 1, 30),
            record(2, "Same", 100, 2, 70),
        ];

        let table = build_points_table(&records, GapPolicy::Reject).unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].gameweek_points, vec![60, 40]);
        assert_eq!(table.rows[1].gameweek_points, vec![30, 70]);
    }

    #[test]
    fn test_duplicate_gameweek_for_one_entry_rejected() {
        let records = vec![record(1, "Twice", 100, 1, 60), record(1, "Twice", 100, 1, 40)];

        let error = build_points_table(&records, GapPolicy::Reject).unwrap_err();
        assert!(matches!(
            error,
            AppError::DuplicateGameweek {
                table: "points",
                gameweek: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_to_table_columns() {
        let records = vec![record(1, "Solo", 115, 1, 60), record(1, "Solo", 115, 2, 55)];
        let table = build_points_table(&records, GapPolicy::Reject)
            .unwrap()
            .to_table();

        assert_eq!(
            table.columns,
            vec!["Team Name", "Manager Name", "Total Points", "GW 1", "GW 2"]
        );
        assert_eq!(
            table.rows[0],
            vec![
                Cell::from("Solo"),
                Cell::from("Solo Manager"),
                Cell::Int(115),
                Cell::Int(60),
                Cell::Int(55)
            ]
        );
    }

    #[test]
    fn test_empty_records() {
        let table = build_points_table(&[], GapPolicy::Reject).unwrap();
        assert!(table.rows.is_empty());
        assert!(table.gameweeks.is_empty());
    }
}
