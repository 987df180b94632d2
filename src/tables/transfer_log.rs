//! Chronological listing of every transfer and chip, one line each.

use super::{Cell, Table};
use crate::aggregation::{GameweekRecord, TransferSide};
use crate::constants::{NO_CHIP, columns, titles};

#[derive(Debug, Clone, PartialEq)]
pub struct TransferLogRow {
    pub team_name: String,
    pub gameweek: u32,
    pub player_out: Option<TransferSide>,
    pub player_in: Option<TransferSide>,
    pub chip: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransferLog {
    pub rows: Vec<TransferLogRow>,
}

/// Lists transfers in record order. A gameweek with a chip but no transfers
/// still gets a single line with both sides empty.
pub fn build_transfer_log(records: &[GameweekRecord]) -> TransferLog {
    let mut rows = Vec::new();

    for record in records {
        let team_name = &record.manager.team_name;
        if record.transfers.is_empty() {
            if record.chip_played != NO_CHIP {
                rows.push(TransferLogRow {
                    team_name: team_name.clone(),
                    gameweek: record.gameweek,
                    player_out: None,
                    player_in: None,
                    chip: record.chip_played.clone(),
                });
            }
            continue;
        }

        rows.extend(record.transfers.iter().map(|transfer| TransferLogRow {
            team_name: team_name.clone(),
            gameweek: record.gameweek,
            player_out: Some(transfer.player_out.clone()),
            player_in: Some(transfer.player_in.clone()),
            chip: record.chip_played.clone(),
        }));
    }

    TransferLog { rows }
}

fn side_cell(side: &Option<TransferSide>) -> Cell {
    match side {
        Some(side) => Cell::Text(format!("{} ({:.1})", side.name, side.price)),
        None => Cell::Text(String::new()),
    }
}

impl TransferLog {
    pub fn to_table(&self) -> Table {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    Cell::from(row.team_name.as_str()),
                    Cell::Int(i64::from(row.gameweek)),
                    side_cell(&row.player_out),
                    side_cell(&row.player_in),
                    Cell::from(row.chip.as_str()),
                ]
            })
            .collect();

        Table {
            title: titles::TRANSFER_LOG.to_string(),
            columns: vec![
                columns::TEAM_NAME.to_string(),
                columns::GAMEWEEK.to_string(),
                columns::TRANSFER_OUT.to_string(),
                columns::TRANSFER_IN.to_string(),
                columns::CHIP.to_string(),
            ],
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{ManagerEntry, TransferRecord};

    fn side(name: &str, price: f64) -> TransferSide {
        TransferSide {
            name: name.to_string(),
            price,
        }
    }

    fn record(gameweek: u32, transfers: Vec<TransferRecord>, chip: &str) -> GameweekRecord {
        GameweekRecord {
            manager: ManagerEntry {
                entry_id: 1,
                team_name: "Klopp's Kids".to_string(),
                manager_name: "Ann Lee".to_string(),
                total_points: 0,
                rank: None,
            },
            gameweek,
            points: 0,
            num_transfers: transfers.len(),
            transfers,
            chip_played: chip.to_string(),
        }
    }

    #[test]
    fn test_one_row_per_transfer_and_chip_only_rows() {
        let records = vec![
            record(1, vec![], NO_CHIP),
            record(
                2,
                vec![
                    TransferRecord {
                        player_in: side("Haaland", 15.0),
                        player_out: side("Salah", 13.0),
                    },
                    TransferRecord {
                        player_in: side("Saka", 10.0),
                        player_out: side("Palmer", 7.5),
                    },
                ],
                NO_CHIP,
            ),
            record(3, vec![], "wildcard"),
        ];

        let log = build_transfer_log(&records);

        assert_eq!(log.rows.len(), 3);
        assert_eq!(log.rows[0].player_out, Some(side("Salah", 13.0)));
        assert_eq!(log.rows[1].player_in, Some(side("Saka", 10.0)));
        assert_eq!(log.rows[2].gameweek, 3);
        assert_eq!(log.rows[2].player_in, None);
        assert_eq!(log.rows[2].chip, "wildcard");
    }

    #[test]
    fn test_to_table_formats_prices() {
        let records = vec![record(
            4,
            vec![TransferRecord {
                player_in: side("Saka", 10.0),
                player_out: side("Palmer", 7.5),
            }],
            "3xc",
        )];

        let table = build_transfer_log(&records).to_table();

        assert_eq!(table.columns, vec!["Team Name", "GW", "Out", "In", "Chip"]);
        assert_eq!(
            table.rows[0],
            vec![
                Cell::from("Klopp's Kids"),
                Cell::Int(4),
                Cell::from("Palmer (7.5)"),
                Cell::from("Saka (10.0)"),
                Cell::from("3xc")
            ]
        );
    }

    #[test]
    fn test_quiet_season_has_no_rows() {
        let records = vec![record(1, vec![], NO_CHIP), record(2, vec![], NO_CHIP)];
        assert!(build_transfer_log(&records).rows.is_empty());
    }
}
