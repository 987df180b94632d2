use super::{Cell, GapPolicy, Pivot, Table, gameweek_columns, materialize_row};
use crate::aggregation::GameweekRecord;
use crate::constants::{columns, titles};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransfersRow {
    pub team_name: String,
    pub manager_name: String,
    /// One count per entry of [`TransfersTable::gameweeks`].
    pub gameweek_transfers: Vec<i64>,
    pub total_transfers: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransfersTable {
    pub gameweeks: Vec<u32>,
    pub rows: Vec<TransfersRow>,
}

/// Pivots transfer counts into one row per league entry, most transfers first.
///
/// Gameweeks a manager has no record for count as zero transfers.
pub fn build_transfers_table(records: &[GameweekRecord]) -> Result<TransfersTable, AppError> {
    let gameweeks = gameweek_columns(records);

    let mut pivot = Pivot::new("transfers");
    for record in records {
        let manager = &record.manager;
        pivot.insert(
            manager.entry_id,
            manager,
            &manager.team_name,
            record.gameweek,
            record.num_transfers as i64,
        )?;
    }

    let mut rows = pivot
        .into_rows()
        .into_iter()
        .map(|(manager, cells)| {
            let gameweek_transfers =
                materialize_row(&cells, &gameweeks, GapPolicy::ZeroFill, &manager.team_name)?;
            let total_transfers = gameweek_transfers.iter().sum();
            Ok(TransfersRow {
                team_name: manager.team_name.clone(),
                manager_name: manager.manager_name.clone(),
                gameweek_transfers,
                total_transfers,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    rows.sort_by(|a, b| b.total_transfers.cmp(&a.total_transfers));

    Ok(TransfersTable { gameweeks, rows })
}

impl TransfersTable {
    pub fn to_table(&self) -> Table {
        let mut header = vec![
            columns::TEAM_NAME.to_string(),
            columns::MANAGER_NAME.to_string(),
        ];
        header.extend(self.gameweeks.iter().map(|&gw| columns::gameweek(gw)));
        header.push(columns::TOTAL_TRANSFERS.to_string());

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    Cell::from(row.team_name.as_str()),
                    Cell::from(row.manager_name.as_str()),
                ];
                cells.extend(row.gameweek_transfers.iter().map(|&n| Cell::Int(n)));
                cells.push(Cell::Int(row.total_transfers));
                cells
            })
            .collect();

        Table {
            title: titles::TRANSFERS.to_string(),
            columns: header,
            rows,
        }
    }
}
