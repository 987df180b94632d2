//! Table building and rendering from already fetched payloads, no HTTP.

use fpl_minileague::aggregation::{ManagerEntry, PlayerDirectory, build_manager_records};
use fpl_minileague::data_fetcher::models::{
    ChipPlay, Element, EntryHistoryResponse, GameweekHistory, Pick, PicksResponse, TransferEvent,
};
use fpl_minileague::report::{render_json, render_table};
use fpl_minileague::{
    AppError, ErrorKind, GapPolicy, LeagueCollection, build_report_from_collection,
};

fn directory() -> PlayerDirectory {
    PlayerDirectory::from_elements(
        [(1, "Salah", 130), (2, "Haaland", 150), (3, "Saka", 100)]
            .into_iter()
            .map(|(id, name, cost)| Element {
                id,
                web_name: name.to_string(),
                now_cost: cost,
            }),
    )
}

fn manager(entry_id: i64, team: &str, total: i64) -> ManagerEntry {
    ManagerEntry {
        entry_id,
        team_name: team.to_string(),
        manager_name: format!("{team} Boss"),
        total_points: total,
        rank: None,
    }
}

fn history(points: &[i64]) -> EntryHistoryResponse {
    EntryHistoryResponse {
        current: points
            .iter()
            .enumerate()
            .map(|(i, &p)| GameweekHistory {
                event: i as u32 + 1,
                points: p,
                chip: None,
            })
            .collect(),
        chips: vec![],
    }
}

fn picks(ids: &[i64]) -> PicksResponse {
    PicksResponse {
        picks: ids.iter().map(|&element| Pick { element }).collect(),
        active_chip: None,
    }
}

fn transfer(event: u32, element_in: i64, element_out: i64) -> TransferEvent {
    TransferEvent {
        event,
        element_in,
        element_in_cost: 100,
        element_out,
        element_out_cost: 75,
    }
}

/// Collects managers the way the collector does: records appended, ownership merged.
fn collect_offline(
    managers: Vec<(ManagerEntry, EntryHistoryResponse, PicksResponse, Vec<TransferEvent>)>,
    directory: &PlayerDirectory,
) -> Result<LeagueCollection, AppError> {
    let mut collection = LeagueCollection::default();
    for (entry, history, picks, transfers) in managers {
        let (records, ownership) =
            build_manager_records(&entry, &history, Some(&picks), &transfers, directory)?;
        collection.records.extend(records);
        collection.ownership.merge(ownership);
    }
    Ok(collection)
}

#[test]
fn test_worked_example_offline() {
    let directory = directory();
    let collection = collect_offline(
        vec![(
            manager(10, "Solo FC", 115),
            history(&[60, 55]),
            picks(&[1, 2]),
            vec![TransferEvent {
                event: 2,
                element_in: 2,
                element_in_cost: 150,
                element_out: 1,
                element_out_cost: 130,
            }],
        )],
        &directory,
    )
    .unwrap();

    let report =
        build_report_from_collection(1, &collection, &directory, GapPolicy::Reject).unwrap();

    assert_eq!(report.points.rows[0].gameweek_points, vec![60, 55]);
    assert_eq!(report.points.rows[0].total_points, 115);
    assert_eq!(report.transfers.rows[0].gameweek_transfers, vec![0, 1]);
    assert_eq!(report.transfers.rows[0].total_transfers, 1);

    let ownership: Vec<(&str, &str, f64)> = report
        .ownership
        .rows
        .iter()
        .map(|r| (r.player_name.as_str(), r.fraction.as_str(), r.percentage))
        .collect();
    assert_eq!(
        ownership,
        vec![("Salah", "1 / 1", 100.0), ("Haaland", "1 / 1", 100.0)]
    );
}

#[test]
fn test_unknown_transfer_player_is_lookup_error() {
    let directory = directory();
    let error = collect_offline(
        vec![(
            manager(10, "Solo FC", 60),
            history(&[60]),
            picks(&[1]),
            vec![transfer(1, 42, 1)],
        )],
        &directory,
    )
    .unwrap_err();

    assert!(matches!(error, AppError::PlayerNotFound { player_id: 42 }));
    assert_eq!(error.kind(), ErrorKind::Lookup);
}

#[test]
fn test_chip_from_chip_list() {
    let directory = directory();
    let mut history = history(&[50, 80]);
    history.chips = vec![ChipPlay {
        name: "3xc".to_string(),
        event: 2,
    }];

    let collection = collect_offline(
        vec![(manager(1, "Captains", 130), history, picks(&[1]), vec![])],
        &directory,
    )
    .unwrap();

    let chips: Vec<&str> = collection
        .records
        .iter()
        .map(|r| r.chip_played.as_str())
        .collect();
    assert_eq!(chips, vec!["None", "3xc"]);

    let report =
        build_report_from_collection(1, &collection, &directory, GapPolicy::Reject).unwrap();
    assert_eq!(report.transfer_log.rows.len(), 1);
    assert_eq!(report.transfer_log.rows[0].chip, "3xc");
}

#[test]
fn test_ownership_count_never_exceeds_managers() {
    let directory = directory();
    let collection = collect_offline(
        vec![
            (manager(1, "A", 100), history(&[100]), picks(&[1, 2]), vec![]),
            (manager(2, "B", 90), history(&[90]), picks(&[1, 3]), vec![]),
            (manager(3, "C", 80), history(&[80]), picks(&[1]), vec![]),
            (manager(4, "D", 70), history(&[70]), picks(&[3]), vec![]),
        ],
        &directory,
    )
    .unwrap();

    let report =
        build_report_from_collection(1, &collection, &directory, GapPolicy::Reject).unwrap();

    assert_eq!(report.ownership.total_managers, 4);
    for row in &report.ownership.rows {
        assert!(row.count as usize <= report.ownership.total_managers);
    }
    let fractions: Vec<&str> = report
        .ownership
        .rows
        .iter()
        .map(|r| r.fraction.as_str())
        .collect();
    assert_eq!(fractions, vec!["3 / 4", "2 / 4", "1 / 4"]);
    assert!(
        report
            .ownership
            .rows
            .windows(2)
            .all(|w| w[0].percentage >= w[1].percentage)
    );
}

#[test]
fn test_namesake_managers_get_their_own_rows() {
    let directory = directory();
    let collection = collect_offline(
        vec![
            (
                manager(1, "Same", 100),
                history(&[40, 60]),
                picks(&[1]),
                vec![transfer(2, 1, 3)],
            ),
            (
                manager(2, "Same", 100),
                history(&[55, 45]),
                picks(&[2]),
                vec![],
            ),
        ],
        &directory,
    )
    .unwrap();

    let report =
        build_report_from_collection(1, &collection, &directory, GapPolicy::Reject).unwrap();

    let points: Vec<&[i64]> = report
        .points
        .rows
        .iter()
        .map(|r| r.gameweek_points.as_slice())
        .collect();
    assert_eq!(points, vec![&[40, 60][..], &[55, 45][..]]);
    assert_eq!(report.transfers.rows.len(), 2);
    assert_eq!(report.transfers.rows[0].gameweek_transfers, vec![0, 1]);
    assert_eq!(report.transfers.rows[1].total_transfers, 0);
    assert_eq!(report.ownership.total_managers, 2);
}

#[test]
fn test_points_and_transfers_rows_are_non_increasing() {
    let directory = directory();
    let collection = collect_offline(
        vec![
            (
                manager(1, "Mid", 120),
                history(&[60, 60]),
                picks(&[1]),
                vec![transfer(2, 3, 1)],
            ),
            (
                manager(2, "Top", 150),
                history(&[70, 80]),
                picks(&[2]),
                vec![],
            ),
            (
                manager(3, "Busy", 90),
                history(&[40, 50]),
                picks(&[3]),
                vec![transfer(1, 3, 2), transfer(1, 2, 3), transfer(2, 1, 3)],
            ),
        ],
        &directory,
    )
    .unwrap();

    let report =
        build_report_from_collection(1, &collection, &directory, GapPolicy::Reject).unwrap();

    assert!(
        report
            .points
            .rows
            .windows(2)
            .all(|w| w[0].total_points >= w[1].total_points)
    );
    assert!(
        report
            .transfers
            .rows
            .windows(2)
            .all(|w| w[0].total_transfers >= w[1].total_transfers)
    );
    assert_eq!(report.transfers.rows[0].team_name, "Busy");
    assert_eq!(report.transfers.rows[0].gameweek_transfers, vec![2, 1]);
    assert_eq!(report.transfers.rows[2].team_name, "Top");
    assert_eq!(report.transfers.rows[2].total_transfers, 0);
}

#[test]
fn test_text_and_json_rendering() {
    let directory = directory();
    let collection = collect_offline(
        vec![(manager(1, "Solo FC", 115), history(&[60, 55]), picks(&[1]), vec![])],
        &directory,
    )
    .unwrap();
    let report =
        build_report_from_collection(1, &collection, &directory, GapPolicy::Reject).unwrap();
    let tables = report.tables();

    let mut text = Vec::new();
    for table in &tables {
        render_table(table, &mut text, false).unwrap();
    }
    let text = String::from_utf8(text).unwrap();
    assert!(text.contains("Gameweek Points Table"));
    assert!(text.contains("Solo FC"));
    assert!(text.contains("100.0"));
    assert!(!text.contains('\u{1b}'));

    let mut json = Vec::new();
    render_json(&tables, &mut json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[0]["columns"][3], "GW 1");
    assert_eq!(value[0]["rows"][0][2], 115);
    assert_eq!(value[2]["rows"][0][1], "1 / 1");
}
