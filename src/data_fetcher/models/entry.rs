use serde::{Deserialize, Serialize};

/// Response of `entry/{id}/history/`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct EntryHistoryResponse {
    /// Current-season gameweeks, ordered by event number.
    pub current: Vec<GameweekHistory>,
    #[serde(default)]
    pub chips: Vec<ChipPlay>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GameweekHistory {
    pub event: u32,
    pub points: i64,
    /// Not part of every payload; the `chips` list is the usual source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChipPlay {
    pub name: String,
    pub event: u32,
}

/// Response of `entry/{id}/event/{event}/picks/`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PicksResponse {
    pub picks: Vec<Pick>,
    #[serde(default)]
    pub active_chip: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Pick {
    pub element: i64,
}

/// One row of `entry/{id}/transfers/`. Costs are in tenths.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TransferEvent {
    pub event: u32,
    pub element_in: i64,
    pub element_in_cost: i64,
    pub element_out: i64,
    pub element_out_cost: i64,
}
