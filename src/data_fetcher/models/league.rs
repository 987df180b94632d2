use serde::{Deserialize, Serialize};

/// Response of `leagues-classic/{id}/standings/`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StandingsResponse {
    pub standings: Standings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Standings {
    #[serde(default)]
    pub has_next: bool,
    pub results: Vec<StandingEntry>,
}

/// One league member as listed in the standings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StandingEntry {
    pub entry: i64,
    pub entry_name: String,
    pub player_name: String,
    pub total: i64,
    #[serde(default)]
    pub rank: Option<i64>,
}
