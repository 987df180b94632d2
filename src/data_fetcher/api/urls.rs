//! URL building utilities for API endpoints
//!
//! Every endpoint ends with a slash; the API redirects slashless paths.

/// Builds the bulk catalog URL (players, teams, events).
///
/// # Example
/// ```
/// use fpl_minileague::data_fetcher::api::build_bootstrap_url;
///
/// let url = build_bootstrap_url("https://api.example.com");
/// assert_eq!(url, "https://api.example.com/bootstrap-static/");
/// ```
pub fn build_bootstrap_url(api_base_url: &str) -> String {
    format!("{api_base_url}/bootstrap-static/")
}

/// Builds the classic league standings URL.
///
/// # Example
/// ```
/// use fpl_minileague::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", 1116305);
/// assert_eq!(url, "https://api.example.com/leagues-classic/1116305/standings/");
/// ```
pub fn build_standings_url(api_base_url: &str, league_id: u64) -> String {
    format!("{api_base_url}/leagues-classic/{league_id}/standings/")
}

/// Builds the season history URL for one entry.
///
/// # Example
/// ```
/// use fpl_minileague::data_fetcher::api::build_history_url;
///
/// let url = build_history_url("https://api.example.com", 501);
/// assert_eq!(url, "https://api.example.com/entry/501/history/");
/// ```
pub fn build_history_url(api_base_url: &str, entry_id: i64) -> String {
    format!("{api_base_url}/entry/{entry_id}/history/")
}

/// Builds the squad picks URL for one entry and gameweek.
///
/// # Example
/// ```
/// use fpl_minileague::data_fetcher::api::build_picks_url;
///
/// let url = build_picks_url("https://api.example.com", 501, 7);
/// assert_eq!(url, "https://api.example.com/entry/501/event/7/picks/");
/// ```
pub fn build_picks_url(api_base_url: &str, entry_id: i64, event: u32) -> String {
    format!("{api_base_url}/entry/{entry_id}/event/{event}/picks/")
}

/// Builds the transfer log URL for one entry.
///
/// # Example
/// ```
/// use fpl_minileague::data_fetcher::api::build_transfers_url;
///
/// let url = build_transfers_url("https://api.example.com", 501);
/// assert_eq!(url, "https://api.example.com/entry/501/transfers/");
/// ```
pub fn build_transfers_url(api_base_url: &str, entry_id: i64) -> String {
    format!("{api_base_url}/entry/{entry_id}/transfers/")
}
