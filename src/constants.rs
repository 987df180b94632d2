//! Application-wide constants and configuration values
//!
//! Column names, API defaults and HTTP client tuning live here so the
//! aggregation and presentation layers agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Public Fantasy Premier League API root
pub const DEFAULT_API_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// Mini-league reported when neither config nor CLI names one
pub const DEFAULT_LEAGUE_ID: u64 = 1116305;

/// The API reports every cost in tenths of a currency unit
pub const PRICE_SCALE: f64 = 10.0;

/// Chip value recorded for a gameweek in which no chip was played
pub const NO_CHIP: &str = "None";

/// Application directory name under the platform config dir
pub const APP_DIR_NAME: &str = "fpl_minileague";

/// Default log file name
pub const LOG_FILE_NAME: &str = "fpl_minileague.log";

/// Environment variables that override config file values
pub mod env_vars {
    pub const API_BASE_URL: &str = "FPL_API_BASE_URL";
    pub const LEAGUE_ID: &str = "FPL_LEAGUE_ID";
    pub const LOG_FILE: &str = "FPL_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "FPL_HTTP_TIMEOUT";
    pub const ZERO_FILL_POINTS: &str = "FPL_ZERO_FILL_POINTS";
}

/// Human-readable table column names
pub mod columns {
    pub const TEAM_NAME: &str = "Team Name";
    pub const MANAGER_NAME: &str = "Manager Name";
    pub const TOTAL_POINTS: &str = "Total Points";
    pub const TOTAL_TRANSFERS: &str = "Total Transfers";
    pub const PLAYER_NAME: &str = "Player Name";
    pub const OWNERSHIP_FRACTION: &str = "Ownership (Fraction)";
    pub const OWNERSHIP_PERCENT: &str = "Ownership (%)";
    pub const GAMEWEEK: &str = "GW";
    pub const TRANSFER_OUT: &str = "Out";
    pub const TRANSFER_IN: &str = "In";
    pub const CHIP: &str = "Chip";

    /// Column header for a single gameweek, e.g. `GW 7`
    pub fn gameweek(gameweek: u32) -> String {
        format!("{GAMEWEEK} {gameweek}")
    }
}

/// View titles
pub mod titles {
    pub const POINTS: &str = "Gameweek Points Table";
    pub const TRANSFERS: &str = "Transfers Summary Table";
    pub const OWNERSHIP: &str = "Most-Owned Players Table";
    pub const TRANSFER_LOG: &str = "Transfer Log";
}
