//! Fantasy Premier League mini-league summaries
//!
//! This library fetches every member of a classic mini-league from the public
//! fantasy API and reshapes their gameweek history, latest squad and transfer
//! log into wide summary tables: gameweek points, transfer counts and the most
//! owned players in the league.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fpl_minileague::app::build_league_report;
//! use fpl_minileague::config::Config;
//! use fpl_minileague::data_fetcher::DirectoryCache;
//! use fpl_minileague::error::AppError;
//! use fpl_minileague::report::render_table;
//! use fpl_minileague::tables::GapPolicy;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let cache = DirectoryCache::new();
//!
//!     let report = build_league_report(&config, config.league_id, GapPolicy::Reject, &cache).await?;
//!
//!     let mut stdout = std::io::stdout();
//!     for table in report.tables() {
//!         render_table(&table, &mut stdout, false)?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod app;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;
pub mod tables;

// Re-export commonly used types for convenience
pub use aggregation::{GameweekRecord, LeagueCollection, OwnershipCount, PlayerDirectory};
pub use app::{LeagueReport, build_league_report, build_report_from_collection};
pub use config::Config;
pub use data_fetcher::DirectoryCache;
pub use error::{AppError, ErrorKind};
pub use tables::{Cell, GapPolicy, Table};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
