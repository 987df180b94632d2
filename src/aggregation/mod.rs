//! Turns raw league payloads into per-manager gameweek records.

pub mod collector;
pub mod directory;
pub mod records;

pub use collector::{LeagueCollection, build_manager_records, collect};
pub use directory::{PlayerDirectory, PlayerRecord, load_directory, price_in_units};
pub use records::{GameweekRecord, ManagerEntry, OwnershipCount, TransferRecord, TransferSide};
