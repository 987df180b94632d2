pub mod entry;
pub mod league;
pub mod players;

pub use entry::{ChipPlay, EntryHistoryResponse, GameweekHistory, Pick, PicksResponse, TransferEvent};
pub use league::{StandingEntry, Standings, StandingsResponse};
pub use players::{BootstrapResponse, Element};
