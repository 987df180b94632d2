pub mod player_cache;

pub use player_cache::DirectoryCache;
