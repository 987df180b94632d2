pub mod api;
pub mod cache;
pub mod models;

pub use api::create_http_client_with_timeout;
pub use cache::DirectoryCache;
