pub mod http_client;
pub mod urls;
mod core;
mod fetch_utils;

pub use self::core::*;
pub use http_client::create_http_client_with_timeout;
pub use urls::*;
