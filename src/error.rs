use thiserror::Error;

/// Coarse classification of [`AppError`] variants.
///
/// Every error aborts the current report; the kind only tells the caller
/// which layer failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The API could not be reached or answered with a non-success status.
    Retrieval,
    /// The API answered but the payload was not what we expected.
    Schema,
    /// A referenced player or gameweek cell could not be resolved.
    Lookup,
    Config,
    Io,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    // Aggregation errors
    #[error("Player not found in directory: id={player_id}")]
    PlayerNotFound { player_id: i64 },

    #[error("No points recorded for {team_name} in GW {gameweek}")]
    MissingGameweekPoints { team_name: String, gameweek: u32 },

    #[error("Duplicate {table} value for {team_name} in GW {gameweek}")]
    DuplicateGameweek {
        table: &'static str,
        team_name: String,
        gameweek: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a directory lookup error for an unknown player id
    pub fn player_not_found(player_id: i64) -> Self {
        Self::PlayerNotFound { player_id }
    }

    /// Create a missing points cell error (points table gap under the reject policy)
    pub fn missing_gameweek_points(team_name: impl Into<String>, gameweek: u32) -> Self {
        Self::MissingGameweekPoints {
            team_name: team_name.into(),
            gameweek,
        }
    }

    /// Create a duplicate pivot cell error
    pub fn duplicate_gameweek(
        table: &'static str,
        team_name: impl Into<String>,
        gameweek: u32,
    ) -> Self {
        Self::DuplicateGameweek {
            table,
            team_name: team_name.into(),
            gameweek,
        }
    }

    /// Classifies the error into retrieval, schema, lookup, config or I/O failures.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::ApiFetch(_)
            | AppError::ApiNotFound { .. }
            | AppError::ApiServerError { .. }
            | AppError::ApiClientError { .. }
            | AppError::ApiRateLimit { .. }
            | AppError::ApiServiceUnavailable { .. }
            | AppError::NetworkTimeout { .. }
            | AppError::NetworkConnection { .. } => ErrorKind::Retrieval,
            AppError::ApiParse(_)
            | AppError::ApiMalformedJson { .. }
            | AppError::ApiUnexpectedStructure { .. }
            | AppError::ApiNoData { .. }
            | AppError::DuplicateGameweek { .. } => ErrorKind::Schema,
            AppError::PlayerNotFound { .. } | AppError::MissingGameweekPoints { .. } => {
                ErrorKind::Lookup
            }
            AppError::Config(_)
            | AppError::TomlSerialize(_)
            | AppError::TomlDeserialize(_)
            | AppError::LogSetup(_) => ErrorKind::Config,
            AppError::Io(_) => ErrorKind::Io,
        }
    }
}
