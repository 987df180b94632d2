use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Which report views to print.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    Points,
    Transfers,
    Ownership,
    TransfersLog,
    /// Points, transfers and ownership tables.
    #[default]
    All,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Returns true when the arguments only touch the config file.
pub fn is_config_update(args: &Args) -> bool {
    args.new_league_id.is_some()
        || args.new_api_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Fantasy Premier League mini-league summary
///
/// Fetches every member of a classic mini-league and prints gameweek points,
/// transfer counts and the most-owned players in the league.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Mini-league id to report on. Overrides the configured league for this run.
    #[arg(long = "league", short = 'L', value_name = "ID")]
    pub league: Option<u64>,

    /// Which view to print.
    #[arg(
        long = "view",
        value_enum,
        default_value_t = View::All,
        help_heading = "Display Options"
    )]
    pub view: View,

    /// Output format.
    #[arg(
        long = "format",
        short = 'f',
        value_enum,
        default_value_t = OutputFormat::Text,
        help_heading = "Display Options"
    )]
    pub format: OutputFormat,

    /// Show 0 for gameweeks a manager has no points record for instead of failing.
    #[arg(long = "zero-fill-points", help_heading = "Display Options")]
    pub zero_fill_points: bool,

    /// Set the default mini-league id in config.
    #[arg(long = "set-league", value_name = "ID", help_heading = "Configuration")]
    pub new_league_id: Option<u64>,

    /// Set the API base URL in config.
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Also write logs to the terminal.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
