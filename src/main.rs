// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_update};
use commands::{
    handle_config_update_command, handle_list_config_command, handle_report_command,
    handle_version_command,
};
use fpl_minileague::error::AppError;
use logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Set up logging (must be done before any logging calls)
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        return handle_version_command();
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_update(&args) {
        return handle_config_update_command(&args).await;
    }

    let result = handle_report_command(&args).await;
    if let Err(e) = &result {
        tracing::error!("Report failed ({:?}): {e}", e.kind());
    }
    result
}
