use crate::cli::{Args, OutputFormat, View};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use fpl_minileague::app::{LeagueReport, build_league_report};
use fpl_minileague::config::Config;
use fpl_minileague::data_fetcher::DirectoryCache;
use fpl_minileague::error::AppError;
use fpl_minileague::report::{render_json, render_table};
use fpl_minileague::tables::{GapPolicy, Table};
use std::io::{IsTerminal, Write, stdout};
use tracing::info;

/// Prints a box around `lines`, highlighting the part after `:` when a color is given.
fn print_status_box(lines: &[(String, Option<Color>)]) -> Result<(), AppError> {
    let width = lines.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    let mut out = stdout();

    execute!(out, Print(format!("╔{:═<w$}╗\n", "", w = width + 2)))?;
    for (line, color) in lines {
        match (color, line.split_once(':')) {
            (Some(color), Some((label, value))) => {
                let value = value.trim_start();
                let fill = width.saturating_sub(label.chars().count() + 2 + value.chars().count());
                execute!(
                    out,
                    Print(format!("║ {label}: ")),
                    SetForegroundColor(*color),
                    Print(value),
                    ResetColor,
                    Print(format!("{:fill$} ║\n", ""))
                )?;
            }
            _ => execute!(out, Print(format!("║ {line:<width$} ║\n")))?,
        }
    }
    execute!(out, Print(format!("╚{:═<w$}╝\n", "", w = width + 2)))?;
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    print_status_box(&[
        ("FPL Mini-League".to_string(), None),
        (String::new(), None),
        (
            format!("Version: {}", fpl_minileague::VERSION),
            Some(Color::Green),
        ),
    ])
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-league, --set-api-url,
/// --set-log-file, --clear-log-file).
///
/// Updates start from the stored file, or defaults when there is none. An
/// existing file that fails to load is left untouched and reported. The
/// result is validated before it is written.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load_for_update().await?;

    if let Some(league_id) = args.new_league_id {
        config.league_id = league_id;
    }

    if let Some(api_url) = &args.new_api_url {
        config.api_base_url = api_url.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn selected_tables(report: &LeagueReport, view: View) -> Vec<Table> {
    match view {
        View::Points => vec![report.points.to_table()],
        View::Transfers => vec![report.transfers.to_table()],
        View::Ownership => vec![report.ownership.to_table()],
        View::TransfersLog => vec![report.transfer_log.to_table()],
        View::All => report.tables(),
    }
}

/// Builds the league report and prints the requested views.
pub async fn handle_report_command(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;

    let league_id = args.league.unwrap_or(config.league_id);
    if league_id == 0 {
        return Err(AppError::config_error("League id must be greater than zero"));
    }

    let policy = if args.zero_fill_points || config.zero_fill_points {
        GapPolicy::ZeroFill
    } else {
        GapPolicy::Reject
    };

    let cache = DirectoryCache::new();
    let report = build_league_report(&config, league_id, policy, &cache).await?;
    let tables = selected_tables(&report, args.view);

    let mut out = stdout().lock();
    match args.format {
        OutputFormat::Json => render_json(&tables, &mut out)?,
        OutputFormat::Text => {
            let color = out.is_terminal();
            for (i, table) in tables.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                render_table(table, &mut out, color)?;
            }
        }
    }

    info!("Printed {} table(s) for league {}", tables.len(), league_id);
    Ok(())
}
