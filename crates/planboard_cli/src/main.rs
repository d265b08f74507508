//! Command-line entry point for the planning core.
//!
//! # Responsibility
//! - Load a snapshot file, import it and print the week grid or the
//!   sync issues it produced.
//! - Own the wall clock; the core only sees injected dates.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use log::info;
use planboard_core::schedule::week::today_utc;
use planboard_core::service::grid_service::{CellEntry, WeekGrid};
use planboard_core::{
    default_log_level, init_logging, LogTarget, PlannerConfig, SnapshotImporter, WeekGridService,
};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "planboard")]
#[command(version)]
#[command(about = "Inspect staffing snapshots as a weekly grid", long_about = None)]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rotated log files; stderr when omitted.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prints the staffing grid for one week
    Grid {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Weeks relative to the current one
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        week_offset: i32,

        /// Overrides today's date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Planner config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the grid as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Imports a snapshot and lists every sync issue
    Validate {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Planner config JSON file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let target = LogTarget::from_option(cli.log_dir.as_deref()).map_err(anyhow::Error::msg)?;
    init_logging(level, target).map_err(anyhow::Error::msg)?;

    match cli.command {
        Commands::Grid {
            snapshot,
            week_offset,
            today,
            config,
            json,
        } => {
            let config = load_config(config.as_deref())?;
            let outcome = SnapshotImporter::new(&config).import(&read_snapshot(&snapshot)?, Utc::now());
            for issue in &outcome.issues {
                eprintln!("warning: [{}] {}: {}", issue.source.as_str(), issue.code, issue.message);
            }

            let today = today.unwrap_or_else(today_utc);
            let grid = WeekGridService::new(&outcome.board, &config).build_week_grid(today, week_offset)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print!("{}", render_grid(&grid));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate { snapshot, config } => {
            let config = load_config(config.as_deref())?;
            let outcome = SnapshotImporter::new(&config).import(&read_snapshot(&snapshot)?, Utc::now());
            let stats = outcome.stats;
            println!(
                "contacts={}/{} projects={}/{} assignments={}/{} reported_issues={}",
                stats.contacts.accepted,
                stats.contacts.accepted + stats.contacts.rejected,
                stats.projects.accepted,
                stats.projects.accepted + stats.projects.rejected,
                stats.assignments.accepted,
                stats.assignments.accepted + stats.assignments.rejected,
                stats.sync_issues.accepted
            );
            for issue in &outcome.issues {
                println!("[{}] {} {}: {}", issue.source.as_str(), issue.timestamp, issue.code, issue.message);
            }
            info!("event=cli_validate module=cli status=ok issues={}", outcome.issues.len());
            Ok(if outcome.issues.is_empty() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            })
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    match path {
        Some(path) => Ok(PlannerConfig::load(path)?),
        None => Ok(PlannerConfig::default()),
    }
}

fn read_snapshot(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot `{}`", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("snapshot `{}` is not valid JSON", path.display()))?;
    if !value.is_object() {
        bail!("snapshot `{}` must contain a JSON object", path.display());
    }
    Ok(value)
}

fn render_grid(grid: &WeekGrid) -> String {
    let mut out = String::new();
    let header: Vec<String> = grid
        .days
        .iter()
        .map(|day| {
            let marker = if day.is_today { "*" } else { "" };
            format!("{} {}{}", day.short_name, day.date.format("%d.%m."), marker)
        })
        .collect();
    out.push_str(&format!("Woche {:+}: {}\n", grid.week_offset, header.join(" | ")));

    for row in &grid.rows {
        out.push_str(&format!("\n{} ({})\n", row.employee_name, row.employee_id));
        for (cell, day) in row.cells.iter().zip(&grid.days) {
            if cell.is_empty() {
                continue;
            }
            let entries: Vec<String> = cell.entries.iter().map(render_entry).collect();
            out.push_str(&format!("  {}: {}\n", day.short_name, entries.join("; ")));
        }
    }
    out
}

fn render_entry(entry: &CellEntry) -> String {
    let hints = entry.continuity;
    let lead = if hints.continues_from_previous { "<" } else { "" };
    let tail = if hints.continues_to_next { ">" } else { "" };
    let resumed = if hints.is_paused_and_resumed { " (fortgesetzt)" } else { "" };
    let mut text = format!("{lead}{}{tail}{resumed} [{}]", entry.item.title, entry.item.color);
    if !entry.co_assignees.is_empty() {
        let shown: Vec<&str> = entry
            .co_assignees
            .shown
            .iter()
            .map(|co| co.name.as_str())
            .collect();
        text.push_str(&format!(" mit {}", shown.join(", ")));
        if let Some(overflow) = entry.co_assignees.overflow_label() {
            text.push_str(&format!(" {overflow}"));
        }
    }
    text
}
