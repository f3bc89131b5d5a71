use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::app::DiaryApp;
use crate::config::{AppConfig, ConfigPaths, CONFIG_ENV};
use crate::diary_entry::{list_icon, DiaryEntry};
use crate::diary_state::DiaryState;
use crate::stats::Statistics;
use crate::ui::{DashboardExit, UI};

#[derive(Parser, Debug)]
#[command(
    name = "mood_diary",
    version,
    about = "Terminal diary with mood-tagged entries"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file location
    #[arg(long, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Minimum log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive diary (default)
    Tui,
    /// Print the entries and statistics a fresh session starts with
    Summary(SummaryArgs),
}

#[derive(Args, Debug, Default)]
pub struct SummaryArgs {
    /// Only list entries whose title or content contains this text
    #[arg(long, default_value = "")]
    pub query: String,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let paths = ConfigPaths::discover(cli.config.as_deref())?;
    let config = AppConfig::load(&paths.config_file)?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            init_tracing(&level, Some(&paths.log_file))
                .wrap_err_with(|| format!("initialising logging at level {level}"))?;
            run_tui(config)
        }
        Commands::Summary(args) => {
            init_tracing(&level, None)
                .wrap_err_with(|| format!("initialising logging at level {level}"))?;
            print_summary(&config, &args, &mut io::stdout().lock())
        }
    }
}

/// Logs go to `log_file` when given, stderr otherwise. The TUI owns the
/// terminal, so it always logs to a file.
fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<()> {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(env_filter);

    let installed = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .wrap_err_with(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .wrap_err_with(|| format!("opening log file {}", path.display()))?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    installed.map_err(|err| eyre!("{err}"))
}

fn run_tui(config: AppConfig) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().wrap_err("starting async runtime")?;
    let mut ui = UI::new(runtime.handle().clone())?;

    while let Some(session) = ui.login(config.login_delay())? {
        let mut app = DiaryApp::new(session, config.clone());
        match ui.dashboard(&mut app)? {
            DashboardExit::Logout => {
                tracing::info!(email = app.session().email(), "logged out");
            }
            DashboardExit::Quit => break,
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct Summary<'a> {
    query: &'a str,
    entries: Vec<&'a DiaryEntry>,
    statistics: Statistics,
}

pub fn print_summary(config: &AppConfig, args: &SummaryArgs, out: &mut impl Write) -> Result<()> {
    let state = if config.seed_sample_entries {
        DiaryState::with_sample_entries()
    } else {
        DiaryState::new()
    };
    let summary = Summary {
        query: args.query.as_str(),
        entries: state.search_entries(&args.query),
        statistics: state.statistics_at(Local::now(), config.recent_window()),
    };

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &summary).wrap_err("encoding summary")?;
        writeln!(out)?;
        return Ok(());
    }

    if summary.entries.is_empty() {
        writeln!(out, "No entries found")?;
    }
    for entry in &summary.entries {
        let mood = entry.mood.map(|m| format!(" [{}]", m.label())).unwrap_or_default();
        writeln!(
            out,
            "{} {} ({}){}",
            list_icon(entry.mood),
            entry.title,
            entry.date.format("%Y-%m-%d"),
            mood
        )?;
    }
    let stats = summary.statistics;
    writeln!(out)?;
    writeln!(out, "Total entries:   {}", stats.total_count)?;
    writeln!(out, "This month:      {}", stats.recent_count)?;
    writeln!(out, "Avg. characters: {}", stats.average_content_length)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_tui() {
        let cli = Cli::try_parse_from(["mood_diary"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["mood_diary", "summary", "--query", "walk", "--json"])
            .unwrap();
        match cli.command {
            Some(Commands::Summary(args)) => {
                assert_eq!(args.query, "walk");
                assert!(args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn text_summary_lists_filtered_samples() {
        let args = SummaryArgs {
            query: "birds".into(),
            json: false,
        };
        let mut out = Vec::new();
        print_summary(&AppConfig::default(), &args, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("A Peaceful Morning (2024-08-22) [Thoughtful]"));
        assert!(!text.contains("Weekend Adventures"));
        assert!(text.contains("Total entries:   3"));
    }

    #[test]
    fn json_summary_is_machine_readable() {
        let args = SummaryArgs {
            query: String::new(),
            json: true,
        };
        let mut out = Vec::new();
        print_summary(&AppConfig::default(), &args, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["entries"].as_array().unwrap().len(), 3);
        assert_eq!(value["entries"][0]["mood"], "excited");
        assert_eq!(value["statistics"]["total_count"], 3);
    }

    #[test]
    fn empty_summary_says_so() {
        let config = AppConfig {
            seed_sample_entries: false,
            ..AppConfig::default()
        };
        let mut out = Vec::new();
        print_summary(&config, &SummaryArgs::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("No entries found"));
        assert!(text.contains("Avg. characters: 0"));
    }
}
