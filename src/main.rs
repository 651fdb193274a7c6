
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use planner::config::{ConfigError, PlannerConfig};
use planner::host::{dispatch, render_state};
use planner::net::types::{HostEvent, PageSnapshot};
use planner::state::sprint_bugs::SprintBugTracker;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid snapshot JSON: {0}")]
    Snapshot(serde_json::Error),
    #[error("invalid event on line {line}: {source}")]
    Event { line: usize, source: serde_json::Error },
    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Parser, Debug)]
#[command(name = "planner", about = "Replay sprint planning sessions against the bug tracker")]
struct Cli {
    /// Page snapshot JSON (`{"bugs": [...], "original_bugs": [...]}`).
    #[arg(long, env = "PLANNER_SNAPSHOT")]
    snapshot: PathBuf,

    /// Delimiter for hidden form field ids; overrides `PLANNER_ID_SEPARATOR`.
    #[arg(long)]
    separator: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply JSON-lines host events and print one effect per event.
    Replay(ReplayArgs),
    /// Print the initial render state.
    Totals,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Event file, or `-` for stdin.
    #[arg(long, default_value = "-")]
    events: String,
}

fn main() -> Result<(), CliError> {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            eprintln!("ignoring .env: {error}");
        }
    }
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut config = PlannerConfig::from_env()?;
    if let Some(separator) = cli.separator {
        config.id_separator = separator;
    }

    let tracker = load_tracker(&cli.snapshot)?;
    tracing::info!(snapshot = %cli.snapshot.display(), "snapshot loaded");

    match cli.command {
        Command::Replay(args) => run_replay(tracker, &config, &args),
        Command::Totals => {
            let mut out = io::stdout().lock();
            serde_json::to_writer(&mut out, &render_state(&tracker, None))?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn load_tracker(path: &Path) -> Result<SprintBugTracker, CliError> {
    let file = File::open(path).map_err(|source| CliError::Read { path: path.display().to_string(), source })?;
    let snapshot: PageSnapshot = serde_json::from_reader(BufReader::new(file)).map_err(CliError::Snapshot)?;
    Ok(SprintBugTracker::from_snapshot(snapshot))
}

fn run_replay(mut tracker: SprintBugTracker, config: &PlannerConfig, args: &ReplayArgs) -> Result<(), CliError> {
    let reader: Box<dyn BufRead> = if args.events == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&args.events).map_err(|source| CliError::Read { path: args.events.clone(), source })?;
        Box::new(BufReader::new(file))
    };
    replay_events(&mut tracker, config, reader, io::stdout().lock(), &args.events)
}

/// Dispatch one JSON event per line and write one JSON effect per line.
/// Blank lines are skipped but still count toward reported line numbers.
fn replay_events(
    tracker: &mut SprintBugTracker,
    config: &PlannerConfig,
    reader: impl BufRead,
    mut out: impl Write,
    source_name: &str,
) -> Result<(), CliError> {
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Read { path: source_name.to_owned(), source })?;
        if line.trim().is_empty() {
            continue;
        }
        let event: HostEvent =
            serde_json::from_str(&line).map_err(|source| CliError::Event { line: index + 1, source })?;
        let effect = dispatch(tracker, config, event);
        serde_json::to_writer(&mut out, &effect)?;
        writeln!(out)?;
    }
    Ok(())
}
