// Sightings CLI - count query signatures matched by sensor sightings

mod exit_codes;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use sightings_cli::prompt::{self, PromptError};
use sightings_cli::report;
use sightings_config::{ConfigError, Settings};
use sightings_engine::{timed_count, SearchStrategy};
use sightings_io::{read_signatures, read_sightings, IoError, ResultSink};

use exit_codes::{
    io_exit_code, EXIT_CONFIG, EXIT_ERROR, EXIT_NO_SELECTION, EXIT_SUCCESS, EXIT_USAGE,
};

/// Log filter (EnvFilter syntax). Defaults to warnings only.
const LOG_ENV: &str = "SIGHTINGS_LOG";

#[derive(Parser)]
#[command(name = "sightings")]
#[command(about = "Count query signatures matched by at least one sensor sighting")]
#[command(long_version = long_version())]
#[command(version)]
#[command(after_help = "\
The search method is read from SIGHTINGS_STRATEGY (linear|binary), then from
[search] strategy in the settings file, and otherwise asked for on stdin.

Environment:
  SIGHTINGS_STRATEGY  preset search method
  SIGHTINGS_CONFIG    settings file (default: <config dir>/sightings/settings.toml)
  SIGHTINGS_LOG       log filter, e.g. info or sightings_engine=trace

Examples:
  sightings sightings.dat signatures.dat result.dat
  echo b | sightings sightings.dat signatures.dat result.dat
  SIGHTINGS_STRATEGY=linear sightings sightings.dat signatures.dat result.dat")]
struct Cli {
    /// Sightings file: whitespace-separated `speed brightness` pairs
    sightings: PathBuf,

    /// Signatures file: whitespace-separated integers to look up
    signatures: PathBuf,

    /// Result file: receives the number of matched signatures
    result: PathBuf,
}

fn long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        " (", env!("GIT_COMMIT_HASH"), ")",
        "\nengine:  sightings-engine ", env!("CARGO_PKG_VERSION"),
        "\ntarget:  ", env!("TARGET"),
    )
}

fn main() -> ExitCode {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version also arrive here, on stdout with exit 0.
            let code = if e.use_stderr() { EXIT_USAGE } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // Also installs the `log` bridge, so the library crates' records show up.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut sightings = read_sightings(&cli.sightings)?;
    let signatures = read_signatures(&cli.signatures)?;

    // Fail on an unwritable destination before any search work is done.
    let sink = ResultSink::prepare(&cli.result)?;

    let strategy = select_strategy()?;
    info!("searching {} sightings for {} signatures ({strategy})", sightings.len(), signatures.len());

    let outcome = timed_count(&mut sightings, &signatures, strategy);

    let mut stdout = io::stdout().lock();
    report::print_timing(&mut stdout, outcome.elapsed)
        .map_err(|e| CliError::general(format!("cannot write to stdout: {e}")))?;

    let written = sink.commit(outcome.matches)?;
    info!("{} matches written to {}", outcome.matches, written.display());
    Ok(())
}

/// Environment, then settings file, then ask on stdin.
fn select_strategy() -> Result<SearchStrategy, CliError> {
    let settings = Settings::load()?;
    if let Some(strategy) = settings.preset_strategy()? {
        info!("search method preset to {strategy}");
        return Ok(strategy);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    Ok(prompt::ask_strategy(&mut input, &mut stdout, &mut stderr)?)
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn general(msg: impl Into<String>) -> Self {
        Self { code: EXIT_ERROR, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<IoError> for CliError {
    fn from(err: IoError) -> Self {
        Self { code: io_exit_code(&err), message: err.to_string(), hint: None }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::InvalidStrategy { .. } => "use linear or binary",
            ConfigError::Read { .. } | ConfigError::Parse { .. } => {
                "fix or remove the settings file, or point SIGHTINGS_CONFIG elsewhere"
            }
        };
        Self { code: EXIT_CONFIG, message: err.to_string(), hint: None }.with_hint(hint)
    }
}

impl From<PromptError> for CliError {
    fn from(err: PromptError) -> Self {
        match err {
            PromptError::NoSelection => Self {
                code: EXIT_NO_SELECTION,
                message: err.to_string(),
                hint: Some("answer l or b, or set SIGHTINGS_STRATEGY".to_string()),
            },
            PromptError::Io(_) => Self::general(err.to_string()),
        }
    }
}
