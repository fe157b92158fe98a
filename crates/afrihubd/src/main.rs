//! Command line interface and web server for the African AI Research Hub.
//!
//! Configuration is read from `--config` (or the platform default path, see
//! [`Config::default_path`]) and then overridden by `AFRIHUB_STORE_URL`,
//! `AFRIHUB_STORE_NAME` and `AFRIHUB_BIND`. Logging verbosity follows the `-v` count
//! unless `RUST_LOG` is set.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, sync::Arc};

use afrihub::{config::Config, database::Store};
use afrihubd::{
  commands::{self, Commands},
  error::{HubdError, Result},
  interaction::{ResponseContent, Terminal, UserInteraction},
};
use clap::{builder::ArgAction, Parser};
use tracing::trace;
use tracing_subscriber::EnvFilter;

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Web server and CLI for the African AI Research Hub")]
struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the configuration file. If not specified, uses the default platform-specific
  /// configuration directory.
  #[arg(long, short, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
///
/// `serve` logs at least at info so request traces are visible.
fn setup_logging(verbosity: u8, serving: bool) {
  let filter = match verbosity {
    0 if serving => "info",
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_file(true)
    .with_line_number(true)
    .with_thread_ids(true)
    .with_target(true)
    .init();
}

/// Entry point for the `afrihub` binary
///
/// # Errors
///
/// Returns `HubdError`s for failures including:
/// - Unreadable or malformed configuration
/// - Document store failures
/// - Rejected paper submissions
/// - Listener bind failures
#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  setup_logging(cli.verbose, matches!(cli.command, Commands::Serve(_)));

  let terminal = Terminal;
  let config_path = cli.config.unwrap_or_else(Config::default_path);
  trace!("Using configuration at {}", config_path.display());
  let config = match Config::load(&config_path) {
    Ok(config) => config,
    Err(e) => {
      let e = HubdError::from(e);
      terminal.reply(ResponseContent::Error(&e))?;
      return Err(e);
    },
  };
  let store = Arc::new(Store::new(config.store.clone()));

  let result = match cli.command {
    Commands::Serve(options) => commands::serve(&terminal, store.clone(), &config, options).await,
    Commands::Add(options) => commands::add(&terminal, &store, options).await,
    Commands::List(options) => commands::list(&terminal, &store, options).await,
    Commands::Get { id } => commands::get(&terminal, &store, id).await,
    Commands::Stats => commands::stats(&terminal, &store).await,
    Commands::Scrape => commands::scrape(&terminal, &store).await,
  };

  if let Err(e) = &result {
    terminal.reply(ResponseContent::Error(e))?;
  }
  store.close().await?;
  result
}
