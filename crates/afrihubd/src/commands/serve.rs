//! Module for the [`Commands::Serve`] subcommand.

use super::*;
use crate::server::{self, AppState};

/// Options for the web server.
#[derive(Args, Clone, Debug, Default)]
pub struct ServeOptions {
  /// Address to listen on, overriding the configuration file and `AFRIHUB_BIND`
  #[arg(long)]
  pub bind: Option<String>,
}

/// Function for the [`Commands::Serve`] in the CLI.
///
/// Runs until interrupted with Ctrl-C.
pub async fn serve<I: UserInteraction>(
  interaction: &I,
  store: Arc<Store>,
  config: &Config,
  options: ServeOptions,
) -> Result<()> {
  let bind = options.bind.unwrap_or_else(|| config.bind.clone());
  let addr: SocketAddr = bind.parse().map_err(|e| HubdError::Address(bind.clone(), e))?;

  let state = AppState::new(store)?;
  interaction.reply(ResponseContent::Info(&format!("Serving on http://{addr}")))?;
  server::serve(state, addr).await?;
  interaction.reply(ResponseContent::Info("Server stopped"))
}
