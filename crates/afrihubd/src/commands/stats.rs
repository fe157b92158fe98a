//! Module for the [`Commands::Stats`] subcommand.

use super::*;

/// Function for the [`Commands::Stats`] in the CLI.
pub async fn stats<I: UserInteraction>(interaction: &I, store: &Store) -> Result<()> {
  let mut db = store.database().await?;
  let snapshot = Stats::compute().execute(&mut db).await?;
  interaction.reply(ResponseContent::Stats(&snapshot))
}
