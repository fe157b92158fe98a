//! Module for the [`Commands::Scrape`] subcommand.

use super::*;

/// Function for the [`Commands::Scrape`] in the CLI.
pub async fn scrape<I: UserInteraction>(interaction: &I, store: &Store) -> Result<()> {
  let report = scraper::run(store).await?;
  interaction.reply(ResponseContent::Scrape(&report))
}
