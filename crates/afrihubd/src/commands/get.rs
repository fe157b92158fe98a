//! Module for the [`Commands::Get`] subcommand.

use super::*;

/// Function for the [`Commands::Get`] in the CLI.
pub async fn get<I: UserInteraction>(interaction: &I, store: &Store, id: String) -> Result<()> {
  let mut db = store.database().await?;
  let papers = Query::by_id(&id).execute(&mut db).await?;
  match papers.first() {
    Some(paper) => interaction.reply(ResponseContent::Paper(paper)),
    None => {
      interaction.reply(ResponseContent::Warning(&format!("No paper with id {id}")))?;
      Err(HubdError::NotFound(id))
    },
  }
}
