//! Module for the [`Commands::List`] subcommand.

use super::*;

/// Filters for listing papers. All filters must match; an omitted filter matches everything.
#[derive(Args, Clone, Debug, Default)]
pub struct ListOptions {
  /// Case-insensitive text to look for in titles, abstracts, authors and institutions
  #[arg(long, short)]
  pub query: Option<String>,

  /// Only papers from this country (exact match)
  #[arg(long)]
  pub country: Option<String>,

  /// Only papers tagged with this topic (exact match)
  #[arg(long)]
  pub topic: Option<String>,
}

impl From<ListOptions> for FilterState {
  fn from(options: ListOptions) -> Self {
    let mut state = FilterState::default().with_term(options.query.unwrap_or_default());
    if let Some(country) = options.country {
      state.select_country(country);
    }
    if let Some(topic) = options.topic {
      state.select_topic(topic);
    }
    state
  }
}

/// Function for the [`Commands::List`] in the CLI.
pub async fn list<I: UserInteraction>(
  interaction: &I,
  store: &Store,
  options: ListOptions,
) -> Result<()> {
  let mut db = store.database().await?;
  let papers = Query::list_all().execute(&mut db).await?;
  let state = FilterState::from(options);
  trace!("Listing with filter {:?}", state);

  if state.is_empty() {
    return interaction.reply(ResponseContent::Papers(&papers));
  }
  interaction.reply(ResponseContent::Info(&format!("Filtering by {}", state.to_query_string())))?;
  let shown = filter::apply(&papers, &state);
  interaction.reply(ResponseContent::Papers(&shown))
}
