//! Module for the [`Commands::Add`] subcommand.

use super::*;

/// Fields of the paper to add.
#[derive(Args, Clone, Debug)]
pub struct AddOptions {
  /// Paper title
  #[arg(long)]
  pub title: String,

  /// Paper abstract, at least 10 characters
  #[arg(long = "abstract")]
  pub abstract_text: String,

  /// An author name; repeat for several authors, in byline order
  #[arg(long = "author")]
  pub authors: Vec<String>,

  /// Institution the work came out of
  #[arg(long, default_value = "")]
  pub institution: String,

  /// Country of the institution
  #[arg(long, default_value = "")]
  pub country: String,

  /// A topic keyword; repeat for several keywords
  #[arg(long = "keyword")]
  pub keywords: Vec<String>,

  /// Link to the paper
  #[arg(long)]
  pub url: Option<String>,
}

impl AddOptions {
  /// The submission body the options describe, in the same shape `POST /api/research`
  /// accepts.
  pub fn to_body(&self) -> Value {
    let mut body = json!({
      "title": self.title,
      "abstract": self.abstract_text,
      "authors": self.authors,
      "institution": self.institution,
      "country": self.country,
      "keywords": self.keywords,
    });
    if let Some(url) = &self.url {
      body["paperUrl"] = json!(url);
    }
    body
  }
}

/// Function for the [`Commands::Add`] in the CLI.
pub async fn add<I: UserInteraction>(
  interaction: &I,
  store: &Store,
  options: AddOptions,
) -> Result<()> {
  let input = match NewPaper::validate(&options.to_body()) {
    Ok(input) => input,
    Err(HubError::Validation(issues)) => {
      interaction.reply(ResponseContent::Issues(&issues))?;
      return Err(HubError::Validation(issues).into());
    },
    Err(e) => return Err(e.into()),
  };

  let mut db = store.database().await?;
  let paper = Add::paper(input).execute(&mut db).await?;
  debug!("Stored paper {:?}", paper);

  interaction.reply(ResponseContent::Success(&format!("Added paper with id {}", paper.id)))?;
  interaction.reply(ResponseContent::Paper(&paper))
}
