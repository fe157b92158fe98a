//! Paper operations as the HTTP layer needs them.

use super::*;

/// Thin facade over a [`Store`] for request handlers.
///
/// Each call resolves the cached store handle first, so a store that cannot be reached
/// surfaces as an error from whichever operation runs.
pub struct Repository<'a> {
  /// Store to run against
  store: &'a Store,
}

impl<'a> Repository<'a> {
  /// A repository over `store`.
  pub fn new(store: &'a Store) -> Self { Self { store } }

  /// Every stored paper, oldest first.
  pub async fn list_papers(&self) -> afrihub::error::Result<Vec<Paper>> {
    let mut db = self.store.database().await?;
    Query::list_all().execute(&mut db).await
  }

  /// The paper with identifier `id`, if any.
  pub async fn find_paper(&self, id: &str) -> afrihub::error::Result<Option<Paper>> {
    let mut db = self.store.database().await?;
    Ok(Query::by_id(id).execute(&mut db).await?.into_iter().next())
  }

  /// Validates `body` and stores it as a new paper.
  ///
  /// Validation runs before the store is touched, so a rejected body never opens a
  /// connection.
  pub async fn create_paper(&self, body: &Value) -> afrihub::error::Result<Paper> {
    let input = NewPaper::validate(body)?;
    let mut db = self.store.database().await?;
    Add::paper(input).execute(&mut db).await
  }

  /// Fresh catalog statistics.
  pub async fn stats(&self) -> afrihub::error::Result<StatsSnapshot> {
    let mut db = self.store.database().await?;
    Stats::compute().execute(&mut db).await
  }

  /// Triggers a scraper run.
  pub async fn run_scraper(&self) -> afrihub::error::Result<ScrapeReport> {
    scraper::run(self.store).await
  }
}
