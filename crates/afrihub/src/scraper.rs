//! The scraper trigger.
//!
//! No scraping exists yet. [`run`] stands in for it: it resolves the store handle the
//! way a real run would, then reports a fixed result without touching any data.

use super::*;
use crate::database::Store;

/// Number of papers every stub run claims to have scraped.
pub const STUB_PAPERS_SCRAPED: u64 = 12;

/// Outcome of a scraper run, in the wire shape of `POST /api/run-scraper`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeReport {
  /// Always `true` for the stub
  pub success:        bool,
  /// Human-readable summary
  pub message:        String,
  /// Always [`STUB_PAPERS_SCRAPED`] for the stub
  pub papers_scraped: u64,
  /// When the run was triggered
  pub timestamp:      DateTime<Utc>,
}

impl ScrapeReport {
  /// The fixed report of a stub run at `timestamp`.
  pub fn stub(timestamp: DateTime<Utc>) -> Self {
    Self {
      success: true,
      message: "Scraper ran successfully".to_string(),
      papers_scraped: STUB_PAPERS_SCRAPED,
      timestamp,
    }
  }
}

/// Triggers a scraper run against `store`.
///
/// # Errors
///
/// Fails only if the store cannot be reached.
pub async fn run(store: &Store) -> Result<ScrapeReport> {
  store.database().await?;
  let report = ScrapeReport::stub(Utc::now());
  debug!("Stub scraper run reported {} paper(s)", report.papers_scraped);
  Ok(report)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::database::{Query, Store};
  use crate::prelude::*;

  #[traced_test]
  #[tokio::test]
  async fn test_run_reports_fixed_count_without_writing() {
    let store = Store::new(StoreConfig::in_memory());
    let report = run(&store).await.unwrap();
    assert!(report.success);
    assert_eq!(report.papers_scraped, STUB_PAPERS_SCRAPED);
    assert_eq!(report.message, "Scraper ran successfully");

    let mut db = store.database().await.unwrap();
    assert!(Query::list_all().execute(&mut db).await.unwrap().is_empty());
  }

  #[traced_test]
  #[tokio::test]
  async fn test_run_fails_when_store_unreachable() {
    let dir = tempdir().unwrap();
    // A file where the endpoint directory should be
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, b"not a directory").unwrap();
    let store = Store::new(StoreConfig {
      endpoint: StoreEndpoint::Directory(blocker.join("nested")),
      name:     "hub".into(),
    });
    assert!(run(&store).await.is_err());
  }

  #[test]
  fn test_report_wire_shape() {
    let wire = serde_json::to_value(ScrapeReport::stub(Utc::now())).unwrap();
    assert_eq!(wire["success"], true);
    assert_eq!(wire["papersScraped"], 12);
    assert!(wire["timestamp"].is_string());
  }
}
