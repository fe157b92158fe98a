//! Paper cards for the listing page.

use super::*;

/// Abstracts longer than this many characters are cut and suffixed with `...`.
pub const ABSTRACT_PREVIEW_CHARS: usize = 200;

/// A [`Paper`] prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperCard {
  /// Paper identifier, for linking to the detail page
  pub id:               String,
  /// Full title
  pub title:            String,
  /// Abstract, truncated to [`ABSTRACT_PREVIEW_CHARS`]
  pub abstract_preview: String,
  /// Keyword tags in stored order
  pub keywords:         Vec<String>,
  /// Authors joined with `", "`
  pub authors:          String,
  /// Institution name
  pub institution:      String,
  /// Country name
  pub country:          String,
  /// Long-form publication date, e.g. `January 5, 2024`
  pub published:        String,
  /// Link target, absent when the paper has no URL
  pub paper_url:        Option<String>,
}

impl From<&Paper> for PaperCard {
  fn from(paper: &Paper) -> Self {
    Self {
      id:               paper.id.clone(),
      title:            paper.title.clone(),
      abstract_preview: truncate_abstract(&paper.abstract_text, ABSTRACT_PREVIEW_CHARS),
      keywords:         paper.keywords.clone(),
      authors:          paper.authors.join(", "),
      institution:      paper.institution.clone(),
      country:          paper.country.clone(),
      published:        format_published_date(&paper.published_at),
      paper_url:        Some(paper.paper_url.clone()).filter(|url| !url.is_empty()),
    }
  }
}

/// Cuts `text` to `max_chars` characters and appends `...`; shorter text is returned as is.
pub fn truncate_abstract(text: &str, max_chars: usize) -> String {
  match text.char_indices().nth(max_chars) {
    Some((cut, _)) => format!("{}...", &text[..cut]),
    None => text.to_string(),
  }
}

/// Formats a timestamp as a long US-style date, e.g. `January 5, 2024`.
pub fn format_published_date(at: &DateTime<Utc>) -> String { at.format("%B %-d, %Y").to_string() }

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn test_truncate_abstract() {
    assert_eq!(truncate_abstract("short", 200), "short");

    let exact = "a".repeat(200);
    assert_eq!(truncate_abstract(&exact, 200), exact);

    let long = "b".repeat(250);
    let cut = truncate_abstract(&long, 200);
    assert_eq!(cut.len(), 203);
    assert!(cut.ends_with("..."));
  }

  #[test]
  fn test_truncate_counts_characters_not_bytes() {
    let text = "é".repeat(201);
    let cut = truncate_abstract(&text, 200);
    assert_eq!(cut.chars().count(), 203);
  }

  #[test]
  fn test_long_date() {
    let at = Utc.with_ymd_and_hms(2024, 1, 5, 12, 0, 0).unwrap();
    assert_eq!(format_published_date(&at), "January 5, 2024");
  }

  #[test]
  fn test_card_from_paper() {
    let paper = Paper {
      id:            "7".into(),
      title:         "Crop disease detection".into(),
      abstract_text: "x".repeat(300),
      authors:       vec!["A. Mensah".into(), "K. Boateng".into()],
      institution:   "KNUST".into(),
      country:       "Ghana".into(),
      keywords:      vec!["agriculture".into()],
      paper_url:     String::new(),
      published_at:  Utc.with_ymd_and_hms(2023, 11, 30, 0, 0, 0).unwrap(),
      created_at:    None,
    };
    let card = PaperCard::from(&paper);
    assert_eq!(card.authors, "A. Mensah, K. Boateng");
    assert_eq!(card.published, "November 30, 2023");
    assert_eq!(card.abstract_preview.chars().count(), 203);
    assert!(card.paper_url.is_none());
  }
}
