//! Narrowing an already-fetched paper list by search term, country and topic.
//!
//! Everything here is a pure function of `(papers, FilterState)`; nothing touches the
//! store. The listing page recomputes the filtered list on every request, and the
//! derived facet lists are computed from the full, unfiltered list.
//!
//! # Examples
//!
//! ```
//! use afrihub::filter::{self, FilterState};
//! # use afrihub::paper::Paper;
//! # fn papers() -> Vec<Paper> { Vec::new() }
//!
//! let papers = papers();
//! let mut state = FilterState::default().with_term("speech");
//! state.toggle_country("Nigeria");
//! let shown = filter::apply(&papers, &state);
//! assert!(shown.len() <= papers.len());
//! ```

use super::*;

/// The three filter inputs of the listing page.
///
/// An empty field means "no filter" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
  /// Free-text search term, matched case-insensitively
  #[serde(rename = "q")]
  pub term:    String,
  /// Selected country, matched exactly
  pub country: String,
  /// Selected topic, matched exactly against keywords
  pub topic:   String,
}

impl FilterState {
  /// Sets the search term.
  pub fn with_term(mut self, term: impl Into<String>) -> Self {
    self.term = term.into();
    self
  }

  /// Sets the selected country.
  pub fn with_country(mut self, country: impl Into<String>) -> Self {
    self.country = country.into();
    self
  }

  /// Sets the selected topic.
  pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
    self.topic = topic.into();
    self
  }

  /// Whether no filter is active at all.
  pub fn is_empty(&self) -> bool {
    self.term.is_empty() && self.country.is_empty() && self.topic.is_empty()
  }

  /// Selects `country` from a dropdown. Passing `""` clears the country filter.
  pub fn select_country(&mut self, country: impl Into<String>) { self.country = country.into(); }

  /// Selects `topic` from a dropdown. Passing `""` clears the topic filter.
  pub fn select_topic(&mut self, topic: impl Into<String>) { self.topic = topic.into(); }

  /// Selects `country` from the map: choosing the already-selected country clears the
  /// country filter instead.
  pub fn toggle_country(&mut self, country: &str) {
    if self.country == country {
      self.country.clear();
    } else {
      self.country = country.to_string();
    }
  }

  /// A copy of this state with `country` toggled, for building map links.
  pub fn toggled_country(&self, country: &str) -> Self {
    let mut next = self.clone();
    next.toggle_country(country);
    next
  }

  /// Encodes the active filters as a URL query string (`q`, `country`, `topic`), without
  /// the leading `?`. Empty filters are left out.
  pub fn to_query_string(&self) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in [("q", &self.term), ("country", &self.country), ("topic", &self.topic)] {
      if !value.is_empty() {
        query.append_pair(key, value);
      }
    }
    query.finish()
  }
}

/// Applies `state` to `papers`, keeping the original order.
///
/// Filters are applied in sequence and must all match:
/// 1. the term appears (case-insensitively) in the title, abstract, an author name or the
///    institution;
/// 2. the country equals the selected country;
/// 3. the keywords contain the selected topic.
pub fn apply(papers: &[Paper], state: &FilterState) -> Vec<Paper> {
  let term = state.term.to_lowercase();

  let filtered: Vec<Paper> = papers
    .iter()
    .filter(|paper| term.is_empty() || matches_term(paper, &term))
    .filter(|paper| state.country.is_empty() || paper.country == state.country)
    .filter(|paper| state.topic.is_empty() || paper.keywords.iter().any(|k| *k == state.topic))
    .cloned()
    .collect();

  trace!("Filter {:?} kept {} of {} paper(s)", state, filtered.len(), papers.len());
  filtered
}

/// `term` must already be lowercased.
fn matches_term(paper: &Paper, term: &str) -> bool {
  paper.title.to_lowercase().contains(term)
    || paper.abstract_text.to_lowercase().contains(term)
    || paper.authors.iter().any(|author| author.to_lowercase().contains(term))
    || paper.institution.to_lowercase().contains(term)
}

/// Distinct non-empty countries, in order of first appearance.
pub fn unique_countries(papers: &[Paper]) -> Vec<String> {
  first_seen(papers.iter().map(|paper| paper.country.as_str()))
}

/// Distinct non-empty keywords across all papers, in order of first appearance.
pub fn unique_topics(papers: &[Paper]) -> Vec<String> {
  first_seen(papers.iter().flat_map(|paper| paper.keywords.iter().map(String::as_str)))
}

/// Deduplicates `values` in order, dropping empty strings.
fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
  let mut seen = HashSet::new();
  values.filter(|value| !value.is_empty() && seen.insert(*value)).map(str::to_string).collect()
}

/// Paper counts for every non-empty country, in the order of [`unique_countries`].
pub fn country_counts(papers: &[Paper]) -> Vec<(String, usize)> {
  let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
  for paper in papers {
    *counts.entry(paper.country.as_str()).or_default() += 1;
  }
  unique_countries(papers)
    .into_iter()
    .map(|country| {
      let count = counts.get(country.as_str()).copied().unwrap_or_default();
      (country, count)
    })
    .collect()
}
