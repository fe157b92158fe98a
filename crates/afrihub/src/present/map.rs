//! Circle markers over a static map of Africa.
//!
//! Each country with a known position gets one circle whose diameter grows with its
//! paper count relative to the busiest country. Positions are percentages of the map
//! image's width and height, so the layout scales with the image.

use super::*;

/// Diameter in pixels of a circle for a country with no papers.
pub const MIN_CIRCLE_SIZE: u32 = 24;
/// Diameter in pixels of the busiest country's circle.
pub const MAX_CIRCLE_SIZE: u32 = 48;
/// Smallest label font size in pixels.
pub const MIN_FONT_SIZE: f64 = 10.0;
/// Circle fill of the selected country.
pub const SELECTED_FILL: &str = "rgba(59, 130, 246, 0.9)";
/// Circle fill of every other country.
pub const DEFAULT_FILL: &str = "rgba(59, 130, 246, 0.6)";
/// Countries that are never drawn, even if a position is added for them later.
pub const HIDDEN_COUNTRIES: [&str; 2] = ["Senegal", "Morocco"];

/// A point on the map image, in percent of its width (`x`) and height (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPosition {
  /// Percent from the left edge
  pub x: f64,
  /// Percent from the top edge
  pub y: f64,
}

lazy_static! {
  /// Where each drawable country sits on the map image.
  static ref POSITIONS: BTreeMap<&'static str, MapPosition> = [
    ("South Africa", 53.0, 75.0),
    ("Egypt", 56.0, 32.0),
    ("Kenya", 60.0, 58.0),
    ("Nigeria", 45.0, 47.0),
    ("Ghana", 41.0, 47.0),
    ("Ethiopia", 62.0, 50.0),
    ("Tunisia", 44.0, 30.0),
    ("Tanzania", 59.0, 65.0),
    ("Uganda", 57.0, 57.0),
    ("Algeria", 40.0, 37.0),
    ("Rwanda", 56.0, 60.0),
  ]
  .into_iter()
  .map(|(country, x, y)| (country, MapPosition { x, y }))
  .collect();
}

/// The map position of `country`, if it has one.
pub fn position_of(country: &str) -> Option<MapPosition> { POSITIONS.get(country).copied() }

/// Circle diameter for `papers` when the busiest country has `max_papers`.
///
/// `max_papers` is floored at 1.
pub fn circle_size(papers: usize, max_papers: usize) -> u32 {
  if papers == 0 {
    return MIN_CIRCLE_SIZE;
  }
  let ratio = papers as f64 / max_papers.max(1) as f64;
  (f64::from(MIN_CIRCLE_SIZE) + ratio * f64::from(MAX_CIRCLE_SIZE - MIN_CIRCLE_SIZE)).round()
    as u32
}

/// Label font size for a circle of diameter `size`.
pub fn font_size(size: u32) -> f64 { MIN_FONT_SIZE.max(f64::from(size) / 2.5) }

/// One drawable circle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
  /// Country name, shown under the circle
  pub country:   String,
  /// Where the circle is centered
  pub position:  MapPosition,
  /// Number of papers from the country, shown inside the circle
  pub papers:    usize,
  /// Circle diameter in pixels
  pub size:      u32,
  /// Label font size in pixels
  pub font_size: f64,
  /// Circle fill color
  pub fill:      &'static str,
  /// Whether this country is the active country filter
  pub selected:  bool,
}

/// Builds one marker per positioned, non-hidden country.
///
/// `counts` holds paper counts per country, as from [`crate::filter::country_counts`];
/// positioned countries missing from it show 0 papers. The size scale uses the largest
/// count in `counts`, including countries that have no position.
pub fn markers(counts: &[(String, usize)], selected_country: &str) -> Vec<MapMarker> {
  let max_papers = counts.iter().map(|(_, papers)| *papers).max().unwrap_or(0).max(1);

  POSITIONS
    .iter()
    .filter(|(country, _)| !HIDDEN_COUNTRIES.contains(*country))
    .map(|(&country, &position)| {
      let papers =
        counts.iter().find(|(name, _)| name == country).map(|(_, papers)| *papers).unwrap_or(0);
      let size = circle_size(papers, max_papers);
      let selected = country == selected_country;
      MapMarker {
        country: country.to_string(),
        position,
        papers,
        size,
        font_size: font_size(size),
        fill: if selected { SELECTED_FILL } else { DEFAULT_FILL },
        selected,
      }
    })
    .collect()
}
