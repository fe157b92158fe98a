//! Display-ready values for the listing page, the country map and the admin dashboard.
//!
//! Nothing in here renders markup. Each submodule turns catalog data into plain,
//! serializable view structs that templates (or a CLI) can print directly.
//!
//! - [`card`]: one paper as shown in the listing
//! - [`map`]: circle markers placed over a static map of Africa
//! - [`schedule`]: the scraper controls panel

use super::*;

pub mod card;
pub mod map;
pub mod schedule;

pub use self::{
  card::{format_published_date, truncate_abstract, PaperCard, ABSTRACT_PREVIEW_CHARS},
  map::{MapMarker, MapPosition},
  schedule::ScheduleDisplay,
};
