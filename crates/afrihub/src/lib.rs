//! Catalog, statistics and filtering for African AI research papers.
//!
//! `afrihub` is the library half of the African AI Research Hub. It provides:
//!
//! - A JSON document store for research papers, backed by an embedded SQLite file
//! - Validated, write-once paper creation
//! - Aggregated statistics (totals and top countries/keywords)
//! - A pure filter engine over an already-fetched paper list
//! - Presentation helpers for paper cards, the country map and the admin dashboard
//! - A placeholder scraper trigger
//!
//! # Getting Started
//!
//! ```no_run
//! use afrihub::{
//!   database::{Add, Query, Stats},
//!   filter::{self, FilterState},
//!   paper::NewPaper,
//!   prelude::*,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   // Resolve the process-wide store handle (configured from the environment)
//!   let mut db = afrihub::database::get_database().await?;
//!
//!   // Validate and store a paper
//!   let input = NewPaper::validate(&serde_json::json!({
//!     "title": "Speech recognition for Yoruba",
//!     "abstract": "We train an acoustic model on crowd-sourced recordings.",
//!     "authors": ["Ada Obi"],
//!     "institution": "University of Lagos",
//!     "country": "Nigeria",
//!     "keywords": ["speech", "NLP"],
//!   }))?;
//!   let paper = Add::paper(input).execute(&mut db).await?;
//!   println!("Stored paper {}", paper.id);
//!
//!   // Narrow the catalog the same way the listing page does
//!   let papers = Query::list_all().execute(&mut db).await?;
//!   let state = FilterState::default().with_term("speech");
//!   let matches = filter::apply(&papers, &state);
//!
//!   let stats = Stats::compute().execute(&mut db).await?;
//!   println!("{} of {} papers match", matches.len(), stats.total_papers);
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`paper`]: The paper data model and write-side validation
//! - [`database`]: Store connection caching and database instructions
//! - [`filter`]: Search-term, country and topic filtering
//! - [`present`]: Card formatting, map layout and dashboard display values
//! - [`scraper`]: The scraper trigger stub
//! - [`config`]: Store endpoint and server configuration
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::{BTreeMap, HashSet},
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod database;
pub mod error;
pub mod filter;
pub mod paper;
pub mod present;
pub mod scraper;

use crate::{config::*, error::*, paper::*};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use afrihub::{database::Query, prelude::*};
///
/// async fn example() -> Result<(), HubError> {
///   let mut db = afrihub::database::get_database().await?;
///   let papers = Query::list_all().execute(&mut db).await?;
///   println!("{} papers", papers.len());
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{database::DatabaseInstruction, error::HubError};
}
