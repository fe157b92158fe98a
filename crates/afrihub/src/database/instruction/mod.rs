//! Database instruction implementations for paper management.
//!
//! Each instruction is a small value describing one operation against the
//! `research_papers` collection, executed with [`DatabaseInstruction::execute`].

use rusqlite::params;

use super::*;

pub mod add;
pub mod query;
pub mod stats;

pub use self::{
  add::Add,
  query::{Query, QueryCriteria},
  stats::{CountryCount, KeywordCount, Stats, StatsSnapshot, TOP_LIMIT, UNKNOWN_LABEL},
};

/// An operation that can be run against a [`Database`].
#[async_trait]
pub trait DatabaseInstruction {
  /// What the operation yields on success
  type Output;

  /// Runs the operation.
  async fn execute(&self, db: &mut Database) -> Result<Self::Output>;
}
