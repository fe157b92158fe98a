//! Instruction for reading papers back out of the store.
//!
//! Reads never filter or sort beyond insertion order; narrowing the catalog is the
//! job of [`crate::filter`].

use super::*;

/// Which documents a [`Query`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCriteria {
  /// Every paper, oldest first
  All,
  /// The paper with this store-assigned identifier
  Id(String),
}

/// A read of papers from the collection.
#[derive(Debug, Clone)]
pub struct Query {
  /// Which documents to return
  criteria: QueryCriteria,
}

impl Query {
  /// Creates a query with the given criteria.
  pub fn new(criteria: QueryCriteria) -> Self { Self { criteria } }

  /// Creates a query returning every paper.
  pub fn list_all() -> Self { Self::new(QueryCriteria::All) }

  /// Creates a query returning the paper with identifier `id`, if any.
  pub fn by_id(id: impl Into<String>) -> Self { Self::new(QueryCriteria::Id(id.into())) }
}

#[async_trait]
impl DatabaseInstruction for Query {
  type Output = Vec<Paper>;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let (sql, id) = match &self.criteria {
      QueryCriteria::All => ("SELECT id, document FROM research_papers ORDER BY id", None),
      QueryCriteria::Id(raw) => match raw.parse::<i64>() {
        Ok(id) => ("SELECT id, document FROM research_papers WHERE id = ?1", Some(id)),
        Err(_) => {
          trace!("Identifier {raw:?} is not a store identifier");
          return Ok(Vec::new());
        },
      },
    };

    let rows = db
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare_cached(sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(id), |row| Ok((row.get(0)?, row.get(1)?)))?
          .collect::<rusqlite::Result<Vec<(i64, String)>>>()?;
        Ok(rows)
      })
      .await?;
    trace!("Fetched {} document(s)", rows.len());

    let now = Utc::now();
    rows
      .into_iter()
      .map(|(id, raw)| -> Result<Paper> {
        let document: Value = serde_json::from_str(&raw)?;
        Ok(Paper::from_document(id, &document, now))
      })
      .collect()
  }
}
