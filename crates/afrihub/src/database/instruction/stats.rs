//! Instruction for computing the catalog statistics snapshot.
//!
//! Every execution rescans the whole collection; nothing is cached.

use super::*;

/// How many entries the top-country and top-keyword lists hold at most.
pub const TOP_LIMIT: usize = 5;

/// Label used for papers with a missing or empty country or keyword.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A paper count for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCount {
  /// Country name, or [`UNKNOWN_LABEL`]
  pub country: String,
  /// Number of papers from that country
  pub count:   u64,
}

/// A paper count for one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
  /// Keyword, or [`UNKNOWN_LABEL`]
  pub keyword: String,
  /// Number of papers tagged with it
  pub count:   u64,
}

/// Totals and top-N breakdowns over the whole catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
  /// Number of papers stored
  pub total_papers:       u64,
  /// Number of distinct institutions
  pub total_institutions: u64,
  /// Number of distinct countries
  pub total_countries:    u64,
  /// Countries with the most papers, at most [`TOP_LIMIT`]
  pub top_countries:      Vec<CountryCount>,
  /// Keywords tagging the most papers, at most [`TOP_LIMIT`]
  pub top_keywords:       Vec<KeywordCount>,
}

/// Computes a [`StatsSnapshot`].
///
/// Top lists are sorted by count descending; equal counts are ordered by label
/// ascending so the output is stable.
///
/// # Examples
///
/// ```no_run
/// # use afrihub::{database::Stats, prelude::*};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut db = afrihub::database::get_database().await?;
/// let stats = Stats::compute().execute(&mut db).await?;
/// for entry in &stats.top_countries {
///   println!("{}: {}", entry.country, entry.count);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stats {
  /// Maximum length of each top list
  limit: usize,
}

impl Stats {
  /// Creates the instruction with the standard top-[`TOP_LIMIT`] lists.
  pub fn compute() -> Self { Self { limit: TOP_LIMIT } }
}

/// Groups one label per document, merging missing and empty values into [`UNKNOWN_LABEL`].
const TOP_COUNTRIES_SQL: &str = "
  SELECT COALESCE(NULLIF(CAST(json_extract(document, '$.country') AS TEXT), ''), 'Unknown')
           AS label,
         COUNT(*) AS total
    FROM research_papers
   GROUP BY label
   ORDER BY total DESC, label ASC
   LIMIT ?1";

/// Unwinds each document's keyword array before grouping; documents without
/// keywords contribute nothing.
const TOP_KEYWORDS_SQL: &str = "
  SELECT COALESCE(NULLIF(CAST(k.value AS TEXT), ''), 'Unknown') AS label,
         COUNT(*) AS total
    FROM research_papers AS p, json_each(p.document, '$.keywords') AS k
   GROUP BY label
   ORDER BY total DESC, label ASC
   LIMIT ?1";

/// Counts distinct values of one top-level field, ignoring documents without it.
fn count_distinct(conn: &rusqlite::Connection, field: &str) -> rusqlite::Result<u64> {
  conn.query_row(
    "SELECT COUNT(DISTINCT json_extract(document, ?1)) FROM research_papers",
    params![format!("$.{field}")],
    |row| row.get(0),
  )
}

/// Runs a grouped top-N query, returning `(label, count)` pairs.
fn top(conn: &rusqlite::Connection, sql: &str, limit: usize) -> rusqlite::Result<Vec<(String, u64)>> {
  let limit = i64::try_from(limit).unwrap_or(i64::MAX);
  let mut stmt = conn.prepare_cached(sql)?;
  let rows = stmt
    .query_map(params![limit], |row| Ok((row.get(0)?, row.get(1)?)))?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

#[async_trait]
impl DatabaseInstruction for Stats {
  type Output = StatsSnapshot;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let limit = self.limit;

    let snapshot = db
      .conn
      .call(move |conn| {
        let total_papers =
          conn.query_row("SELECT COUNT(*) FROM research_papers", [], |row| row.get(0))?;
        let total_institutions = count_distinct(conn, "institution")?;
        let total_countries = count_distinct(conn, "country")?;

        let top_countries = top(conn, TOP_COUNTRIES_SQL, limit)?
          .into_iter()
          .map(|(country, count)| CountryCount { country, count })
          .collect();
        let top_keywords = top(conn, TOP_KEYWORDS_SQL, limit)?
          .into_iter()
          .map(|(keyword, count)| KeywordCount { keyword, count })
          .collect();

        Ok(StatsSnapshot {
          total_papers,
          total_institutions,
          total_countries,
          top_countries,
          top_keywords,
        })
      })
      .await?;

    debug!(
      "Computed stats over {} paper(s): {} institution(s), {} country(ies)",
      snapshot.total_papers, snapshot.total_institutions, snapshot.total_countries
    );
    Ok(snapshot)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_unknown_label_matches_sql() {
    assert!(TOP_COUNTRIES_SQL.contains(&format!("'{UNKNOWN_LABEL}'")));
    assert!(TOP_KEYWORDS_SQL.contains(&format!("'{UNKNOWN_LABEL}'")));
  }

  #[test]
  fn test_snapshot_wire_shape() {
    let snapshot = StatsSnapshot {
      total_papers:       3,
      total_institutions: 2,
      total_countries:    1,
      top_countries:      vec![CountryCount { country: "Kenya".into(), count: 3 }],
      top_keywords:       vec![KeywordCount { keyword: "NLP".into(), count: 2 }],
    };
    let wire = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(wire["totalPapers"], 3);
    assert_eq!(wire["totalInstitutions"], 2);
    assert_eq!(wire["totalCountries"], 1);
    assert_eq!(wire["topCountries"][0]["country"], "Kenya");
    assert_eq!(wire["topKeywords"][0]["count"], 2);
  }
}
