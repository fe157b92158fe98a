//! Instruction for inserting validated papers.

use super::*;

/// Inserts one paper, stamping its published and created timestamps with the current
/// time.
///
/// # Examples
///
/// ```no_run
/// # use afrihub::{database::Add, paper::NewPaper, prelude::*};
/// # async fn example(input: NewPaper) -> Result<(), Box<dyn std::error::Error>> {
/// let mut db = afrihub::database::get_database().await?;
/// let paper = Add::paper(input).execute(&mut db).await?;
/// println!("Stored as {}", paper.id);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Add {
  /// The paper to insert
  paper: NewPaper,
}

impl Add {
  /// Creates an instruction inserting `paper`.
  pub fn paper(paper: NewPaper) -> Self { Self { paper } }
}

#[async_trait]
impl DatabaseInstruction for Add {
  type Output = Paper;

  async fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let now = Utc::now();
    let document = self.paper.to_document(now)?.to_string();

    let id = db
      .conn
      .call(move |conn| {
        let mut stmt = conn
          .prepare_cached("INSERT INTO research_papers (document) VALUES (?1) RETURNING id")?;
        Ok(stmt.query_row(params![document], |row| row.get::<_, i64>(0))?)
      })
      .await?;
    debug!("Inserted paper {id} titled {:?}", self.paper.title);

    let NewPaper { title, abstract_text, keywords, paper_url, institution, country, authors } =
      self.paper.clone();
    Ok(Paper {
      id: id.to_string(),
      title,
      abstract_text,
      authors,
      institution,
      country,
      keywords,
      paper_url: paper_url.unwrap_or_default(),
      published_at: now,
      created_at: Some(now),
    })
  }
}
