use afrihub::database::{CountryCount, TOP_LIMIT};

use super::*;

#[traced_test]
#[tokio::test]
async fn test_top_lists_are_limited_and_sorted() -> TestResult<()> {
  let (store, _dir) = create_test_store();
  let mut db = store.database().await?;

  let counts =
    [("Nigeria", 4), ("Kenya", 3), ("Ghana", 3), ("Egypt", 2), ("Rwanda", 1), ("Uganda", 1)];
  for (country, n) in counts {
    for i in 0..n {
      let body = submission(&format!("{country} paper {i}"), country, &["AI"]);
      Add::paper(NewPaper::validate(&body)?).execute(&mut db).await?;
    }
  }

  let stats = Stats::compute().execute(&mut db).await?;
  assert_eq!(stats.total_papers, 14);
  assert_eq!(stats.total_countries, 6);
  assert_eq!(stats.total_institutions, 6);

  assert_eq!(stats.top_countries.len(), TOP_LIMIT);
  assert!(stats.top_countries.windows(2).all(|pair| pair[0].count >= pair[1].count));
  assert_eq!(stats.top_countries[0], CountryCount { country: "Nigeria".into(), count: 4 });
  // Ties are both present, ordered by name
  assert_eq!(stats.top_countries[1].country, "Ghana");
  assert_eq!(stats.top_countries[2].country, "Kenya");
  assert_eq!(stats.top_countries[4].country, "Rwanda");

  assert_eq!(stats.top_keywords.len(), 1);
  assert_eq!(stats.top_keywords[0].keyword, "AI");
  assert_eq!(stats.top_keywords[0].count, 14);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_stats_track_new_papers() -> TestResult<()> {
  let (store, _dir) = create_test_store();
  let mut db = store.database().await?;
  assert_eq!(Stats::compute().execute(&mut db).await?.total_papers, 0);

  Add::paper(NewPaper::validate(&submission("First", "Algeria", &[]))?).execute(&mut db).await?;
  let stats = Stats::compute().execute(&mut db).await?;
  assert_eq!(stats.total_papers, 1);
  assert!(stats.top_keywords.is_empty());
  Ok(())
}
