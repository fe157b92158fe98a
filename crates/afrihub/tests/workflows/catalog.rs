use super::*;

#[traced_test]
#[tokio::test]
async fn test_submit_then_list() -> TestResult<()> {
  let (store, _dir) = create_test_store();
  let mut db = store.database().await?;

  let mut body = submission("Swahili machine translation", "Tanzania", &["NLP"]);
  body["paperUrl"] = json!("https://example.org/papers/swahili-mt");
  let created = Add::paper(NewPaper::validate(&body)?).execute(&mut db).await?;

  let input = NewPaper::validate(&body)?;
  assert!(!created.id.is_empty());
  assert_eq!(created.title, input.title);
  assert_eq!(created.abstract_text, input.abstract_text);
  assert_eq!(created.authors, input.authors);
  assert_eq!(created.institution, input.institution);
  assert_eq!(created.country, input.country);
  assert_eq!(created.keywords, input.keywords);
  assert_eq!(created.paper_url, "https://example.org/papers/swahili-mt");
  assert_eq!(Some(created.published_at), created.created_at);

  let papers = Query::list_all().execute(&mut db).await?;
  assert_eq!(papers.len(), 1);
  assert_eq!(papers[0].id, created.id);
  assert_eq!(papers[0].authors, vec!["Amina Diallo", "Kwame Asante"]);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_short_abstract_is_rejected_and_nothing_is_stored() -> TestResult<()> {
  let (store, _dir) = create_test_store();
  let mut db = store.database().await?;

  let mut body = submission("Too short", "Ghana", &[]);
  body["abstract"] = json!("tiny");
  match NewPaper::validate(&body) {
    Err(HubError::Validation(issues)) => {
      assert_eq!(issues.len(), 1);
      assert_eq!(issues[0].path, vec!["abstract"]);
      assert_eq!(issues[0].code, IssueCode::TooSmall);
    },
    other => panic!("Expected a validation error, got {other:?}"),
  }

  assert!(Query::list_all().execute(&mut db).await?.is_empty());
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_papers_survive_a_restart() -> TestResult<()> {
  let (store, dir) = create_test_store();
  let mut db = store.database().await?;
  Add::paper(NewPaper::validate(&submission("Durable", "Egypt", &["robotics"]))?)
    .execute(&mut db)
    .await?;
  store.close().await?;

  let reopened = Store::new(store.config().clone());
  let mut db = reopened.database().await?;
  let papers = Query::list_all().execute(&mut db).await?;
  assert_eq!(papers.len(), 1);
  assert_eq!(papers[0].country, "Egypt");
  assert!(dir.path().join("hub_test.db").exists());
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_listing_filters_fetched_papers() -> TestResult<()> {
  let (store, _dir) = create_test_store();
  let mut db = store.database().await?;
  for (title, country, keywords) in [
    ("Yoruba speech recognition", "Nigeria", &["speech", "NLP"][..]),
    ("Drought forecasting", "Kenya", &["climate"][..]),
    ("Igbo named entity recognition", "Nigeria", &["NLP"][..]),
  ] {
    Add::paper(NewPaper::validate(&submission(title, country, keywords))?)
      .execute(&mut db)
      .await?;
  }

  let papers = Query::list_all().execute(&mut db).await?;
  assert_eq!(filter::apply(&papers, &FilterState::default()).len(), 3);

  let kenya = filter::apply(&papers, &FilterState::default().with_country("Kenya"));
  assert_eq!(kenya.len(), 1);
  assert_eq!(kenya[0].title, "Drought forecasting");

  // Clicking Nigeria on the map twice returns to the unfiltered view
  let mut state = FilterState::default();
  state.toggle_country("Nigeria");
  assert_eq!(filter::apply(&papers, &state).len(), 2);
  state.toggle_country("Nigeria");
  assert_eq!(filter::apply(&papers, &state).len(), 3);

  assert_eq!(filter::unique_countries(&papers), vec!["Nigeria", "Kenya"]);
  assert_eq!(filter::unique_topics(&papers), vec!["speech", "NLP", "climate"]);
  Ok(())
}
