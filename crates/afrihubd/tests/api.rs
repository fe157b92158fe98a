use axum::http::StatusCode;
use serde_json::json;
use tower::util::ServiceExt; // for `oneshot`
use tracing_test::traced_test;

mod common;

use common::*;

#[traced_test]
#[tokio::test]
async fn test_list_is_empty_on_a_new_store() {
  let (app, _store) = test_app();
  let response = app.oneshot(get("/api/research")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  assert_eq!(body_json(response).await, json!([]));
}

#[traced_test]
#[tokio::test]
async fn test_create_then_list() {
  let (app, _store) = test_app();

  let mut body = submission("Wolof speech corpus", "Senegal", &["speech"]);
  body["paperUrl"] = json!("https://example.org/wolof");
  let response = app.clone().oneshot(post_json("/api/research", &body)).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let created = body_json(response).await;
  assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
  assert_eq!(created["title"], "Wolof speech corpus");
  assert_eq!(created["paperUrl"], "https://example.org/wolof");
  assert!(created["publishedAt"].is_string());
  assert!(created["createdAt"].is_string());

  let response = app.oneshot(get("/api/research")).await.unwrap();
  let papers = body_json(response).await;
  assert_eq!(papers.as_array().unwrap().len(), 1);
  assert_eq!(papers[0]["id"], created["id"]);
  assert_eq!(papers[0]["abstract"], body["abstract"]);
}

#[traced_test]
#[tokio::test]
async fn test_created_paper_echoes_the_submission() {
  let (app, _store) = test_app();
  let body = submission("Hausa sentiment lexicon", "Nigeria", &["NLP", "sentiment"]);
  let response = app.oneshot(post_json("/api/research", &body)).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let created = body_json(response).await;
  for field in ["title", "abstract", "keywords", "institution", "country", "authors"] {
    assert_eq!(created[field], body[field], "{field} differs from the submission");
  }
  assert!(created.get("paperUrl").is_none());
  assert_eq!(created["publishedAt"], created["createdAt"]);
}

#[traced_test]
#[tokio::test]
async fn test_short_abstract_is_rejected() {
  let (app, _store) = test_app();

  let mut body = submission("Short", "Kenya", &[]);
  body["abstract"] = json!("too short");
  let response = app.clone().oneshot(post_json("/api/research", &body)).await.unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let error = body_json(response).await;
  assert_eq!(error["error"][0]["path"], json!(["abstract"]));
  assert_eq!(error["error"][0]["code"], "too_small");

  // Nothing was stored
  let response = app.oneshot(get("/api/research")).await.unwrap();
  assert_eq!(body_json(response).await, json!([]));
}

#[traced_test]
#[tokio::test]
async fn test_every_issue_is_reported() {
  let (app, _store) = test_app();
  let body = json!({ "title": "", "abstract": 5, "paperUrl": "not a url" });
  let response = app.oneshot(post_json("/api/research", &body)).await.unwrap();
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let error = body_json(response).await;
  let paths: Vec<&str> =
    error["error"].as_array().unwrap().iter().map(|i| i["path"][0].as_str().unwrap()).collect();
  for field in ["title", "abstract", "institution", "country", "keywords", "authors", "paperUrl"] {
    assert!(paths.contains(&field), "missing issue for {field}");
  }
}

#[traced_test]
#[tokio::test]
async fn test_non_json_body_is_a_server_error() {
  let (app, _store) = test_app();
  let request = axum::http::Request::builder()
    .method(axum::http::Method::POST)
    .uri("/api/research")
    .header(axum::http::header::CONTENT_TYPE, "application/json")
    .body(axum::body::Body::from("{not json"))
    .unwrap();
  let response = app.clone().oneshot(request).await.unwrap();
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body_json(response).await, json!({ "error": "Internal Server Error" }));

  // Nothing was stored
  let response = app.oneshot(get("/api/research")).await.unwrap();
  assert_eq!(body_json(response).await, json!([]));
}

#[traced_test]
#[tokio::test]
async fn test_json_that_is_not_an_object_is_rejected() {
  let (app, _store) = test_app();
  for body in [json!(null), json!(["title"])] {
    let response = app.clone().oneshot(post_json("/api/research", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = body_json(response).await;
    assert_eq!(error["error"][0]["path"], json!([]));
    assert_eq!(error["error"][0]["code"], "invalid_type");
    assert_eq!(error["error"][0]["expected"], "object");
  }
}

#[traced_test]
#[tokio::test]
async fn test_stats_snapshot() {
  let (app, _store) = test_app();
  for (title, country) in [("One", "Ghana"), ("Two", "Ghana"), ("Three", "Ethiopia")] {
    let response =
      app.clone().oneshot(post_json("/api/research", &submission(title, country, &["AI"]))).await;
    assert_eq!(response.unwrap().status(), StatusCode::OK);
  }

  let response = app.oneshot(get("/api/stats")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let stats = body_json(response).await;
  assert_eq!(stats["totalPapers"], 3);
  assert_eq!(stats["totalInstitutions"], 2);
  assert_eq!(stats["totalCountries"], 2);
  assert_eq!(stats["topCountries"][0], json!({ "country": "Ghana", "count": 2 }));
  assert_eq!(stats["topKeywords"], json!([{ "keyword": "AI", "count": 3 }]));
}

#[traced_test]
#[tokio::test]
async fn test_run_scraper_stub() {
  let (app, _store) = test_app();
  let response = app.clone().oneshot(post("/api/run-scraper")).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);
  let report = body_json(response).await;
  assert_eq!(report["success"], true);
  assert_eq!(report["message"], "Scraper ran successfully");
  assert_eq!(report["papersScraped"], 12);
  assert!(report["timestamp"].is_string());

  // The stub writes nothing
  let response = app.oneshot(get("/api/research")).await.unwrap();
  assert_eq!(body_json(response).await, json!([]));
}

#[traced_test]
#[tokio::test]
async fn test_store_failure_is_a_generic_500() {
  let dir = tempfile::tempdir().unwrap();
  let blocker = dir.path().join("file");
  std::fs::write(&blocker, b"not a directory").unwrap();
  let store = std::sync::Arc::new(afrihub::database::Store::new(afrihub::config::StoreConfig {
    endpoint: afrihub::config::StoreEndpoint::Directory(blocker.join("store")),
    name:     "hub".into(),
  }));
  let app = afrihubd::server::build_router(afrihubd::server::AppState::new(store).unwrap());

  for (request, message) in [
    (get("/api/research"), "Failed to fetch research papers"),
    (get("/api/stats"), "Failed to fetch statistics"),
    (post("/api/run-scraper"), "Failed to run scraper"),
    (post_json("/api/research", &submission("Valid", "Kenya", &[])), "Internal Server Error"),
  ] {
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await, json!({ "error": message }));
  }
}
