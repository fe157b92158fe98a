//! JSON API handlers.
//!
//! Failures are logged with their cause and answered with a fixed message; store errors
//! never reach the client.

use axum::{
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};

use super::*;

/// A `500` response with body `{ "error": message }`.
fn failure(message: &str) -> Response {
  (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": message }))).into_response()
}

/// A `400` response listing every validation issue.
fn rejected(issues: &[ValidationIssue]) -> Response {
  (StatusCode::BAD_REQUEST, Json(json!({ "error": issues }))).into_response()
}

/// `GET /api/research`: every paper, oldest first.
pub async fn list_research(State(state): State<AppState>) -> Response {
  match state.repository().list_papers().await {
    Ok(papers) => Json(papers).into_response(),
    Err(e) => {
      error!(error = %e, "failed to fetch research papers");
      failure("Failed to fetch research papers")
    },
  }
}

/// `POST /api/research`: validates and stores one paper.
///
/// A body that is not JSON at all is an unexpected failure, not a schema violation.
/// JSON that is not an object is still rejected with a `400`.
pub async fn create_research(State(state): State<AppState>, body: Bytes) -> Response {
  let body: Value = match serde_json::from_slice(&body) {
    Ok(body) => body,
    Err(e) => {
      error!(error = %e, "failed to read research paper body");
      return failure("Internal Server Error");
    },
  };

  match state.repository().create_paper(&body).await {
    Ok(paper) => Json(paper).into_response(),
    Err(HubError::Validation(issues)) => rejected(&issues),
    Err(e) => {
      error!(error = %e, "failed to create research paper");
      failure("Internal Server Error")
    },
  }
}

/// `GET /api/stats`: a fresh statistics snapshot.
pub async fn stats(State(state): State<AppState>) -> Response {
  match state.repository().stats().await {
    Ok(snapshot) => Json(snapshot).into_response(),
    Err(e) => {
      error!(error = %e, "failed to fetch statistics");
      failure("Failed to fetch statistics")
    },
  }
}

/// `POST /api/run-scraper`: the scraper stub's report.
pub async fn run_scraper(State(state): State<AppState>) -> Response {
  match state.repository().run_scraper().await {
    Ok(report) => Json(report).into_response(),
    Err(e) => {
      error!(error = %e, "failed to run scraper");
      failure("Failed to run scraper")
    },
  }
}
