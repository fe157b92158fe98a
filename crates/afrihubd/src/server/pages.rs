//! Server-rendered HTML pages.
//!
//! Pages never fail because the store does: a failed fetch is logged and the page is
//! rendered with empty data instead. Only the admin scraper trigger reports an error to
//! the user.

use afrihub::present::{map, PaperCard, ScheduleDisplay};
use axum::{
  extract::{Path, Query as QueryParams, State},
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use chrono::{Datelike, Utc};
use minijinja::context;
use serde::Serialize;

use super::*;

/// A map marker together with the listing URL its click leads to.
#[derive(Debug, Serialize)]
struct MarkerView {
  /// Marker layout
  marker: map::MapMarker,
  /// Listing URL with this marker's country toggled
  href:   String,
}

/// Builds a link to the listing page for `state`.
fn listing_href(state: &FilterState) -> String {
  let query = state.to_query_string();
  if query.is_empty() {
    "/".to_string()
  } else {
    format!("/?{query}")
  }
}

/// Renders `name` with `ctx`, adding the values every page's layout needs.
fn render(state: &AppState, status: StatusCode, name: &str, ctx: minijinja::Value) -> Response {
  let ctx = context! { year => Utc::now().year(), ..ctx };
  match state.templates.get_template(name).and_then(|template| template.render(ctx)) {
    Ok(html) => (status, Html(html)).into_response(),
    Err(e) => {
      error!(error = %e, template = name, "failed to render page");
      (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    },
  }
}

/// `GET /`: the map, the search form and the filtered paper cards.
pub async fn index(
  State(state): State<AppState>,
  QueryParams(filters): QueryParams<FilterState>,
) -> Response {
  let papers = state.repository().list_papers().await.unwrap_or_else(|e| {
    error!(error = %e, "failed to fetch research papers");
    Vec::new()
  });

  let counts = filter::country_counts(&papers);
  let markers: Vec<MarkerView> = map::markers(&counts, &filters.country)
    .into_iter()
    .map(|marker| {
      let href = listing_href(&filters.toggled_country(&marker.country));
      MarkerView { marker, href }
    })
    .collect();
  let cards: Vec<PaperCard> = filter::apply(&papers, &filters).iter().map(PaperCard::from).collect();

  render(&state, StatusCode::OK, "index.html", context! {
    filters => &filters,
    countries => filter::unique_countries(&papers),
    topics => filter::unique_topics(&papers),
    markers => markers,
    clear_country_href => listing_href(&filters.clone().with_country("")),
    cards => cards,
  })
}

/// `GET /papers/{id}`: one paper with its full abstract.
pub async fn paper(State(state): State<AppState>, Path(id): Path<String>) -> Response {
  match state.repository().find_paper(&id).await {
    Ok(Some(paper)) => render(&state, StatusCode::OK, "paper.html", context! {
      card => PaperCard::from(&paper),
      abstract_text => paper.abstract_text,
    }),
    Ok(None) => render(&state, StatusCode::NOT_FOUND, "not_found.html", context! { id => id }),
    Err(e) => {
      error!(error = %e, id = %id, "failed to fetch research paper");
      render(&state, StatusCode::NOT_FOUND, "not_found.html", context! { id => id })
    },
  }
}

/// Renders the admin dashboard with an optional scraper status line or error.
async fn admin_page(state: &AppState, status: Option<String>, failure: Option<&str>) -> Response {
  let stats = state.repository().stats().await.unwrap_or_else(|e| {
    error!(error = %e, "failed to fetch statistics");
    StatsSnapshot::default()
  });

  render(state, StatusCode::OK, "admin.html", context! {
    stats => stats,
    schedule => ScheduleDisplay::default(),
    status => status,
    failure => failure,
  })
}

/// `GET /admin`: statistics and scraper controls.
pub async fn admin(State(state): State<AppState>) -> Response { admin_page(&state, None, None).await }

/// `POST /admin/run-scraper`: runs the scraper, then shows the dashboard with the outcome.
pub async fn run_scraper(State(state): State<AppState>) -> Response {
  match state.repository().run_scraper().await {
    Ok(report) => {
      let status =
        format!("Scraper completed successfully. Found {} papers.", report.papers_scraped);
      admin_page(&state, Some(status), None).await
    },
    Err(e) => {
      error!(error = %e, "failed to run scraper");
      admin_page(&state, None, Some("Failed to run scraper")).await
    },
  }
}
