//! Helpers shared by the router test binaries.

#![allow(dead_code)]

use std::sync::Arc;

use afrihub::{config::StoreConfig, database::Store};
use afrihubd::server::{build_router, AppState};
use axum::{
  body::Body,
  http::{header, Method, Request},
  Router,
};

/// A router over a fresh in-memory store, plus the store for direct inspection.
pub fn test_app() -> (Router, Arc<Store>) {
  let store = Arc::new(Store::new(StoreConfig::in_memory()));
  let state = AppState::new(store.clone()).unwrap();
  (build_router(state), store)
}

pub fn get(uri: &str) -> Request<Body> {
  Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post(uri: &str) -> Request<Body> {
  Request::builder().method(Method::POST).uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
  Request::builder()
    .method(Method::POST)
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
  axum::body::to_bytes(response.into_body(), 1024 * 1024).await.unwrap().to_vec()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
  serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
  String::from_utf8(body_bytes(response).await).unwrap()
}

pub fn submission(title: &str, country: &str, keywords: &[&str]) -> serde_json::Value {
  serde_json::json!({
    "title": title,
    "abstract": format!("{title} using data collected across the region."),
    "keywords": keywords,
    "institution": format!("University of {country}"),
    "country": country,
    "authors": ["Nia Okafor"],
  })
}
