use std::error::Error;

use afrihub::{
  config::{StoreConfig, StoreEndpoint},
  database::{Add, Query, Stats, Store},
  error::HubError,
  filter::{self, FilterState},
  paper::{IssueCode, NewPaper},
  prelude::*,
};
use serde_json::json;
use tempfile::{tempdir, TempDir};
use tracing_test::traced_test;

mod workflows;

pub type TestResult<T> = Result<T, Box<dyn Error>>;

/// A store in a fresh temporary directory. Keep the [`TempDir`] alive for the test's duration.
pub fn create_test_store() -> (Store, TempDir) {
  let dir = tempdir().unwrap();
  let config = StoreConfig {
    endpoint: StoreEndpoint::Directory(dir.path().to_path_buf()),
    name:     "hub_test".into(),
  };
  (Store::new(config), dir)
}

/// A valid submission body for a paper from `country`.
pub fn submission(title: &str, country: &str, keywords: &[&str]) -> serde_json::Value {
  json!({
    "title": title,
    "abstract": format!("{title}: a study of applied machine learning on the continent."),
    "keywords": keywords,
    "institution": format!("University of {country}"),
    "country": country,
    "authors": ["Amina Diallo", "Kwame Asante"],
  })
}
