//! Error types for the afrihub library.
//!
//! This module provides a single error type covering every failure mode of the
//! library:
//! - Store connection and query failures
//! - Write-side validation of incoming papers
//! - Configuration loading
//!
//! # Examples
//!
//! ```
//! use afrihub::{error::HubError, paper::NewPaper};
//!
//! let result = NewPaper::validate(&serde_json::json!({ "title": "" }));
//! match result {
//!   Err(HubError::Validation(issues)) => println!("{} problems", issues.len()),
//!   Err(e) => println!("Other error: {}", e),
//!   Ok(_) => println!("Valid!"),
//! }
//! ```

use thiserror::Error;

use crate::paper::ValidationIssue;

/// Error type alias used for the [`afrihub`](crate) crate.
pub type Result<T> = core::result::Result<T, HubError>;

/// Errors that can occur when working with the research hub.
#[derive(Error, Debug)]
pub enum HubError {
  /// A paper submitted for creation did not match the write schema.
  ///
  /// Every offending field is reported, not just the first one, so callers can
  /// surface the full list back to whoever submitted the paper.
  #[error("Paper failed validation with {} issue(s)", .0.len())]
  Validation(Vec<ValidationIssue>),

  /// A SQLite operation failed.
  ///
  /// This wraps errors from the `rusqlite` crate, covering:
  /// - SQL syntax errors
  /// - Constraint violations
  /// - Type conversion errors
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// An async SQLite operation failed.
  ///
  /// This wraps errors from the `tokio-rusqlite` crate, covering a closed
  /// connection as well as failures inside the background call.
  #[error(transparent)]
  AsyncSqlite(#[from] tokio_rusqlite::Error),

  /// A stored document could not be (de)serialized.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Creating the store directory fails
  /// - Reading a configuration file fails
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A configuration file was not valid TOML for [`Config`](crate::config::Config).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// A configuration value was invalid.
  #[error("{0}")]
  Config(String),
}
