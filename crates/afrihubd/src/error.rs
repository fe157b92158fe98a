//! Error types for the `afrihub` binary.
//!
//! [`HubdError`] wraps library failures from [`afrihub`] together with the failures
//! only the front end can hit: binding the listener, bad addresses and template
//! rendering.

use thiserror::Error;

use super::*;

/// Result type used throughout the binary.
pub type Result<T> = core::result::Result<T, HubdError>;

/// Errors that can occur while serving or running a CLI command.
#[derive(Error, Debug)]
pub enum HubdError {
  /// A library operation failed
  #[error(transparent)]
  Hub(#[from] HubError),

  /// Binding or serving the listener failed
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The configured bind address does not parse
  #[error("Invalid bind address {0:?}: {1}")]
  Address(String, std::net::AddrParseError),

  /// A page template failed to load or render
  #[error(transparent)]
  Template(#[from] minijinja::Error),

  /// No paper has the requested identifier
  #[error("No paper with id {0}")]
  NotFound(String),
}
