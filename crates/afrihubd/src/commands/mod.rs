//! CLI subcommands.
//!
//! Every command takes the [`UserInteraction`] to reply through and the [`Store`] to run
//! against, so the binary decides where output goes and which store is used.

use clap::{Args, Subcommand};

use super::*;

pub mod add;
pub mod get;
pub mod list;
pub mod scrape;
pub mod serve;
pub mod stats;

pub use self::{
  add::{add, AddOptions},
  get::get,
  list::{list, ListOptions},
  scrape::scrape,
  serve::{serve, ServeOptions},
  stats::stats,
};

/// Available commands for the CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
  /// Run the web server (JSON API and HTML pages)
  Serve(ServeOptions),

  /// Validate and store a new paper
  Add(AddOptions),

  /// List papers, optionally filtered the same way as the listing page
  List(ListOptions),

  /// Show one paper in full
  Get {
    /// Identifier assigned when the paper was stored
    id: String,
  },

  /// Show catalog statistics
  Stats,

  /// Trigger a scraper run
  Scrape,
}
