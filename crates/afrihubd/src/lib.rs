//! Web server and command line front end for the African AI Research Hub.
//!
//! The binary (`afrihub`) wraps the [`afrihub`] library in two ways:
//! - An HTTP server ([`server`]) exposing the JSON API and the HTML pages
//! - One-shot CLI commands ([`commands`]) for adding, listing and inspecting papers
//!
//! # Usage
//!
//! ```bash
//! # Serve the site on the configured address
//! afrihub serve --bind 127.0.0.1:3000
//!
//! # Add a paper from the command line
//! afrihub add --title "Yoruba ASR" --abstract "Speech recognition for Yoruba." \
//!   --author "Ada Obi" --institution "University of Lagos" --country Nigeria --keyword speech
//!
//! # List papers from Kenya mentioning "malaria"
//! afrihub list --query malaria --country Kenya
//!
//! # Show catalog statistics
//! afrihub stats
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{net::SocketAddr, sync::Arc};

use afrihub::{
  config::Config,
  database::{Add, Query, Stats, StatsSnapshot, Store},
  error::HubError,
  filter::{self, FilterState},
  paper::{NewPaper, Paper, ValidationIssue},
  prelude::*,
  scraper::{self, ScrapeReport},
};
use console::style;
use serde_json::{json, Value};
use tracing::{debug, error, info, trace};

pub mod commands;
pub mod error;
pub mod interaction;
pub mod server;

use crate::{error::*, interaction::*};
