//! Document store access for research papers.
//!
//! Papers live as JSON documents in a single `research_papers` collection inside an
//! embedded SQLite database. This module provides:
//! - [`Database`]: an open handle to the collection
//! - [`Store`]: a cache holding at most one open [`Database`], connected on first use
//! - [`get_database`] / [`close_database_connection`]: the process-wide [`Store`],
//!   configured from the environment
//! - [`DatabaseInstruction`]s for listing, inserting and aggregating papers
//!
//! # Examples
//!
//! ```no_run
//! use afrihub::{
//!   config::StoreConfig,
//!   database::{Query, Store},
//!   prelude::*,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::new(StoreConfig::in_memory());
//! let mut db = store.database().await?;
//! let papers = Query::list_all().execute(&mut db).await?;
//! assert!(papers.is_empty());
//! store.close().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use tokio::sync::Mutex;
use tokio_rusqlite::Connection;

use super::*;

pub mod instruction;

pub use self::instruction::*;

/// Handle to an open document store.
///
/// Cloning is cheap; every clone talks to the same background connection.
#[derive(Clone)]
pub struct Database {
  /// Async SQLite connection handle
  conn: Connection,
}

impl Database {
  /// Opens the store described by `config`, creating it (and its directory) if needed.
  ///
  /// This method will:
  /// 1. Create the endpoint directory if it doesn't exist
  /// 2. Open or create `<name>.db` inside it (or a private in-memory store)
  /// 3. Initialize the collection schema
  ///
  /// No retry is attempted; any failure is returned to the caller.
  pub async fn open(config: &StoreConfig) -> Result<Self> {
    let conn = match config.database_path() {
      Some(path) => {
        if let Some(parent) = path.parent() {
          std::fs::create_dir_all(parent)?;
        }
        debug!("Opening document store at {}", path.display());
        Connection::open(path).await?
      },
      None => {
        debug!("Opening in-memory document store {:?}", config.name);
        Connection::open_in_memory().await?
      },
    };

    conn
      .call(|conn| {
        conn.execute_batch(include_str!(concat!(
          env!("CARGO_MANIFEST_DIR"),
          "/migrations/init.sql"
        )))?;
        Ok(())
      })
      .await?;

    Ok(Self { conn })
  }

  /// Closes the underlying connection.
  ///
  /// Other clones of this handle fail with a closed-connection error afterwards.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    Ok(())
  }
}

/// A lazily connected, cached [`Database`] handle.
///
/// The first call to [`Store::database`] connects; later calls reuse the cached handle
/// until [`Store::close`] clears it. The cache lock is held across the connect, so
/// concurrent cold starts share a single connection.
pub struct Store {
  /// Where and what to connect to
  config: StoreConfig,
  /// The cached handle, if connected
  cached: Mutex<Option<Database>>,
}

impl Store {
  /// Creates an unconnected store for `config`.
  pub fn new(config: StoreConfig) -> Self { Self { config, cached: Mutex::new(None) } }

  /// The process-wide store, configured from the environment on first use.
  ///
  /// See [`config::STORE_URL_ENV`] and [`config::STORE_NAME_ENV`].
  pub fn global() -> Result<&'static Store> {
    static INSTANCE: OnceLock<Store> = OnceLock::new();
    if let Some(store) = INSTANCE.get() {
      return Ok(store);
    }
    let config = StoreConfig::from_env()?;
    Ok(INSTANCE.get_or_init(|| Store::new(config)))
  }

  /// The configuration this store connects with.
  pub fn config(&self) -> &StoreConfig { &self.config }

  /// Returns the cached handle, connecting first if there is none.
  pub async fn database(&self) -> Result<Database> {
    let mut cached = self.cached.lock().await;
    if let Some(db) = cached.as_ref() {
      trace!("Reusing cached document store handle");
      return Ok(db.clone());
    }
    let db = Database::open(&self.config).await?;
    debug!("Connected to document store {} ({})", self.config.name, self.config.endpoint);
    *cached = Some(db.clone());
    Ok(db)
  }

  /// Whether a handle is currently cached.
  pub async fn is_connected(&self) -> bool { self.cached.lock().await.is_some() }

  /// Closes and forgets the cached handle. Does nothing when none is cached.
  pub async fn close(&self) -> Result<()> {
    let Some(db) = self.cached.lock().await.take() else {
      trace!("No document store connection to close");
      return Ok(());
    };
    debug!("Closing document store {}", self.config.name);
    db.close().await
  }
}

/// Returns a ready-to-use handle from the process-wide [`Store`].
pub async fn get_database() -> Result<Database> { Store::global()?.database().await }

/// Tears down the process-wide connection, if one is open.
pub async fn close_database_connection() -> Result<()> { Store::global()?.close().await }
