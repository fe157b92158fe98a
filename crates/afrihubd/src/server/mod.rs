//! The HTTP server: JSON API under `/api` and server-rendered HTML pages.
//!
//! # Routes
//!
//! | Method | Path                 | Handler                     |
//! |--------|----------------------|-----------------------------|
//! | GET    | `/`                  | [`pages::index`]            |
//! | GET    | `/papers/{id}`       | [`pages::paper`]            |
//! | GET    | `/admin`             | [`pages::admin`]            |
//! | POST   | `/admin/run-scraper` | [`pages::run_scraper`]      |
//! | GET    | `/api/research`      | [`api::list_research`]      |
//! | POST   | `/api/research`      | [`api::create_research`]    |
//! | GET    | `/api/stats`         | [`api::stats`]              |
//! | POST   | `/api/run-scraper`   | [`api::run_scraper`]        |

use axum::{
  routing::{get, post},
  Router,
};
use minijinja::Environment;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::*;

pub mod api;
pub mod pages;
pub mod repository;
pub mod templates;

pub use self::repository::Repository;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
  /// The document store all handlers read from and write to
  pub store:     Arc<Store>,
  /// Compiled page templates
  pub templates: Arc<Environment<'static>>,
}

impl AppState {
  /// Wraps `store` and loads the page templates.
  pub fn new(store: Arc<Store>) -> Result<Self> {
    Ok(Self { store, templates: Arc::new(templates::environment()?) })
  }

  /// Paper operations over this state's store.
  pub fn repository(&self) -> Repository<'_> { Repository::new(&self.store) }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(pages::index))
    .route("/papers/{id}", get(pages::paper))
    .route("/admin", get(pages::admin))
    .route("/admin/run-scraper", post(pages::run_scraper))
    .route("/api/research", get(api::list_research).post(api::create_research))
    .route("/api/stats", get(api::stats))
    .route("/api/run-scraper", post(api::run_scraper))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Serves the application on `addr` until Ctrl-C is received, then closes the store.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
  let store = state.store.clone();
  let listener = TcpListener::bind(addr).await?;
  info!(%addr, version = env!("CARGO_PKG_VERSION"), "afrihub listening");

  axum::serve(listener, build_router(state))
    .with_graceful_shutdown(async {
      if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
      }
      info!("ctrl-c received; shutting down");
    })
    .await?;

  store.close().await?;
  Ok(())
}
