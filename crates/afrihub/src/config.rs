//! Store endpoint and server configuration.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file, then
//! environment variables. Only the store endpoint, store name and bind address are
//! configurable; everything else about the hub is fixed.
//!
//! # Examples
//!
//! ```
//! use afrihub::config::{Config, StoreEndpoint};
//!
//! let config = Config::default();
//! assert_eq!(config.store.name, "african_ai_research");
//! assert!(matches!(config.store.endpoint, StoreEndpoint::Directory(_)));
//! ```

use super::*;

/// Environment variable overriding the store endpoint.
pub const STORE_URL_ENV: &str = "AFRIHUB_STORE_URL";
/// Environment variable overriding the store (database) name.
pub const STORE_NAME_ENV: &str = "AFRIHUB_STORE_NAME";
/// Environment variable overriding the HTTP bind address.
pub const BIND_ENV: &str = "AFRIHUB_BIND";

/// Endpoint used when [`STORE_URL_ENV`] is unset.
pub const DEFAULT_STORE_URL: &str = "sqlite://./data";
/// Store name used when [`STORE_NAME_ENV`] is unset.
pub const DEFAULT_STORE_NAME: &str = "african_ai_research";
/// Bind address used when [`BIND_ENV`] is unset.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Where the document store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEndpoint {
  /// A directory holding one `<name>.db` file per store name
  Directory(PathBuf),
  /// A private, process-local store that vanishes when closed
  Memory,
}

impl FromStr for StoreEndpoint {
  type Err = HubError;

  fn from_str(s: &str) -> Result<Self> {
    let s = s.trim();
    match s {
      "" => Err(HubError::Config("Store endpoint must not be empty".into())),
      ":memory:" | "sqlite::memory:" | "sqlite://:memory:" => Ok(Self::Memory),
      _ => {
        let path = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:")).unwrap_or(s);
        if path.is_empty() {
          return Err(HubError::Config(format!("Store endpoint {s:?} names no directory")));
        }
        Ok(Self::Directory(PathBuf::from(path)))
      },
    }
  }
}

impl Display for StoreEndpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Directory(path) => write!(f, "sqlite://{}", path.display()),
      Self::Memory => write!(f, "sqlite::memory:"),
    }
  }
}

impl Serialize for StoreEndpoint {
  fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
  where S: serde::Serializer {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for StoreEndpoint {
  fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
  where D: serde::Deserializer<'de> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

/// Connection settings for the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
  /// Where the store lives
  pub endpoint: StoreEndpoint,
  /// Name of the database inside the endpoint
  pub name:     String,
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      endpoint: StoreEndpoint::Directory(PathBuf::from("./data")),
      name:     DEFAULT_STORE_NAME.to_string(),
    }
  }
}

impl StoreConfig {
  /// A configuration for a private in-memory store, mostly useful in tests.
  pub fn in_memory() -> Self { Self { endpoint: StoreEndpoint::Memory, ..Self::default() } }

  /// Builds the store configuration from the environment alone, falling back to the
  /// built-in defaults for anything unset.
  pub fn from_env() -> Result<Self> {
    let mut config = Self::default();
    config.apply_env()?;
    Ok(config)
  }

  /// Overrides fields with any store variables present in the environment.
  pub fn apply_env(&mut self) -> Result<()> {
    if let Ok(url) = std::env::var(STORE_URL_ENV) {
      self.endpoint = url.parse()?;
    }
    if let Ok(name) = std::env::var(STORE_NAME_ENV) {
      self.name = name;
    }
    self.check_name()
  }

  /// Location of the database file, or `None` for in-memory stores.
  pub fn database_path(&self) -> Option<PathBuf> {
    match &self.endpoint {
      StoreEndpoint::Directory(dir) => Some(dir.join(format!("{}.db", self.name))),
      StoreEndpoint::Memory => None,
    }
  }

  /// Rejects empty names and names containing path separators.
  fn check_name(&self) -> Result<()> {
    if self.name.is_empty() || self.name.contains(['/', '\\']) {
      return Err(HubError::Config(format!("Invalid store name {:?}", self.name)));
    }
    Ok(())
  }
}

/// Top-level configuration for the hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Document store settings
  pub store: StoreConfig,
  /// Address the HTTP server listens on
  pub bind:  String,
}

impl Default for Config {
  fn default() -> Self { Self { store: StoreConfig::default(), bind: DEFAULT_BIND.to_string() } }
}

impl Config {
  /// Returns the default path for the configuration file.
  ///
  /// - On Unix: `~/.config/afrihub/config.toml`
  /// - On macOS: `~/Library/Application Support/afrihub/config.toml`
  /// - On Windows: `%APPDATA%\afrihub\config.toml`
  /// - Fallback: `./afrihub/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("afrihub").join("config.toml")
  }

  /// Loads configuration from `path` when it exists, then applies environment
  /// overrides.
  ///
  /// A missing file is not an error; the defaults are used instead.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let mut config = if path.exists() {
      debug!("Loading configuration from {}", path.display());
      Self::from_toml(&std::fs::read_to_string(path)?)?
    } else {
      trace!("No configuration file at {}, using defaults", path.display());
      Self::default()
    };
    config.apply_env()?;
    Ok(config)
  }

  /// Parses a TOML document into a configuration.
  pub fn from_toml(content: &str) -> Result<Self> { Ok(toml::from_str(content)?) }

  /// Overrides fields with any variables present in the environment.
  pub fn apply_env(&mut self) -> Result<()> {
    self.store.apply_env()?;
    if let Ok(bind) = std::env::var(BIND_ENV) {
      self.bind = bind;
    }
    Ok(())
  }
}
