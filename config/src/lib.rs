//! Specimen configuration.
//!
//! Everything is optional: with no config file the runner uses the built-in
//! defaults below. A file is looked up at `$SPECIMEN_CONFIG`, falling back to
//! `~/.specimen/config.toml`.
//!
//! ```toml
//! [app]
//! tag = "JsTestApp"
//!
//! [sequence]
//! max_items = 10
//!
//! [fetch]
//! delay_ms = 200
//! ```

use serde::Deserialize;
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

pub const APP_NAME: &str = "JsTestApp";
pub const VERSION: &str = "1.0";
pub const MAX_ITEMS: usize = 10;
pub const FETCH_DELAY: Duration = Duration::from_millis(200);

/// Upper bound on `sequence.max_items`; keeps squared values well inside `i64`.
pub const MAX_ITEMS_LIMIT: usize = 10_000;

pub const CONFIG_PATH_ENV: &str = "SPECIMEN_CONFIG";
pub const FETCH_DELAY_ENV: &str = "SPECIMEN_FETCH_DELAY_MS";

#[derive(Debug, Default, Deserialize)]
pub struct SpecimenConfig {
    pub app: Option<AppConfig>,
    pub sequence: Option<SequenceConfig>,
    pub fetch: Option<FetchConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Bracketed prefix for every output line.
    pub tag: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SequenceConfig {
    /// Number of squares generated before filtering.
    pub max_items: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FetchConfig {
    /// Simulated fetch latency in milliseconds.
    pub delay_ms: Option<u64>,
}

impl SpecimenConfig {
    /// Load from the default location.
    ///
    /// A missing file is `Ok(None)`, not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Self::parse(&content).map_err(|err| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(explicit) = env::var(CONFIG_PATH_ENV)
        && !explicit.trim().is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".specimen").join("config.toml"))
}

/// Fully resolved knobs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub tag: String,
    pub max_items: usize,
    pub fetch_delay: Duration,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            tag: APP_NAME.to_string(),
            max_items: MAX_ITEMS,
            fetch_delay: FETCH_DELAY,
        }
    }
}

impl RunSettings {
    /// Resolve settings from an optional config plus the process environment.
    #[must_use]
    pub fn resolve(config: Option<&SpecimenConfig>) -> Self {
        let env_delay = env::var(FETCH_DELAY_ENV).ok();
        Self::resolve_with(config, env_delay.as_deref())
    }

    /// Resolve settings with an explicit value for the delay override.
    #[must_use]
    pub fn resolve_with(config: Option<&SpecimenConfig>, env_delay: Option<&str>) -> Self {
        let mut settings = Self::default();

        if let Some(tag) = config
            .and_then(|cfg| cfg.app.as_ref())
            .and_then(|app| app.tag.as_deref())
        {
            let tag = tag.trim();
            if tag.is_empty() {
                tracing::warn!("Ignoring empty app.tag in config");
            } else {
                settings.tag = tag.to_string();
            }
        }

        if let Some(max_items) = config
            .and_then(|cfg| cfg.sequence.as_ref())
            .and_then(|seq| seq.max_items)
        {
            if max_items > MAX_ITEMS_LIMIT {
                tracing::warn!(
                    max_items,
                    limit = MAX_ITEMS_LIMIT,
                    "sequence.max_items too large; clamping"
                );
            }
            settings.max_items = max_items.min(MAX_ITEMS_LIMIT);
        }

        if let Some(delay_ms) = config
            .and_then(|cfg| cfg.fetch.as_ref())
            .and_then(|fetch| fetch.delay_ms)
        {
            settings.fetch_delay = Duration::from_millis(delay_ms);
        }

        if let Some(raw) = env_delay {
            match raw.trim().parse::<u64>() {
                Ok(ms) => settings.fetch_delay = Duration::from_millis(ms),
                Err(_) => tracing::warn!("Invalid {FETCH_DELAY_ENV} value: {raw}"),
            }
        }

        settings
    }
}
