//! `olex.toml` configuration.
//!
//! ```toml
//! content = ["./src/**/*.html"]   # or a single string
//! prefix = "hl"
//! custom_media = false
//!
//! [theme.breakpoint]
//! md = "800px"
//!
//! [theme.space]
//! base = 8
//! ```
//!
//! Theme tables are deep-merged over the defaults, so a user file only needs
//! the keys it changes.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// File name looked up in the project root.
pub const CONFIG_FILE: &str = "olex.toml";

/// Errors from loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Content globs, relative to [`Config::root`].
    pub content: Vec<String>,
    /// Token prefix, without the trailing hyphen.
    pub prefix: String,
    /// Keep `@custom-media` rules and `@media (--key)` queries as written.
    pub custom_media: bool,
    /// Two-level theme token tables, in declaration order.
    pub theme: toml::Table,
    /// Directory the config was loaded from.
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: vec!["./**/*.html".to_string()],
            prefix: String::new(),
            custom_media: false,
            theme: default_theme(),
            root: PathBuf::from("."),
        }
    }
}

/// On-disk shape: every field optional so defaults survive.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    content: Option<Content>,
    prefix: Option<String>,
    custom_media: Option<bool>,
    theme: toml::Table,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Content {
    One(String),
    Many(Vec<String>),
}

impl Config {
    /// Parse config text, resolving content globs against `root`.
    pub fn from_toml_str(text: &str, root: impl Into<PathBuf>) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(text)?;
        let mut config = Config {
            root: root.into(),
            ..Config::default()
        };

        if let Some(content) = file.content {
            config.content = match content {
                Content::One(pattern) => vec![pattern],
                Content::Many(patterns) => patterns,
            };
        }
        if let Some(prefix) = file.prefix {
            config.prefix = prefix;
        }
        if let Some(custom_media) = file.custom_media {
            config.custom_media = custom_media;
        }
        deep_merge(&mut config.theme, file.theme);

        Ok(config)
    }

    /// Load a config file. A missing file yields defaults rooted at the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Config {
                root,
                ..Config::default()
            });
        }

        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, root).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        info!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Default theme tables: the breakpoint scale.
fn default_theme() -> toml::Table {
    let breakpoints = [
        ("xxs", "375px"),
        ("xs", "414px"),
        ("sm", "576px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
        ("xxl", "1480px"),
    ];
    let mut table = toml::Table::new();
    table.insert(
        "breakpoint".to_string(),
        toml::Value::Table(
            breakpoints
                .into_iter()
                .map(|(k, v)| (k.to_string(), toml::Value::String(v.to_string())))
                .collect(),
        ),
    );
    table
}

/// Merge `source` into `target`: nested tables merge key by key, anything
/// else replaces. Existing keys keep their position.
fn deep_merge(target: &mut toml::Table, source: toml::Table) {
    for (key, value) in source {
        match value {
            toml::Value::Table(incoming) => {
                if let Some(toml::Value::Table(existing)) = target.get_mut(&key) {
                    deep_merge(existing, incoming);
                } else {
                    target.insert(key, toml::Value::Table(incoming));
                }
            }
            other => {
                target.insert(key, other);
            }
        }
    }
}

/// Render a scalar theme value as CSS text. Arrays, dates, and nested tables
/// have no CSS rendering.
pub fn scalar_text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(_) | toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}
