//! Application configuration.
//!
//! Layers, lowest precedence first:
//! 1. Defaults in code
//! 2. `tomato_steward.toml` in the working directory (optional), or an explicit file
//! 3. Environment variables with the `TOMATO_` prefix (`__` between nested keys)
//!
//! Command-line options override all of these in `main`.

use std::path::{Path, PathBuf};

use config::{ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_CONFIG_NAME: &str = "tomato_steward";
pub const DEFAULT_STORE_PATH: &str = "tomato_steward.json";
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Settings file holding remembered inputs and units.
    pub store_path: PathBuf,

    /// tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    pub flags: FlagsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FlagsConfig {
    /// JSON file with flag values. Unset means offline defaults.
    #[serde(default)]
    pub source_path: Option<PathBuf>,

    /// Default for `ui.showUnitsToggle` when the source does not set it.
    pub show_units_toggle: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            flags: FlagsConfig::default(),
        }
    }
}

impl Default for FlagsConfig {
    fn default() -> Self {
        Self {
            source_path: None,
            show_units_toggle: true,
        }
    }
}

impl AppConfig {
    /// Load configuration. An explicit `file` must exist; the default file is optional.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config = config::Config::builder()
            .set_default("store_path", DEFAULT_STORE_PATH)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .set_default("flags.show_units_toggle", true)?
            .add_source(file_source)
            .add_source(
                Environment::with_prefix("TOMATO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
