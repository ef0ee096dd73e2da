//! Configuration types for decaf.
//!
//! [`Config::load`] layers, lowest to highest priority: the built-in
//! defaults, an optional TOML file (`--config FILE`, else `./decaf.toml`),
//! and `DECAF_*` environment variables (`DECAF_DATA__PATH`,
//! `DECAF_WRITE__ATOMIC`, `DECAF_RUN__STRICT_EXIT`). [`Config::defaults`]
//! returns the defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::patch::PatchOptions;
use crate::store::WriteMode;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[data]
path = "Sources/Resources/SampleData.json"

[write]
atomic = true

[run]
strict_exit = false
"#;

/// Config file picked up from the working directory when `--config` is not given.
pub const LOCAL_CONFIG_FILE: &str = "decaf.toml";

const ENV_PREFIX: &str = "DECAF";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub write: WriteConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// `[data]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Drinks document to normalize in place.
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf { PathBuf::from("Sources/Resources/SampleData.json") }

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: default_data_path() }
    }
}

/// `[write]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WriteConfig {
    /// Temp file + rename instead of truncating the document directly.
    #[serde(default = "default_atomic")]
    pub atomic: bool,
}

fn default_atomic() -> bool { true }

impl Default for WriteConfig {
    fn default() -> Self {
        Self { atomic: default_atomic() }
    }
}

/// `[run]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
    /// Exit with status 1 when the run fails instead of always exiting 0.
    #[serde(default)]
    pub strict_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. `file` must exist when given;
    /// otherwise `./decaf.toml` is read if present.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        Self::build(file, config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Options for [`normalize_with`](crate::normalize_with).
    pub fn patch_options(&self) -> PatchOptions {
        PatchOptions {
            write_mode: WriteMode::from_atomic(self.write.atomic),
        }
    }

    fn build(file: Option<&Path>, env: config::Environment) -> anyhow::Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file_source.format(config::FileFormat::Toml))
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
