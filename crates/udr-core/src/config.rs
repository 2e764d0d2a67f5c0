//! Configuration types for udr.
//!
//! [`Config::load_from`] layers a TOML file over the embedded defaults; a
//! missing file is not an error. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[dispatch]
hex_discriminant      = "6"
extended_discriminant = "4"

[batch]
parallel_threshold = 1024
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level parser configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

/// `[dispatch]` section: which ID suffix selects which layout.
///
/// Every other suffix selects the default layout. The order in which the
/// layouts are tried does not depend on these values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DispatchConfig {
    #[serde(default = "default_hex_discriminant")]
    pub hex_discriminant: char,
    #[serde(default = "default_extended_discriminant")]
    pub extended_discriminant: char,
}

fn default_hex_discriminant() -> char { '6' }
fn default_extended_discriminant() -> char { '4' }

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            hex_discriminant: default_hex_discriminant(),
            extended_discriminant: default_extended_discriminant(),
        }
    }
}

/// `[batch]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchConfig {
    /// Batches with at least this many lines are parsed in parallel.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize { 1024 }

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path`, layered on top of the built-in defaults. A missing file
    /// yields the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path.as_ref())
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Parse a TOML document, layered on top of the built-in defaults.
    pub fn from_toml_str(toml: &str) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            dispatch: DispatchConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
