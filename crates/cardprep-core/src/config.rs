//! Configuration types for cardprep.
//!
//! The rewrite has no user-facing configuration surface: [`Config::defaults`]
//! returns the built-in settings (fixed paths, the Anki rule, 4-space
//! indentation). [`Config::from_toml_str`] layers a TOML fragment over those
//! defaults for library callers and tests.

use serde::Deserialize;
use std::path::PathBuf;

use crate::types::SeparatorRule;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paths]
input  = "card3start.json"
output = "cards3end.json"

[rewrite]
field       = "flds"
separator   = "\u001F"
replacement = "---"

[output]
indent = 4
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level settings for one run.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub rewrite: RewriteConfig,
    pub output: OutputConfig,
}

/// `[paths]` section. Relative paths resolve against the working directory.
#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// `[rewrite]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RewriteConfig {
    pub field: String,
    pub separator: String,
    pub replacement: String,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Layer `overrides` on top of the built-in defaults.
    pub fn from_toml_str(overrides: &str) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(overrides, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        anyhow::ensure!(
            !cfg.rewrite.separator.is_empty(),
            "rewrite.separator must not be empty"
        );
        Ok(cfg)
    }

    /// The rewrite rule described by `[rewrite]`.
    pub fn rule(&self) -> SeparatorRule {
        SeparatorRule::new(
            self.rewrite.field.clone(),
            self.rewrite.separator.clone(),
            self.rewrite.replacement.clone(),
        )
    }

    /// Copy of this config with both paths resolved under `dir`.
    pub fn rooted_at(&self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut cfg = self.clone();
        cfg.paths.input = dir.join(&self.paths.input);
        cfg.paths.output = dir.join(&self.paths.output);
        cfg
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
