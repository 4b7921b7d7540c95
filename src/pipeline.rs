//! Pipeline — the `Load → Transform → Save` run over the configured files.
//!
//! Stages run strictly in order and the first error ends the run. Nothing is
//! written unless every stage before `Save` succeeded.

use std::path::{Path, PathBuf};

use cardprep_core::config::Config;
use cardprep_core::{store, Error, NormalizeStats, Normalizer};

/// The three sequential stages of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Transform,
    Save,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Load => write!(f, "load"),
            Stage::Transform => write!(f, "transform"),
            Stage::Save => write!(f, "save"),
        }
    }
}

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: NormalizeStats,
}

/// Load the input array, rewrite it, save it to the output path.
pub fn run(config: &Config) -> Result<RunSummary, Error> {
    let input = config.paths.input.as_path();
    let output = config.paths.output.as_path();

    let records = {
        let _span = tracing::info_span!("stage", stage = %Stage::Load).entered();
        store::load_records(input)?
    };

    let normalized = {
        let _span = tracing::info_span!("stage", stage = %Stage::Transform).entered();
        let normalizer = Normalizer::new(config.rule());
        tracing::debug!(
            field = %normalizer.rule().field,
            replacement = %normalizer.rule().replacement,
            "rewriting field"
        );
        normalizer.normalize(records)?
    };

    {
        let _span = tracing::info_span!("stage", stage = %Stage::Save).entered();
        store::save_records(output, &normalized.records, config.output.indent)?;
    }

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        stats = %normalized.stats,
        "run complete"
    );

    Ok(RunSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats: normalized.stats,
    })
}

/// Line printed on stdout after a successful save.
pub fn completion_message(output: &Path) -> String {
    format!("Preprocessing complete! Saved as '{}'.", output.display())
}
