use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assemble::shard::{AssembleOpts, DEFAULT_RECORD_LIMIT, Threading};
use crate::augment::padding::PaddingRange;
use crate::foundation::error::{StrokeGridError, StrokeGridResult};

/// Run configuration. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetOpts {
    /// Directory scanned for `*.ndjson` shards.
    pub input_dir: PathBuf,
    /// Directory receiving the JSON results; created when absent.
    pub output_dir: PathBuf,
    /// Maximum records taken from each shard.
    pub record_limit: usize,
    /// Total padding range.
    pub padding: PaddingRange,
    /// Run seed. `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Only process the first `n` shards (sorted by file name).
    pub max_shards: Option<usize>,
    /// Group shards into chunks of `n` and write one `dataset-<k>.json` per chunk.
    pub combine: Option<usize>,
    /// Scheduling controls.
    pub threading: Threading,
}

impl Default for DatasetOpts {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("new-data"),
            record_limit: DEFAULT_RECORD_LIMIT,
            padding: PaddingRange::default(),
            seed: None,
            max_shards: None,
            combine: None,
            threading: Threading::default(),
        }
    }
}

impl DatasetOpts {
    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> StrokeGridResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StrokeGridError::validation(format!("open config '{}': {e}", path.display()))
        })?;
        serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            StrokeGridError::validation(format!("parse config '{}': {e}", path.display()))
        })
    }

    /// Check values that serde cannot.
    pub fn validate(&self) -> StrokeGridResult<()> {
        if self.combine == Some(0) {
            return Err(StrokeGridError::validation("combine chunk size must be >= 1"));
        }
        if self.threading.threads == Some(0) {
            return Err(StrokeGridError::validation(
                "threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Assembler options for a run with the resolved `seed`.
    pub fn assemble_opts(&self, seed: u64) -> AssembleOpts {
        AssembleOpts {
            padding: self.padding,
            seed,
            record_limit: self.record_limit,
            threading: self.threading.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/opts.rs"]
mod tests;
