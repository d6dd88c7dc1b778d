use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assemble::drawing::rasterize_drawing;
use crate::augment::padding::PaddingRange;
use crate::drawing::model::{DrawingRecord, LabeledRecord};
use crate::foundation::error::{StrokeGridError, StrokeGridResult};
use crate::foundation::math::record_seed;

/// Default cap on records taken from one shard.
pub const DEFAULT_RECORD_LIMIT: usize = 50_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Worker pool and chunking controls.
pub struct Threading {
    /// Run records on a rayon pool when `true`, in a plain loop otherwise.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Records materialized per scheduling batch.
    pub chunk_size: usize,
}

impl Default for Threading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            chunk_size: 1024,
        }
    }
}

/// Options shared by every shard of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembleOpts {
    /// Total padding range.
    pub padding: PaddingRange,
    /// Run seed; per-record seeds are derived from it.
    pub seed: u64,
    /// Maximum records processed per shard.
    pub record_limit: usize,
    /// Scheduling controls.
    pub threading: Threading,
}

impl Default for AssembleOpts {
    fn default() -> Self {
        Self {
            padding: PaddingRange::default(),
            seed: 0,
            record_limit: DEFAULT_RECORD_LIMIT,
            threading: Threading::default(),
        }
    }
}

/// A record that was skipped.
#[derive(Debug)]
pub struct RecordFailure {
    /// 0-based position of the record in its shard.
    pub index: usize,
    /// Why it was skipped.
    pub error: StrokeGridError,
}

/// Result of assembling one shard.
#[derive(Debug, Default)]
pub struct ShardOutput {
    /// Successful records, in input order.
    pub records: Vec<LabeledRecord>,
    /// Skipped records, in input order.
    pub failures: Vec<RecordFailure>,
}

/// Runs the drawing pipeline over shard records.
pub struct Assembler {
    opts: AssembleOpts,
    pool: Option<rayon::ThreadPool>,
}

impl Assembler {
    /// Validate options and build the worker pool (parallel mode only).
    pub fn new(opts: AssembleOpts) -> StrokeGridResult<Self> {
        let pool = if opts.threading.parallel {
            Some(build_thread_pool(opts.threading.threads)?)
        } else {
            None
        };
        Ok(Self { opts, pool })
    }

    /// Options this assembler was built with.
    pub fn opts(&self) -> &AssembleOpts {
        &self.opts
    }

    /// Decode and rasterize every record of shard `id`.
    ///
    /// Per-record failures are collected rather than propagated. Output order matches input
    /// order regardless of which worker finishes first.
    #[tracing::instrument(skip(self, raw), fields(records = raw.len()))]
    pub fn assemble_shard(&self, id: u64, raw: Vec<serde_json::Value>) -> ShardOutput {
        let chunk_size = normalized_chunk_size(self.opts.threading.chunk_size);
        let mut out = ShardOutput::default();
        let mut items = raw.into_iter().take(self.opts.record_limit).enumerate();

        loop {
            let chunk: Vec<(usize, serde_json::Value)> = items.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                break;
            }

            let results: Vec<(usize, StrokeGridResult<LabeledRecord>)> = match &self.pool {
                Some(pool) => pool.install(|| {
                    chunk
                        .into_par_iter()
                        .map(|(index, value)| (index, self.assemble_record(id, index, value)))
                        .collect()
                }),
                None => chunk
                    .into_iter()
                    .map(|(index, value)| (index, self.assemble_record(id, index, value)))
                    .collect(),
            };

            for (index, result) in results {
                match result {
                    Ok(record) => out.records.push(record),
                    Err(error) => {
                        tracing::warn!(shard = id, index, %error, "skipping record");
                        out.failures.push(RecordFailure { index, error });
                    }
                }
            }
        }

        out
    }

    /// Decode and rasterize a single record at `index` of shard `id`.
    ///
    /// Uses the same per-record seed as [`Assembler::assemble_shard`], so the result matches the
    /// corresponding entry of a full run.
    pub fn assemble_record(
        &self,
        id: u64,
        index: usize,
        value: serde_json::Value,
    ) -> StrokeGridResult<LabeledRecord> {
        let record = DrawingRecord::from_value(value)?;
        let mut rng = ChaCha8Rng::seed_from_u64(record_seed(self.opts.seed, id, index as u64));
        let pixels = rasterize_drawing(&record.drawing, self.opts.padding, &mut rng)?;
        Ok(LabeledRecord {
            id,
            word: record.word,
            pixels,
        })
    }
}

fn build_thread_pool(threads: Option<usize>) -> StrokeGridResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(StrokeGridError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StrokeGridError::validation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> usize {
    chunk_size.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/shard.rs"]
mod tests;
