use std::path::{Path, PathBuf};

use crate::assemble::shard::{Assembler, ShardOutput};
use crate::dataset::opts::DatasetOpts;
use crate::dataset::reader::read_shard;
use crate::dataset::writer::{combined_output_path, output_path_for, write_records};
use crate::drawing::model::LabeledRecord;
use crate::foundation::error::{StrokeGridError, StrokeGridResult};

/// File extension recognized as a shard.
pub const SHARD_EXTENSION: &str = "ndjson";

/// A shard that could not be read or written.
#[derive(Debug)]
pub struct ShardFailure {
    /// Shard (or combined output) path.
    pub path: PathBuf,
    /// What went wrong.
    pub error: StrokeGridError,
}

/// Counters and outcomes for one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Seed the run used; pass it back to reproduce the output.
    pub seed: u64,
    /// Shards attempted.
    pub shards_total: usize,
    /// Shards that failed to read or write.
    pub failed_shards: Vec<ShardFailure>,
    /// Records written across all outputs.
    pub records_written: usize,
    /// Records skipped because they could not be decoded or rasterized.
    pub records_skipped: usize,
    /// Output files written.
    pub outputs: Vec<PathBuf>,
}

impl RunSummary {
    /// `true` when every shard was read and written.
    pub fn is_clean(&self) -> bool {
        self.failed_shards.is_empty()
    }
}

/// Shard files in `dir`, sorted by file name.
pub fn list_shards(dir: &Path) -> StrokeGridResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        StrokeGridError::shard_read(format!("list input dir '{}': {e}", dir.display()))
    })?;

    let mut shards = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            StrokeGridError::shard_read(format!("list input dir '{}': {e}", dir.display()))
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SHARD_EXTENSION) {
            shards.push(path);
        }
    }
    shards.sort();
    Ok(shards)
}

/// Process every shard of `opts.input_dir` into `opts.output_dir`.
///
/// Only option validation, output directory creation and listing the input directory are
/// fatal. Shard and record failures are logged and reported in the returned summary.
#[tracing::instrument(skip(opts), fields(input = %opts.input_dir.display(), output = %opts.output_dir.display()))]
pub fn run(opts: &DatasetOpts) -> StrokeGridResult<RunSummary> {
    opts.validate()?;

    std::fs::create_dir_all(&opts.output_dir).map_err(|e| {
        StrokeGridError::output_write(format!(
            "create output dir '{}': {e}",
            opts.output_dir.display()
        ))
    })?;

    let mut shards = list_shards(&opts.input_dir)?;
    if let Some(n) = opts.max_shards {
        shards.truncate(n);
    }

    let seed = opts.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, shards = shards.len(), "starting run");

    let assembler = Assembler::new(opts.assemble_opts(seed))?;
    let mut summary = RunSummary {
        seed,
        shards_total: shards.len(),
        ..RunSummary::default()
    };

    match opts.combine {
        None => {
            for (id, shard) in shards.iter().enumerate() {
                let out_path = output_path_for(&opts.output_dir, shard);
                let Some(records) = assemble_one(&assembler, id as u64, shard, &mut summary)
                else {
                    continue;
                };
                write_output(&out_path, &records, &mut summary, shard);
            }
        }
        Some(chunk) => {
            for (k, group) in shards.chunks(chunk).enumerate() {
                let out_path = combined_output_path(&opts.output_dir, k + 1);
                let mut everything = Vec::new();
                for (id, shard) in group.iter().enumerate() {
                    if let Some(records) = assemble_one(&assembler, id as u64, shard, &mut summary)
                    {
                        everything.extend(records);
                    }
                }
                write_output(&out_path, &everything, &mut summary, &out_path);
            }
        }
    }

    tracing::info!(
        written = summary.records_written,
        skipped = summary.records_skipped,
        failed_shards = summary.failed_shards.len(),
        "run finished"
    );
    Ok(summary)
}

fn assemble_one(
    assembler: &Assembler,
    id: u64,
    shard: &Path,
    summary: &mut RunSummary,
) -> Option<Vec<LabeledRecord>> {
    let raw = match read_shard(shard, assembler.opts().record_limit) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::error!(shard = %shard.display(), %error, "skipping shard");
            summary.failed_shards.push(ShardFailure {
                path: shard.to_path_buf(),
                error,
            });
            return None;
        }
    };

    let ShardOutput { records, failures } = assembler.assemble_shard(id, raw);
    summary.records_skipped += failures.len();
    Some(records)
}

fn write_output(
    out_path: &Path,
    records: &[LabeledRecord],
    summary: &mut RunSummary,
    source: &Path,
) {
    match write_records(out_path, records) {
        Ok(()) => {
            tracing::info!(out = %out_path.display(), records = records.len(), "wrote");
            summary.records_written += records.len();
            summary.outputs.push(out_path.to_path_buf());
        }
        Err(error) => {
            tracing::error!(out = %out_path.display(), %error, "failed to write output");
            summary.failed_shards.push(ShardFailure {
                path: source.to_path_buf(),
                error,
            });
        }
    }
}

/// Rasterize the record at `index` of `shard` exactly as a run with `opts` and `seed` would.
pub fn preview_record(
    opts: &DatasetOpts,
    seed: u64,
    shard_id: u64,
    shard: &Path,
    index: usize,
) -> StrokeGridResult<LabeledRecord> {
    let mut raw = read_shard(shard, index.saturating_add(1))?;
    if index >= raw.len() {
        return Err(StrokeGridError::validation(format!(
            "shard '{}' has only {} record(s)",
            shard.display(),
            raw.len()
        )));
    }
    let value = raw.swap_remove(index);
    let mut assemble_opts = opts.assemble_opts(seed);
    assemble_opts.threading.parallel = false;
    Assembler::new(assemble_opts)?.assemble_record(shard_id, index, value)
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/driver.rs"]
mod tests;
