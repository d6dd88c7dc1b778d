use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::foundation::error::{StrokeGridError, StrokeGridResult};

/// Read up to `limit` NDJSON objects from a shard file.
pub fn read_shard(path: &Path, limit: usize) -> StrokeGridResult<Vec<serde_json::Value>> {
    let f = File::open(path).map_err(|e| {
        StrokeGridError::shard_read(format!("open shard '{}': {e}", path.display()))
    })?;
    read_records(BufReader::new(f), limit)
        .map_err(|e| StrokeGridError::shard_read(format!("shard '{}': {e}", path.display())))
}

/// Parse NDJSON lines into JSON values, stopping after `limit` records.
///
/// Blank lines are skipped and do not count towards `limit`. A line that is not valid JSON
/// fails the whole stream; field-level validation is left to record decoding. Anything past
/// the limit is never parsed.
pub fn read_records<R: BufRead>(
    reader: R,
    limit: usize,
) -> StrokeGridResult<Vec<serde_json::Value>> {
    let mut out = Vec::new();
    for (line_idx, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(_) if out.len() >= limit => break,
            Err(e) => {
                return Err(StrokeGridError::shard_read(format!(
                    "line {}: read failed: {e}",
                    line_idx + 1
                )));
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if out.len() >= limit {
            tracing::info!(
                limit,
                line = line_idx + 1,
                "record limit reached, ignoring the remainder"
            );
            break;
        }
        let value = serde_json::from_str(trimmed).map_err(|e| {
            StrokeGridError::shard_read(format!("line {}: invalid JSON: {e}", line_idx + 1))
        })?;
        out.push(value);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/dataset/reader.rs"]
mod tests;
