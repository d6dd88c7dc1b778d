/// Convenience result type used across strokegrid.
pub type StrokeGridResult<T> = Result<T, StrokeGridError>;

/// Top-level error taxonomy used by the pipeline and dataset APIs.
///
/// Variants are scoped by how far a failure propagates: a [`StrokeGridError::RecordDecode`]
/// skips one record, a [`StrokeGridError::ShardRead`] skips one shard.
#[derive(thiserror::Error, Debug)]
pub enum StrokeGridError {
    /// Invalid user-provided options.
    #[error("validation error: {0}")]
    Validation(String),

    /// A shard could not be opened or its record stream is malformed.
    #[error("shard read error: {0}")]
    ShardRead(String),

    /// A single record could not be decoded or rasterized.
    #[error("record decode error: {0}")]
    RecordDecode(String),

    /// Writing a result document failed.
    #[error("output write error: {0}")]
    OutputWrite(String),
}

impl StrokeGridError {
    /// Build a [`StrokeGridError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StrokeGridError::ShardRead`] value.
    pub fn shard_read(msg: impl Into<String>) -> Self {
        Self::ShardRead(msg.into())
    }

    /// Build a [`StrokeGridError::RecordDecode`] value.
    pub fn record_decode(msg: impl Into<String>) -> Self {
        Self::RecordDecode(msg.into())
    }

    /// Build a [`StrokeGridError::OutputWrite`] value.
    pub fn output_write(msg: impl Into<String>) -> Self {
        Self::OutputWrite(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
