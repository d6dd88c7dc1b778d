//! strokegrid turns simplified stroke drawings into padded 64x64 binary pixel grids.
//!
//! # Pipeline overview
//!
//! 1. **Path**: `Drawing -> VectorPath` (one move/line polyline per non-empty stroke)
//! 2. **Rasterize**: `VectorPath -> BinaryGrid` via `usvg`/`resvg`; a cell is `1` exactly when
//!    its alpha is zero
//! 3. **Pad**: roll a [`PaddingSpec`] from a [`PaddingRange`] with an explicit RNG
//! 4. **Composite**: pad with `1`s, render `1` as black, resample to 64x64, threshold brightness
//!
//! [`Assembler`] runs the pipeline for every record of a shard on a rayon pool and keeps input
//! order; [`run`] drives a whole input directory.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Seeded**: all randomness flows from a run seed, so output is reproducible.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assemble;
mod augment;
mod dataset;
mod drawing;
mod foundation;
mod raster;

pub use assemble::drawing::{rasterize_drawing, rasterize_drawing_with_padding};
pub use assemble::shard::{
    AssembleOpts, Assembler, DEFAULT_RECORD_LIMIT, RecordFailure, ShardOutput, Threading,
};
pub use augment::composite::{
    BRIGHTNESS_THRESHOLD, binarize_image, composite, grid_to_image, pad_grid, resample,
};
pub use augment::padding::{PaddingRange, PaddingSpec};
pub use dataset::driver::{
    RunSummary, SHARD_EXTENSION, ShardFailure, list_shards, preview_record, run,
};
pub use dataset::opts::DatasetOpts;
pub use dataset::reader::{read_records, read_shard};
pub use dataset::writer::{combined_output_path, output_path_for, write_grid_png, write_records};
pub use drawing::model::{Drawing, DrawingRecord, LabeledRecord, Stroke};
pub use foundation::core::{BinaryGrid, GRID_SIDE, SOURCE_CANVAS};
pub use foundation::error::{StrokeGridError, StrokeGridResult};
pub use raster::path::VectorPath;
pub use raster::rasterize::{classify_alpha, decode_svg, rasterize_path};
