//! File format adapters
//!
//! Adapters for bulk tile library record files.

pub mod tiles;

pub use tiles::{
    validate_tile_file, validate_tile_records, TileFileError, TileRecordParseError,
    TileRecordView, ValidationStats,
};
