//! Tile Library - Coordinate codec and validators for genome tile libraries
//!
//! A tile library partitions a reference genome into paths of overlapping
//! tiles. Tiles are addressed by packed integers built from hex-width fields
//! (`version.path.step` for a position, plus a variant value for a variant).
//!
//! # Features
//!
//! - Lossless packing of tile positions and tile variants
//! - Cross-field validators that report every violated field at once
//! - Lantern name parsing and translation checks
//! - Parallel validation of tile variant record files with rayon
//!
//! # Example
//!
//! ```
//! use tile_library::{decode_variant, encode_variant, validate_spanning_tile, encode_position};
//!
//! let packed = encode_variant(0, 0x2a, 0x100, 3).unwrap();
//! let key = decode_variant(packed as i64).unwrap();
//! assert_eq!(key.to_string(), "00.02a.0100.003");
//!
//! let one = encode_position(0, 4, 10).unwrap() as i64;
//! let two = encode_position(0, 4, 13).unwrap() as i64;
//! assert!(validate_spanning_tile(one, two, 4).is_ok());
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    decode_position, decode_variant, encode_position, encode_variant, validate_spanning_tile,
    validate_tile_position, validate_tile_variant, ChromosomePathTable, CodecError, Field,
    FieldErrors, LanternName, TileLibraryError, TilePosition, TileVariantFields, TileVariantKey,
    ValidationError,
};
pub use formats::tiles;
