//! Core tile library functionality
//!
//! This module contains the tile coordinate codec, lantern names,
//! chromosome path tables and the cross-field validators.

pub mod chromosome;
pub mod codec;
pub mod constants;
pub mod dna;
pub mod error;
pub mod genome_variant;
pub mod io;
pub mod json;
pub mod lantern;
pub mod locus;
pub mod lookup;
pub mod position;
pub mod sequence;

pub use chromosome::{chromosome_name, ChromosomePathTable};
pub use codec::{
    check_position_int, check_variant_int, decode_position, decode_variant, encode_position,
    encode_variant, path_position_range, path_variant_range, TilePosition, TileVariantKey,
    MAX_TILE_POSITION_INT, MAX_TILE_VARIANT_INT,
};
pub use error::{
    CodecError, CodecResult, CodecTarget, Field, FieldErrors, Result, TileLibraryError,
    ValidationError, ValidationResult,
};
pub use genome_variant::{
    validate_alternate_bases, validate_reference_bases,
    validate_reference_versus_alternate_bases,
    validate_tile_variant_loci_encompass_genome_variant_loci,
};
pub use io::{open_reader, CompressionFormat, LineIterator, DEFAULT_BUFFER_SIZE};
pub use json::validate_json;
pub use lantern::{LanternName, LanternParseError};
pub use locus::{validate_locus, validate_same_chromosome};
#[cfg(feature = "http")]
pub use lookup::HttpTranslationLookup;
pub use lookup::{validate_lantern_translation_outside_database, LookupError, TranslationLookup};
pub use position::{
    validate_lantern_translation, validate_num_spanning_tiles, validate_spanning_tile,
    validate_tile_position,
};
pub use sequence::{validate_tag, validate_tile_variant, TileVariantFields};
