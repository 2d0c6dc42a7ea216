//! Tag and tile variant sequence validation
//!
//! A tile variant's sequence starts with its start tag and ends with its end
//! tag. Tags are exactly [`TAG_LENGTH`] lowercase bases, or empty when the
//! tile sits on a path boundary.

use crate::core::codec::{decode_position, decode_variant, TilePosition, TileVariantKey};
use crate::core::constants::TAG_LENGTH;
use crate::core::dna::{is_lowercase, md5_hex};
use crate::core::error::{Field, FieldErrors, Result, ValidationError, ValidationResult};
use log::debug;

/// Check that a tag is lowercase and either empty or `TAG_LENGTH` long
///
/// # Examples
/// ```
/// use tile_library::core::sequence::validate_tag;
///
/// assert!(validate_tag("").is_ok());
/// assert!(validate_tag(&"a".repeat(24)).is_ok());
/// assert!(validate_tag("acgt").is_err());
/// assert!(validate_tag(&"A".repeat(24)).is_err());
/// ```
pub fn validate_tag(tag: &str) -> ValidationResult<()> {
    if !is_lowercase(tag) {
        return Err(ValidationError::message("Tag must be lowercase"));
    }
    if tag.len() != TAG_LENGTH && !tag.is_empty() {
        return Err(ValidationError::message(
            "Tag length must be equal to the set TAG_LENGTH or must be empty",
        ));
    }
    Ok(())
}

/// Shortest sequence allowed for a tile variant
///
/// Both tags must fit without overlapping; a tile on a path boundary carries
/// no tag on that side.
pub fn min_sequence_length(is_start_of_path: bool, is_end_of_path: bool) -> usize {
    let mut length = TAG_LENGTH * 2;
    if is_start_of_path {
        length -= TAG_LENGTH;
    }
    if is_end_of_path {
        length -= TAG_LENGTH;
    }
    length
}

/// Record every field where a variant's prefix disagrees with a position
pub(crate) fn push_prefix_mismatches(
    errors: &mut FieldErrors,
    position: &TilePosition,
    variant: &TileVariantKey,
) {
    if position.version() != variant.version() {
        errors.push(
            Field::VersionMismatch,
            "tile variant path version and tile position path version must be equal",
        );
    }
    if position.path() != variant.path() {
        errors.push(Field::PathMismatch, "tile variant path and tile position path must be equal");
    }
    if position.step() != variant.step() {
        errors.push(Field::StepMismatch, "tile variant step and tile position step must be equal");
    }
}

/// Persisted fields of one tile variant
#[derive(Debug, Clone, Copy)]
pub struct TileVariantFields<'a> {
    pub tile_position_int: i64,
    pub tile_variant_int: i64,
    pub variant_value: i64,
    pub sequence: &'a str,
    pub length: i64,
    pub md5sum: &'a str,
    pub start_tag: &'a str,
    pub end_tag: &'a str,
    pub is_start_of_path: bool,
    pub is_end_of_path: bool,
}

/// Validate a tile variant against its owning position
///
/// Codec range failures on either packed int are returned immediately.
/// Every other check runs, and all violations are reported together.
pub fn validate_tile_variant(fields: &TileVariantFields<'_>) -> Result<()> {
    let position = decode_position(fields.tile_position_int)?;
    let variant = decode_variant(fields.tile_variant_int)?;
    let sequence = fields.sequence;

    let mut errors = FieldErrors::new();
    push_prefix_mismatches(&mut errors, &position, &variant);
    if variant.variant_value() as i64 != fields.variant_value {
        errors.push(
            Field::VariantValueMismatch,
            "tile variant value and input variant value must be equal",
        );
    }
    if fields.length != sequence.len() as i64 {
        errors.push(Field::LengthMismatch, "length must be the length of the sequence");
    }
    if !is_lowercase(sequence) {
        errors.push(Field::Sequence, "Sequence must be entirely lowercase");
    }
    if md5_hex(sequence) != fields.md5sum {
        errors.push(Field::Md5sumSequence, "md5sum is not actually md5sum of sequence");
    }
    if sequence.len() < min_sequence_length(fields.is_start_of_path, fields.is_end_of_path) {
        errors.push(Field::SequenceMalformed, "Sequence is not long enough - the tags overlap");
    }
    if !sequence.starts_with(fields.start_tag) {
        errors.push(Field::StartTagSequence, "Sequence does not start with the given start tag");
    }
    if !sequence.ends_with(fields.end_tag) {
        errors.push(Field::EndTagSequence, "Sequence does not end with the given end tag");
    }

    if !errors.is_empty() {
        debug!("tile variant {} failed {} checks", variant, errors.len());
    }
    Ok(errors.into_result()?)
}
