//! Tile position, spanning tile and lantern translation consistency
//!
//! A position's step and boundary flags must agree with its tags: the first
//! step of a path has no start tag, the last has no end tag, and every other
//! side carries one.

use crate::core::codec::{decode_position, decode_variant};
use crate::core::error::{Field, FieldErrors, Result, ValidationError, ValidationResult};
use crate::core::lantern::{LanternName, LanternParseError};
use crate::core::sequence::{push_prefix_mismatches, validate_tag};

/// Validate a tile position's boundary flags and tags
pub fn validate_tile_position(
    tile_position_int: i64,
    is_start_of_path: bool,
    is_end_of_path: bool,
    start_tag: &str,
    end_tag: &str,
) -> Result<()> {
    let position = decode_position(tile_position_int)?;
    let mut errors = FieldErrors::new();

    if position.is_start_of_path() && !is_start_of_path {
        errors.push(
            Field::TilePositionIsStartOfPath,
            "If step is 0, is_start_of_path should be True",
        );
    } else if !position.is_start_of_path() && is_start_of_path {
        errors.push(
            Field::TilePositionIsStartOfPath,
            "If step is not 0, is_start_of_path should be False",
        );
    }

    if let Err(e) = validate_tag(start_tag) {
        errors.push(Field::StartTag, e.to_message());
    }
    if let Err(e) = validate_tag(end_tag) {
        errors.push(Field::EndTag, e.to_message());
    }

    match (is_start_of_path, start_tag.is_empty()) {
        (true, false) => errors.push(
            Field::StartTagIsStartOfPath,
            "If is_start_of_path, start_tag should be empty",
        ),
        (false, true) => errors.push(
            Field::StartTagIsStartOfPath,
            "If not is_start_of_path, start_tag should not be empty",
        ),
        _ => {}
    }
    match (is_end_of_path, end_tag.is_empty()) {
        (true, false) => errors.push(
            Field::EndTagIsEndOfPath,
            "If is_end_of_path, end_tag should be empty",
        ),
        (false, true) => errors.push(
            Field::EndTagIsEndOfPath,
            "If not is_end_of_path, end_tag should not be empty",
        ),
        _ => {}
    }

    Ok(errors.into_result()?)
}

/// A spanning tile covers at least one position
pub fn validate_num_spanning_tiles(num_spanning: i64) -> ValidationResult<()> {
    if num_spanning < 1 {
        return Err(ValidationError::message(
            "num positions spanned must be greater than or equal to 1",
        ));
    }
    Ok(())
}

/// Validate a run of positions within one path and version
///
/// # Examples
/// ```
/// use tile_library::core::codec::encode_position;
/// use tile_library::core::position::validate_spanning_tile;
///
/// let one = encode_position(0, 4, 10).unwrap() as i64;
/// let two = encode_position(0, 4, 13).unwrap() as i64;
/// assert!(validate_spanning_tile(one, two, 4).is_ok());
/// assert!(validate_spanning_tile(one, two, 3).is_err());
/// ```
pub fn validate_spanning_tile(
    tile_position_one: i64,
    tile_position_two: i64,
    num_positions_spanned: i64,
) -> Result<()> {
    let one = decode_position(tile_position_one)?;
    let two = decode_position(tile_position_two)?;
    let mut errors = FieldErrors::new();

    if one.version() != two.version() {
        errors.push(Field::SpanningTile, "starting and ending tiles cross path versions");
    }
    if one.path() != two.path() {
        errors.push(Field::SpanningTile, "starting and ending tiles cross paths");
    }
    let steps = (two.step() as i128 - one.step() as i128).abs();
    if steps != num_positions_spanned as i128 - 1 {
        errors.push(
            Field::SpanningTile,
            "number of steps spanned (from tile position integers and reported) do not match",
        );
    }

    Ok(errors.into_result()?)
}

/// Check that a lantern name and a tile variant int name the same position
///
/// The lantern name must not carry spanning notation. An unparseable name is
/// reported on its own, since there is no position to compare against.
pub fn validate_lantern_translation(lantern_name: &str, tile_variant_int: i64) -> Result<()> {
    let name: LanternName = match lantern_name.parse() {
        Ok(name) => name,
        Err(LanternParseError::Codec(e)) => return Err(e.into()),
        Err(e @ LanternParseError::InvalidFormat(_)) => {
            return Err(ValidationError::field(Field::LanternName, e.to_string()).into());
        }
    };

    let mut errors = FieldErrors::new();
    if name.is_spanning() {
        errors.push(Field::LanternName, "lantern_name cannot have spanning tile notation");
    }
    let variant = decode_variant(tile_variant_int)?;
    push_prefix_mismatches(&mut errors, &name.position(), &variant);

    Ok(errors.into_result()?)
}
