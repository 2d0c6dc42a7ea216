//! Property-based tests for the tile position and tile variant validators
//!
//! **Property 4: 错误聚合完整性**
//! **Property 5: 校验幂等性**

use proptest::prelude::*;
use tile_library::core::codec::{encode_position, encode_variant, MAX_STEP};
use tile_library::core::constants::TAG_LENGTH;
use tile_library::core::dna::md5_hex;
use tile_library::core::error::{Field, FieldErrors, TileLibraryError};
use tile_library::core::position::{validate_spanning_tile, validate_tile_position};
use tile_library::core::sequence::{validate_tile_variant, TileVariantFields};

fn fields_of(err: TileLibraryError) -> FieldErrors {
    err.as_validation().and_then(|v| v.fields()).cloned().unwrap()
}

/// Random lowercase DNA
fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'c', 'g', 't']), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

fn tag_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'c', 'g', 't']), TAG_LENGTH)
        .prop_map(|chars| chars.into_iter().collect())
}

/// A consistent tile variant: (step, variant_value, start_tag, end_tag, sequence, at_start, at_end)
fn tile_variant_strategy(
) -> impl Strategy<Value = (i64, i64, String, String, String, bool, bool)> {
    (
        0..=MAX_STEP as i64,
        0i64..0x100,
        tag_strategy(),
        tag_strategy(),
        body_strategy(),
        any::<bool>(),
    )
        .prop_map(|(step, variant_value, start_tag, end_tag, body, at_end)| {
            let at_start = step == 0;
            let start_tag = if at_start { String::new() } else { start_tag };
            let end_tag = if at_end { String::new() } else { end_tag };
            let sequence = format!("{}{}{}", start_tag, body, end_tag);
            (step, variant_value, start_tag, end_tag, sequence, at_start, at_end)
        })
}

proptest! {
    /// Property: consistent tile variants pass both validators
    #[test]
    fn prop_consistent_tile_variant_passes(
        (step, variant_value, start_tag, end_tag, sequence, at_start, at_end) in tile_variant_strategy()
    ) {
        let md5sum = md5_hex(&sequence);
        let tile_position_int = encode_position(0, 7, step).unwrap() as i64;
        let fields = TileVariantFields {
            tile_position_int,
            tile_variant_int: encode_variant(0, 7, step, variant_value).unwrap() as i64,
            variant_value,
            sequence: &sequence,
            length: sequence.len() as i64,
            md5sum: &md5sum,
            start_tag: &start_tag,
            end_tag: &end_tag,
            is_start_of_path: at_start,
            is_end_of_path: at_end,
        };
        prop_assert!(validate_tile_variant(&fields).is_ok());
        prop_assert!(validate_tile_position(tile_position_int, at_start, at_end, &start_tag, &end_tag).is_ok());
    }

    /// **Property 4: 错误聚合完整性**
    ///
    /// An uppercase sequence with the checksum of its lowercase form reports
    /// both the case and the checksum, and nothing else.
    #[test]
    fn prop_sequence_and_md5_aggregated(body in "[acgt]{1,40}") {
        let upper = body.to_uppercase();
        let md5sum = md5_hex(&body);
        let fields = TileVariantFields {
            tile_position_int: encode_position(0, 1, 0).unwrap() as i64,
            tile_variant_int: encode_variant(0, 1, 0, 0).unwrap() as i64,
            variant_value: 0,
            sequence: &upper,
            length: upper.len() as i64,
            md5sum: &md5sum,
            start_tag: "",
            end_tag: "",
            is_start_of_path: true,
            is_end_of_path: true,
        };
        let errors = fields_of(validate_tile_variant(&fields).unwrap_err());
        prop_assert_eq!(errors.fields(), vec![Field::Sequence, Field::Md5sumSequence]);
    }

    /// **Property 5: 校验幂等性**
    ///
    /// Validating the same input twice yields the same outcome.
    #[test]
    fn prop_validation_idempotent(
        step in 0..=MAX_STEP as i64,
        at_start in any::<bool>(),
        at_end in any::<bool>(),
        start_tag in prop::sample::select(vec![String::new(), "a".repeat(TAG_LENGTH), "ACGT".to_string()]),
        end_tag in prop::sample::select(vec![String::new(), "c".repeat(TAG_LENGTH), "cc".to_string()]),
    ) {
        let tile_position_int = encode_position(2, 3, step).unwrap() as i64;
        let first = validate_tile_position(tile_position_int, at_start, at_end, &start_tag, &end_tag);
        let second = validate_tile_position(tile_position_int, at_start, at_end, &start_tag, &end_tag);
        prop_assert_eq!(first, second);
    }

    /// Property: the start flag must match whether step is 0
    #[test]
    fn prop_start_flag_tracks_step(step in 0..=MAX_STEP as i64, at_start in any::<bool>()) {
        let tile_position_int = encode_position(0, 5, step).unwrap() as i64;
        let start_tag = if at_start { String::new() } else { "a".repeat(TAG_LENGTH) };
        let end_tag = "g".repeat(TAG_LENGTH);
        let result = validate_tile_position(tile_position_int, at_start, false, &start_tag, &end_tag);
        if (step == 0) == at_start {
            prop_assert!(result.is_ok());
        } else {
            let errors = fields_of(result.unwrap_err());
            prop_assert_eq!(errors.fields(), vec![Field::TilePositionIsStartOfPath]);
        }
    }

    /// Property: a spanning tile passes exactly when the step distance matches
    #[test]
    fn prop_spanning_steps(a in 0..=MAX_STEP as i64, b in 0..=MAX_STEP as i64, span in 1i64..0x10000) {
        let one = encode_position(0, 4, a).unwrap() as i64;
        let two = encode_position(0, 4, b).unwrap() as i64;
        let result = validate_spanning_tile(one, two, span);
        prop_assert_eq!(result.is_ok(), (a - b).abs() == span - 1);
    }
}

#[test]
fn test_spanning_tile_examples() {
    let one = encode_position(0, 4, 10).unwrap() as i64;
    let two = encode_position(0, 4, 13).unwrap() as i64;
    assert!(validate_spanning_tile(one, two, 4).is_ok());

    let errors = fields_of(validate_spanning_tile(one, two, 3).unwrap_err());
    assert_eq!(
        errors.get(Field::SpanningTile),
        Some("number of steps spanned (from tile position integers and reported) do not match")
    );
}

#[test]
fn test_first_step_with_start_tag() {
    let tile_position_int = encode_position(0, 5, 0).unwrap() as i64;
    let tag = "a".repeat(TAG_LENGTH);
    let errors = fields_of(
        validate_tile_position(tile_position_int, false, false, &tag, &tag).unwrap_err(),
    );
    assert_eq!(errors.fields(), vec![Field::TilePositionIsStartOfPath]);
    assert_eq!(
        errors.get(Field::TilePositionIsStartOfPath),
        Some("If step is 0, is_start_of_path should be True")
    );
}
