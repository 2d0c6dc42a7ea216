//! Coordinate codec
//!
//! Packs a hierarchical tile address into one integer. Each field occupies a
//! fixed group of hex digits, most significant first:
//!
//! ```text
//! tile position:  version | path | step
//! tile variant:   version | path | step | variant value
//! ```
//!
//! With the default widths (2, 3, 4 and 3 digits) position `(0x01, 0x005, 0x0010)`
//! packs to `0x01_005_0010`, and the all-`f` value `0xff_fff_ffff` is the largest
//! valid position int.

use crate::core::constants::{
    NUM_HEX_INDEXES_FOR_PATH, NUM_HEX_INDEXES_FOR_STEP, NUM_HEX_INDEXES_FOR_VARIANT_VALUE,
    NUM_HEX_INDEXES_FOR_VERSION,
};
use crate::core::error::{CodecError, CodecResult, CodecTarget};
use std::fmt;
use std::ops::Range;

/// Total hex digits of a packed tile position
pub const POSITION_DIGITS: u32 =
    NUM_HEX_INDEXES_FOR_VERSION + NUM_HEX_INDEXES_FOR_PATH + NUM_HEX_INDEXES_FOR_STEP;

/// Total hex digits of a packed tile variant
pub const VARIANT_DIGITS: u32 = POSITION_DIGITS + NUM_HEX_INDEXES_FOR_VARIANT_VALUE;

/// Largest value representable in `digits` hex digits
#[inline]
pub const fn max_for_digits(digits: u32) -> u64 {
    (1u64 << (4 * digits)) - 1
}

pub const MAX_VERSION: u64 = max_for_digits(NUM_HEX_INDEXES_FOR_VERSION);
pub const MAX_PATH: u64 = max_for_digits(NUM_HEX_INDEXES_FOR_PATH);
pub const MAX_STEP: u64 = max_for_digits(NUM_HEX_INDEXES_FOR_STEP);
pub const MAX_VARIANT_VALUE: u64 = max_for_digits(NUM_HEX_INDEXES_FOR_VARIANT_VALUE);

/// Largest valid packed tile position (all digits `f`)
pub const MAX_TILE_POSITION_INT: u64 = max_for_digits(POSITION_DIGITS);

/// Largest valid packed tile variant (all digits `f`)
pub const MAX_TILE_VARIANT_INT: u64 = max_for_digits(VARIANT_DIGITS);

const STEP_SHIFT: u32 = 0;
const PATH_SHIFT: u32 = 4 * NUM_HEX_INDEXES_FOR_STEP;
const VERSION_SHIFT: u32 = PATH_SHIFT + 4 * NUM_HEX_INDEXES_FOR_PATH;
const VARIANT_VALUE_BITS: u32 = 4 * NUM_HEX_INDEXES_FOR_VARIANT_VALUE;

fn all_f(digits: u32) -> String {
    "f".repeat(digits as usize)
}

fn out_of_range(target: CodecTarget, value: i64, message: String) -> CodecError {
    CodecError::OutOfRange {
        target,
        value,
        message,
    }
}

/// Check one field against its digit group
fn check_field(target: CodecTarget, value: i64, digits: u32) -> CodecResult<u32> {
    if value < 0 {
        return Err(out_of_range(target, value, "integer must be positive".to_string()));
    }
    if value as u64 > max_for_digits(digits) {
        return Err(out_of_range(
            target,
            value,
            format!("{} must be smaller than or equal to '{}'", target, all_f(digits)),
        ));
    }
    Ok(value as u32)
}

/// Range check a packed tile position int
///
/// # Examples
/// ```
/// use tile_library::core::codec::{check_position_int, MAX_TILE_POSITION_INT};
///
/// assert!(check_position_int(0).is_ok());
/// assert!(check_position_int(MAX_TILE_POSITION_INT as i64).is_ok());
/// assert!(check_position_int(MAX_TILE_POSITION_INT as i64 + 1).is_err());
/// assert!(check_position_int(-1).is_err());
/// ```
pub fn check_position_int(tile_position_int: i64) -> CodecResult<u64> {
    let target = CodecTarget::TilePositionInt;
    if tile_position_int < 0 {
        return Err(out_of_range(target, tile_position_int, "integer must be positive".to_string()));
    }
    if tile_position_int as u64 > MAX_TILE_POSITION_INT {
        return Err(out_of_range(
            target,
            tile_position_int,
            format!(
                "tile position int must be smaller than or equal to '{}.{}.{}'",
                all_f(NUM_HEX_INDEXES_FOR_VERSION),
                all_f(NUM_HEX_INDEXES_FOR_PATH),
                all_f(NUM_HEX_INDEXES_FOR_STEP),
            ),
        ));
    }
    Ok(tile_position_int as u64)
}

/// Range check a packed tile variant int
pub fn check_variant_int(tile_variant_int: i64) -> CodecResult<u64> {
    let target = CodecTarget::TileVariantInt;
    if tile_variant_int < 0 {
        return Err(out_of_range(target, tile_variant_int, "integer must be positive".to_string()));
    }
    if tile_variant_int as u64 > MAX_TILE_VARIANT_INT {
        return Err(out_of_range(
            target,
            tile_variant_int,
            format!(
                "tile variant int must be smaller than or equal to '{}.{}.{}.{}'",
                all_f(NUM_HEX_INDEXES_FOR_VERSION),
                all_f(NUM_HEX_INDEXES_FOR_PATH),
                all_f(NUM_HEX_INDEXES_FOR_STEP),
                all_f(NUM_HEX_INDEXES_FOR_VARIANT_VALUE),
            ),
        ));
    }
    Ok(tile_variant_int as u64)
}

/// Decoded `(version, path, step)` of a tile position
///
/// Only constructible with in-range fields, so packing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TilePosition {
    version: u32,
    path: u32,
    step: u32,
}

impl TilePosition {
    pub fn new(version: i64, path: i64, step: i64) -> CodecResult<Self> {
        Ok(Self {
            version: check_field(CodecTarget::Version, version, NUM_HEX_INDEXES_FOR_VERSION)?,
            path: check_field(CodecTarget::Path, path, NUM_HEX_INDEXES_FOR_PATH)?,
            step: check_field(CodecTarget::Step, step, NUM_HEX_INDEXES_FOR_STEP)?,
        })
    }

    pub fn from_int(tile_position_int: i64) -> CodecResult<Self> {
        let packed = check_position_int(tile_position_int)?;
        Ok(Self::unpack(packed))
    }

    fn unpack(packed: u64) -> Self {
        Self {
            version: ((packed >> VERSION_SHIFT) & MAX_VERSION) as u32,
            path: ((packed >> PATH_SHIFT) & MAX_PATH) as u32,
            step: ((packed >> STEP_SHIFT) & MAX_STEP) as u32,
        }
    }

    pub fn to_int(&self) -> u64 {
        ((self.version as u64) << VERSION_SHIFT)
            | ((self.path as u64) << PATH_SHIFT)
            | ((self.step as u64) << STEP_SHIFT)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn path(&self) -> u32 {
        self.path
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Step 0 is the first tile of its path
    pub fn is_start_of_path(&self) -> bool {
        self.step == 0
    }

    /// Variant key of this position with the given variant value
    pub fn with_variant(&self, variant_value: i64) -> CodecResult<TileVariantKey> {
        Ok(TileVariantKey {
            position: *self,
            variant_value: check_field(
                CodecTarget::VariantValue,
                variant_value,
                NUM_HEX_INDEXES_FOR_VARIANT_VALUE,
            )?,
        })
    }
}

impl fmt::Display for TilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0vw$x}.{:0pw$x}.{:0sw$x}",
            self.version,
            self.path,
            self.step,
            vw = NUM_HEX_INDEXES_FOR_VERSION as usize,
            pw = NUM_HEX_INDEXES_FOR_PATH as usize,
            sw = NUM_HEX_INDEXES_FOR_STEP as usize,
        )
    }
}

/// Decoded `(version, path, step, variant_value)` of a tile variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileVariantKey {
    position: TilePosition,
    variant_value: u32,
}

impl TileVariantKey {
    pub fn new(version: i64, path: i64, step: i64, variant_value: i64) -> CodecResult<Self> {
        TilePosition::new(version, path, step)?.with_variant(variant_value)
    }

    pub fn from_int(tile_variant_int: i64) -> CodecResult<Self> {
        let packed = check_variant_int(tile_variant_int)?;
        Ok(Self {
            position: TilePosition::unpack(packed >> VARIANT_VALUE_BITS),
            variant_value: (packed & MAX_VARIANT_VALUE) as u32,
        })
    }

    pub fn to_int(&self) -> u64 {
        (self.position.to_int() << VARIANT_VALUE_BITS) | self.variant_value as u64
    }

    /// The owning tile position
    pub fn position(&self) -> TilePosition {
        self.position
    }

    pub fn version(&self) -> u32 {
        self.position.version
    }

    pub fn path(&self) -> u32 {
        self.position.path
    }

    pub fn step(&self) -> u32 {
        self.position.step
    }

    pub fn variant_value(&self) -> u32 {
        self.variant_value
    }
}

impl fmt::Display for TileVariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:0w$x}",
            self.position,
            self.variant_value,
            w = NUM_HEX_INDEXES_FOR_VARIANT_VALUE as usize,
        )
    }
}

/// Pack `(version, path, step)` into a tile position int
///
/// # Examples
/// ```
/// use tile_library::core::codec::{encode_position, decode_position};
///
/// let packed = encode_position(1, 5, 16).unwrap();
/// assert_eq!(packed, 0x01_005_0010);
/// let position = decode_position(packed as i64).unwrap();
/// assert_eq!((position.version(), position.path(), position.step()), (1, 5, 16));
/// ```
pub fn encode_position(version: i64, path: i64, step: i64) -> CodecResult<u64> {
    Ok(TilePosition::new(version, path, step)?.to_int())
}

/// Unpack a tile position int
pub fn decode_position(tile_position_int: i64) -> CodecResult<TilePosition> {
    TilePosition::from_int(tile_position_int)
}

/// Pack `(version, path, step, variant_value)` into a tile variant int
pub fn encode_variant(version: i64, path: i64, step: i64, variant_value: i64) -> CodecResult<u64> {
    Ok(TileVariantKey::new(version, path, step, variant_value)?.to_int())
}

/// Unpack a tile variant int
pub fn decode_variant(tile_variant_int: i64) -> CodecResult<TileVariantKey> {
    TileVariantKey::from_int(tile_variant_int)
}

/// Half-open range of tile position ints covering every step of one path
pub fn path_position_range(version: i64, path: i64) -> CodecResult<Range<u64>> {
    let first = encode_position(version, path, 0)?;
    Ok(first..first + (MAX_STEP + 1))
}

/// Half-open range of tile variant ints covering every variant of one path
pub fn path_variant_range(version: i64, path: i64) -> CodecResult<Range<u64>> {
    let first = encode_variant(version, path, 0, 0)?;
    Ok(first..first + ((MAX_STEP + 1) << VARIANT_VALUE_BITS))
}
