//! Static tile library configuration
//!
//! Digit widths of the packed coordinate fields, the tag length shared by
//! adjacent tiles and the hg19 chromosome-to-path table.

/// Hex digits reserved for the path version
pub const NUM_HEX_INDEXES_FOR_VERSION: u32 = 2;

/// Hex digits reserved for the path
pub const NUM_HEX_INDEXES_FOR_PATH: u32 = 3;

/// Hex digits reserved for the step within a path
pub const NUM_HEX_INDEXES_FOR_STEP: u32 = 4;

/// Hex digits reserved for the variant value of a tile variant
pub const NUM_HEX_INDEXES_FOR_VARIANT_VALUE: u32 = 3;

/// Length of the flanking tag shared between adjacent tiles
pub const TAG_LENGTH: usize = 24;

/// Character marking a deleted base in genome variant base strings
pub const DELETION_PLACEHOLDER: char = '-';

/// Cumulative path counts per chromosome (hg19)
///
/// Chromosome `c` (1-based) owns paths `CHR_PATH_LENGTHS[c-1]..CHR_PATH_LENGTHS[c]`.
/// Indexes 23, 24 and 25 are chrX, chrY and chrM.
pub const CHR_PATH_LENGTHS: [u32; 26] = [
    0, 63, 125, 187, 234, 279, 327, 371, 411, 454, 496, 532, 573, 609, 641, 673, 698, 722, 742,
    761, 781, 795, 811, 851, 862, 863,
];

pub const CHR_X: u32 = 23;
pub const CHR_Y: u32 = 24;
pub const CHR_M: u32 = 25;

/// Chromosome index for sequences outside the assembled chromosomes
pub const CHR_OTHER: u32 = 26;

// Packed variant ints are handed around as i64 by callers.
const _: () = assert!(
    NUM_HEX_INDEXES_FOR_VERSION
        + NUM_HEX_INDEXES_FOR_PATH
        + NUM_HEX_INDEXES_FOR_STEP
        + NUM_HEX_INDEXES_FOR_VARIANT_VALUE
        <= 15
);
const _: () = assert!(NUM_HEX_INDEXES_FOR_VERSION <= 8);
const _: () = assert!(NUM_HEX_INDEXES_FOR_PATH <= 8);
const _: () = assert!(NUM_HEX_INDEXES_FOR_STEP <= 8);
const _: () = assert!(NUM_HEX_INDEXES_FOR_VARIANT_VALUE <= 8);
