//! Lantern (CGF-style) tile names
//!
//! ```text
//! path.version.step[.variant][+span]
//! 01f.00.002a          position
//! 01f.00.002a.003      variant
//! 01f.00.002a.003+2    variant spanning two positions
//! ```
//!
//! Every group is lowercase hex with the fixed widths of the codec. Note the
//! textual order puts the path before the version.

use crate::core::codec::TilePosition;
use crate::core::constants::{
    NUM_HEX_INDEXES_FOR_PATH, NUM_HEX_INDEXES_FOR_STEP, NUM_HEX_INDEXES_FOR_VARIANT_VALUE,
    NUM_HEX_INDEXES_FOR_VERSION,
};
use crate::core::error::CodecError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Capture group holding the spanning-range suffix (`+span`)
pub const LANTERN_SPAN_GROUP: usize = 5;

/// Errors raised while parsing a lantern name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanternParseError {
    #[error("'{0}' is not a valid lantern name")]
    InvalidFormat(String),

    #[error("lantern name field out of range: {0}")]
    Codec(#[from] CodecError),
}

/// Pattern describing the lantern name format
pub fn lantern_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let pattern = format!(
            r"^([0-9a-f]{{{}}})\.([0-9a-f]{{{}}})\.([0-9a-f]{{{}}})(?:\.([0-9a-f]{{{}}}))?(\+[0-9a-f]+)?$",
            NUM_HEX_INDEXES_FOR_PATH,
            NUM_HEX_INDEXES_FOR_VERSION,
            NUM_HEX_INDEXES_FOR_STEP,
            NUM_HEX_INDEXES_FOR_VARIANT_VALUE,
        );
        Regex::new(&pattern).expect("lantern name pattern is a valid regex")
    })
}

/// Parsed lantern name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LanternName {
    position: TilePosition,
    variant_value: Option<u32>,
    span: Option<u32>,
}

impl LanternName {
    pub fn new(position: TilePosition, variant_value: Option<u32>, span: Option<u32>) -> Self {
        Self {
            position,
            variant_value,
            span,
        }
    }

    pub fn position(&self) -> TilePosition {
        self.position
    }

    /// Packed tile position named by this lantern name
    pub fn tile_position_int(&self) -> u64 {
        self.position.to_int()
    }

    pub fn variant_value(&self) -> Option<u32> {
        self.variant_value
    }

    /// Number of positions spanned, if the name carries spanning notation
    pub fn span(&self) -> Option<u32> {
        self.span
    }

    pub fn is_spanning(&self) -> bool {
        self.span.is_some()
    }
}

fn hex_group(caps: &regex::Captures<'_>, index: usize, name: &str) -> Result<Option<u32>, LanternParseError> {
    caps.get(index)
        .map(|m| u32::from_str_radix(m.as_str(), 16))
        .transpose()
        .map_err(|_| LanternParseError::InvalidFormat(name.to_string()))
}

impl FromStr for LanternName {
    type Err = LanternParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let invalid = || LanternParseError::InvalidFormat(name.to_string());
        let caps = lantern_name_pattern().captures(name).ok_or_else(invalid)?;

        let path = hex_group(&caps, 1, name)?.ok_or_else(invalid)?;
        let version = hex_group(&caps, 2, name)?.ok_or_else(invalid)?;
        let step = hex_group(&caps, 3, name)?.ok_or_else(invalid)?;
        let variant_value = hex_group(&caps, 4, name)?;
        let span = caps
            .get(LANTERN_SPAN_GROUP)
            .map(|m| u32::from_str_radix(&m.as_str()[1..], 16))
            .transpose()
            .map_err(|_| invalid())?;

        let position = TilePosition::new(version as i64, path as i64, step as i64)?;
        Ok(Self::new(position, variant_value, span))
    }
}

impl fmt::Display for LanternName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0pw$x}.{:0vw$x}.{:0sw$x}",
            self.position.path(),
            self.position.version(),
            self.position.step(),
            pw = NUM_HEX_INDEXES_FOR_PATH as usize,
            vw = NUM_HEX_INDEXES_FOR_VERSION as usize,
            sw = NUM_HEX_INDEXES_FOR_STEP as usize,
        )?;
        if let Some(variant_value) = self.variant_value {
            write!(
                f,
                ".{:0w$x}",
                variant_value,
                w = NUM_HEX_INDEXES_FOR_VARIANT_VALUE as usize
            )?;
        }
        if let Some(span) = self.span {
            write!(f, "+{:x}", span)?;
        }
        Ok(())
    }
}
