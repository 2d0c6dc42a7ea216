//! Error types for the tile library
//!
//! Validators report one [`ValidationError`] per call, carrying either a plain
//! message or every field-scoped finding collected during that call. Codec
//! failures are a narrower [`CodecError`] that short-circuits dependent checks.

use std::fmt;
use thiserror::Error;

/// Main error type for tile library operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileLibraryError {
    /// A packed integer or one of its fields could not be encoded/decoded
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    /// One or more structural invariants were violated
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TileLibraryError {
    /// Fold this error into the single validation error channel used by the API layer
    pub fn into_validation_error(self) -> ValidationError {
        match self {
            TileLibraryError::Codec(e) => e.into_validation_error(),
            TileLibraryError::Validation(e) => e,
        }
    }

    /// The validation error, if this is not a codec failure
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            TileLibraryError::Validation(e) => Some(e),
            TileLibraryError::Codec(_) => None,
        }
    }

    /// Whether this is a codec range failure
    pub fn is_codec(&self) -> bool {
        matches!(self, TileLibraryError::Codec(_))
    }
}

/// The value a codec range check was applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecTarget {
    TilePositionInt,
    TileVariantInt,
    Version,
    Path,
    Step,
    VariantValue,
}

impl CodecTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecTarget::TilePositionInt => "tile_position_int",
            CodecTarget::TileVariantInt => "tile_variant_int",
            CodecTarget::Version => "version",
            CodecTarget::Path => "path",
            CodecTarget::Step => "step",
            CodecTarget::VariantValue => "variant_value",
        }
    }

    /// Field key used when the failure is reported as a validation finding
    pub fn field(&self) -> Field {
        match self {
            CodecTarget::TilePositionInt => Field::TilePositionInt,
            CodecTarget::TileVariantInt => Field::TileVariantInt,
            CodecTarget::Version => Field::Version,
            CodecTarget::Path => Field::Path,
            CodecTarget::Step => Field::Step,
            CodecTarget::VariantValue => Field::VariantValue,
        }
    }
}

impl fmt::Display for CodecTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the coordinate codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Value is negative or wider than its fixed hex digit group
    #[error("{target} {value} out of range: {message}")]
    OutOfRange {
        target: CodecTarget,
        value: i64,
        message: String,
    },
}

impl CodecError {
    pub fn target(&self) -> CodecTarget {
        match self {
            CodecError::OutOfRange { target, .. } => *target,
        }
    }

    /// Report the range failure under the field key of the offending value
    pub fn into_validation_error(self) -> ValidationError {
        match self {
            CodecError::OutOfRange { target, message, .. } => {
                ValidationError::field(target.field(), message)
            }
        }
    }
}

/// Field identifiers used as keys in aggregated validation errors
///
/// `as_str` yields the wire key forwarded to API clients. Keys joined with
/// `-` name a relation between two fields; keys with `.` are scoped to a
/// genome variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    TilePositionInt,
    TileVariantInt,
    Version,
    Path,
    Step,
    VariantValue,
    TilePositionIsStartOfPath,
    StartTag,
    EndTag,
    StartTagIsStartOfPath,
    EndTagIsEndOfPath,
    SpanningTile,
    VersionMismatch,
    PathMismatch,
    StepMismatch,
    VariantValueMismatch,
    LengthMismatch,
    Sequence,
    Md5sumSequence,
    SequenceMalformed,
    StartTagSequence,
    EndTagSequence,
    ChromosomeTilePosition,
    MalformedLocus,
    TileLengthLocusMismatch,
    ShortLocus,
    LanternName,
    TileLibraryHost,
    TileLibraryIntHost,
    ReferenceBases,
    ReferenceAlternateBases,
    ChromosomeInt,
    AlternateChromosomeName,
    GenomeVariantStartInt,
    GenomeVariantEndInt,
    GenomeVariantAlternateBases,
    Start,
    End,
    StartEnd,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::TilePositionInt => "tile_position_int",
            Field::TileVariantInt => "tile_variant_int",
            Field::Version => "version",
            Field::Path => "path",
            Field::Step => "step",
            Field::VariantValue => "variant_value",
            Field::TilePositionIsStartOfPath => "tile_position_int-is_start_of_path",
            Field::StartTag => "start_tag",
            Field::EndTag => "end_tag",
            Field::StartTagIsStartOfPath => "start_tag-is_start_of_path",
            Field::EndTagIsEndOfPath => "end_tag-is_end_of_path",
            Field::SpanningTile => "spanning_tile_error",
            Field::VersionMismatch => "version_mismatch",
            Field::PathMismatch => "path_mismatch",
            Field::StepMismatch => "step_mismatch",
            Field::VariantValueMismatch => "variant_value_mismatch",
            Field::LengthMismatch => "length_mismatch",
            Field::Sequence => "sequence",
            Field::Md5sumSequence => "md5sum-sequence",
            Field::SequenceMalformed => "sequence_malformed",
            Field::StartTagSequence => "start_tag-sequence",
            Field::EndTagSequence => "end_tag-sequence",
            Field::ChromosomeTilePosition => "chromosome_int-tile_position",
            Field::MalformedLocus => "malformed_locus",
            Field::TileLengthLocusMismatch => "tile_length_locus_mismatch",
            Field::ShortLocus => "short_locus",
            Field::LanternName => "lantern_name",
            Field::TileLibraryHost => "tile_library_host",
            Field::TileLibraryIntHost => "tile_library_int-tile_library_host",
            Field::ReferenceBases => "reference_bases",
            Field::ReferenceAlternateBases => "reference_bases-alternate_bases",
            Field::ChromosomeInt => "chromosome_int",
            Field::AlternateChromosomeName => "alternate_chromosome_name",
            Field::GenomeVariantStartInt => "genome_variant.start_int",
            Field::GenomeVariantEndInt => "genome_variant.end_int",
            Field::GenomeVariantAlternateBases => "genome_variant.alternate_bases",
            Field::Start => "start",
            Field::End => "end",
            Field::StartEnd => "start-end",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered field-scoped findings collected by one validator call
///
/// A field may appear more than once when several independent checks on it
/// fail; entries keep the order in which the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(Field, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finding
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.entries.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// First message recorded for `field`
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Every message recorded for `field`, in check order
    pub fn messages(&self, field: Field) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |(f, _)| *f == field)
            .map(|(_, msg)| msg.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    /// Fields with at least one finding, in first-seen order
    pub fn fields(&self) -> Vec<Field> {
        let mut fields = Vec::with_capacity(self.entries.len());
        for (field, _) in &self.entries {
            if !fields.contains(field) {
                fields.push(*field);
            }
        }
        fields
    }

    /// `Ok(())` when nothing was recorded, otherwise the aggregate error
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Fields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, msg)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, msg)?;
        }
        Ok(())
    }
}

impl IntoIterator for FieldErrors {
    type Item = (Field, String);
    type IntoIter = std::vec::IntoIter<(Field, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Validation failure: a plain message or a set of field-scoped findings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    Message(String),

    #[error("{0}")]
    Fields(FieldErrors),
}

impl ValidationError {
    /// Single plain-message error
    pub fn message(message: impl Into<String>) -> Self {
        ValidationError::Message(message.into())
    }

    /// Single field-scoped finding
    pub fn field(field: Field, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.push(field, message);
        ValidationError::Fields(errors)
    }

    /// The findings, if this is the field-mapping form
    pub fn fields(&self) -> Option<&FieldErrors> {
        match self {
            ValidationError::Fields(errors) => Some(errors),
            ValidationError::Message(_) => None,
        }
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.fields().map(|e| e.contains(field)).unwrap_or(false)
    }

    /// Text suitable for nesting under another field key
    pub fn to_message(&self) -> String {
        match self {
            ValidationError::Message(msg) => msg.clone(),
            ValidationError::Fields(errors) => errors.to_string(),
        }
    }
}

/// Result type alias for tile library operations
pub type Result<T> = std::result::Result<T, TileLibraryError>;

/// Result type alias for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Result type alias for validators that never touch the codec
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;
