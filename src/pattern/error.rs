//! Failure reasons for builder operations.

use std::fmt;

/// The reason a builder operation was rejected.
///
/// Every failure is non-fatal and leaves the pattern untouched; the caller
/// can retry with different arguments or reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A quantifier with no preceding item, or stacked on another quantifier.
    NothingToRepeat,
    /// `^` appended to a non-empty pattern.
    CaretNotFirst,
    /// `$` appended when the pattern already ends in an anchor.
    AlreadyEnded,
    /// The append, or its normalized form, would overflow the buffer.
    PatternTooLong,
    /// Preset id outside the catalog.
    UnknownPreset(u8),
    /// Normalization did not settle within its cycle bound.
    NoFixedPoint,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NothingToRepeat => write!(f, "Nothing to repeat"),
            Self::CaretNotFirst => write!(f, "'^' must be first"),
            Self::AlreadyEnded => write!(f, "Already ended"),
            Self::PatternTooLong => write!(f, "Pattern too long"),
            Self::UnknownPreset(id) => write!(f, "Unknown preset: {id}"),
            Self::NoFixedPoint => write!(f, "Pattern did not normalize; change rejected"),
        }
    }
}

impl std::error::Error for BuildError {}
