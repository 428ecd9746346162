//! Error type for listing entries that break the naming or size conventions.

use thiserror::Error;

/// A listing entry that does not follow the expected `Title (Region)(Tags).ext`
/// naming or `<number> <unit>` size format.
///
/// Any of these aborts the whole query: callers get no partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedEntry {
    /// Display name has no `(` opening the region segment.
    #[error("display name has no region group: {name:?}")]
    MissingRegion { name: String },
    /// Size string has a magnitude but no unit.
    #[error("size has no unit: {size:?}")]
    MissingSizeUnit { size: String },
    /// Size magnitude is not a number.
    #[error("size magnitude is not a number: {size:?}")]
    InvalidMagnitude { size: String },
    /// Link of a matched record has no `href`.
    #[error("entry has no download path: {name:?}")]
    MissingHref { name: String },
    /// Matched record has no size cell.
    #[error("entry has no size cell: {name:?}")]
    MissingSize { name: String },
}
