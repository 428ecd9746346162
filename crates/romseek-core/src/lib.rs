//! Finds releases in a file repository listing page.
//!
//! A saved listing is parsed into table cells, filtered by a normalized
//! query, and turned into at most `cap` downloadable results. Nothing here
//! touches the network.

pub mod config;
pub mod logging;

pub mod assemble;
pub mod error;
pub mod listing;
pub mod metadata;
pub mod platform;
pub mod query;
pub mod search;
pub mod size;

pub use assemble::{assemble, assemble_with, ResultDescriptor, DEFAULT_CAP, RESULT_MIME_TYPE};
pub use error::MalformedEntry;
pub use listing::{parse_cells, scan, Cell, Link, ListingRecord, ListingSnapshot};
pub use metadata::{parse_display_name, EntryMetadata};
pub use platform::Platform;
pub use query::normalize;
pub use search::{search, search_with};
pub use size::{admit, SizeDescriptor, SizeGate, SizeUnit};
