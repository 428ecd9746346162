//! Candidate records → capped list of downloadable results.

use serde::Serialize;
use uuid::Uuid;

use crate::error::MalformedEntry;
use crate::listing::ListingRecord;
use crate::metadata::parse_display_name;
use crate::size::SizeGate;

/// Results returned per query unless configured otherwise.
pub const DEFAULT_CAP: usize = 10;

/// Media type advertised for every result.
pub const RESULT_MIME_TYPE: &str = "application/zip";

/// One downloadable result, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultDescriptor {
    /// Random v4 UUID, unique within a response.
    pub id: String,
    pub title: String,
    /// Base URL followed by the entry's relative path.
    pub document_url: String,
    pub mime_type: String,
    /// `"<size> - <regions> <languages>"`.
    pub description: String,
}

/// [`assemble_with`] using the default size gate.
pub fn assemble(
    records: &[ListingRecord<'_>],
    base_url: &str,
    cap: usize,
) -> Result<Vec<ResultDescriptor>, MalformedEntry> {
    assemble_with(records, base_url, cap, &SizeGate::default())
}

/// Builds results for the first `cap` records the gate admits, in scan order.
///
/// Rejected records do not count toward the cap. Once `cap` results exist the
/// remaining records are not examined. Any malformed record examined before
/// that point fails the whole call.
pub fn assemble_with(
    records: &[ListingRecord<'_>],
    base_url: &str,
    cap: usize,
    gate: &SizeGate,
) -> Result<Vec<ResultDescriptor>, MalformedEntry> {
    let mut results = Vec::with_capacity(cap.min(records.len()));

    for record in records {
        if results.len() == cap {
            break;
        }

        let metadata = parse_display_name(record.display_name)?;
        let size = record.size.ok_or_else(|| MalformedEntry::MissingSize {
            name: record.display_name.to_string(),
        })?;
        tracing::debug!("{} - {}", record.display_name, size);

        if !gate.admit(size)? {
            tracing::trace!(entry = record.display_name, size, "rejected by size gate");
            continue;
        }

        let href = record.href.ok_or_else(|| MalformedEntry::MissingHref {
            name: record.display_name.to_string(),
        })?;

        results.push(ResultDescriptor {
            id: Uuid::new_v4().to_string(),
            title: metadata.title,
            document_url: format!("{base_url}{href}"),
            mime_type: RESULT_MIME_TYPE.to_string(),
            description: format!("{} - {} {}", size, metadata.regions, metadata.languages),
        });
    }

    Ok(results)
}
