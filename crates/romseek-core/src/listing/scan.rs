//! Query filtering over positional 3-cell records.

use super::{Cell, ListingRecord, CELLS_PER_RECORD};

/// Selects records whose display name contains every token.
///
/// Records start at cell indices 0, 3, 6, …. A record whose first cell has no
/// link, or whose link has no `title`, is skipped; grouping stays positional
/// either way. Matching is case-sensitive substring containment.
pub fn scan<'a>(rows: &'a [Cell], tokens: &[String]) -> Vec<ListingRecord<'a>> {
    let mut records = Vec::new();

    for (index, group) in rows.chunks(CELLS_PER_RECORD).enumerate() {
        let Some(record) = ListingRecord::from_cells(group) else {
            tracing::trace!(record = index, "skipping record without titled link");
            continue;
        };
        if tokens
            .iter()
            .all(|token| record.display_name.contains(token.as_str()))
        {
            records.push(record);
        }
    }

    tracing::debug!(
        candidates = records.len(),
        scanned = rows.len().div_ceil(CELLS_PER_RECORD),
        "listing scan finished"
    );
    records
}
