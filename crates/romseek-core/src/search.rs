//! Query entry point: normalize → scan → assemble.

use crate::assemble::{assemble_with, ResultDescriptor};
use crate::error::MalformedEntry;
use crate::listing::{scan, Cell};
use crate::query::normalize;
use crate::size::SizeGate;

/// Runs `query` against listing cells with the default size gate.
pub fn search(
    cells: &[Cell],
    base_url: &str,
    query: &str,
    cap: usize,
) -> Result<Vec<ResultDescriptor>, MalformedEntry> {
    search_with(cells, base_url, query, cap, &SizeGate::default())
}

/// Runs `query` against listing cells.
///
/// All-or-nothing: a malformed candidate fails the query instead of being
/// dropped from the results.
pub fn search_with(
    cells: &[Cell],
    base_url: &str,
    query: &str,
    cap: usize,
    gate: &SizeGate,
) -> Result<Vec<ResultDescriptor>, MalformedEntry> {
    let tokens = normalize(query);
    tracing::debug!(query, ?tokens, "searching listing");

    let candidates = scan(cells, &tokens);
    let results = assemble_with(&candidates, base_url, cap, gate)?;

    tracing::info!(
        query,
        candidates = candidates.len(),
        results = results.len(),
        "search finished"
    );
    Ok(results)
}
