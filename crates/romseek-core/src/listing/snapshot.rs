//! A parsed listing page paired with the URL it was saved from.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{parse_cells, Cell};
use crate::assemble::ResultDescriptor;
use crate::error::MalformedEntry;
use crate::search::search_with;
use crate::size::SizeGate;

/// Read-only snapshot of one listing page.
///
/// Queries borrow the snapshot immutably, so one snapshot can serve any
/// number of concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct ListingSnapshot {
    base_url: String,
    cells: Vec<Cell>,
    gate: SizeGate,
}

impl ListingSnapshot {
    pub fn new(base_url: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            base_url: base_url.into(),
            cells,
            gate: SizeGate::default(),
        }
    }

    /// Parses listing markup into a snapshot.
    pub fn from_html(base_url: impl Into<String>, html: &str) -> Self {
        Self::new(base_url, parse_cells(html))
    }

    /// Replaces the size gate used by [`ListingSnapshot::search`].
    pub fn with_gate(mut self, gate: SizeGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Up to `cap` results matching `query`, in listing order.
    pub fn search(&self, query: &str, cap: usize) -> Result<Vec<ResultDescriptor>, MalformedEntry> {
        search_with(&self.cells, &self.base_url, query, cap, &self.gate)
    }
}

/// Reads a saved listing page and parses it into a snapshot.
pub fn load_listing(path: &Path, base_url: &str) -> Result<ListingSnapshot> {
    let html = fs::read_to_string(path)
        .with_context(|| format!("failed to read listing {}", path.display()))?;
    let snapshot = ListingSnapshot::from_html(base_url, &html);
    tracing::info!(
        path = %path.display(),
        cells = snapshot.cells().len(),
        "loaded listing"
    );
    Ok(snapshot)
}
