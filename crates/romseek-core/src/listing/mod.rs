//! Repository listing model: cells, records, and the per-page snapshot.
//!
//! A listing page is consumed as a flat sequence of table cells; every three
//! consecutive cells (link, size, date) describe one entry.

mod parse;
mod scan;
mod snapshot;

pub use parse::parse_cells;
pub use scan::scan;
pub use snapshot::{load_listing, ListingSnapshot};

/// Cells per entry row: link, size, date.
pub const CELLS_PER_RECORD: usize = 3;

/// Anchor found inside a cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    /// Full display name of the entry.
    pub title: Option<String>,
    /// Download path relative to the listing's base URL.
    pub href: Option<String>,
}

/// One table cell of the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub link: Option<Link>,
    /// Trimmed text content.
    pub text: String,
}

impl Cell {
    /// Plain text cell without a link.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            link: None,
            text: text.into(),
        }
    }

    /// Cell holding a titled link.
    pub fn link(title: impl Into<String>, href: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            text: title.clone(),
            link: Some(Link {
                title: Some(title),
                href: Some(href.into()),
            }),
        }
    }
}

/// A candidate entry borrowed from the cell sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRecord<'a> {
    /// `title` attribute of the first cell's link.
    pub display_name: &'a str,
    /// `href` attribute of the first cell's link.
    pub href: Option<&'a str>,
    /// Text of the second cell, e.g. `"4.1 MiB"`.
    pub size: Option<&'a str>,
}

impl<'a> ListingRecord<'a> {
    /// Builds a record from one positional group, or `None` when the first
    /// cell carries no titled link.
    pub fn from_cells(group: &'a [Cell]) -> Option<Self> {
        let link = group.first()?.link.as_ref()?;
        let display_name = link.title.as_deref()?;
        Some(Self {
            display_name,
            href: link.href.as_deref(),
            size: group.get(1).map(|c| c.text.as_str()),
        })
    }
}
