//! Saved listing page → flat cell sequence.
//!
//! Directory listing pages lay entries out as table rows of
//! `<td class="link"><a href=… title=…>` / `<td class="size">` / `<td class="date">`.
//! Header cells are `<th>` and never selected.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use super::{Cell, Link};

fn cell_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("tr > td").expect("valid cell selector"))
}

fn link_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("a").expect("valid link selector"))
}

/// Parses listing markup into table cells in document order.
pub fn parse_cells(html: &str) -> Vec<Cell> {
    let document = Html::parse_document(html);
    let cells: Vec<Cell> = document.select(cell_selector()).map(to_cell).collect();
    tracing::debug!(cells = cells.len(), "parsed listing markup");
    cells
}

fn to_cell(td: ElementRef<'_>) -> Cell {
    let link = td.select(link_selector()).next().map(|a| Link {
        title: a.value().attr("title").map(str::to_string),
        href: a.value().attr("href").map(str::to_string),
    });
    let text = td.text().collect::<String>().trim().to_string();
    Cell { link, text }
}
