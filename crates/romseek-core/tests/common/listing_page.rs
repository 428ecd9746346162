//! Renders directory listing pages in the layout the scanner expects.
//!
//! Each entry becomes `<tr><td class="link"><a …></td><td class="size">…</td><td class="date">…</td></tr>`,
//! preceded by a `<th>` header row and a "Parent directory" row, like a real listing.

/// One row of a rendered listing.
#[derive(Debug, Clone)]
pub struct Entry {
    pub name: String,
    pub size: String,
}

impl Entry {
    pub fn new(name: &str, size: &str) -> Self {
        Self {
            name: name.to_string(),
            size: size.to_string(),
        }
    }
}

/// Percent-encodes a display name the way listings write their `href`s.
pub fn href_for(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
}

/// Full page with optional parent-directory row.
pub fn render(entries: &[Entry], with_parent_row: bool) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html><head><title>Index</title></head><body>\n\
         <table id=\"list\"><thead><tr><th>File Name</th><th>File Size</th><th>Date</th></tr></thead>\n<tbody>\n",
    );
    if with_parent_row {
        html.push_str(
            "<tr><td class=\"link\"><a href=\"../\" title=\"Parent directory\">Parent directory/</a></td>\
             <td class=\"size\">-</td><td class=\"date\">-</td></tr>\n",
        );
    }
    for e in entries {
        html.push_str(&format!(
            "<tr><td class=\"link\"><a href=\"{href}\" title=\"{title}\">{text}</a></td>\
             <td class=\"size\">{size}</td><td class=\"date\">2024-03-09 14:21</td></tr>\n",
            href = escape_attr(&href_for(&e.name)),
            title = escape_attr(&e.name),
            text = e.name.replace('&', "&amp;"),
            size = e.size,
        ));
    }
    html.push_str("</tbody></table>\n</body></html>\n");
    html
}
