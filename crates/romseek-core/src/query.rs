//! Search phrase normalization.
//!
//! Listing titles capitalize leading and long words but keep short connector
//! words ("of", "vs", "and") lower-case. Tokens are matched against titles by
//! case-sensitive containment, so the query is reshaped to the same convention.

/// Words longer than this (in characters) are capitalized even when not first.
const SHORT_WORD_MAX_CHARS: usize = 3;

/// Turns a raw search phrase into ordered comparison tokens.
///
/// The empty query yields `[""]`, which matches every title.
///
/// # Examples
///
/// - `normalize("the legend of zelda")` → `["The", "Legend", "of", "Zelda"]`
/// - `normalize("")` → `[""]`
pub fn normalize(query: &str) -> Vec<String> {
    if query.is_empty() {
        return vec![String::new()];
    }

    query
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            if index == 0 || word.chars().count() > SHORT_WORD_MAX_CHARS {
                capitalize(word)
            } else {
                word.to_string()
            }
        })
        .collect()
}

/// First character title-cased, the rest lower-cased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = title_case(first);
            out.extend(chars.flat_map(char::to_lowercase));
            out
        }
        None => String::new(),
    }
}

/// Title case of a single character.
///
/// Digraph letters have a dedicated title-case form. Characters whose upper
/// case expands (`'ß'` → `"SS"`) keep the first upper-case character and
/// lower-case the rest, so `'ß'` becomes `"Ss"`.
fn title_case(c: char) -> String {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}'.to_string(),
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}'.to_string(),
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}'.to_string(),
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}'.to_string(),
        _ => {
            let mut upper = c.to_uppercase();
            let mut out: String = upper.next().into_iter().collect();
            out.extend(upper.flat_map(char::to_lowercase));
            out
        }
    }
}
