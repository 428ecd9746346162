//! Display name decomposition: `Title (Region) (Languages).ext`.
//!
//! Positions are found with fixed rules and cut with sequence-slice
//! arithmetic (negative bounds count from the end, bounds clamp, an inverted
//! range is empty). Inputs that bend the naming convention produce whatever
//! the arithmetic yields; only a missing `(` is rejected.

use crate::error::MalformedEntry;

/// Fields extracted from a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Title without tags or extension, e.g. `"Super Game"`.
    pub title: String,
    /// First parenthesized group without its parentheses, e.g. `"USA, Europe"`.
    pub regions: String,
    /// Everything from the second group up to the extension, e.g. `"(En,Fr)"`;
    /// empty when there is no second group.
    pub languages: String,
}

/// Splits a display name into title, regions, and languages.
///
/// # Examples
///
/// - `"Super Game (USA) (En,Fr).zip"` → `("Super Game", "USA", "(En,Fr)")`
/// - `"Super Game (USA).zip"` → `("Super Game", "USA", "")`
pub fn parse_display_name(display_name: &str) -> Result<EntryMetadata, MalformedEntry> {
    let chars: Vec<char> = display_name.chars().collect();

    let open = position(&chars, 0, '(').ok_or_else(|| MalformedEntry::MissingRegion {
        name: display_name.to_string(),
    })?;
    let sec1 = open as isize + 1;
    // Missing `.` behaves as index -1.
    let dot = chars
        .iter()
        .rposition(|&c| c == '.')
        .map_or(-1, |i| i as isize);

    let (sec2, languages) = match position(&chars, open + 1, '(') {
        Some(second) => {
            let sec2 = second as isize;
            (sec2, slice(&chars, sec2, dot))
        }
        None => (dot + 1, String::new()),
    };

    Ok(EntryMetadata {
        title: slice(&chars, 0, sec1 - 2),
        regions: slice(&chars, sec1, sec2 - 2),
        languages,
    })
}

fn position(chars: &[char], from: usize, needle: char) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == needle)
        .map(|i| from + i)
}

/// `chars[start:end]` with sequence-slice bound rules.
fn slice(chars: &[char], start: isize, end: isize) -> String {
    let len = chars.len() as isize;
    let clamp = |i: isize| {
        let i = if i < 0 { i + len } else { i };
        i.clamp(0, len) as usize
    };
    let (start, end) = (clamp(start), clamp(end));
    if end <= start {
        return String::new();
    }
    chars[start..end].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(name: &str) -> (String, String, String) {
        let m = parse_display_name(name).unwrap();
        (m.title, m.regions, m.languages)
    }

    fn owned(t: &str, r: &str, l: &str) -> (String, String, String) {
        (t.to_string(), r.to_string(), l.to_string())
    }

    #[test]
    fn region_and_languages() {
        assert_eq!(
            parts("Super Game (USA) (En,Fr).zip"),
            owned("Super Game", "USA", "(En,Fr)")
        );
    }

    #[test]
    fn unspaced_groups_lose_region_tail() {
        // The region cut assumes `) ` before the second group.
        assert_eq!(
            parts("Super Game (USA)(En,Fr).zip"),
            owned("Super Game", "US", "(En,Fr)")
        );
    }

    #[test]
    fn region_only() {
        assert_eq!(parts("Super Game (USA).zip"), owned("Super Game", "USA", ""));
    }

    #[test]
    fn space_separated_groups() {
        // Regular listings put a space between groups; the region cut drops `) `.
        assert_eq!(
            parts("Pokemon - Ruby Version (USA, Europe) (Rev 2).zip"),
            owned("Pokemon - Ruby Version", "USA, Europe", "(Rev 2)")
        );
    }

    #[test]
    fn languages_run_to_last_dot() {
        assert_eq!(
            parts("Game (Japan) (En,Ja) (v1.1).zip"),
            owned("Game", "Japan", "(En,Ja) (v1.1)")
        );
    }

    #[test]
    fn dots_in_title_use_last_dot() {
        assert_eq!(
            parts("F.Z.E.R.O. (USA).7z"),
            owned("F.Z.E.R.O.", "USA", "")
        );
    }

    #[test]
    fn non_ascii_titles_use_character_positions() {
        assert_eq!(
            parts("Pokémon Café (Japan) (Ja).zip"),
            owned("Pokémon Café", "Japan", "(Ja)")
        );
    }

    #[test]
    fn missing_paren_is_malformed() {
        let err = parse_display_name("Readme.txt").unwrap_err();
        assert_eq!(
            err,
            MalformedEntry::MissingRegion {
                name: "Readme.txt".to_string()
            }
        );
    }

    #[test]
    fn missing_dot_counts_from_end() {
        // No extension: region cut ends two characters before the end.
        assert_eq!(parts("Game (USA)"), owned("Game", "US", ""));
    }

    #[test]
    fn adjacent_parens_yield_empty_region() {
        assert_eq!(parts("Game ((x).zip"), owned("Game", "", "(x)"));
    }

    #[test]
    fn leading_paren_wraps_title_cut() {
        // `sec1 - 2` is -1: the title takes everything but the last character.
        assert_eq!(parts("(USA).zip").0, "(USA).zi");
    }
}
