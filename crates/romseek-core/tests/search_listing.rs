//! End-to-end: rendered listing page → snapshot → capped search results.

mod common;

use common::listing_page::{href_for, render, Entry};
use romseek_core::{normalize, parse_display_name, ListingSnapshot, MalformedEntry, SizeGate};

const BASE: &str = "https://files.example.org/files/No-Intro/Nintendo%20-%20Game%20Boy%20Advance/";

fn gba_entries() -> Vec<Entry> {
    vec![
        Entry::new("Advance Wars (USA).zip", "3.2 MiB"),
        Entry::new("Advance Wars 2 - Black Hole Rising (USA, Australia).zip", "4.5 MiB"),
        Entry::new("Castlevania - Aria of Sorrow (USA).zip", "5.8 MiB"),
        Entry::new("Golden Sun (USA, Europe).zip", "6.1 MiB"),
        Entry::new("Legend of Zelda, The - A Link to the Past & Four Swords (USA, Australia).zip", "5.4 MiB"),
        Entry::new("Legend of Zelda, The - The Minish Cap (Europe) (En,Fr,De,Es,It).zip", "7.3 MiB"),
        Entry::new("Mario & Luigi - Superstar Saga (USA, Australia).zip", "5.9 MiB"),
        Entry::new("Mario vs. Donkey Kong (USA, Australia).zip", "3.0 MiB"),
        Entry::new("Metroid Fusion (USA).zip", "3.9 MiB"),
        Entry::new("Pokemon - Emerald Version (USA, Europe).zip", "6.8 MiB"),
        Entry::new("Video Pocket - Legend of Movie Collection (USA).zip", "31.7 MiB"),
    ]
}

fn snapshot(entries: &[Entry]) -> ListingSnapshot {
    ListingSnapshot::from_html(BASE, &render(entries, false))
}

#[test]
fn query_selects_matching_titles_in_listing_order() {
    let results = snapshot(&gba_entries())
        .search("legend of zelda", 10)
        .unwrap();

    let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Legend of Zelda, The - A Link to the Past & Four Swords",
            "Legend of Zelda, The - The Minish Cap",
        ]
    );
    assert_eq!(results[1].description, "7.3 MiB - Europe (En,Fr,De,Es,It)");
    assert_eq!(results[0].description, "5.4 MiB - USA, Australia ");
    assert_eq!(
        results[1].document_url,
        format!(
            "{BASE}{}",
            href_for("Legend of Zelda, The - The Minish Cap (Europe) (En,Fr,De,Es,It).zip")
        )
    );
}

#[test]
fn every_result_contains_every_token() {
    let entries = gba_entries();
    let snap = snapshot(&entries);
    for query in ["mario", "advance wars", "legend", "pokemon", "golden sun"] {
        let tokens = normalize(query);
        let results = snap.search(query, 10).unwrap();
        assert!(!results.is_empty(), "{query:?} found nothing");
        for r in results {
            let entry = entries
                .iter()
                .find(|e| parse_display_name(&e.name).unwrap().title == r.title)
                .expect("result maps back to an entry");
            for token in &tokens {
                assert!(
                    entry.name.contains(token.as_str()),
                    "{:?} lacks token {:?}",
                    entry.name,
                    token
                );
            }
        }
    }
}

#[test]
fn short_connector_words_stay_lowercase() {
    // "vs." is kept as typed; "VS." would not match.
    let snap = snapshot(&gba_entries());
    assert_eq!(snap.search("mario vs. donkey", 10).unwrap().len(), 1);
    assert!(snap.search("mario VS. donkey", 10).unwrap().is_empty());
}

#[test]
fn oversized_entries_are_excluded() {
    let snap = snapshot(&gba_entries());
    assert!(snap.search("video pocket", 10).unwrap().is_empty());

    let relaxed = snapshot(&gba_entries()).with_gate(SizeGate::new(40.0));
    assert_eq!(relaxed.search("video pocket", 10).unwrap().len(), 1);
}

#[test]
fn empty_query_caps_at_ten() {
    let mut entries = Vec::new();
    for i in 0..15 {
        entries.push(Entry::new(&format!("Disc Set {i:02} (Japan).7z"), "1.1 GiB"));
        entries.push(Entry::new(&format!("Puzzle {i:02} (Japan) (Ja).zip"), "512 KiB"));
    }
    let results = snapshot(&entries).search("", 10).unwrap();
    let titles: Vec<_> = results.iter().map(|r| r.title.clone()).collect();
    let expected: Vec<_> = (0..10).map(|i| format!("Puzzle {i:02}")).collect();
    assert_eq!(titles, expected);
}

#[test]
fn parent_directory_row_breaks_empty_query() {
    // The parent row has a title but no region group and no size unit.
    let snap = ListingSnapshot::from_html(BASE, &render(&gba_entries(), true));
    assert!(matches!(
        snap.search("", 10),
        Err(MalformedEntry::MissingRegion { .. })
    ));
    // A real query never matches it.
    assert_eq!(snap.search("metroid", 10).unwrap().len(), 1);
}

#[test]
fn results_serialize_for_presentation() {
    let results = snapshot(&gba_entries()).search("metroid", 10).unwrap();
    let json = serde_json::to_value(&results).unwrap();
    let first = &json[0];
    assert_eq!(first["title"], "Metroid Fusion");
    assert_eq!(first["mime_type"], "application/zip");
    assert_eq!(first["description"], "3.9 MiB - USA ");
    assert!(first["id"].as_str().is_some());
}
