use chartlet::core::{EntryStatus, PALETTE_SIZE, palette_color, pick_color};

#[test]
fn palette_is_periodic_in_palette_size() {
    let n = PALETTE_SIZE as i64;
    for index in 0..n {
        for offset in [0, 1, 3, 7] {
            assert_eq!(
                palette_color(index, offset),
                palette_color(index + n, offset)
            );
            assert_eq!(
                palette_color(index, offset),
                palette_color(index, offset + n)
            );
        }
    }
}

#[test]
fn palette_is_defined_for_negative_inputs() {
    let n = PALETTE_SIZE as i64;
    assert_eq!(palette_color(-1, 0), palette_color(n - 1, 0));
    assert_eq!(palette_color(-3, -2), palette_color(-3 + n, -2 + n));
    // Must not panic for large negatives either.
    let _ = palette_color(i64::MIN + 1, 0);
    let _ = palette_color(0, i64::MIN + 1);
}

#[test]
fn offset_shifts_the_starting_color() {
    assert_eq!(palette_color(0, 1), palette_color(1, 0));
    assert_ne!(palette_color(0, 0), palette_color(0, 1));
}

#[test]
fn status_entries_override_the_palette() {
    let danger = pick_color(Some(EntryStatus::Danger), 0, 0);
    let warn = pick_color(Some(EntryStatus::Warn), 0, 0);
    let success = pick_color(Some(EntryStatus::Success), 0, 0);

    // Semantic colors are position-independent.
    assert_eq!(danger, pick_color(Some(EntryStatus::Danger), 5, 3));
    assert_ne!(danger, warn);
    assert_ne!(warn, success);

    // Info keeps its categorical slot.
    assert_eq!(
        pick_color(Some(EntryStatus::Info), 2, 1),
        palette_color(2, 1)
    );
    assert_eq!(pick_color(None, 2, 1), palette_color(2, 1));
}

#[test]
fn status_parsing_is_case_insensitive_and_total() {
    assert_eq!(EntryStatus::parse("Success"), Some(EntryStatus::Success));
    assert_eq!(EntryStatus::parse("WARNING"), Some(EntryStatus::Warn));
    assert_eq!(EntryStatus::parse(" danger "), Some(EntryStatus::Danger));
    assert_eq!(EntryStatus::parse("critical"), Some(EntryStatus::Danger));
    assert_eq!(EntryStatus::parse("info"), Some(EntryStatus::Info));
    assert_eq!(EntryStatus::parse("sparkly"), None);
    assert_eq!(EntryStatus::parse(""), None);
}
