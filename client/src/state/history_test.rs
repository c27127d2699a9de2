use super::*;

#[test]
fn default_history_is_seeded() {
    let history = HistoryState::default();
    assert_eq!(history.items.len(), 3);
    for item in &history.items {
        assert!(!item.prompt.is_empty());
        assert_eq!(item.image_url, PLACEHOLDER_IMAGE);
    }
}

#[test]
fn seeded_ids_are_unique() {
    let history = HistoryState::default();
    let mut ids: Vec<&str> = history.items.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), history.items.len());
}

#[test]
fn record_prepends_the_newest_creation() {
    let mut history = HistoryState::default();
    history.record("a lighthouse on a cliff");
    assert_eq!(history.items.len(), 4);
    assert_eq!(history.items[0].prompt, "a lighthouse on a cliff");
    assert_eq!(history.items[0].created_label, "Just now");
    assert_eq!(history.items[0].image_url, PLACEHOLDER_IMAGE);
}

#[test]
fn record_keeps_newest_first_order() {
    let mut history = HistoryState::default();
    history.record("first run");
    history.record("second run");
    assert_eq!(history.items[0].prompt, "second run");
    assert_eq!(history.items[1].prompt, "first run");
}
