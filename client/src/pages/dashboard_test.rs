use super::*;

// =============================================================
// Gallery filtering
// =============================================================

#[test]
fn visible_items_with_all_filter_keeps_everything() {
    let items = seeded_gallery();
    assert_eq!(visible_items(&items, GalleryFilter::All).len(), items.len());
}

#[test]
fn visible_items_with_liked_filter_keeps_only_liked() {
    let items = seeded_gallery();
    let liked = visible_items(&items, GalleryFilter::Liked);
    assert!(!liked.is_empty());
    assert!(liked.iter().all(|item| item.liked));
}

// =============================================================
// Gallery mutation
// =============================================================

#[test]
fn toggle_liked_flips_only_the_matching_item() {
    let mut items = seeded_gallery();
    let before: Vec<bool> = items.iter().map(|item| item.liked).collect();
    toggle_liked(&mut items, "g2");
    for (index, item) in items.iter().enumerate() {
        if item.id == "g2" {
            assert_eq!(item.liked, !before[index]);
        } else {
            assert_eq!(item.liked, before[index]);
        }
    }
}

#[test]
fn toggle_liked_ignores_unknown_ids() {
    let mut items = seeded_gallery();
    let before = items.clone();
    toggle_liked(&mut items, "missing");
    assert_eq!(items, before);
}

#[test]
fn remove_item_drops_only_the_matching_item() {
    let mut items = seeded_gallery();
    let before = items.len();
    remove_item(&mut items, "g3");
    assert_eq!(items.len(), before - 1);
    assert!(items.iter().all(|item| item.id != "g3"));
}

#[test]
fn seeded_gallery_ids_are_unique() {
    let items = seeded_gallery();
    let mut ids: Vec<&str> = items.iter().map(|item| item.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), items.len());
}
