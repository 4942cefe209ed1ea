use super::*;
use crate::media::artifact::{MediaArtifact, MediaKind};

fn artifact(title: &str) -> MediaArtifact {
    MediaArtifact {
        kind: MediaKind::Video,
        path: std::path::PathBuf::from(format!("out/{title}.mp4")),
        title: title.to_owned(),
        duration_label: "0:05".to_owned(),
        thumbnail: None,
        has_audio: true,
        insights: None,
    }
}

fn settings() -> serde_json::Value {
    serde_json::json!({ "style": "realistic" })
}

#[test]
fn add_assigns_increasing_ids_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");

    let mut store = GalleryStore::open(&path).unwrap();
    let first = store.add(artifact("one"), "text-to-video", settings()).unwrap().id;
    let second = store.add(artifact("two"), "text-to-video", settings()).unwrap().id;
    assert!(second > first);

    // A fresh handle observes both entries.
    let reopened = GalleryStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert!(reopened.get(first).is_some());
}

#[test]
fn thirteen_entries_paginate_12_plus_1() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    let mut store = GalleryStore::open(&path).unwrap();

    for i in 0..13 {
        store
            .add(artifact(&format!("clip-{i}")), "text-to-video", settings())
            .unwrap();
    }

    assert_eq!(store.page(1, 12).len(), 12);
    let second_page = store.page(2, 12);
    assert_eq!(second_page.len(), 1);
    // Newest first: the overflow entry is the oldest one.
    assert_eq!(second_page[0].artifact.title, "clip-0");
    assert!(store.page(3, 12).is_empty());
}

#[test]
fn delete_removes_from_pages_and_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    let mut store = GalleryStore::open(&path).unwrap();

    let keep = store.add(artifact("keep"), "text-to-video", settings()).unwrap().id;
    let doomed = store.add(artifact("doomed"), "text-to-video", settings()).unwrap().id;

    assert!(store.remove(doomed).unwrap());
    assert!(!store.remove(doomed).unwrap()); // already gone
    assert!(store.page(1, 12).iter().all(|e| e.id != doomed));

    // The next read of the file no longer sees the entry.
    let reopened = GalleryStore::open(&path).unwrap();
    assert_eq!(reopened.len(), 1);
    assert!(reopened.get(keep).is_some());
    assert!(reopened.get(doomed).is_none());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    let mut store = GalleryStore::open(&path).unwrap();

    let a = store.add(artifact("a"), "text-to-video", settings()).unwrap().id;
    store.remove(a).unwrap();
    let b = store.add(artifact("b"), "text-to-video", settings()).unwrap().id;
    assert!(b > a);
}

#[test]
fn corrupted_files_are_reported_not_clobbered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery.json");
    std::fs::write(&path, "not json").unwrap();

    let err = GalleryStore::open(&path).unwrap_err();
    assert!(err.to_string().contains("storage error"));
    // The broken file is left in place for inspection.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
}

#[test]
fn page_zero_or_empty_size_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = GalleryStore::open(dir.path().join("g.json")).unwrap();
    store.add(artifact("x"), "text-to-video", settings()).unwrap();
    assert!(store.page(0, 12).is_empty());
    assert!(store.page(1, 0).is_empty());
}
