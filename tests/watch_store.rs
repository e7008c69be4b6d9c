//! Watch store tests
//!
//! Replays watcher event sequences and checks the resulting snapshots.

use secrets9s::{ResourceKind, WatchEvent, WatchStore, WatchTarget, WatchedResource};
use serde_json::json;

fn cert(name: &str, secret: &str) -> WatchedResource {
    serde_json::from_value(json!({
        "metadata": {"name": name, "namespace": "demo"},
        "spec": {"secretName": secret}
    }))
    .unwrap()
}

fn target() -> WatchTarget {
    WatchTarget::collection(ResourceKind::Certificate, Some("demo".to_string()))
}

fn names(store: &WatchStore) -> Vec<String> {
    store
        .snapshot(&target())
        .items
        .iter()
        .map(|r| r.name().to_string())
        .collect()
}

#[test]
fn test_unknown_target_is_pending() {
    let store = WatchStore::new();
    let snapshot = store.snapshot(&target());
    assert!(!snapshot.loaded);
    assert!(snapshot.items.is_empty());
    assert!(snapshot.error.is_none());
}

#[test]
fn test_initial_list_is_published_on_init_done() {
    let mut store = WatchStore::new();
    store.apply(WatchEvent::Restarted(target()));
    store.apply(WatchEvent::Applied(target(), cert("a", "a-tls")));
    assert!(!store.snapshot(&target()).loaded);

    store.apply(WatchEvent::InitDone(target()));
    let snapshot = store.snapshot(&target());
    assert!(snapshot.loaded);
    assert_eq!(names(&store), vec!["a"]);
}

#[test]
fn test_apply_replaces_and_delete_removes() {
    let mut store = WatchStore::new();
    store.apply(WatchEvent::Restarted(target()));
    store.apply(WatchEvent::Applied(target(), cert("a", "old")));
    store.apply(WatchEvent::Applied(target(), cert("b", "b-tls")));
    store.apply(WatchEvent::InitDone(target()));

    store.apply(WatchEvent::Applied(target(), cert("a", "new")));
    store.apply(WatchEvent::Deleted(target(), cert("b", "b-tls")));

    let snapshot = store.snapshot(&target());
    assert_eq!(snapshot.items.len(), 1);
    assert_eq!(snapshot.items[0].spec_str(&["secretName"]), Some("new"));
}

#[test]
fn test_relist_drops_objects_gone_during_restart() {
    let mut store = WatchStore::new();
    store.apply(WatchEvent::Restarted(target()));
    store.apply(WatchEvent::Applied(target(), cert("a", "a-tls")));
    store.apply(WatchEvent::Applied(target(), cert("b", "b-tls")));
    store.apply(WatchEvent::InitDone(target()));

    store.apply(WatchEvent::Restarted(target()));
    // The previous list stays visible until the relist completes
    assert_eq!(names(&store), vec!["a", "b"]);
    store.apply(WatchEvent::Applied(target(), cert("b", "b-tls")));
    store.apply(WatchEvent::InitDone(target()));

    assert_eq!(names(&store), vec!["b"]);
}

#[test]
fn test_error_is_cleared_by_next_event() {
    let mut store = WatchStore::new();
    store.apply(WatchEvent::Error(target(), "forbidden".to_string()));
    assert_eq!(
        store.snapshot(&target()).error.map(|e| e.message),
        Some("forbidden".to_string())
    );

    store.apply(WatchEvent::Restarted(target()));
    store.apply(WatchEvent::InitDone(target()));
    let snapshot = store.snapshot(&target());
    assert!(snapshot.error.is_none());
    assert!(snapshot.loaded);
}

#[test]
fn test_targets_are_independent() {
    let mut store = WatchStore::new();
    let single = WatchTarget::single(ResourceKind::Certificate, Some("demo".to_string()), "a");
    store.apply(WatchEvent::Restarted(single.clone()));
    store.apply(WatchEvent::Applied(single.clone(), cert("a", "a-tls")));
    store.apply(WatchEvent::InitDone(single.clone()));

    assert!(store.snapshot(&single).loaded);
    assert!(!store.snapshot(&target()).loaded);

    store.forget(&single);
    assert!(store.is_empty());
}

#[test]
fn test_cluster_target_ignores_namespace() {
    let t = WatchTarget::collection(ResourceKind::ClusterIssuer, Some("demo".to_string()));
    assert_eq!(t.namespace, None);
    assert_eq!(t.to_string(), "ClusterIssuer");
}
