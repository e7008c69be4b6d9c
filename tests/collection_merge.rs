//! Collection merge tests

use secrets9s::{
    merge, merge_tab, Collection, CollectionSnapshot, DashboardTab, ResourceKind, Scope,
    WatchEvent, WatchStore, WatchTarget, WatchedResource,
};
use serde_json::json;

fn named(name: &str, namespace: Option<&str>) -> WatchedResource {
    let mut metadata = json!({"name": name});
    if let Some(ns) = namespace {
        metadata["namespace"] = json!(ns);
    }
    serde_json::from_value(json!({"metadata": metadata})).unwrap()
}

#[test]
fn test_namespaced_rows_precede_cluster_rows() {
    let x = named("x", Some("team-a"));
    let y = named("y", None);
    let view = merge(&[
        Collection::new(ResourceKind::Issuer, CollectionSnapshot::loaded(vec![x.clone()])),
        Collection::new(
            ResourceKind::ClusterIssuer,
            CollectionSnapshot::loaded(vec![y.clone()]),
        ),
    ]);

    assert!(view.loaded);
    assert!(view.error.is_none());
    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].resource, x);
    assert_eq!(view.rows[0].scope, Scope::Namespace);
    assert_eq!(view.rows[1].resource, y);
    assert_eq!(view.rows[1].scope, Scope::Cluster);
}

#[test]
fn test_loaded_requires_every_constituent() {
    let view = merge(&[
        Collection::new(ResourceKind::SecretStore, CollectionSnapshot::loaded(vec![named("a", Some("demo"))])),
        Collection::new(ResourceKind::ClusterSecretStore, CollectionSnapshot::pending()),
    ]);
    assert!(!view.loaded);
    assert!(view.rows.is_empty());
    assert!(!view.is_empty_state());
}

#[test]
fn test_first_error_is_reported() {
    let view = merge(&[
        Collection::new(ResourceKind::Issuer, CollectionSnapshot::failed("issuers forbidden")),
        Collection::new(
            ResourceKind::ClusterIssuer,
            CollectionSnapshot::failed("clusterissuers forbidden"),
        ),
    ]);
    assert_eq!(view.error.unwrap().message, "issuers forbidden");
    assert!(view.rows.is_empty());
}

#[test]
fn test_error_hides_rows_of_loaded_constituents() {
    let view = merge(&[
        Collection::new(ResourceKind::Issuer, CollectionSnapshot::loaded(vec![named("a", Some("demo"))])),
        Collection::new(ResourceKind::ClusterIssuer, CollectionSnapshot::failed("boom")),
    ]);
    assert!(view.rows.is_empty());
    assert_eq!(view.error.unwrap().message, "boom");
}

#[test]
fn test_same_name_in_both_scopes_yields_distinct_keys() {
    let view = merge(&[
        Collection::new(ResourceKind::Issuer, CollectionSnapshot::loaded(vec![named("ca", Some("demo"))])),
        Collection::new(ResourceKind::ClusterIssuer, CollectionSnapshot::loaded(vec![named("ca", None)])),
    ]);
    assert_eq!(view.rows.len(), 2);
    assert_ne!(view.rows[0].key, view.rows[1].key);
}

#[test]
fn test_empty_state_when_all_loaded_and_empty() {
    let view = merge(&[
        Collection::new(ResourceKind::Certificate, CollectionSnapshot::loaded(vec![])),
    ]);
    assert!(view.is_empty_state());
}

#[test]
fn test_merge_tab_reads_store_targets() {
    let mut store = WatchStore::new();
    let targets = WatchTarget::for_tab(DashboardTab::Issuers, Some("demo"));
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[1].namespace, None);

    store.apply(WatchEvent::Restarted(targets[0].clone()));
    store.apply(WatchEvent::Applied(targets[0].clone(), named("x", Some("demo"))));
    store.apply(WatchEvent::InitDone(targets[0].clone()));
    assert!(!merge_tab(&store, DashboardTab::Issuers, Some("demo")).loaded);

    store.apply(WatchEvent::Restarted(targets[1].clone()));
    store.apply(WatchEvent::Applied(targets[1].clone(), named("y", None)));
    store.apply(WatchEvent::InitDone(targets[1].clone()));

    let view = merge_tab(&store, DashboardTab::Issuers, Some("demo"));
    assert!(view.loaded);
    let names: Vec<&str> = view.rows.iter().map(|r| r.resource.name()).collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(view.rows[1].kind, ResourceKind::ClusterIssuer);
}
