//! Inspect address resolution tests

use secrets9s::routing::DEFAULT_FALLBACK_NAMESPACE;
use secrets9s::{resolve, ResolveError, ResourceAddress, ResourceKind, WatchedResource};
use serde_json::json;

#[test]
fn test_cluster_kind_with_route_prefix() {
    let address = resolve(
        "/secrets-management/inspect/clusterissuers/prod-ca",
        DEFAULT_FALLBACK_NAMESPACE,
    )
    .unwrap();
    assert_eq!(address.kind, ResourceKind::ClusterIssuer);
    assert_eq!(address.namespace, None);
    assert_eq!(address.name, "prod-ca");
}

#[test]
fn test_namespaced_kind_with_route_prefix() {
    let address = resolve(
        "/secrets-management/inspect/certificates/team-a/web-tls",
        DEFAULT_FALLBACK_NAMESPACE,
    )
    .unwrap();
    assert_eq!(
        address,
        ResourceAddress::namespaced(ResourceKind::Certificate, "team-a", "web-tls")
    );
}

#[test]
fn test_namespaced_kind_without_namespace_uses_fallback() {
    let address = resolve("/inspect/externalsecrets/db-creds", "demo").unwrap();
    assert_eq!(address.namespace.as_deref(), Some("demo"));
    assert_eq!(address.name, "db-creds");
}

#[test]
fn test_unknown_resource_type() {
    let err = resolve("/inspect/pods/default/web", "demo").unwrap_err();
    assert_eq!(err, ResolveError::UnknownResourceType("pods".to_string()));
    assert_eq!(err.to_string(), "The resource type \"pods\" is not supported.");
}

#[test]
fn test_missing_anchor_and_type() {
    assert!(matches!(
        resolve("/certificates/default/web", "demo"),
        Err(ResolveError::MissingAnchor(_))
    ));
    assert!(matches!(
        resolve("/inspect", "demo"),
        Err(ResolveError::MissingResourceType(_))
    ));
    assert!(matches!(
        resolve("/inspect/", "demo"),
        Err(ResolveError::MissingResourceType(_))
    ));
}

#[test]
fn test_malformed_paths() {
    for path in [
        "/inspect/certificates",
        "/inspect/certificates/a/b/c",
        "/inspect/certificates//web",
        "/inspect/clusterissuers/ns/prod-ca",
    ] {
        assert!(
            matches!(resolve(path, "demo"), Err(ResolveError::MalformedPath { .. })),
            "{}",
            path
        );
    }
}

#[test]
fn test_inspect_path_round_trips_for_every_kind() {
    for kind in ResourceKind::all() {
        let mut metadata = json!({"name": "thing"});
        if !kind.is_cluster_scoped() {
            metadata["namespace"] = json!("team-b");
        }
        let resource: WatchedResource =
            serde_json::from_value(json!({"metadata": metadata})).unwrap();

        let address = ResourceAddress::of(*kind, &resource);
        let resolved = resolve(&address.inspect_path(), "demo").unwrap();
        assert_eq!(resolved, address, "{}", kind);
    }
}

#[test]
fn test_cluster_row_from_issuer_tab_addresses_cluster_kind() {
    let resource: WatchedResource =
        serde_json::from_value(json!({"metadata": {"name": "prod-ca"}})).unwrap();
    let address = ResourceAddress::of(ResourceKind::Issuer, &resource);
    assert_eq!(address.kind, ResourceKind::ClusterIssuer);
    assert_eq!(address.inspect_path(), "/inspect/clusterissuers/prod-ca");
}
