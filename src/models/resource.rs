//! Watched resource shape
//!
//! The generic resource consumed by the dashboard for every kind. Only the
//! metadata is typed; `spec` and `status` stay opaque JSON and are read through
//! small accessors so an unexpected shape never fails deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::resource_kind::ResourceKind;

/// Object metadata as delivered by the API server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMetadata {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default)]
    pub creation_timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// A single status condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    pub fn is_true(&self) -> bool {
        self.status == "True"
    }

    pub fn is_false(&self) -> bool {
        self.status == "False"
    }
}

/// A resource of any watched kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedResource {
    #[serde(default)]
    pub metadata: ResourceMetadata,
    #[serde(default)]
    pub spec: serde_json::Value,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub status: serde_json::Value,
}

impl WatchedResource {
    /// Convert an API object (e.g. a `DynamicObject`) into a watched resource
    pub fn from_object<T: Serialize>(obj: &T) -> serde_json::Result<Self> {
        serde_json::from_value(serde_json::to_value(obj)?)
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata.namespace.as_deref()
    }

    /// Scope derived from namespace presence
    pub fn scope(&self) -> Scope {
        Scope::of(self)
    }

    /// Parse `status.conditions`, skipping entries that are not conditions
    pub fn conditions(&self) -> Vec<Condition> {
        self.status
            .get("conditions")
            .and_then(|c| c.as_array())
            .map(|conditions| {
                conditions
                    .iter()
                    .filter_map(|c| serde_json::from_value(c.clone()).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First condition of the given type
    pub fn condition(&self, type_: &str) -> Option<Condition> {
        self.conditions().into_iter().find(|c| c.type_ == type_)
    }

    /// Read a string field from `spec` by path
    pub fn spec_str(&self, path: &[&str]) -> Option<&str> {
        path.iter()
            .try_fold(&self.spec, |value, key| value.get(key))
            .and_then(|v| v.as_str())
    }
}

/// Whether a resource is namespaced or cluster-wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    Namespace,
    Cluster,
}

impl Scope {
    pub fn of(resource: &WatchedResource) -> Self {
        match resource.metadata.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => Scope::Namespace,
            _ => Scope::Cluster,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Namespace => "Namespace",
            Scope::Cluster => "Cluster",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured row identity
///
/// Two resources with the same name in different namespaces, or a namespaced
/// and a cluster-scoped resource with the same name, never share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey {
    pub kind: ResourceKind,
    pub scope: Scope,
    pub namespace: Option<String>,
    pub name: String,
}

impl RowKey {
    pub fn new(kind: ResourceKind, scope: Scope, resource: &WatchedResource) -> Self {
        Self {
            kind,
            scope,
            namespace: resource.metadata.namespace.clone(),
            name: resource.metadata.name.clone(),
        }
    }

    /// Key for a resource whose scope is derived from the resource itself
    pub fn of(kind: ResourceKind, resource: &WatchedResource) -> Self {
        let scope = resource.scope();
        Self::new(kind.for_scope(scope), scope, resource)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}/{}/{}", self.kind, ns, self.name),
            None => write!(f, "{}/{}", self.kind, self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resource(value: serde_json::Value) -> WatchedResource {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_api_object() {
        let r = resource(json!({
            "apiVersion": "cert-manager.io/v1",
            "kind": "Certificate",
            "metadata": {
                "name": "web-tls",
                "namespace": "team-a",
                "creationTimestamp": "2024-05-01T10:00:00Z",
                "uid": "1234",
                "labels": {"app": "web"}
            },
            "spec": {"secretName": "web-tls"},
            "status": {"conditions": [{"type": "Ready", "status": "True"}]}
        }));

        assert_eq!(r.name(), "web-tls");
        assert_eq!(r.namespace(), Some("team-a"));
        assert_eq!(r.metadata.labels.get("app"), Some(&"web".to_string()));
        assert_eq!(r.spec_str(&["secretName"]), Some("web-tls"));
        assert_eq!(r.scope(), Scope::Namespace);
    }

    #[test]
    fn test_missing_status_has_no_conditions() {
        let r = resource(json!({"metadata": {"name": "a"}}));
        assert!(r.status.is_null());
        assert!(r.conditions().is_empty());
        assert_eq!(r.scope(), Scope::Cluster);
    }

    #[test]
    fn test_malformed_conditions_are_skipped() {
        let r = resource(json!({
            "metadata": {"name": "a"},
            "status": {"conditions": [
                "garbage",
                {"type": "Ready"},
                {"type": "Ready", "status": "False", "reason": "Pending"}
            ]}
        }));

        let conditions = r.conditions();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].reason.as_deref(), Some("Pending"));
    }

    #[test]
    fn test_condition_first_match_wins() {
        let r = resource(json!({
            "metadata": {"name": "a"},
            "status": {"conditions": [
                {"type": "Ready", "status": "False"},
                {"type": "Ready", "status": "True"}
            ]}
        }));

        assert!(r.condition("Ready").unwrap().is_false());
    }

    #[test]
    fn test_empty_namespace_is_cluster_scope() {
        let r = resource(json!({"metadata": {"name": "a", "namespace": ""}}));
        assert_eq!(r.scope(), Scope::Cluster);
    }

    #[test]
    fn test_row_keys_do_not_collide_across_scope() {
        let namespaced = resource(json!({"metadata": {"name": "ca", "namespace": "demo"}}));
        let cluster = resource(json!({"metadata": {"name": "ca"}}));

        let a = RowKey::of(ResourceKind::Issuer, &namespaced);
        let b = RowKey::of(ResourceKind::Issuer, &cluster);
        assert_ne!(a, b);
        assert_eq!(b.kind, ResourceKind::ClusterIssuer);
        assert_eq!(a.to_string(), "Issuer/demo/ca");
        assert_eq!(b.to_string(), "ClusterIssuer/ca");
    }
}
