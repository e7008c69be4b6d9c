//! Inspect routes
//!
//! Parses `.../inspect/{plural}/{namespace}/{name}` and
//! `.../inspect/{plural}/{name}` into a typed address, and builds the same
//! paths back from a resource.

mod inspect;

pub use inspect::*;

use std::fmt;

use crate::error::ResolveError;
use crate::models::{ResourceKind, WatchedResource};

pub const INSPECT_SEGMENT: &str = "inspect";

/// Namespace used for namespaced kinds addressed without one
pub const DEFAULT_FALLBACK_NAMESPACE: &str = "demo";

/// A single resource's coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceAddress {
    pub kind: ResourceKind,
    pub namespace: Option<String>,
    pub name: String,
}

impl ResourceAddress {
    pub fn namespaced(kind: ResourceKind, namespace: &str, name: &str) -> Self {
        Self {
            kind,
            namespace: Some(namespace.to_string()),
            name: name.to_string(),
        }
    }

    pub fn cluster(kind: ResourceKind, name: &str) -> Self {
        Self {
            kind,
            namespace: None,
            name: name.to_string(),
        }
    }

    /// Address of a listed resource, using the variant for its scope
    pub fn of(kind: ResourceKind, resource: &WatchedResource) -> Self {
        let scope = resource.scope();
        Self {
            kind: kind.for_scope(scope),
            namespace: resource
                .namespace()
                .filter(|ns| !ns.is_empty())
                .map(str::to_string),
            name: resource.name().to_string(),
        }
    }

    /// `/inspect/{plural}/{namespace?}/{name}`
    pub fn inspect_path(&self) -> String {
        match &self.namespace {
            Some(ns) if !self.kind.is_cluster_scoped() => format!(
                "/{}/{}/{}/{}",
                INSPECT_SEGMENT,
                self.kind.plural(),
                ns,
                self.name
            ),
            _ => format!("/{}/{}/{}", INSPECT_SEGMENT, self.kind.plural(), self.name),
        }
    }
}

impl fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{} {}/{}", self.kind, ns, self.name),
            None => write!(f, "{} {}", self.kind, self.name),
        }
    }
}

/// Resolve an inspect path
///
/// Segments before the `inspect` anchor are ignored, so a route prefix such as
/// `/secrets-management` is accepted. A namespaced kind addressed by name only
/// gets `fallback_namespace`.
pub fn resolve(path: &str, fallback_namespace: &str) -> Result<ResourceAddress, ResolveError> {
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.split('/').collect();

    let anchor = segments
        .iter()
        .position(|s| *s == INSPECT_SEGMENT)
        .ok_or_else(|| ResolveError::MissingAnchor(path.to_string()))?;

    let type_token = match segments.get(anchor + 1) {
        Some(token) if !token.is_empty() => *token,
        _ => return Err(ResolveError::MissingResourceType(path.to_string())),
    };

    let kind = ResourceKind::from_plural(type_token)
        .ok_or_else(|| ResolveError::UnknownResourceType(type_token.to_string()))?;

    let malformed = |reason: &'static str| ResolveError::MalformedPath {
        path: path.to_string(),
        reason,
    };

    let rest = &segments[anchor + 2..];
    if rest.iter().any(|s| s.is_empty()) {
        return Err(malformed("empty path segment"));
    }

    match rest {
        [] => Err(malformed("missing resource name")),
        [name] if kind.is_cluster_scoped() => Ok(ResourceAddress::cluster(kind, name)),
        [name] => Ok(ResourceAddress::namespaced(kind, fallback_namespace, name)),
        [_, _] if kind.is_cluster_scoped() => {
            Err(malformed("cluster-scoped resources have no namespace segment"))
        }
        [namespace, name] => Ok(ResourceAddress::namespaced(kind, namespace, name)),
        _ => Err(malformed("too many path segments")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_with_prefix() {
        assert_eq!(
            resolve("/secrets-management/inspect/clusterissuers/prod-ca", "demo"),
            Ok(ResourceAddress::cluster(ResourceKind::ClusterIssuer, "prod-ca"))
        );
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(
            resolve("/inspect/certificates/team-a/web-tls/", "demo"),
            Ok(ResourceAddress::namespaced(
                ResourceKind::Certificate,
                "team-a",
                "web-tls"
            ))
        );
    }

    #[test]
    fn test_namespaced_kind_falls_back() {
        assert_eq!(
            resolve("/inspect/externalsecrets/db-creds", "demo"),
            Ok(ResourceAddress::namespaced(
                ResourceKind::ExternalSecret,
                "demo",
                "db-creds"
            ))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            resolve("/inspect/pods/web", "demo"),
            Err(ResolveError::UnknownResourceType("pods".to_string()))
        );
        assert!(matches!(
            resolve("/certificates/team-a/web", "demo"),
            Err(ResolveError::MissingAnchor(_))
        ));
        assert!(matches!(
            resolve("/inspect", "demo"),
            Err(ResolveError::MissingResourceType(_))
        ));
        assert!(matches!(
            resolve("/inspect/certificates", "demo"),
            Err(ResolveError::MalformedPath { .. })
        ));
        assert!(matches!(
            resolve("/inspect/certificates/a//b", "demo"),
            Err(ResolveError::MalformedPath { .. })
        ));
        assert!(matches!(
            resolve("/inspect/clusterissuers/ns/name", "demo"),
            Err(ResolveError::MalformedPath { .. })
        ));
        assert!(matches!(
            resolve("/inspect/certificates/a/b/c", "demo"),
            Err(ResolveError::MalformedPath { .. })
        ));
    }

    #[test]
    fn test_unknown_type_message() {
        let err = resolve("/inspect/pods/web", "demo").unwrap_err();
        assert_eq!(err.to_string(), "The resource type \"pods\" is not supported.");
    }
}
