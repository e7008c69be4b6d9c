//! Resource kind definitions
//!
//! This module provides a centralized enum for every custom resource kind the
//! dashboard understands, plus a static descriptor table so kind-specific
//! behavior (labels, API coordinates, scope) is looked up instead of being
//! re-implemented per table.

use std::fmt;
use std::str::FromStr;

use super::resource::{Scope, WatchedResource};
use crate::status::Severity;

pub const CERT_MANAGER_GROUP: &str = "cert-manager.io";
pub const EXTERNAL_SECRETS_GROUP: &str = "external-secrets.io";

/// Enumeration of all watched resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    // cert-manager resources
    Certificate,
    Issuer,
    ClusterIssuer,
    // external-secrets-operator resources
    ExternalSecret,
    SecretStore,
    ClusterSecretStore,
}

/// Static, per-kind configuration
#[derive(Debug, PartialEq, Eq)]
pub struct KindDescriptor {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
    /// Lowercase plural used both for the API path and for inspect routes
    pub plural: &'static str,
    pub abbr: &'static str,
    pub label: &'static str,
    pub label_plural: &'static str,
    pub positive_label: &'static str,
    pub negative_label: &'static str,
    pub negative_severity: Severity,
    /// Condition consulted when Ready is present but not "True"
    pub secondary_condition: Option<&'static str>,
    pub cluster_scoped: bool,
}

const CERTIFICATE: KindDescriptor = KindDescriptor {
    group: CERT_MANAGER_GROUP,
    version: "v1",
    kind: "Certificate",
    plural: "certificates",
    abbr: "cert",
    label: "Certificate",
    label_plural: "Certificates",
    positive_label: "Ready",
    negative_label: "Not Ready",
    negative_severity: Severity::Danger,
    secondary_condition: None,
    cluster_scoped: false,
};

const ISSUER: KindDescriptor = KindDescriptor {
    group: CERT_MANAGER_GROUP,
    version: "v1",
    kind: "Issuer",
    plural: "issuers",
    abbr: "iss",
    label: "Issuer",
    label_plural: "Issuers",
    positive_label: "Ready",
    negative_label: "Not Ready",
    negative_severity: Severity::Danger,
    secondary_condition: None,
    cluster_scoped: false,
};

const CLUSTER_ISSUER: KindDescriptor = KindDescriptor {
    group: CERT_MANAGER_GROUP,
    version: "v1",
    kind: "ClusterIssuer",
    plural: "clusterissuers",
    abbr: "ciss",
    label: "ClusterIssuer",
    label_plural: "ClusterIssuers",
    positive_label: "Ready",
    negative_label: "Not Ready",
    negative_severity: Severity::Danger,
    secondary_condition: None,
    cluster_scoped: true,
};

const EXTERNAL_SECRET: KindDescriptor = KindDescriptor {
    group: EXTERNAL_SECRETS_GROUP,
    version: "v1beta1",
    kind: "ExternalSecret",
    plural: "externalsecrets",
    abbr: "es",
    label: "ExternalSecret",
    label_plural: "ExternalSecrets",
    positive_label: "Synced",
    negative_label: "Syncing",
    negative_severity: Severity::Info,
    secondary_condition: Some("SecretSynced"),
    cluster_scoped: false,
};

const SECRET_STORE: KindDescriptor = KindDescriptor {
    group: EXTERNAL_SECRETS_GROUP,
    version: "v1beta1",
    kind: "SecretStore",
    plural: "secretstores",
    abbr: "ss",
    label: "SecretStore",
    label_plural: "SecretStores",
    positive_label: "Ready",
    negative_label: "Not Ready",
    negative_severity: Severity::Danger,
    secondary_condition: None,
    cluster_scoped: false,
};

const CLUSTER_SECRET_STORE: KindDescriptor = KindDescriptor {
    group: EXTERNAL_SECRETS_GROUP,
    version: "v1beta1",
    kind: "ClusterSecretStore",
    plural: "clustersecretstores",
    abbr: "css",
    label: "ClusterSecretStore",
    label_plural: "ClusterSecretStores",
    positive_label: "Ready",
    negative_label: "Not Ready",
    negative_severity: Severity::Danger,
    secondary_condition: None,
    cluster_scoped: true,
};

impl ResourceKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        self.descriptor().kind
    }

    pub fn descriptor(&self) -> &'static KindDescriptor {
        match self {
            ResourceKind::Certificate => &CERTIFICATE,
            ResourceKind::Issuer => &ISSUER,
            ResourceKind::ClusterIssuer => &CLUSTER_ISSUER,
            ResourceKind::ExternalSecret => &EXTERNAL_SECRET,
            ResourceKind::SecretStore => &SECRET_STORE,
            ResourceKind::ClusterSecretStore => &CLUSTER_SECRET_STORE,
        }
    }

    /// Plural token used in API paths and inspect routes
    pub fn plural(&self) -> &'static str {
        self.descriptor().plural
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.descriptor().cluster_scoped
    }

    pub fn scope(&self) -> Scope {
        if self.is_cluster_scoped() {
            Scope::Cluster
        } else {
            Scope::Namespace
        }
    }

    /// Map a kind to its variant for the given scope
    ///
    /// Issuers and secret stores have a cluster-wide twin; certificates and
    /// external secrets only exist namespaced and map to themselves.
    pub fn for_scope(&self, scope: Scope) -> Self {
        match (self, scope) {
            (ResourceKind::Issuer | ResourceKind::ClusterIssuer, Scope::Namespace) => {
                ResourceKind::Issuer
            }
            (ResourceKind::Issuer | ResourceKind::ClusterIssuer, Scope::Cluster) => {
                ResourceKind::ClusterIssuer
            }
            (ResourceKind::SecretStore | ResourceKind::ClusterSecretStore, Scope::Namespace) => {
                ResourceKind::SecretStore
            }
            (ResourceKind::SecretStore | ResourceKind::ClusterSecretStore, Scope::Cluster) => {
                ResourceKind::ClusterSecretStore
            }
            (kind, _) => *kind,
        }
    }

    /// Look up a kind by its plural route token (e.g. "clusterissuers")
    pub fn from_plural(token: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.plural() == token)
    }

    /// Try to parse a string into a ResourceKind, returning None if invalid
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Get all resource kinds
    pub fn all() -> &'static [Self] {
        &[
            ResourceKind::Certificate,
            ResourceKind::Issuer,
            ResourceKind::ClusterIssuer,
            ResourceKind::ExternalSecret,
            ResourceKind::SecretStore,
            ResourceKind::ClusterSecretStore,
        ]
    }

    /// Try to parse a string (case-insensitive) into a ResourceKind
    ///
    /// Accepts kind names, plural tokens and short names.
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::all().iter().copied().find(|k| {
            let d = k.descriptor();
            d.kind.to_lowercase() == lower || d.plural == lower || d.abbr == lower
        })
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("Unknown resource kind: {}", s))
    }
}

/// Model handed to the delete collaborator
///
/// Mirrors the API coordinates of a single kind so the collaborator can build
/// its request without knowing about `ResourceKind`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub group: String,
    pub version: String,
    pub api_version: String,
    pub kind: String,
    pub plural: String,
    pub abbr: String,
    pub label: String,
    pub label_plural: String,
    pub namespaced: bool,
}

impl ModelDescriptor {
    pub fn for_kind(kind: ResourceKind) -> Self {
        let d = kind.descriptor();
        Self {
            group: d.group.to_string(),
            version: d.version.to_string(),
            api_version: format!("{}/{}", d.group, d.version),
            kind: d.kind.to_string(),
            plural: d.plural.to_string(),
            abbr: d.abbr.to_string(),
            label: d.label.to_string(),
            label_plural: d.label_plural.to_string(),
            namespaced: !d.cluster_scoped,
        }
    }

    /// Build the model for a concrete resource
    ///
    /// The variant is chosen from the resource's own scope: an Issuer without
    /// a namespace is deleted as a ClusterIssuer.
    pub fn for_resource(kind: ResourceKind, resource: &WatchedResource) -> Self {
        Self::for_kind(kind.for_scope(resource.scope()))
    }
}
