//! Dashboard tabs
//!
//! Each tab is one logical table backed by one or more watched collections.
//! Collections are listed namespaced first, cluster-scoped second; the merger
//! keeps that order.

use std::fmt;

use super::resource_kind::ResourceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardTab {
    Certificates,
    Issuers,
    ExternalSecrets,
    SecretStores,
}

impl DashboardTab {
    pub fn all() -> &'static [Self] {
        &[
            DashboardTab::Certificates,
            DashboardTab::Issuers,
            DashboardTab::ExternalSecrets,
            DashboardTab::SecretStores,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardTab::Certificates => "Certificates",
            DashboardTab::Issuers => "Issuers",
            DashboardTab::ExternalSecrets => "External Secrets",
            DashboardTab::SecretStores => "Secret Stores",
        }
    }

    /// Kinds watched for this tab, in merge order
    pub fn kinds(&self) -> &'static [ResourceKind] {
        match self {
            DashboardTab::Certificates => &[ResourceKind::Certificate],
            DashboardTab::Issuers => &[ResourceKind::Issuer, ResourceKind::ClusterIssuer],
            DashboardTab::ExternalSecrets => &[ResourceKind::ExternalSecret],
            DashboardTab::SecretStores => {
                &[ResourceKind::SecretStore, ResourceKind::ClusterSecretStore]
            }
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            DashboardTab::Certificates => {
                &["Name", "Namespace", "Secret", "Issuer", "DNS Names", "Status"]
            }
            DashboardTab::Issuers => &["Name", "Type", "Scope", "Issuer Type", "Details", "Status"],
            DashboardTab::ExternalSecrets => &[
                "Name",
                "Namespace",
                "Target Secret",
                "Secret Store",
                "Refresh Interval",
                "Status",
            ],
            DashboardTab::SecretStores => &["Name", "Type", "Scope", "Provider", "Status", "Details"],
        }
    }

    /// Index of the status column within `columns()`
    pub fn status_column(&self) -> usize {
        self.columns()
            .iter()
            .position(|c| *c == "Status")
            .unwrap_or(0)
    }

    pub fn empty_state_title(&self) -> &'static str {
        match self {
            DashboardTab::Certificates => "No certificates found",
            DashboardTab::Issuers => "No issuers found",
            DashboardTab::ExternalSecrets => "No external secrets found",
            DashboardTab::SecretStores => "No secret stores found",
        }
    }

    pub fn empty_state_body(&self) -> &'static str {
        match self {
            DashboardTab::Certificates => {
                "No cert-manager certificates are currently available in the watched namespace."
            }
            DashboardTab::Issuers => {
                "No cert-manager issuers are currently available in the watched namespace or cluster."
            }
            DashboardTab::ExternalSecrets => {
                "No external-secrets-operator ExternalSecrets are currently available in the watched namespace."
            }
            DashboardTab::SecretStores => {
                "No external-secrets-operator SecretStores are currently available in the watched namespace or cluster."
            }
        }
    }

    /// Parse a tab from a command-line token ("certificates", "issuers", "es", ...)
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "certificates" | "certificate" | "certs" | "cert" => Some(DashboardTab::Certificates),
            "issuers" | "issuer" | "clusterissuers" | "iss" => Some(DashboardTab::Issuers),
            "externalsecrets" | "externalsecret" | "external-secrets" | "es" => {
                Some(DashboardTab::ExternalSecrets)
            }
            "secretstores" | "secretstore" | "clustersecretstores" | "secret-stores" | "ss" => {
                Some(DashboardTab::SecretStores)
            }
            _ => None,
        }
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn previous(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|t| t == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
