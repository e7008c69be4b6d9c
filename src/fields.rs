//! Row display values
//!
//! Builds the per-row tuple handed to the presentation layer: one display
//! string per column, the classified status and the actions the row offers.

use serde_json::Value;

use crate::collection::MergedRow;
use crate::models::{DashboardTab, ResourceKind, RowKey, Scope, WatchedResource};
use crate::status::{classify, StatusClass};

const MISSING: &str = "-";

/// Action offered from a row's menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    Inspect,
    Delete,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Inspect => "Inspect",
            RowAction::Delete => "Delete",
        }
    }

    /// Actions available for a row
    pub fn available(read_only: bool) -> Vec<RowAction> {
        if read_only {
            vec![RowAction::Inspect]
        } else {
            vec![RowAction::Inspect, RowAction::Delete]
        }
    }
}

/// A rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub key: RowKey,
    pub kind: ResourceKind,
    pub scope: Scope,
    pub cells: Vec<String>,
    pub status: StatusClass,
    pub actions: Vec<RowAction>,
}

impl RowView {
    pub fn build(tab: DashboardTab, row: &MergedRow, read_only: bool) -> Self {
        let status = classify(row.kind, &row.resource);
        let cells = cells_for(tab, row, status);
        Self {
            key: row.key.clone(),
            kind: row.kind,
            scope: row.scope,
            cells,
            status,
            actions: RowAction::available(read_only),
        }
    }
}

/// Build every row of a merged view
pub fn build_rows(tab: DashboardTab, rows: &[MergedRow], read_only: bool) -> Vec<RowView> {
    rows.iter()
        .map(|row| RowView::build(tab, row, read_only))
        .collect()
}

/// Render rows as an aligned plain-text table with a header line
pub fn render_text_table(tab: DashboardTab, rows: &[RowView]) -> String {
    let headers = tab.columns();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        format!("{}\n", padded.join("  ").trim_end())
    };

    let upper: Vec<String> = headers.iter().map(|h| h.to_uppercase()).collect();
    let mut out = line(upper.iter().map(String::as_str).collect());
    for row in rows {
        out.push_str(&line(row.cells.iter().map(String::as_str).collect()));
    }
    out
}

fn cells_for(tab: DashboardTab, row: &MergedRow, status: StatusClass) -> Vec<String> {
    let r = &row.resource;
    let name = r.name().to_string();
    let namespace = r.namespace().unwrap_or(MISSING).to_string();
    let status = status.label.to_string();

    match tab {
        DashboardTab::Certificates => vec![
            name,
            namespace,
            r.spec_str(&["secretName"]).unwrap_or(MISSING).to_string(),
            reference(&r.spec, "issuerRef", "Issuer"),
            dns_names(r),
            status,
        ],
        DashboardTab::Issuers => {
            let (issuer_type, details) = issuer_type(r);
            vec![
                name,
                row.kind.as_str().to_string(),
                row.scope.to_string(),
                issuer_type.to_string(),
                details,
                status,
            ]
        }
        DashboardTab::ExternalSecrets => vec![
            name,
            namespace,
            r.spec_str(&["target", "name"]).unwrap_or(MISSING).to_string(),
            reference(&r.spec, "secretStoreRef", "SecretStore"),
            r.spec_str(&["refreshInterval"])
                .unwrap_or("Not set")
                .to_string(),
            status,
        ],
        DashboardTab::SecretStores => {
            let (provider, details) = provider(r);
            vec![
                name,
                row.kind.as_str().to_string(),
                row.scope.to_string(),
                provider.to_string(),
                status,
                details,
            ]
        }
    }
}

/// `name (kind)` for an object reference; the kind defaults as the controllers do
fn reference(spec: &Value, field: &str, default_kind: &str) -> String {
    let reference = spec.get(field);
    let name = reference
        .and_then(|r| r.get("name"))
        .and_then(Value::as_str)
        .unwrap_or(MISSING);
    let kind = reference
        .and_then(|r| r.get("kind"))
        .and_then(Value::as_str)
        .unwrap_or(default_kind);
    format!("{} ({})", name, kind)
}

fn dns_names(r: &WatchedResource) -> String {
    let names: Vec<&str> = r
        .spec
        .get("dnsNames")
        .and_then(Value::as_array)
        .map(|a| a.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if !names.is_empty() {
        return names.join(", ");
    }
    r.spec_str(&["commonName"])
        .filter(|cn| !cn.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

/// Issuer type and its detail string
pub fn issuer_type(r: &WatchedResource) -> (&'static str, String) {
    let spec = &r.spec;
    let detail = |path: &[&str]| r.spec_str(path).unwrap_or(MISSING).to_string();

    if spec.get("acme").is_some() {
        ("ACME", detail(&["acme", "server"]))
    } else if spec.get("ca").is_some() {
        ("CA", detail(&["ca", "secretName"]))
    } else if spec.get("selfSigned").is_some() {
        ("Self-Signed", MISSING.to_string())
    } else if spec.get("vault").is_some() {
        ("Vault", detail(&["vault", "server"]))
    } else {
        ("Unknown", MISSING.to_string())
    }
}

/// Secret store provider name and its detail string
pub fn provider(r: &WatchedResource) -> (&'static str, String) {
    let Some(p) = r.spec.get("provider").filter(|p| p.is_object()) else {
        return ("Unknown", MISSING.to_string());
    };
    let s = |section: &str, key: &str| {
        p.get(section)
            .and_then(|v| v.get(key))
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
    };

    if p.get("aws").is_some() {
        let service = s("aws", "service").unwrap_or(MISSING);
        let region = s("aws", "region").unwrap_or("default");
        ("AWS", format!("{} ({})", service, region))
    } else if p.get("azurekv").is_some() {
        ("Azure Key Vault", s("azurekv", "vaultUrl").unwrap_or(MISSING).to_string())
    } else if p.get("gcpsm").is_some() {
        (
            "Google Secret Manager",
            s("gcpsm", "projectId").unwrap_or(MISSING).to_string(),
        )
    } else if p.get("vault").is_some() {
        ("HashiCorp Vault", s("vault", "server").unwrap_or(MISSING).to_string())
    } else if p.get("kubernetes").is_some() {
        (
            "Kubernetes",
            s("kubernetes", "server").unwrap_or("In-cluster").to_string(),
        )
    } else if p.get("doppler").is_some() {
        ("Doppler", s("doppler", "apiUrl").unwrap_or("Default API").to_string())
    } else if p.get("onepassword").is_some() {
        (
            "1Password",
            s("onepassword", "connectHost").unwrap_or(MISSING).to_string(),
        )
    } else if p.get("gitlab").is_some() {
        ("GitLab", s("gitlab", "url").unwrap_or("gitlab.com").to_string())
    } else if let Some(fake) = p.get("fake") {
        let entries = fake
            .get("data")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0);
        ("Fake (Testing)", format!("{} entries", entries))
    } else {
        ("Unknown", MISSING.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(provider: Value) -> WatchedResource {
        serde_json::from_value(json!({
            "metadata": {"name": "s", "namespace": "demo"},
            "spec": {"provider": provider}
        }))
        .unwrap()
    }

    #[test]
    fn test_provider_details() {
        assert_eq!(
            provider(&store(json!({"aws": {"service": "SecretsManager"}}))),
            ("AWS", "SecretsManager (default)".to_string())
        );
        assert_eq!(
            provider(&store(json!({"kubernetes": {}}))),
            ("Kubernetes", "In-cluster".to_string())
        );
        assert_eq!(
            provider(&store(json!({"fake": {"data": [{}, {}]}}))),
            ("Fake (Testing)", "2 entries".to_string())
        );
        assert_eq!(
            provider(&store(json!({"akeyless": {}}))),
            ("Unknown", "-".to_string())
        );
    }

    #[test]
    fn test_actions_respect_read_only() {
        assert_eq!(RowAction::available(true), vec![RowAction::Inspect]);
        assert_eq!(RowAction::available(false).len(), 2);
    }
}
