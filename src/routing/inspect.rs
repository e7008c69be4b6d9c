//! Inspect view model
//!
//! Turns the snapshot of a single-item watch into what the detail page shows.

use chrono::{DateTime, Local};

use super::ResourceAddress;
use crate::error::WatchError;
use crate::models::WatchedResource;
use crate::watcher::{CollectionSnapshot, WatchTarget};

/// State of an inspect page
#[derive(Debug, Clone, PartialEq)]
pub enum InspectState {
    Loading,
    Failed(WatchError),
    NotFound,
    Found(Box<WatchedResource>),
}

impl InspectState {
    pub fn from_snapshot(address: &ResourceAddress, snapshot: &CollectionSnapshot) -> Self {
        if let Some(error) = &snapshot.error {
            return InspectState::Failed(error.clone());
        }
        if !snapshot.loaded {
            return InspectState::Loading;
        }
        snapshot
            .items
            .iter()
            .find(|r| {
                r.name() == address.name
                    && (address.namespace.is_none() || r.namespace() == address.namespace.as_deref())
            })
            .map(|r| InspectState::Found(Box::new(r.clone())))
            .unwrap_or(InspectState::NotFound)
    }
}

impl ResourceAddress {
    /// The single-item watch backing this address's inspect page
    pub fn watch_target(&self) -> WatchTarget {
        WatchTarget::single(self.kind, self.namespace.clone(), &self.name)
    }

    pub fn page_title(&self) -> String {
        format!("{} details", self.kind.descriptor().label)
    }

    pub fn not_found_message(&self) -> String {
        format!(
            "The {} \"{}\" was not found.",
            self.kind.descriptor().label,
            self.name
        )
    }
}

/// Format an API timestamp in local time, keeping the raw value if it does not parse
pub fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| {
            ts.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

/// One titled block of the detail page
#[derive(Debug, Clone, PartialEq)]
pub struct DetailSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Everything the inspect page renders for a found resource
#[derive(Debug, Clone, PartialEq)]
pub struct InspectDetail {
    pub title: String,
    pub sections: Vec<DetailSection>,
}

impl InspectDetail {
    pub fn build(address: &ResourceAddress, resource: &WatchedResource) -> Self {
        let meta = &resource.metadata;

        let mut metadata = vec![format!("Name: {}", meta.name)];
        if let Some(ns) = &meta.namespace {
            metadata.push(format!("Namespace: {}", ns));
        }
        metadata.push(format!(
            "Creation timestamp: {}",
            format_timestamp(&meta.creation_timestamp)
        ));
        if let Some(uid) = &meta.uid {
            metadata.push(format!("UID: {}", uid));
        }
        if let Some(rv) = &meta.resource_version {
            metadata.push(format!("Resource version: {}", rv));
        }

        let mut sections = vec![
            DetailSection {
                title: "Metadata",
                lines: metadata,
            },
            DetailSection {
                title: "Labels",
                lines: pairs(&meta.labels, "No labels"),
            },
            DetailSection {
                title: "Annotations",
                lines: pairs(&meta.annotations, "No annotations"),
            },
            DetailSection {
                title: "Specification",
                lines: pretty(&resource.spec),
            },
        ];

        if !resource.status.is_null() {
            sections.push(DetailSection {
                title: "Status",
                lines: pretty(&resource.status),
            });
        }

        Self {
            title: address.page_title(),
            sections,
        }
    }

    /// Plain text rendering for headless output
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.title);
        for section in &self.sections {
            out.push_str(&format!("\n{}\n", section.title));
            for line in &section.lines {
                out.push_str(&format!("  {}\n", line));
            }
        }
        out
    }
}

fn pairs(map: &std::collections::BTreeMap<String, String>, empty: &str) -> Vec<String> {
    if map.is_empty() {
        return vec![empty.to_string()];
    }
    map.iter().map(|(k, v)| format!("{}={}", k, v)).collect()
}

fn pretty(value: &serde_json::Value) -> Vec<String> {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| value.to_string())
        .lines()
        .map(str::to_string)
        .collect()
}
