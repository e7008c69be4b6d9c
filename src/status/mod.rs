//! Status classification
//!
//! Maps a resource's condition list to a short label and a severity. The
//! classifier is pure and total: missing status, an empty condition array or
//! malformed entries all fall through to `Unknown`.

use std::fmt;

use crate::models::{ResourceKind, WatchedResource};

pub const READY_CONDITION: &str = "Ready";
pub const UNKNOWN_LABEL: &str = "Unknown";
pub const SYNC_FAILED_LABEL: &str = "Sync Failed";

/// How a status should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified status of one resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusClass {
    pub label: &'static str,
    pub severity: Severity,
}

impl StatusClass {
    pub const fn new(label: &'static str, severity: Severity) -> Self {
        Self { label, severity }
    }

    pub const fn unknown() -> Self {
        Self::new(UNKNOWN_LABEL, Severity::Warning)
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Classify a resource of the given kind
pub fn classify(kind: ResourceKind, resource: &WatchedResource) -> StatusClass {
    let descriptor = kind.descriptor();
    let conditions = resource.conditions();

    let Some(ready) = conditions.iter().find(|c| c.type_ == READY_CONDITION) else {
        return StatusClass::unknown();
    };

    if ready.is_true() {
        return StatusClass::new(descriptor.positive_label, Severity::Success);
    }

    // A conclusively failed secondary condition outranks the generic negative label
    if let Some(secondary) = descriptor.secondary_condition {
        let failed = conditions
            .iter()
            .find(|c| c.type_ == secondary)
            .is_some_and(|c| c.is_false());
        if failed {
            return StatusClass::new(SYNC_FAILED_LABEL, Severity::Danger);
        }
    }

    StatusClass::new(descriptor.negative_label, descriptor.negative_severity)
}
