//! Error taxonomy of the dashboard core
//!
//! Application boundaries (CLI, config I/O, client setup) use `anyhow`; these
//! typed errors are the ones the core converts into state for rendering.

use thiserror::Error;

/// A watch failed; surfaced verbatim as a collection-level banner
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct WatchError {
    pub message: String,
}

impl WatchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The delete collaborator rejected a request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DeleteFailure {
    pub message: String,
}

impl DeleteFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An inspect path could not be turned into a resource address
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("The resource type \"{0}\" is not supported.")]
    UnknownResourceType(String),

    #[error("path \"{0}\" has no inspect segment")]
    MissingAnchor(String),

    #[error("path \"{0}\" has no resource type")]
    MissingResourceType(String),

    #[error("malformed inspect path \"{path}\": {reason}")]
    MalformedPath { path: String, reason: &'static str },
}

/// Invalid use of the action workflow controller
///
/// Not reachable through normal UI sequencing; indicates a caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("precondition failed: {0}")]
    Precondition(String),
}
