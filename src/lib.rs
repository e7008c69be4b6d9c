//! secrets9s library
//!
//! Core of a terminal dashboard for cert-manager and external-secrets
//! resources: status classification, collection merging, row actions with
//! delete confirmation, and inspect route resolution. The binary and the
//! integration tests both build on it.

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod fields;
pub mod kube;
pub mod models;
pub mod routing;
pub mod status;
#[cfg(feature = "tui")]
pub mod tui;
pub mod watcher;
pub mod workflow;

// Re-export commonly used types for convenience
pub use collection::{merge, merge_tab, Collection, MergedRow, MergedView};
pub use error::{DeleteFailure, ResolveError, WatchError, WorkflowError};
pub use models::{DashboardTab, ResourceKind, RowKey, Scope, WatchedResource};
pub use routing::{resolve, ResourceAddress};
pub use status::{classify, Severity, StatusClass};
pub use watcher::{CollectionSnapshot, ResourceWatcher, WatchEvent, WatchStore, WatchTarget};
pub use workflow::{ActionController, DeletePhase, ResourceDeleter};
