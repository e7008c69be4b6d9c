//! Model layer
//!
//! Structure:
//! - `resource_kind.rs` - kind enum and the static per-kind descriptor table
//! - `resource.rs` - the generic watched resource, conditions, scope and row identity
//! - `tab.rs` - dashboard tabs and the collections each one merges

pub mod resource;
pub mod resource_kind;
pub mod tab;

pub use resource::{Condition, ResourceMetadata, RowKey, Scope, WatchedResource};
pub use resource_kind::{KindDescriptor, ModelDescriptor, ResourceKind};
pub use tab::DashboardTab;
