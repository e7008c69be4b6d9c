//! Collection merging
//!
//! Combines the snapshots of every collection backing a tab into one list
//! with a single loaded/error state.

use crate::error::WatchError;
use crate::models::{ResourceKind, RowKey, Scope, WatchedResource};
use crate::watcher::{CollectionSnapshot, WatchStore, WatchTarget};

use crate::models::DashboardTab;

/// One constituent of a merge, tagged with the scope it was watched at
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    pub kind: ResourceKind,
    pub scope: Scope,
    pub snapshot: CollectionSnapshot,
}

impl Collection {
    pub fn new(kind: ResourceKind, snapshot: CollectionSnapshot) -> Self {
        Self {
            kind,
            scope: kind.scope(),
            snapshot,
        }
    }
}

/// A merged row: the resource plus the tags attached at merge time
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub key: RowKey,
    pub kind: ResourceKind,
    pub scope: Scope,
    pub resource: WatchedResource,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedView {
    pub rows: Vec<MergedRow>,
    pub loaded: bool,
    pub error: Option<WatchError>,
}

impl MergedView {
    /// Loaded, error-free and without rows
    pub fn is_empty_state(&self) -> bool {
        self.loaded && self.error.is_none() && self.rows.is_empty()
    }
}

/// Merge collections in input order
///
/// Rows are only produced when every constituent is loaded and none has
/// failed. Overlapping identities across constituents are kept as-is.
pub fn merge(collections: &[Collection]) -> MergedView {
    let loaded = collections.iter().all(|c| c.snapshot.loaded);
    let error = collections
        .iter()
        .find_map(|c| c.snapshot.error.clone());

    if error.is_some() || !loaded {
        return MergedView {
            rows: Vec::new(),
            loaded,
            error,
        };
    }

    let rows = collections
        .iter()
        .flat_map(|c| {
            c.snapshot.items.iter().map(move |resource| MergedRow {
                key: RowKey::new(c.kind, c.scope, resource),
                kind: c.kind,
                scope: c.scope,
                resource: resource.clone(),
            })
        })
        .collect();

    MergedView {
        rows,
        loaded,
        error: None,
    }
}

/// Collect a tab's constituents from the store and merge them
pub fn merge_tab(store: &WatchStore, tab: DashboardTab, namespace: Option<&str>) -> MergedView {
    let collections: Vec<Collection> = WatchTarget::for_tab(tab, namespace)
        .into_iter()
        .map(|target| Collection::new(target.kind, store.snapshot(&target)))
        .collect();
    merge(&collections)
}
