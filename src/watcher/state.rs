//! Watch state management
//!
//! Folds watch events into full-replacement snapshots, one per watch target.
//! Events are applied strictly in delivery order; nothing is coalesced.

use std::collections::{BTreeMap, HashMap};

use super::{WatchEvent, WatchTarget};
use crate::error::WatchError;
use crate::models::WatchedResource;

type ObjectKey = (Option<String>, String);

fn object_key(resource: &WatchedResource) -> ObjectKey {
    (
        resource.metadata.namespace.clone(),
        resource.metadata.name.clone(),
    )
}

/// The `(items, loaded, error)` triple of one watched collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSnapshot {
    pub items: Vec<WatchedResource>,
    pub loaded: bool,
    pub error: Option<WatchError>,
}

impl CollectionSnapshot {
    /// A snapshot that has completed its initial sync
    pub fn loaded(items: Vec<WatchedResource>) -> Self {
        Self {
            items,
            loaded: true,
            error: None,
        }
    }

    /// A snapshot still waiting for its initial sync
    pub fn pending() -> Self {
        Self::default()
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            loaded: false,
            error: Some(WatchError::new(message)),
        }
    }
}

#[derive(Debug, Default)]
struct CollectionEntry {
    items: BTreeMap<ObjectKey, WatchedResource>,
    // Present between a (re)list start and its InitDone
    staging: Option<BTreeMap<ObjectKey, WatchedResource>>,
    loaded: bool,
    error: Option<WatchError>,
}

/// Snapshot store for every active watch target
#[derive(Debug, Default)]
pub struct WatchStore {
    collections: HashMap<WatchTarget, CollectionEntry>,
}

impl WatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one watch event
    pub fn apply(&mut self, event: WatchEvent) {
        match event {
            WatchEvent::Restarted(target) => {
                let entry = self.collections.entry(target).or_default();
                entry.staging = Some(BTreeMap::new());
                entry.error = None;
            }
            WatchEvent::Applied(target, resource) => {
                let entry = self.collections.entry(target).or_default();
                entry.error = None;
                let key = object_key(&resource);
                match entry.staging.as_mut() {
                    Some(staging) => {
                        staging.insert(key, resource);
                    }
                    None => {
                        entry.items.insert(key, resource);
                    }
                }
            }
            WatchEvent::Deleted(target, resource) => {
                let entry = self.collections.entry(target).or_default();
                entry.error = None;
                let key = object_key(&resource);
                entry.items.remove(&key);
                if let Some(staging) = entry.staging.as_mut() {
                    staging.remove(&key);
                }
            }
            WatchEvent::InitDone(target) => {
                let entry = self.collections.entry(target).or_default();
                if let Some(staging) = entry.staging.take() {
                    entry.items = staging;
                }
                entry.loaded = true;
                entry.error = None;
            }
            WatchEvent::Error(target, message) => {
                tracing::warn!("Watch error for {}: {}", target, message);
                let entry = self.collections.entry(target).or_default();
                entry.error = Some(WatchError::new(message));
            }
        }
    }

    /// Current snapshot of a target; a target never seen is pending
    pub fn snapshot(&self, target: &WatchTarget) -> CollectionSnapshot {
        match self.collections.get(target) {
            Some(entry) => CollectionSnapshot {
                items: entry.items.values().cloned().collect(),
                loaded: entry.loaded,
                error: entry.error.clone(),
            },
            None => CollectionSnapshot::pending(),
        }
    }

    /// Drop all state for a target (e.g. when a single-item watch ends)
    pub fn forget(&mut self, target: &WatchTarget) {
        self.collections.remove(target);
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
