//! Watcher module
//!
//! Provides live watches over the dashboard's custom resources. Each watch
//! target runs as its own task and forwards events over a single channel; the
//! `WatchStore` turns them into `(items, loaded, error)` snapshots.

mod state;

pub use state::*;

use anyhow::Result;
use futures::StreamExt;
use kube::api::Api;
use kube::core::DynamicObject;
use kube::runtime::watcher;
use kube::Client;
use std::collections::HashMap;
use std::fmt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::models::{DashboardTab, ModelDescriptor, ResourceKind, WatchedResource};

const MAX_CONSECUTIVE_ERRORS: u32 = 5;

/// What a watch task observes: one kind, optionally narrowed to a namespace
/// and a single object name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WatchTarget {
    pub kind: ResourceKind,
    pub namespace: Option<String>,
    pub name: Option<String>,
}

impl WatchTarget {
    /// List watch; the namespace is ignored for cluster-scoped kinds
    pub fn collection(kind: ResourceKind, namespace: Option<String>) -> Self {
        Self {
            kind,
            namespace: if kind.is_cluster_scoped() {
                None
            } else {
                namespace
            },
            name: None,
        }
    }

    /// Single-object watch
    pub fn single(kind: ResourceKind, namespace: Option<String>, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::collection(kind, namespace)
        }
    }

    /// The list targets backing a dashboard tab, in merge order
    pub fn for_tab(tab: DashboardTab, namespace: Option<&str>) -> Vec<Self> {
        tab.kinds()
            .iter()
            .map(|kind| Self::collection(*kind, namespace.map(str::to_string)))
            .collect()
    }
}

impl fmt::Display for WatchTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ns) = &self.namespace {
            write!(f, " in {}", ns)?;
        }
        if let Some(name) = &self.name {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}

/// Event emitted by resource watchers
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A (re)list started; following applies belong to the new list
    Restarted(WatchTarget),
    /// Resource was added or updated
    Applied(WatchTarget, WatchedResource),
    /// Resource was deleted
    Deleted(WatchTarget, WatchedResource),
    /// The (re)list is complete
    InitDone(WatchTarget),
    /// Watch error occurred
    Error(WatchTarget, String),
}

impl WatchEvent {
    pub fn target(&self) -> &WatchTarget {
        match self {
            WatchEvent::Restarted(t)
            | WatchEvent::Applied(t, _)
            | WatchEvent::Deleted(t, _)
            | WatchEvent::InitDone(t)
            | WatchEvent::Error(t, _) => t,
        }
    }
}

/// Manages the running watch tasks
pub struct ResourceWatcher {
    client: Client,
    event_tx: mpsc::UnboundedSender<WatchEvent>,
    handles: HashMap<WatchTarget, JoinHandle<()>>,
}

impl ResourceWatcher {
    pub fn new(client: Client) -> (Self, mpsc::UnboundedReceiver<WatchEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                client,
                event_tx: tx,
                handles: HashMap::new(),
            },
            rx,
        )
    }

    /// Start watching a target; watching an already active target is a no-op
    pub fn watch(&mut self, target: WatchTarget) -> Result<()> {
        if self.handles.contains_key(&target) {
            return Ok(());
        }

        tracing::debug!("Starting watch for {}", target);
        let handle = tokio::spawn(run_watch(
            self.client.clone(),
            target.clone(),
            self.event_tx.clone(),
        ));
        self.handles.insert(target, handle);
        Ok(())
    }

    /// Start watching every collection of every tab
    pub fn watch_all(&mut self, namespace: Option<&str>) -> Result<()> {
        for tab in DashboardTab::all() {
            for target in WatchTarget::for_tab(*tab, namespace) {
                self.watch(target)?;
            }
        }
        Ok(())
    }

    /// Stop a single target's task
    pub fn unwatch(&mut self, target: &WatchTarget) {
        if let Some(handle) = self.handles.remove(target) {
            tracing::debug!("Stopping watch for {}", target);
            handle.abort();
        }
    }

    /// Abort all watcher tasks
    pub fn stop(&mut self) {
        for handle in self.handles.values() {
            handle.abort();
        }
        self.handles.clear();
    }
}

impl Drop for ResourceWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

fn api_for(client: Client, target: &WatchTarget) -> Api<DynamicObject> {
    let ar = crate::kube::api_resource(&ModelDescriptor::for_kind(target.kind));
    match &target.namespace {
        Some(ns) if !target.kind.is_cluster_scoped() => Api::namespaced_with(client, ns, &ar),
        _ => Api::all_with(client, &ar),
    }
}

async fn run_watch(client: Client, target: WatchTarget, event_tx: mpsc::UnboundedSender<WatchEvent>) {
    let api = api_for(client, &target);
    let mut config = watcher::Config::default();
    if let Some(name) = &target.name {
        config = config.fields(&format!("metadata.name={}", name));
    }

    let mut w = Box::pin(watcher(api, config));
    let mut error_count = 0u32;

    let convert = |obj: &DynamicObject| match WatchedResource::from_object(obj) {
        Ok(resource) => Some(resource),
        Err(e) => {
            tracing::warn!("Skipping undecodable {} object: {}", target.kind, e);
            None
        }
    };

    while let Some(event) = w.next().await {
        let sent = match event {
            Ok(watcher::Event::Init) => {
                error_count = 0;
                event_tx.send(WatchEvent::Restarted(target.clone()))
            }
            Ok(watcher::Event::InitApply(obj)) | Ok(watcher::Event::Apply(obj)) => {
                error_count = 0;
                match convert(&obj) {
                    Some(resource) => event_tx.send(WatchEvent::Applied(target.clone(), resource)),
                    None => Ok(()),
                }
            }
            Ok(watcher::Event::Delete(obj)) => {
                error_count = 0;
                match convert(&obj) {
                    Some(resource) => event_tx.send(WatchEvent::Deleted(target.clone(), resource)),
                    None => Ok(()),
                }
            }
            Ok(watcher::Event::InitDone) => {
                error_count = 0;
                event_tx.send(WatchEvent::InitDone(target.clone()))
            }
            Err(e) => {
                error_count += 1;
                tracing::debug!("{} watcher error ({}): {}", target, error_count, e);
                let sent = event_tx.send(WatchEvent::Error(target.clone(), e.to_string()));
                // Likely a missing CRD or RBAC denial; stop instead of spinning
                if error_count >= MAX_CONSECUTIVE_ERRORS {
                    tracing::warn!(
                        "{} watcher stopped after {} consecutive errors",
                        target,
                        error_count
                    );
                    break;
                }
                tokio::time::sleep(tokio::time::Duration::from_secs(1)).await;
                sent
            }
        };

        // Receiver gone: the dashboard has shut down
        if sent.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cluster_targets_drop_namespace() {
        let target = WatchTarget::collection(ResourceKind::ClusterIssuer, Some("demo".into()));
        assert_eq!(target.namespace, None);

        let target = WatchTarget::collection(ResourceKind::Issuer, Some("demo".into()));
        assert_eq!(target.namespace.as_deref(), Some("demo"));
    }

    #[test]
    fn test_targets_for_tab() {
        let targets = WatchTarget::for_tab(DashboardTab::SecretStores, Some("demo"));
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].kind, ResourceKind::SecretStore);
        assert_eq!(targets[1].kind, ResourceKind::ClusterSecretStore);
        assert_eq!(targets[1].namespace, None);
    }

    #[test]
    fn test_single_target_display() {
        let target = WatchTarget::single(ResourceKind::Certificate, Some("team-a".into()), "web");
        assert_eq!(target.to_string(), "Certificate in team-a (web)");
    }
}
