//! Headless resource commands: list, inspect, delete

use anyhow::{bail, Context, Result};
use kube::Client;
use std::io::{BufRead, Write};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::collection::merge_tab;
use crate::fields::{build_rows, render_text_table};
use crate::kube::KubeDeleter;
use crate::models::{DashboardTab, WatchedResource};
use crate::routing::{resolve, InspectDetail, InspectState, ResourceAddress};
use crate::watcher::{ResourceWatcher, WatchEvent, WatchStore, WatchTarget};
use crate::workflow::{ActionController, DELETE_WARNING};

const SYNC_TIMEOUT: Duration = Duration::from_secs(30);

/// Apply events until every target has loaded or failed
async fn sync(
    store: &mut WatchStore,
    rx: &mut mpsc::UnboundedReceiver<WatchEvent>,
    targets: &[WatchTarget],
) -> Result<()> {
    let deadline = tokio::time::Instant::now() + SYNC_TIMEOUT;
    let settled = |store: &WatchStore| {
        targets.iter().all(|t| {
            let snapshot = store.snapshot(t);
            snapshot.loaded || snapshot.error.is_some()
        })
    };

    while !settled(store) {
        match tokio::time::timeout_at(deadline, rx.recv()).await {
            Ok(Some(event)) => store.apply(event),
            Ok(None) => bail!("Watch channel closed before the initial sync"),
            Err(_) => bail!("Timed out after {:?} waiting for the initial sync", SYNC_TIMEOUT),
        }
    }
    Ok(())
}

/// Print a tab as a plain table
pub async fn list(
    client: Client,
    tab: DashboardTab,
    namespace: Option<String>,
    read_only: bool,
) -> Result<()> {
    let (mut watcher, mut rx) = ResourceWatcher::new(client);
    let targets = WatchTarget::for_tab(tab, namespace.as_deref());
    for target in &targets {
        watcher.watch(target.clone())?;
    }

    let mut store = WatchStore::new();
    sync(&mut store, &mut rx, &targets).await?;
    watcher.stop();

    let view = merge_tab(&store, tab, namespace.as_deref());
    if let Some(error) = view.error {
        bail!("Failed to list {}: {}", tab, error);
    }
    if view.rows.is_empty() {
        println!("{}", tab.empty_state_title());
        println!("{}", tab.empty_state_body());
        return Ok(());
    }

    print!("{}", render_text_table(tab, &build_rows(tab, &view.rows, read_only)));
    Ok(())
}

/// Resolve a path and load the addressed resource through a single-item watch
async fn load(client: Client, path: &str, fallback_namespace: &str) -> Result<(ResourceAddress, WatchedResource)> {
    let address = resolve(path, fallback_namespace)?;
    let target = address.watch_target();

    let (mut watcher, mut rx) = ResourceWatcher::new(client);
    watcher.watch(target.clone())?;
    let mut store = WatchStore::new();
    sync(&mut store, &mut rx, std::slice::from_ref(&target)).await?;
    watcher.stop();

    match InspectState::from_snapshot(&address, &store.snapshot(&target)) {
        InspectState::Found(resource) => Ok((address, *resource)),
        InspectState::NotFound => bail!("{}", address.not_found_message()),
        InspectState::Failed(error) => bail!("Error loading resource: {}", error),
        InspectState::Loading => bail!("{} is still loading", address),
    }
}

pub async fn inspect(client: Client, path: &str, fallback_namespace: &str) -> Result<()> {
    let (address, resource) = load(client, path, fallback_namespace).await?;
    print!("{}", InspectDetail::build(&address, &resource).to_text());
    Ok(())
}

pub async fn delete(
    client: Client,
    path: &str,
    fallback_namespace: &str,
    yes: bool,
    read_only: bool,
) -> Result<()> {
    if read_only {
        bail!("Delete is disabled in read-only mode");
    }

    let (address, resource) = load(client.clone(), path, fallback_namespace).await?;
    let mut controller = ActionController::new();
    controller.request_delete(address.kind, resource)?;

    if !yes {
        let prompt = controller.delete_state().prompt().unwrap_or_default();
        print!("{}\n{} (y/N) ", prompt, DELETE_WARNING);
        std::io::stdout().flush().context("Failed to flush stdout")?;

        let mut answer = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read confirmation")?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            controller.cancel_delete();
            println!("Cancelled");
            return Ok(());
        }
    }

    controller.confirm_delete(&KubeDeleter::new(client)).await?;
    if let Some(message) = controller.delete_state().error_message() {
        bail!("{}", message);
    }
    println!("Deleted {}", address);
    Ok(())
}
