//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and maps the dashboard's
//! kind descriptors onto dynamic API resources.
//!
//! HTTP/HTTPS proxies are honored through the standard `HTTP_PROXY`,
//! `HTTPS_PROXY` and `NO_PROXY` environment variables.

mod delete;

pub use delete::KubeDeleter;

use anyhow::{Context, Result};
use kube::config::Kubeconfig;
use kube::core::{ApiResource, GroupVersionKind};
use kube::{Client, Config};

use crate::models::ModelDescriptor;

/// Namespace value meaning "watch every namespace"
pub const ALL_NAMESPACES: &str = "all";

/// Initialize and return a Kubernetes client
///
/// Uses the default kubeconfig loading strategy:
/// 1. KUBECONFIG environment variable
/// 2. ~/.kube/config
/// 3. In-cluster config (if running in a pod)
pub async fn create_client() -> Result<Client> {
    let config = Config::infer()
        .await
        .context("Failed to infer Kubernetes configuration")?;
    tracing::debug!("Connecting to {}", config.cluster_url);
    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    Ok(client)
}

/// Get the current Kubernetes context name
pub async fn get_context() -> Result<String> {
    match Kubeconfig::read() {
        Ok(kubeconfig) => Ok(kubeconfig
            .current_context
            .unwrap_or_else(|| "default".to_string())),
        Err(e) => {
            // No kubeconfig: only valid when running inside a pod
            tracing::debug!("No kubeconfig available: {}", e);
            Config::incluster().context("No kubeconfig found and not running in a cluster")?;
            Ok("in-cluster".to_string())
        }
    }
}

/// Map a configured namespace to a watch scope; `None` watches all namespaces
pub fn resolve_namespace(configured: &str) -> Option<String> {
    let ns = configured.trim();
    if ns.is_empty() || ns == ALL_NAMESPACES || ns == "-A" {
        None
    } else {
        Some(ns.to_string())
    }
}

/// Dynamic API resource for a model
pub fn api_resource(model: &ModelDescriptor) -> ApiResource {
    ApiResource::from_gvk_with_plural(
        &GroupVersionKind::gvk(&model.group, &model.version, &model.kind),
        &model.plural,
    )
}
