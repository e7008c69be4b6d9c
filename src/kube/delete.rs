//! Delete collaborator backed by the Kubernetes API

use kube::api::{Api, DeleteParams};
use kube::core::DynamicObject;
use kube::Client;

use super::api_resource;
use crate::error::DeleteFailure;
use crate::models::{ModelDescriptor, WatchedResource};
use crate::workflow::ResourceDeleter;

#[derive(Clone)]
pub struct KubeDeleter {
    client: Client,
}

impl KubeDeleter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ResourceDeleter for KubeDeleter {
    async fn delete(
        &self,
        model: &ModelDescriptor,
        resource: &WatchedResource,
    ) -> Result<(), DeleteFailure> {
        let ar = api_resource(model);
        let name = resource.name();

        let api: Api<DynamicObject> = if model.namespaced {
            let Some(ns) = resource.namespace().filter(|ns| !ns.is_empty()) else {
                return Err(DeleteFailure::new(format!(
                    "{} \"{}\" has no namespace",
                    model.label, name
                )));
            };
            Api::namespaced_with(self.client.clone(), ns, &ar)
        } else {
            Api::all_with(self.client.clone(), &ar)
        };

        tracing::debug!("Deleting {} {}", model.kind, name);
        api.delete(name, &DeleteParams::default())
            .await
            .map(|_| ())
            .map_err(|e| match e {
                kube::Error::Api(status) => DeleteFailure::new(status.message.clone()),
                other => DeleteFailure::new(other.to_string()),
            })
    }
}
