//! Action workflow controller
//!
//! Owns the per-row menu flags and the single delete confirmation of one
//! table. Every method performs one state transition; the only suspension
//! point is the delete collaborator call inside `confirm_delete`.

mod delete;
mod menu;

pub use delete::*;
pub use menu::*;

use crate::error::{DeleteFailure, WorkflowError};
use crate::fields::RowAction;
use crate::models::{ResourceKind, RowKey, WatchedResource};
use crate::routing::ResourceAddress;

pub const DELETE_WARNING: &str = "This action cannot be undone.";

/// Navigation collaborator
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

#[derive(Debug, Default)]
pub struct ActionController {
    menus: MenuState,
    delete: DeleteWorkflowState,
}

impl ActionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self, key: &RowKey) {
        self.menus.toggle(key);
    }

    pub fn close_menu(&mut self, key: &RowKey) {
        self.menus.close(key);
    }

    pub fn is_menu_open(&self, key: &RowKey) -> bool {
        self.menus.is_open(key)
    }

    /// Close the row's menu and run the chosen action
    pub fn select_menu_item(
        &mut self,
        action: RowAction,
        kind: ResourceKind,
        resource: &WatchedResource,
        navigator: &mut dyn Navigator,
    ) -> Result<(), WorkflowError> {
        self.menus.close(&RowKey::of(kind, resource));
        match action {
            RowAction::Inspect => {
                self.inspect(kind, resource, navigator);
                Ok(())
            }
            RowAction::Delete => self.request_delete(kind, resource.clone()),
        }
    }

    /// Navigate to the resource's inspect page
    pub fn inspect(&self, kind: ResourceKind, resource: &WatchedResource, navigator: &mut dyn Navigator) {
        let path = ResourceAddress::of(kind, resource).inspect_path();
        tracing::debug!("Navigating to {}", path);
        navigator.navigate(&path);
    }

    pub fn request_delete(
        &mut self,
        kind: ResourceKind,
        resource: WatchedResource,
    ) -> Result<(), WorkflowError> {
        self.delete.request(DeleteTarget::new(kind, resource))
    }

    /// First half of `confirm_delete`, for callers that run the delete elsewhere
    pub fn begin_delete(&mut self) -> Result<DeleteRequest, WorkflowError> {
        self.delete.begin()
    }

    /// Second half of `confirm_delete`
    pub fn complete_delete(&mut self, result: Result<(), DeleteFailure>) -> Result<(), WorkflowError> {
        self.delete.complete(result)
    }

    /// Run the staged delete through the collaborator and settle the outcome
    pub async fn confirm_delete(&mut self, deleter: &dyn ResourceDeleter) -> Result<(), WorkflowError> {
        let request = self.begin_delete()?;
        let result = deleter.delete(&request.model, &request.resource).await;
        self.complete_delete(result)
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    pub fn delete_state(&self) -> &DeleteWorkflowState {
        &self.delete
    }
}
