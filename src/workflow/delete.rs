//! Delete confirmation state machine
//!
//! `Idle -> Confirming -> Deleting -> Idle` on success; a failed delete goes
//! back to `Confirming` with the error attached and the target kept, so the
//! operator can retry or cancel.

use crate::error::{DeleteFailure, WorkflowError};
use crate::models::{ModelDescriptor, ResourceKind, RowKey, WatchedResource};

/// The delete collaborator
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ResourceDeleter: Send + Sync {
    /// Delete `resource` using the API coordinates in `model`
    async fn delete(
        &self,
        model: &ModelDescriptor,
        resource: &WatchedResource,
    ) -> Result<(), DeleteFailure>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Idle,
    Confirming,
    Deleting,
}

/// The resource a delete is staged for
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTarget {
    pub kind: ResourceKind,
    pub resource: WatchedResource,
}

impl DeleteTarget {
    pub fn new(kind: ResourceKind, resource: WatchedResource) -> Self {
        Self { kind, resource }
    }

    pub fn key(&self) -> RowKey {
        RowKey::of(self.kind, &self.resource)
    }

    /// Model for the variant matching the resource's own scope
    pub fn model(&self) -> ModelDescriptor {
        ModelDescriptor::for_resource(self.kind, &self.resource)
    }
}

/// What to hand the delete collaborator
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    pub model: ModelDescriptor,
    pub resource: WatchedResource,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteWorkflowState {
    phase: DeletePhase,
    target: Option<DeleteTarget>,
    error_message: Option<String>,
}

impl DeleteWorkflowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DeletePhase {
        self.phase
    }

    pub fn target(&self) -> Option<&DeleteTarget> {
        self.target.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether the confirmation surface should be shown
    pub fn is_open(&self) -> bool {
        self.phase != DeletePhase::Idle
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == DeletePhase::Deleting
    }

    /// A delete was attempted and failed; the prompt stays open for retry
    pub fn is_failed(&self) -> bool {
        self.phase == DeletePhase::Confirming && self.error_message.is_some()
    }

    /// Confirmation question for the current target
    pub fn prompt(&self) -> Option<String> {
        self.target.as_ref().map(|t| {
            format!(
                "Are you sure you want to delete the {} \"{}\"?",
                t.model().label,
                t.resource.name()
            )
        })
    }

    pub fn request(&mut self, target: DeleteTarget) -> Result<(), WorkflowError> {
        let same_target = self
            .target
            .as_ref()
            .is_some_and(|current| current.key() == target.key());

        match self.phase {
            DeletePhase::Deleting if same_target => Ok(()),
            DeletePhase::Deleting => Err(WorkflowError::Precondition(format!(
                "a delete of {} is already in flight",
                self.target
                    .as_ref()
                    .map(|t| t.key().to_string())
                    .unwrap_or_default()
            ))),
            // Re-opening the same target keeps any error on screen
            DeletePhase::Confirming if same_target => Ok(()),
            DeletePhase::Idle | DeletePhase::Confirming => {
                tracing::debug!("Delete requested for {}", target.key());
                self.phase = DeletePhase::Confirming;
                self.target = Some(target);
                self.error_message = None;
                Ok(())
            }
        }
    }

    /// `Confirming -> Deleting`
    pub fn begin(&mut self) -> Result<DeleteRequest, WorkflowError> {
        let target = match (self.phase, self.target.as_ref()) {
            (DeletePhase::Confirming, Some(target)) => target,
            (phase, _) => {
                return Err(WorkflowError::Precondition(format!(
                    "cannot confirm a delete from {:?}",
                    phase
                )))
            }
        };

        let request = DeleteRequest {
            model: target.model(),
            resource: target.resource.clone(),
        };
        self.phase = DeletePhase::Deleting;
        self.error_message = None;
        Ok(request)
    }

    /// Settle an in-flight delete
    pub fn complete(&mut self, result: Result<(), DeleteFailure>) -> Result<(), WorkflowError> {
        if self.phase != DeletePhase::Deleting {
            return Err(WorkflowError::Precondition(format!(
                "no delete in flight (phase {:?})",
                self.phase
            )));
        }

        match result {
            Ok(()) => {
                if let Some(target) = &self.target {
                    tracing::info!("Deleted {}", target.key());
                }
                self.reset();
            }
            Err(failure) => {
                let message = if failure.message.trim().is_empty() {
                    let label = self
                        .target
                        .as_ref()
                        .map(|t| t.model().label)
                        .unwrap_or_else(|| "resource".to_string());
                    format!("Failed to delete {}", label)
                } else {
                    failure.message
                };
                tracing::warn!("Delete failed: {}", message);
                self.phase = DeletePhase::Confirming;
                self.error_message = Some(message);
            }
        }
        Ok(())
    }

    /// Dismiss the prompt; ignored while a delete is in flight
    pub fn cancel(&mut self) {
        if self.phase == DeletePhase::Deleting {
            tracing::debug!("Ignoring cancel while delete is in flight");
            return;
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.phase = DeletePhase::Idle;
        self.target = None;
        self.error_message = None;
    }
}
