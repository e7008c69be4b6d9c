//! Async operation management
//!
//! The delete call runs on a spawned task; its result comes back over a
//! oneshot channel polled by the main loop.

use std::sync::Arc;

use super::core::App;
use crate::error::DeleteFailure;
use crate::workflow::{DeleteRequest, ResourceDeleter};

/// A delete ready to be spawned
pub struct DeleteJob {
    pub request: DeleteRequest,
    pub deleter: Arc<dyn ResourceDeleter>,
    pub tx: tokio::sync::oneshot::Sender<Result<(), DeleteFailure>>,
}

impl App {
    /// Trigger the delete if one was confirmed
    pub fn trigger_delete(&mut self) -> Option<DeleteJob> {
        if self.async_state.delete_pending.is_none() {
            return None;
        }

        let Some(deleter) = self.deleter.clone() else {
            // Settle right away so the dialog does not hang in flight
            self.async_state.delete_pending = None;
            self.complete_delete(Err(DeleteFailure::new("No delete backend configured")));
            return None;
        };

        let request = self.async_state.delete_pending.take()?;
        let (tx, rx) = tokio::sync::oneshot::channel();
        self.async_state.delete_rx = Some(rx);
        Some(DeleteJob {
            request,
            deleter,
            tx,
        })
    }

    /// Try to get the delete result
    pub fn try_get_delete_result(&mut self) -> Option<Result<(), DeleteFailure>> {
        let rx = self.async_state.delete_rx.as_mut()?;
        match rx.try_recv() {
            Ok(result) => {
                self.async_state.delete_rx = None;
                Some(result)
            }
            Err(tokio::sync::oneshot::error::TryRecvError::Empty) => None,
            Err(_) => {
                self.async_state.delete_rx = None;
                Some(Err(DeleteFailure::new("Delete task ended without a result")))
            }
        }
    }

    /// Settle the in-flight delete
    pub fn complete_delete(&mut self, result: Result<(), DeleteFailure>) {
        let target = self
            .controller
            .delete_state()
            .target()
            .map(|t| t.resource.name().to_string());
        let succeeded = result.is_ok();

        if let Err(e) = self.controller.complete_delete(result) {
            tracing::warn!("{}", e);
            return;
        }
        if succeeded {
            if let Some(name) = target {
                self.set_status_message((format!("Deleted {}", name), false));
            }
        }
    }
}
