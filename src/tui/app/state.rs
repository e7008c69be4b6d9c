//! Application state structures

use crate::error::{DeleteFailure, ResolveError};
use crate::models::DashboardTab;
use crate::routing::ResourceAddress;
use crate::workflow::{DeleteRequest, Navigator};

/// View types for the application
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    ResourceList,
    Inspect,
}

/// List navigation state
#[derive(Debug)]
pub struct ViewState {
    pub current_view: View,
    pub tab: DashboardTab,
    pub selected_index: usize,
    pub scroll_offset: usize,
    /// Highlighted entry of the open row menu
    pub menu_index: usize,
    pub detail_scroll: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_view: View::ResourceList,
            tab: DashboardTab::Certificates,
            selected_index: 0,
            scroll_offset: 0,
            menu_index: 0,
            detail_scroll: 0,
        }
    }
}

/// What the inspect view is showing
#[derive(Debug, Clone, PartialEq)]
pub enum InspectPage {
    Resolved(ResourceAddress),
    Invalid(ResolveError),
}

/// In-flight delete bookkeeping
#[derive(Debug, Default)]
pub struct AsyncState {
    pub delete_pending: Option<DeleteRequest>,
    pub delete_rx: Option<tokio::sync::oneshot::Receiver<Result<(), DeleteFailure>>>,
}

/// Navigator that records the requested path for the app to open afterwards
#[derive(Debug, Default)]
pub struct PendingNavigation(pub Option<String>);

impl Navigator for PendingNavigation {
    fn navigate(&mut self, path: &str) {
        self.0 = Some(path.to_string());
    }
}
