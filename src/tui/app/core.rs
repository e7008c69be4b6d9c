//! Core App structure and initialization

use std::sync::Arc;

use super::state::{AsyncState, InspectPage, View, ViewState};
use crate::collection::{merge_tab, MergedView};
use crate::fields::{build_rows, RowView};
use crate::models::DashboardTab;
use crate::routing::{resolve, InspectState};
use crate::tui::Theme;
use crate::watcher::{ResourceWatcher, WatchEvent, WatchStore, WatchTarget};
use crate::workflow::{ActionController, ResourceDeleter};

/// Settings fixed for the lifetime of the app
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub context: String,
    /// `None` watches all namespaces
    pub namespace: Option<String>,
    /// Namespace assumed for inspect paths without one
    pub fallback_namespace: String,
    pub read_only: bool,
    pub no_icons: bool,
}

pub struct App {
    pub(super) settings: AppSettings,
    pub(super) theme: Theme,
    pub(super) store: WatchStore,
    pub(super) controller: ActionController,
    pub(super) view_state: ViewState,
    pub(super) inspect: Option<InspectPage>,
    pub(super) async_state: AsyncState,
    pub(super) watcher: Option<ResourceWatcher>,
    pub(super) deleter: Option<Arc<dyn ResourceDeleter>>,
    pub(super) status_message: Option<(String, bool)>,
}

impl App {
    pub fn new(settings: AppSettings, theme: Theme) -> Self {
        Self {
            settings,
            theme,
            store: WatchStore::new(),
            controller: ActionController::new(),
            view_state: ViewState::default(),
            inspect: None,
            async_state: AsyncState::default(),
            watcher: None,
            deleter: None,
            status_message: None,
        }
    }

    pub fn set_watcher(&mut self, watcher: ResourceWatcher) {
        self.watcher = Some(watcher);
    }

    pub fn set_deleter(&mut self, deleter: Arc<dyn ResourceDeleter>) {
        self.deleter = Some(deleter);
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn controller(&self) -> &ActionController {
        &self.controller
    }

    pub fn current_view(&self) -> View {
        self.view_state.current_view
    }

    pub fn current_tab(&self) -> DashboardTab {
        self.view_state.tab
    }

    pub fn selected_index(&self) -> usize {
        self.view_state.selected_index
    }

    pub fn status_message(&self) -> Option<&(String, bool)> {
        self.status_message.as_ref()
    }

    pub fn set_status_message(&mut self, message: (String, bool)) {
        self.status_message = Some(message);
    }

    /// Fold one watch event into the store
    ///
    /// Single-object events are kept only for the open inspect page. A stopped
    /// watch can still have events queued on the channel.
    pub fn apply_watch_event(&mut self, event: WatchEvent) {
        let target = event.target();
        if target.name.is_some() && self.inspect_target().as_ref() != Some(target) {
            tracing::trace!("Ignoring event for inactive watch {}", target);
            return;
        }
        self.store.apply(event);
    }

    fn inspect_target(&self) -> Option<WatchTarget> {
        match self.inspect.as_ref()? {
            InspectPage::Resolved(address) => Some(address.watch_target()),
            InspectPage::Invalid(_) => None,
        }
    }

    /// Merged view of a tab
    pub fn merged(&self, tab: DashboardTab) -> MergedView {
        merge_tab(&self.store, tab, self.settings.namespace.as_deref())
    }

    /// Rows of the current tab
    pub fn rows(&self) -> Vec<RowView> {
        let tab = self.current_tab();
        build_rows(tab, &self.merged(tab).rows, self.settings.read_only)
    }

    pub fn selected_row(&self) -> Option<RowView> {
        self.rows().into_iter().nth(self.view_state.selected_index)
    }

    pub fn select_tab(&mut self, tab: DashboardTab) {
        if tab != self.view_state.tab {
            self.close_selected_menu();
            self.view_state.tab = tab;
            self.view_state.selected_index = 0;
            self.view_state.scroll_offset = 0;
        }
    }

    pub(super) fn close_selected_menu(&mut self) {
        if let Some(row) = self.selected_row() {
            self.controller.close_menu(&row.key);
        }
        self.view_state.menu_index = 0;
    }

    /// Open an inspect path, starting a single-item watch for it
    pub fn open_path(&mut self, path: &str) {
        self.drop_inspect_watch();
        self.view_state.current_view = View::Inspect;
        self.view_state.detail_scroll = 0;

        let page = match resolve(path, &self.settings.fallback_namespace) {
            Ok(address) => {
                if let Some(watcher) = self.watcher.as_mut() {
                    if let Err(e) = watcher.watch(address.watch_target()) {
                        tracing::warn!("Failed to watch {}: {}", address, e);
                    }
                }
                InspectPage::Resolved(address)
            }
            Err(e) => {
                tracing::debug!("Cannot open {}: {}", path, e);
                InspectPage::Invalid(e)
            }
        };
        self.inspect = Some(page);
    }

    /// Leave the inspect view and drop its watch
    pub fn close_inspect(&mut self) {
        self.drop_inspect_watch();
        self.view_state.current_view = View::ResourceList;
    }

    fn drop_inspect_watch(&mut self) {
        if let Some(InspectPage::Resolved(address)) = self.inspect.take() {
            let target = address.watch_target();
            if let Some(watcher) = self.watcher.as_mut() {
                watcher.unwatch(&target);
            }
            self.store.forget(&target);
        }
    }

    pub fn inspect_page(&self) -> Option<&InspectPage> {
        self.inspect.as_ref()
    }

    /// State of the resolved inspect page
    pub fn inspect_state(&self) -> Option<InspectState> {
        match self.inspect.as_ref()? {
            InspectPage::Resolved(address) => Some(InspectState::from_snapshot(
                address,
                &self.store.snapshot(&address.watch_target()),
            )),
            InspectPage::Invalid(_) => None,
        }
    }
}
