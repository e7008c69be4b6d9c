//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::core::App;
use super::state::{PendingNavigation, View};
use crate::fields::RowAction;
use crate::models::{DashboardTab, RowKey};

impl App {
    /// Handle a key press; returns `Some(true)` when the app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<bool> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(true);
        }

        // The confirmation dialog is modal
        if self.controller.delete_state().is_open() {
            self.handle_confirmation_key(key);
            return None;
        }

        match self.view_state.current_view {
            View::Inspect => self.handle_inspect_key(key),
            View::ResourceList => self.handle_list_key(key),
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                if self.controller.delete_state().is_deleting() {
                    return;
                }
                match self.controller.begin_delete() {
                    Ok(request) => self.async_state.delete_pending = Some(request),
                    Err(e) => tracing::warn!("{}", e),
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.controller.cancel_delete();
            }
            _ => {}
        }
    }

    fn handle_inspect_key(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Backspace => self.close_inspect(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.view_state.detail_scroll = self.view_state.detail_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.view_state.detail_scroll = self.view_state.detail_scroll.saturating_sub(1);
            }
            _ => {}
        }
        None
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<bool> {
        let selected = self.selected_row();
        let menu_open = selected
            .as_ref()
            .is_some_and(|row| self.controller.is_menu_open(&row.key));

        if menu_open {
            if let Some(row) = selected {
                self.handle_menu_key(key, &row.key, &row.actions);
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(true),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Tab | KeyCode::Right => self.select_tab(self.current_tab().next()),
            KeyCode::BackTab | KeyCode::Left => self.select_tab(self.current_tab().previous()),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = c as usize - '1' as usize;
                if let Some(tab) = DashboardTab::all().get(idx) {
                    self.select_tab(*tab);
                }
            }
            KeyCode::Enter => {
                if let Some(row) = selected {
                    self.view_state.menu_index = 0;
                    self.controller.toggle_menu(&row.key);
                }
            }
            KeyCode::Char('i') => self.run_action(RowAction::Inspect),
            KeyCode::Char('d') => {
                if self.settings.read_only {
                    self.set_status_message(("Delete is disabled in read-only mode".to_string(), true));
                } else {
                    self.run_action(RowAction::Delete);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_menu_key(&mut self, key: KeyEvent, row_key: &RowKey, actions: &[RowAction]) {
        match key.code {
            KeyCode::Esc => {
                self.controller.toggle_menu(row_key);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.view_state.menu_index =
                    (self.view_state.menu_index + 1).min(actions.len().saturating_sub(1));
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.view_state.menu_index = self.view_state.menu_index.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(action) = actions.get(self.view_state.menu_index).copied() {
                    self.run_action(action);
                }
            }
            _ => {}
        }
    }

    /// Run a row action on the selected row through the controller
    fn run_action(&mut self, action: RowAction) {
        let tab = self.current_tab();
        let index = self.view_state.selected_index;
        let Some(row) = self.merged(tab).rows.into_iter().nth(index) else {
            return;
        };

        let mut nav = PendingNavigation::default();
        if let Err(e) = self
            .controller
            .select_menu_item(action, row.kind, &row.resource, &mut nav)
        {
            self.set_status_message((e.to_string(), true));
        }
        self.view_state.menu_index = 0;

        if let Some(path) = nav.0 {
            self.open_path(&path);
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        let current = self.view_state.selected_index.min(len - 1);
        let next = current.saturating_add_signed(delta).min(len - 1);
        if next != current {
            self.close_selected_menu();
        }
        self.view_state.selected_index = next;
        self.status_message = None;
    }
}
