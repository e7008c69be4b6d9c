//! Rendering logic for the application
//!
//! Lays out header, body and footer, then draws overlays (row menu and the
//! delete confirmation) on top of the body.

use super::core::App;
use super::state::{InspectPage, View};
use crate::tui::views::*;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

const HEADER_HEIGHT: u16 = 4;
const FOOTER_HEIGHT: u16 = 3;

impl App {
    /// Main render entry point
    pub fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        render_header(
            f,
            chunks[0],
            &self.settings.context,
            self.settings.namespace.as_deref(),
            self.settings.read_only,
            self.view_state.tab,
            &self.theme,
        );

        match self.view_state.current_view {
            View::ResourceList => self.render_list(f, chunks[1]),
            View::Inspect => self.render_inspect_page(f, chunks[1]),
        }

        render_footer(
            f,
            chunks[2],
            self.view_state.current_view,
            self.settings.read_only,
            self.status_message.as_ref(),
            &self.theme,
        );

        let area = f.area();
        render_delete_confirmation(f, area, self.controller.delete_state(), &self.theme);
    }

    fn render_list(&mut self, f: &mut Frame, area: ratatui::layout::Rect) {
        let tab = self.view_state.tab;
        let view = self.merged(tab);
        let rows = crate::fields::build_rows(tab, &view.rows, self.settings.read_only);

        // Rows can vanish under the cursor between frames
        if !rows.is_empty() && self.view_state.selected_index >= rows.len() {
            self.view_state.selected_index = rows.len() - 1;
        }

        render_resource_table(
            f,
            area,
            tab,
            &view,
            &rows,
            self.view_state.selected_index,
            &mut self.view_state.scroll_offset,
            &self.theme,
            self.settings.no_icons,
        );

        if let Some(row) = rows.get(self.view_state.selected_index) {
            if self.controller.is_menu_open(&row.key) {
                render_row_menu(
                    f,
                    area,
                    self.view_state
                        .selected_index
                        .saturating_sub(self.view_state.scroll_offset),
                    &row.actions,
                    self.view_state.menu_index,
                    &self.theme,
                );
            }
        }
    }

    fn render_inspect_page(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        match self.inspect.as_ref() {
            Some(InspectPage::Resolved(address)) => {
                if let Some(state) = self.inspect_state() {
                    render_inspect(
                        f,
                        area,
                        address,
                        &state,
                        self.view_state.detail_scroll,
                        &self.theme,
                    );
                }
            }
            Some(InspectPage::Invalid(error)) => render_invalid_path(f, area, error, &self.theme),
            None => {}
        }
    }
}
