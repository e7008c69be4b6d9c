//! Resource table rendering

use crate::collection::MergedView;
use crate::fields::{RowAction, RowView};
use crate::models::DashboardTab;
use crate::tui::theme::{severity_icon, Theme};
use crate::tui::views::helpers::{
    render_empty_state, render_error_banner, render_loading_state, truncate_message,
    update_scroll_offset,
};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Row, Table},
};

const SCROLL_BUFFER: usize = 2;
const MAX_CELL_WIDTH: usize = 48;

/// Render one tab's table
///
/// Shows the error banner when a constituent failed, the loading state until
/// every constituent loaded, and the tab's empty state when there are no rows.
#[allow(clippy::too_many_arguments)]
pub fn render_resource_table(
    f: &mut Frame,
    area: Rect,
    tab: DashboardTab,
    view: &MergedView,
    rows: &[RowView],
    selected_index: usize,
    scroll_offset: &mut usize,
    theme: &Theme,
    no_icons: bool,
) {
    if let Some(error) = &view.error {
        render_error_banner(
            f,
            area,
            &format!("{} - error", tab.title()),
            &error.message,
            theme,
        );
        return;
    }

    if !view.loaded {
        render_loading_state(
            f,
            area,
            tab.title(),
            &format!("Loading {}...", tab.title().to_lowercase()),
            theme,
        );
        return;
    }

    if rows.is_empty() {
        render_empty_state(
            f,
            area,
            tab.title(),
            tab.empty_state_title(),
            tab.empty_state_body(),
            theme,
        );
        return;
    }

    // Borders and header row
    let visible_height = (area.height as usize).saturating_sub(3);
    update_scroll_offset(selected_index, visible_height, scroll_offset, SCROLL_BUFFER);
    let selected = selected_index.min(rows.len() - 1);
    let status_col = tab.status_column();

    let header = Row::new(
        tab.columns()
            .iter()
            .map(|c| c.to_uppercase())
            .collect::<Vec<_>>(),
    )
    .style(theme.table_header_style());

    let table_rows: Vec<Row> = rows
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, row)| {
            let cells: Vec<Cell> = row
                .cells
                .iter()
                .enumerate()
                .map(|(col, value)| {
                    if col == status_col {
                        Cell::from(Span::styled(
                            format!(
                                "{} {}",
                                severity_icon(row.status.severity, no_icons),
                                value
                            ),
                            theme.severity_style(row.status.severity),
                        ))
                    } else {
                        Cell::from(truncate_message(value, MAX_CELL_WIDTH))
                    }
                })
                .collect();
            let style = if idx == selected {
                theme.table_selected_style()
            } else {
                Style::default()
            };
            Row::new(cells).style(style)
        })
        .collect();

    let widths = column_widths(tab, rows);
    let title = format!("{} ({})", tab.title(), rows.len());
    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(table, area);
}

/// Width of each column: the longest of header and cells, capped
fn column_widths(tab: DashboardTab, rows: &[RowView]) -> Vec<Constraint> {
    tab.columns()
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let longest = rows
                .iter()
                .filter_map(|r| r.cells.get(col))
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .min(MAX_CELL_WIDTH);
            // Icon and space in front of the status label
            let extra = if col == tab.status_column() { 2 } else { 0 };
            Constraint::Min((longest + extra) as u16)
        })
        .collect()
}

/// Render the open row menu next to the selected row
pub fn render_row_menu(
    f: &mut Frame,
    area: Rect,
    row_offset: usize,
    actions: &[RowAction],
    menu_index: usize,
    theme: &Theme,
) {
    let width = 16u16.min(area.width);
    let height = (actions.len() as u16 + 2).min(area.height);
    // Below the selected row: top border, header row, then the rows
    let y = (area.y + 2 + row_offset as u16 + 1).min(area.bottom().saturating_sub(height));
    let x = area.right().saturating_sub(width + 2).max(area.x);
    let popup = Rect::new(x, y, width, height);

    let items: Vec<ListItem> = actions
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let style = if idx == menu_index {
                theme.table_selected_style().add_modifier(Modifier::BOLD)
            } else if *action == RowAction::Delete {
                Style::default().fg(theme.operation_error)
            } else {
                Style::default().fg(theme.text_primary)
            };
            ListItem::new(Line::from(Span::styled(action.label(), style)))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Actions")
            .border_style(Style::default().fg(theme.text_label)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
}
