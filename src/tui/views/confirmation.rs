//! Delete confirmation dialog rendering

use crate::tui::theme::Theme;
use crate::tui::views::helpers::centered_rect;
use crate::workflow::{DeleteWorkflowState, DELETE_WARNING};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Render the confirmation dialog over `area`; does nothing when it is closed
pub fn render_delete_confirmation(
    f: &mut Frame,
    area: Rect,
    state: &DeleteWorkflowState,
    theme: &Theme,
) {
    let Some(prompt) = state.prompt() else {
        return;
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("⚠ ", theme.operation_warning_style()),
            Span::styled("CONFIRM DELETE", theme.operation_warning_style()),
        ]),
        Line::from(""),
        Line::from(prompt),
        Line::from(DELETE_WARNING),
        Line::from(""),
    ];

    if let Some(error) = state.error_message() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            theme.operation_error_style(),
        )));
        lines.push(Line::from(""));
    }

    if state.is_deleting() {
        lines.push(Line::from(Span::styled(
            "Deleting...",
            Style::default().fg(theme.text_secondary),
        )));
    } else {
        let confirm = Style::default()
            .fg(theme.operation_confirm)
            .add_modifier(Modifier::BOLD);
        let cancel = Style::default()
            .fg(theme.operation_cancel)
            .add_modifier(Modifier::BOLD);
        lines.push(Line::from(vec![
            Span::raw("Press "),
            Span::styled("y", confirm),
            Span::raw(" to delete, "),
            Span::styled("n", cancel),
            Span::raw(" or "),
            Span::styled("Esc", cancel),
            Span::raw(" to cancel"),
        ]));
    }

    let height = lines.len() as u16 + 2;
    let popup = centered_rect(area.width.saturating_mul(3) / 5, height, area);

    let block = Block::default()
        .title("Delete")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.operation_warning));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
