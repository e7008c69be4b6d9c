//! Footer view rendering

use crate::tui::app::state::View;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the footer: the status message if one is set, key hints otherwise
pub fn render_footer(
    f: &mut Frame,
    area: Rect,
    view: View,
    read_only: bool,
    status_message: Option<&(String, bool)>,
    theme: &Theme,
) {
    let spans = if let Some((msg, is_error)) = status_message {
        let style = if *is_error {
            theme.operation_error_style()
        } else {
            Style::default().fg(theme.status_success)
        };
        vec![Span::styled(msg.clone(), style)]
    } else {
        let hints: &[(&str, &str)] = match (view, read_only) {
            (View::Inspect, _) => &[("j/k", "scroll"), ("Esc", "back"), ("Ctrl-C", "quit")],
            (View::ResourceList, true) => &[
                ("j/k", "move"),
                ("Tab", "next tab"),
                ("Enter", "actions"),
                ("i", "inspect"),
                ("q", "quit"),
            ],
            (View::ResourceList, false) => &[
                ("j/k", "move"),
                ("Tab", "next tab"),
                ("Enter", "actions"),
                ("i", "inspect"),
                ("d", "delete"),
                ("q", "quit"),
            ],
        };
        hints
            .iter()
            .enumerate()
            .flat_map(|(idx, (key, desc))| {
                let mut parts = Vec::new();
                if idx > 0 {
                    parts.push(Span::raw("  "));
                }
                parts.push(Span::styled(key.to_string(), theme.footer_key_style()));
                parts.push(Span::raw(format!(" {}", desc)));
                parts
            })
            .collect()
    };

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}
