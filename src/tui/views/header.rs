//! Header view rendering

use crate::models::DashboardTab;
use crate::tui::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the header: context and namespace on the first line, tab bar on the second
pub fn render_header(
    f: &mut Frame,
    area: Rect,
    context: &str,
    namespace: Option<&str>,
    read_only: bool,
    current_tab: DashboardTab,
    theme: &Theme,
) {
    let mut info = vec![
        Span::styled("Context: ", Style::default().fg(theme.text_label)),
        Span::styled(context.to_string(), theme.header_context_style()),
        Span::raw("  "),
        Span::styled("Namespace: ", Style::default().fg(theme.text_label)),
        Span::styled(
            namespace.unwrap_or("all").to_string(),
            theme.header_namespace_style(namespace.is_none()),
        ),
    ];
    if read_only {
        info.push(Span::raw("  "));
        info.push(Span::styled("[read-only]", theme.operation_warning_style()));
    }

    let mut tabs = Vec::new();
    for (idx, tab) in DashboardTab::all().iter().enumerate() {
        if idx > 0 {
            tabs.push(Span::raw(" | "));
        }
        let label = format!("{} {}", idx + 1, tab.title());
        let style = if *tab == current_tab {
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.tab_inactive)
        };
        tabs.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(vec![Line::from(info), Line::from(tabs)])
        .block(Block::default().borders(Borders::ALL).title("secrets9s"));
    f.render_widget(paragraph, area);
}
