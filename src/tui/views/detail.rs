//! Inspect page rendering

use crate::error::ResolveError;
use crate::routing::{InspectDetail, InspectState, ResourceAddress};
use crate::tui::theme::Theme;
use crate::tui::views::helpers::{render_empty_state, render_error_banner, render_loading_state};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the inspect page of a resolved address
pub fn render_inspect(
    f: &mut Frame,
    area: Rect,
    address: &ResourceAddress,
    state: &InspectState,
    scroll: usize,
    theme: &Theme,
) {
    let title = address.page_title();
    match state {
        InspectState::Loading => {
            render_loading_state(f, area, &title, &format!("Loading {}...", address), theme)
        }
        InspectState::Failed(error) => render_error_banner(f, area, &title, &error.message, theme),
        InspectState::NotFound => render_empty_state(
            f,
            area,
            &title,
            &address.not_found_message(),
            "Press Esc to go back.",
            theme,
        ),
        InspectState::Found(resource) => {
            let detail = InspectDetail::build(address, resource);
            render_detail(f, area, &detail, scroll, theme);
        }
    }
}

/// Render the error page of a path that did not resolve
pub fn render_invalid_path(f: &mut Frame, area: Rect, error: &ResolveError, theme: &Theme) {
    render_error_banner(f, area, "Inspect", &error.to_string(), theme);
}

fn render_detail(f: &mut Frame, area: Rect, detail: &InspectDetail, scroll: usize, theme: &Theme) {
    let section_style = Style::default()
        .fg(theme.text_label)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for section in &detail.sections {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(section.title, section_style)));
        lines.extend(
            section
                .lines
                .iter()
                .map(|l| Line::from(format!("  {}", l))),
        );
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(detail.title.as_str()),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, area);
}
