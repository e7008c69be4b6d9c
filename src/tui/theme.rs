//! Theme and styling definitions
//!
//! Centralized color and style definitions for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::status::Severity;

/// Theme configuration for the TUI
pub struct Theme {
    // Header colors
    pub header_context: Color,
    pub header_namespace: Color,
    pub header_namespace_all: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Status colors, one per severity
    pub status_success: Color,
    pub status_info: Color,
    pub status_warning: Color,
    pub status_danger: Color,

    // Table colors
    pub table_header: Color,
    pub table_selected: Color,
    pub table_selected_bg: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_label: Color,

    // Dialog colors
    pub operation_error: Color,
    pub operation_warning: Color,
    pub operation_confirm: Color,
    pub operation_cancel: Color,

    // Footer colors
    pub footer_key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            header_context: Color::Yellow,
            header_namespace: Color::Yellow,
            header_namespace_all: Color::Green,
            tab_active: Color::Cyan,
            tab_inactive: Color::Gray,

            status_success: Color::Green,
            status_info: Color::Blue,
            status_warning: Color::Yellow,
            status_danger: Color::Red,

            table_header: Color::Cyan,
            table_selected: Color::Blue,
            table_selected_bg: Color::DarkGray,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_label: Color::Cyan,

            operation_error: Color::Red,
            operation_warning: Color::Yellow,
            operation_confirm: Color::Green,
            operation_cancel: Color::Red,

            footer_key: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn header_context_style(&self) -> Style {
        Style::default()
            .fg(self.header_context)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_namespace_style(&self, is_all: bool) -> Style {
        Style::default()
            .fg(if is_all {
                self.header_namespace_all
            } else {
                self.header_namespace
            })
            .add_modifier(Modifier::BOLD)
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.status_success,
            Severity::Info => self.status_info,
            Severity::Warning => self.status_warning,
            Severity::Danger => self.status_danger,
        }
    }

    pub fn severity_style(&self, severity: Severity) -> Style {
        Style::default().fg(self.severity_color(severity))
    }

    pub fn table_header_style(&self) -> Style {
        Style::default()
            .fg(self.table_header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_selected_style(&self) -> Style {
        Style::default()
            .fg(self.table_selected)
            .bg(self.table_selected_bg)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default().fg(self.footer_key)
    }

    pub fn operation_error_style(&self) -> Style {
        Style::default()
            .fg(self.operation_error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn operation_warning_style(&self) -> Style {
        Style::default()
            .fg(self.operation_warning)
            .add_modifier(Modifier::BOLD)
    }
}

/// Status icon for a severity; plain text when icons are disabled
pub fn severity_icon(severity: Severity, no_icons: bool) -> &'static str {
    match (severity, no_icons) {
        (Severity::Success, false) => "●",
        (Severity::Info, false) => "◐",
        (Severity::Warning, false) => "?",
        (Severity::Danger, false) => "✗",
        (Severity::Success, true) => "+",
        (Severity::Info, true) => "~",
        (Severity::Warning, true) => "?",
        (Severity::Danger, true) => "x",
    }
}
