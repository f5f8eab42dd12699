//! Common UI components module
//!
//! Provides reusable UI components shared by the onboarding screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Gauge, Paragraph, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::{config, theme};

/// Three-panel layout: header, body, footer
pub fn three_panel_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area)
}

/// A `width` x `height` rectangle centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

/// Render a centered title block with border
pub fn render_title_block(title: &str, frame: &mut Frame, area: Rect) {
    let title_line = Line::from(format!(" {} ", title))
        .centered()
        .style(theme().title());

    let block = Block::bordered()
        .title(title_line)
        .border_type(BorderType::Rounded)
        .border_style(theme().border())
        .style(theme().normal());

    frame.render_widget(block, area);
}

/// Render bottom hint text
pub fn render_hint(hint: &str, frame: &mut Frame, area: Rect) {
    let hint_widget = Paragraph::new(hint)
        .style(theme().hint())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hint_widget, area);
}

/// Render an inline alert line, if any
pub fn render_alert(alert: Option<&str>, frame: &mut Frame, area: Rect) {
    if let Some(message) = alert {
        let widget = Paragraph::new(format!("⚠ {}", message))
            .style(theme().error())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(widget, area);
    }
}

/// Questionnaire progress bar: "3 / 13"
pub fn render_step_gauge(position: usize, total: usize, frame: &mut Frame, area: Rect) {
    let ratio = if total == 0 {
        0.0
    } else {
        (position as f64 / total as f64).clamp(0.0, 1.0)
    };
    let gauge = Gauge::default()
        .gauge_style(theme().progress())
        .ratio(ratio)
        .label(format!("{} / {}", position, total));
    frame.render_widget(gauge, area);
}

/// One option row: marker plus label
pub fn option_row(label: &str, chosen: bool, multi: bool) -> String {
    let marker = match (multi, chosen) {
        (true, true) => config::CHECKED,
        (true, false) => config::UNCHECKED,
        (false, true) => config::RADIO_ON,
        (false, false) => config::RADIO_OFF,
    };
    format!("{} {}", marker, label)
}

/// 按显示宽度截断文本，避免 UTF-8 边界问题
pub fn truncate_value(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let target_width = max_width.saturating_sub(3);
    let mut current_width = 0;
    let mut output = String::new();

    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > target_width {
            break;
        }
        output.push(ch);
        current_width += ch_width;
    }

    output.push_str("...");
    output
}

/// 按显示宽度换行
pub fn wrap_lines(value: &str, max_width: usize) -> Vec<Line<'static>> {
    if max_width == 0 {
        return vec![Line::from(String::new())];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in value.chars() {
        if ch == '\n' {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
            continue;
        }

        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            lines.push(Line::from(current));
            current = String::new();
            current_width = 0;
        }

        current.push(ch);
        current_width += ch_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_value("short", 10), "short");
        assert_eq!(truncate_value("体型分析报告示例", 9), "体型分...");
    }

    #[test]
    fn test_wrap_lines() {
        let lines = wrap_lines("abcdef\ngh", 4);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_option_row_markers() {
        assert_eq!(option_row("Yoga", true, true), "[x] Yoga");
        assert_eq!(option_row("Male", false, false), "( ) Male");
    }

    #[test]
    fn test_centered_rect() {
        let rect = centered_rect(10, 4, Rect::new(0, 0, 30, 12));
        assert_eq!(rect, Rect::new(10, 4, 10, 4));
    }
}
