//! 欢迎界面渲染

use crate::tui::components::{render_hint, render_title_block, three_panel_layout, wrap_lines};
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use rust_i18n::t;

/// 渲染欢迎界面
pub fn draw(frame: &mut Frame, area: Rect) {
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("welcome_title"), frame, header);

    let [_, content, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Fill(1),
    ])
    .areas(body);

    let width = content.width.saturating_sub(4) as usize;
    let mut lines = vec![
        Line::from("💪").centered(),
        Line::from(""),
        theme().centered_title(t!("welcome_heading").to_string()),
        Line::from(""),
    ];
    lines.extend(
        wrap_lines(&t!("welcome_description"), width)
            .into_iter()
            .map(|line| line.centered().style(theme().hint())),
    );

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);

    render_hint(&t!("welcome_hint"), frame, footer);
}
