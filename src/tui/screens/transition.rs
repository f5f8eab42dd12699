//! 过渡步骤渲染

use crate::steps::TransitionCopy;
use crate::tui::components::{render_hint, render_step_gauge, render_title_block, wrap_lines};
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};
use rust_i18n::t;

/// 渲染过渡步骤
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    copy: &TransitionCopy,
    position: usize,
    total: usize,
) {
    let [header, gauge, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(area);

    render_title_block(&t!("questionnaire_title"), frame, header);
    render_step_gauge(position, total, frame, gauge);

    let [_, content, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .areas(body);

    let width = content.width.saturating_sub(4) as usize;
    let mut lines = vec![
        Line::from(copy.icon).centered(),
        Line::from(""),
        theme().centered_title(copy.title()),
        Line::from(""),
    ];
    lines.extend(
        wrap_lines(&copy.description(), width)
            .into_iter()
            .map(|line| line.centered().style(theme().hint())),
    );
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), content);

    render_hint(&t!("transition_hint"), frame, footer);
}
