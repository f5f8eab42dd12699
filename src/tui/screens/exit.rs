//! 退出确认渲染

use crate::tui::components::centered_rect;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
};
use rust_i18n::t;

/// 渲染退出确认
pub fn draw(frame: &mut Frame, area: Rect) {
    let dialog = centered_rect(area.width.min(50), 5, area);
    let confirm_text = Paragraph::new(t!("exit_confirm"))
        .style(theme().warning())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().warning()),
        );
    frame.render_widget(Clear, dialog);
    frame.render_widget(confirm_text, dialog);
}
