//! 分析中界面渲染

use crate::tui::components::{centered_rect, render_hint, render_title_block, three_panel_layout};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    widgets::{Block, BorderType, Gauge, Paragraph},
};
use rust_i18n::t;

/// 动画帧
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// 渲染分析进度
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("analysis_title"), frame, header);

    let content = centered_rect(body.width.min(60), 7, body);
    let [message, gauge_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(content);

    let ratio = state.flow.analysis_progress();
    let frame_index = (ratio * 40.0) as usize % SPINNER.len();
    frame.render_widget(
        Paragraph::new(format!("{} {}", SPINNER[frame_index], t!("analysis_message")))
            .style(theme().accent())
            .alignment(Alignment::Center),
        message,
    );

    let gauge = Gauge::default()
        .block(
            Block::bordered()
                .title(format!(" {} ", t!("analysis_progress")))
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .gauge_style(theme().progress())
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{:.0}%", ratio * 100.0));
    frame.render_widget(gauge, gauge_area);

    render_hint(&t!("analysis_hint"), frame, footer);
}
