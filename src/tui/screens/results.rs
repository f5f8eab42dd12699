//! 分析结果渲染

use crate::tui::components::{render_hint, render_title_block, three_panel_layout, wrap_lines};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Gauge, Paragraph},
};
use rust_i18n::t;

/// 渲染分析结果
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);
    let report = &state.report;

    render_title_block(&t!("results_title"), frame, header);

    let [score_area, details_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(3)]).areas(body);

    let gauge = Gauge::default()
        .block(
            Block::bordered()
                .title(format!(" {} ", t!("results_score")))
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        )
        .gauge_style(theme().progress())
        .ratio(report.score_ratio())
        .label(format!("{}/100 · {}", report.score, report.assessment()));
    frame.render_widget(gauge, score_area);

    let width = details_area.width.saturating_sub(6) as usize;
    let mut lines = vec![Line::from(Span::styled(
        t!("results_improvements").to_string(),
        theme().title(),
    ))];
    for improvement in report.improvements {
        lines.push(Line::from(vec![
            Span::styled("  • ", theme().accent()),
            Span::styled(improvement.title(), theme().normal()),
        ]));
        lines.extend(
            wrap_lines(&improvement.description(), width)
                .into_iter()
                .map(|line| Line::from(format!("    {}", line)).style(theme().hint())),
        );
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        t!("results_next_steps").to_string(),
        theme().title(),
    )));
    for (i, key) in report.next_step_keys.iter().enumerate() {
        lines.push(Line::from(format!("  {}. {}", i + 1, t!(*key))));
    }
    if let Some(log_path) = &state.log_path {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("{} {}", t!("results_log_path"), log_path.display()),
            theme().hint(),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(theme().border()),
        ),
        details_area,
    );

    render_hint(&t!("results_hint"), frame, footer);
}
