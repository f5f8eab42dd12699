//! 照片上传界面渲染

use crate::flow::IMAGE_EXTENSIONS;
use crate::tui::components::{
    render_alert, render_hint, render_title_block, three_panel_layout, truncate_value, wrap_lines,
};
use crate::tui::state::AppState;
use crate::tui::theme::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};
use rust_i18n::t;

/// 渲染照片上传界面
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let [header, body, footer] = three_panel_layout(area);

    render_title_block(&t!("photo_title"), frame, header);

    let [intro, input_area, selected_area, alert_area, _] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(body);

    let width = intro.width.saturating_sub(2) as usize;
    let mut lines = wrap_lines(&t!("photo_description"), width);
    lines.push(Line::from(format!(
        "{} {}",
        t!("photo_formats"),
        IMAGE_EXTENSIONS.join(", ")
    )));
    frame.render_widget(
        Paragraph::new(lines)
            .style(theme().hint())
            .alignment(Alignment::Center),
        intro,
    );

    let input = &state.photo.path_input;
    frame.render_widget(
        Paragraph::new(input.value().to_string())
            .style(theme().normal())
            .block(
                Block::bordered()
                    .title(format!(" {} ", t!("photo_path")))
                    .border_type(BorderType::Rounded)
                    .border_style(theme().title()),
            ),
        input_area,
    );
    let offset = input.visual_cursor_position(false) as u16;
    let x = (input_area.x + 1 + offset).min(input_area.x + input_area.width.saturating_sub(2));
    frame.set_cursor_position(Position::new(x, input_area.y + 1));

    let selected_width = selected_area.width.saturating_sub(4) as usize;
    let (selected_text, selected_style) = match state.flow.photo() {
        Some(path) => (
            format!(
                "📷 {}",
                truncate_value(&path.display().to_string(), selected_width)
            ),
            theme().chosen(),
        ),
        None => (t!("photo_none_selected").to_string(), theme().hint()),
    };
    frame.render_widget(
        Paragraph::new(selected_text)
            .style(selected_style)
            .alignment(Alignment::Center)
            .block(
                Block::bordered()
                    .title(format!(" {} ", t!("photo_selected")))
                    .border_type(BorderType::Rounded)
                    .border_style(theme().border()),
            ),
        selected_area,
    );

    render_alert(state.photo.alert.as_deref(), frame, alert_area);

    let hint = if state.flow.photo().is_some() {
        t!("photo_hint_ready")
    } else {
        t!("photo_hint")
    };
    render_hint(&hint, frame, footer);
}
