//! 主题模块
//!
//! 提供统一的主题定义与界面常量。

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// 界面常量
pub mod config {
    /// 列表高亮符号
    pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
    /// 多选已选中
    pub const CHECKED: &str = "[x]";
    /// 多选未选中
    pub const UNCHECKED: &str = "[ ]";
    /// 单选已选中
    pub const RADIO_ON: &str = "(•)";
    /// 单选未选中
    pub const RADIO_OFF: &str = "( )";
    /// 数值步长（PageUp / PageDown）
    pub const LARGE_STEP: i64 = 10;
    /// 分组问题可见行数
    pub const GROUP_VISIBLE_ROWS: usize = 12;
}

/// 主题颜色配置
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// 背景色
    pub bg: Color,
    /// 前景色
    pub fg: Color,
    /// 强调色
    pub accent: Color,
    /// 选中项背景色
    pub selected_bg: Color,
    /// 选中项前景色
    pub selected_fg: Color,
    /// 已作答选项颜色
    pub chosen: Color,
    /// 警告色
    pub warning: Color,
    /// 错误色
    pub error: Color,
    /// 提示/次要文字色
    pub hint: Color,
    /// 边框色
    pub border: Color,
    /// 进度条颜色
    pub progress: Color,
    /// 标题颜色
    pub title: Color,
}

impl Default for Theme {
    fn default() -> Self {
        THEME
    }
}

impl Theme {
    /// 普通文本样式
    pub fn normal(&self) -> Style {
        Style::new().fg(self.fg).bg(self.bg)
    }

    /// 标题样式
    pub fn title(&self) -> Style {
        Style::new()
            .fg(self.title)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 光标所在项样式
    pub fn selected(&self) -> Style {
        Style::new()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 已作答选项样式
    pub fn chosen(&self) -> Style {
        Style::new()
            .fg(self.chosen)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// 强调样式
    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent).bg(self.bg)
    }

    /// 边框样式
    pub fn border(&self) -> Style {
        Style::new().fg(self.border).bg(self.bg)
    }

    /// 提示文本样式
    pub fn hint(&self) -> Style {
        Style::new().fg(self.hint).bg(self.bg)
    }

    /// 警告样式
    pub fn warning(&self) -> Style {
        Style::new().fg(self.warning).bg(self.bg)
    }

    /// 错误样式
    pub fn error(&self) -> Style {
        Style::new().fg(self.error).bg(self.bg)
    }

    /// 进度条样式
    pub fn progress(&self) -> Style {
        Style::new().fg(self.progress).bg(self.bg)
    }

    /// 创建居中的标题行
    pub fn centered_title(&self, text: String) -> Line<'static> {
        Line::from(text).centered().style(self.title())
    }
}

/// 全局主题实例
pub static THEME: Theme = Theme {
    bg: Color::Black,
    fg: Color::White,
    accent: Color::LightMagenta,
    selected_bg: Color::LightMagenta,
    selected_fg: Color::Black,
    chosen: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    hint: Color::Gray,
    border: Color::Magenta,
    progress: Color::LightMagenta,
    title: Color::LightMagenta,
};

/// 获取全局主题引用
pub fn theme() -> &'static Theme {
    &THEME
}
