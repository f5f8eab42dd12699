//! Ratatui 终端 UI 模块
//!
//! 提供引导流程的终端用户界面。

pub mod app;
pub mod components;
pub mod event;
pub mod labels;
pub mod screens;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::TuiApp;
pub use event::{EventPoll, TuiEvent};
pub use state::{AppState, InputState, LoginState, PhotoState, QuestionState, SelectionState};
pub use theme::{Theme, theme};
pub use ui::render;
