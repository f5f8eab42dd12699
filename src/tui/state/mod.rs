//! TUI 状态模块

pub mod app;
pub mod input;
pub mod login;
pub mod photo;
pub mod question;
pub mod selection;

pub use app::AppState;
pub use input::InputState;
pub use login::{LoginField, LoginState};
pub use photo::PhotoState;
pub use question::{Edit, FitnessRow, QuestionState};
pub use selection::{Selectable, SelectionState};
