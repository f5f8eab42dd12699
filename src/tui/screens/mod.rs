//! 各界面渲染

pub mod analysis;
pub mod exit;
pub mod login;
pub mod photo_upload;
pub mod question;
pub mod results;
pub mod transition;
pub mod welcome;
