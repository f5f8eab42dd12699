//! 照片上传状态

use crate::error::Error;
use crate::tui::state::InputState;
use rust_i18n::t;

/// 照片上传界面状态
#[derive(Debug, Default, Clone)]
pub struct PhotoState {
    /// 照片路径输入
    pub path_input: InputState,
    /// 选择失败提示
    pub alert: Option<String>,
}

impl PhotoState {
    /// 将选择照片的错误转换为提示文本
    pub fn set_error(&mut self, error: &Error) {
        let message = match error {
            Error::PermissionDenied => t!("photo_permission_denied").to_string(),
            Error::UnsupportedImage { .. } => t!("photo_not_image").to_string(),
            Error::ImageCancelled => t!("photo_not_found").to_string(),
            other => other.to_string(),
        };
        self.alert = Some(message);
    }

    /// 清空输入与提示
    pub fn reset(&mut self) {
        self.path_input.clear();
        self.alert = None;
    }
}
