//! 登录表单状态

use crate::flow::Credentials;
use crate::tui::state::InputState;

/// 登录表单焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Submit,
}

const LOGIN_FIELDS: [LoginField; 3] = [LoginField::Email, LoginField::Password, LoginField::Submit];

/// 登录表单状态
#[derive(Debug, Default, Clone)]
pub struct LoginState {
    /// 邮箱输入
    pub email: InputState,
    /// 密码输入
    pub password: InputState,
    /// 当前焦点
    pub focus: LoginField,
    /// 登录失败提示
    pub alert: Option<String>,
}

impl LoginState {
    fn focus_index(&self) -> usize {
        LOGIN_FIELDS
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    /// 焦点下移
    pub fn focus_next(&mut self) {
        self.focus = LOGIN_FIELDS[(self.focus_index() + 1) % LOGIN_FIELDS.len()];
    }

    /// 焦点上移
    pub fn focus_prev(&mut self) {
        let len = LOGIN_FIELDS.len();
        self.focus = LOGIN_FIELDS[(self.focus_index() + len - 1) % len];
    }

    /// 当前焦点输入框
    pub fn active_input_mut(&mut self) -> Option<&mut InputState> {
        match self.focus {
            LoginField::Email => Some(&mut self.email),
            LoginField::Password => Some(&mut self.password),
            LoginField::Submit => None,
        }
    }

    /// 表单内容
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.value().trim().to_string(),
            password: self.password.value().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles() {
        let mut login = LoginState::default();
        login.focus_prev();
        assert_eq!(login.focus, LoginField::Submit);
        login.focus_next();
        assert_eq!(login.focus, LoginField::Email);
        assert!(login.active_input_mut().is_some());
    }

    #[test]
    fn test_credentials_trim_email() {
        let login = LoginState {
            email: InputState::with_value(" sam@example.com "),
            password: InputState::with_value(" pw "),
            ..LoginState::default()
        };
        let credentials = login.credentials();
        assert_eq!(credentials.email, "sam@example.com");
        assert_eq!(credentials.password, " pw ");
    }
}
