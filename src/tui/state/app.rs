//! 应用状态

use crate::config::Config;
use crate::flow::OnboardingFlow;
use crate::report::AnalysisReport;
use crate::tui::state::{LoginState, PhotoState, QuestionState};
use std::path::PathBuf;

/// 应用状态（包含 UI 状态）
#[derive(Debug)]
pub struct AppState {
    /// 引导流程
    pub flow: OnboardingFlow,
    /// 登录表单
    pub login: LoginState,
    /// 问卷界面
    pub question: QuestionState,
    /// 照片上传界面
    pub photo: PhotoState,
    /// 分析报告
    pub report: AnalysisReport,
    /// 是否显示退出确认
    pub confirm_exit: bool,
    /// 是否退出
    pub should_exit: bool,
    /// 日志路径
    pub log_path: Option<PathBuf>,
}

impl AppState {
    /// 按配置创建
    pub fn new(config: &Config) -> Self {
        Self {
            flow: OnboardingFlow::new(config.policy, config.timings()),
            login: LoginState::default(),
            question: QuestionState::default(),
            photo: PhotoState::default(),
            report: AnalysisReport::fixed(),
            confirm_exit: false,
            should_exit: false,
            log_path: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
