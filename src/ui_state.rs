//! UI 状态管理
//!
//! 管理所有与 UI 显示相关的状态，包括主题、颜色、Toast、弹窗与点击区域。

use std::time::{Duration, Instant};

use crate::theme::{detect_system_theme, get_theme_colors, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

/// Toast 默认显示时长
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// UI 状态
#[derive(Debug)]
pub struct UiState {
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 打开选择器前的主题（取消时恢复）
    theme_before_selector: Theme,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    pub last_system_dark: bool,
    /// 可点击区域缓存（每帧渲染时填充）
    pub click_areas: ClickAreas,
}

impl UiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            toast: None,
            theme,
            colors: get_theme_colors(theme),
            show_theme_selector: false,
            theme_selector_index: 0,
            theme_before_selector: theme,
            show_help: false,
            last_system_dark: detect_system_theme(),
            click_areas: ClickAreas::default(),
        }
    }

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// 清除过期的 Toast
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// 更新主题
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.colors = get_theme_colors(theme);
    }

    /// 检查系统主题变化（仅 Auto 模式）
    pub fn check_system_theme(&mut self) {
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = detect_system_theme();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.theme_before_selector = self.theme;
        self.show_theme_selector = true;
    }

    /// 主题选择器 - 选择上一个（实时预览）
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个（实时预览）
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 直接选中某项（鼠标）
    pub fn theme_selector_select(&mut self, index: usize) {
        if index < Theme::all().len() {
            self.theme_selector_index = index;
            self.apply_theme_at_index(index);
        }
    }

    /// 主题选择器 - 确认，返回选中的主题
    pub fn theme_selector_confirm(&mut self) -> Theme {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;
        self.theme
    }

    /// 主题选择器 - 取消并恢复原主题
    pub fn theme_selector_cancel(&mut self) {
        self.set_theme(self.theme_before_selector);
        self.show_theme_selector = false;
    }

    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.set_theme(*theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_default_state() {
        let state = UiState::new(Theme::Catppuccin);

        assert!(state.toast.is_none());
        assert_eq!(state.theme, Theme::Catppuccin);
        assert!(!state.show_theme_selector);
        assert!(!state.show_help);
    }

    #[test]
    fn test_show_toast() {
        let mut state = UiState::new(Theme::Dark);
        state.show_toast("Added: Buy milk");
        assert_eq!(state.toast.as_ref().unwrap().message, "Added: Buy milk");
    }

    #[test]
    fn test_toast_expiry() {
        let toast = Toast::new("Test", Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(2));
        assert!(toast.is_expired());
    }

    #[test]
    fn test_clear_expired_toast() {
        let mut state = UiState::new(Theme::Dark);
        state.toast = Some(Toast::new("Test", Duration::from_millis(1)));

        std::thread::sleep(Duration::from_millis(2));
        state.clear_expired_toast();
        assert!(state.toast.is_none());
    }

    #[test]
    fn test_theme_selector_confirm() {
        let mut state = UiState::new(Theme::Dark);
        state.open_theme_selector();
        assert_eq!(state.theme_selector_index, 1);
        assert!(state.show_theme_selector);

        state.theme_selector_next();
        assert_eq!(state.theme, Theme::Light);

        assert_eq!(state.theme_selector_confirm(), Theme::Light);
        assert!(!state.show_theme_selector);
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_theme_selector_cancel_restores() {
        let mut state = UiState::new(Theme::Nord);
        state.open_theme_selector();
        state.theme_selector_prev();
        state.theme_selector_prev();
        assert_ne!(state.theme, Theme::Nord);

        state.theme_selector_cancel();
        assert_eq!(state.theme, Theme::Nord);
        assert!(!state.show_theme_selector);
    }

    #[test]
    fn test_theme_selector_wraps() {
        let mut state = UiState::new(Theme::Auto);
        state.open_theme_selector();
        state.theme_selector_prev();
        assert_eq!(state.theme, *Theme::all().last().unwrap());
        state.theme_selector_next();
        assert_eq!(state.theme, Theme::Auto);
    }
}
