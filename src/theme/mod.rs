mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::detect_system_theme;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
    Nord,
    Gruvbox,
    TokyoNight,
    Catppuccin,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
            Theme::Gruvbox => "Gruvbox",
            Theme::TokyoNight => "Tokyo Night",
            Theme::Catppuccin => "Catppuccin",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Auto,
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
            Theme::Gruvbox,
            Theme::TokyoNight,
            Theme::Catppuccin,
        ]
    }

    /// 从名称创建主题（大小写、空格不敏感，未知名称回退到 Auto）
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.label().replace(' ', "").to_lowercase() == key)
            .unwrap_or(Theme::Auto)
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// 标题 / 加载界面颜色
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务的勾选标记
    pub done: Color,
    /// 删除按钮
    pub danger: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if detect_system_theme() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
        Theme::Gruvbox => gruvbox_colors(),
        Theme::TokyoNight => tokyo_night_colors(),
        Theme::Catppuccin => catppuccin_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_matches_labels() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_name(theme.label()), *theme);
        }
    }

    #[test]
    fn test_from_name_is_lenient() {
        assert_eq!(Theme::from_name("tokyo-night"), Theme::TokyoNight);
        assert_eq!(Theme::from_name("TokyoNight"), Theme::TokyoNight);
        assert_eq!(Theme::from_name("NORD"), Theme::Nord);
        assert_eq!(Theme::from_name("solarized"), Theme::Auto);
    }
}
