//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(96, 165, 250),       // 蓝色
        highlight: Color::Rgb(96, 165, 250),
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),
        border: Color::Rgb(68, 68, 68),
        done: Color::Rgb(0, 200, 120),
        danger: Color::Rgb(255, 85, 85),
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(243, 244, 246),           // 浅灰背景
        bg_secondary: Color::Rgb(219, 234, 254), // 选中行背景
        logo: Color::Rgb(37, 99, 235),           // 深蓝色
        highlight: Color::Rgb(37, 99, 235),
        text: Color::Rgb(17, 24, 39),
        muted: Color::Rgb(107, 114, 128),
        border: Color::Rgb(209, 213, 219),
        done: Color::Rgb(22, 163, 74),
        danger: Color::Rgb(239, 68, 68),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164),
        border: Color::Rgb(68, 71, 90),
        done: Color::Rgb(80, 250, 123),
        danger: Color::Rgb(255, 85, 85),
    }
}

/// Nord 主题
pub fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(59, 66, 82),
        logo: Color::Rgb(136, 192, 208),
        highlight: Color::Rgb(136, 192, 208),
        text: Color::Rgb(236, 239, 244),
        muted: Color::Rgb(129, 161, 193),
        border: Color::Rgb(76, 86, 106),
        done: Color::Rgb(163, 190, 140),
        danger: Color::Rgb(191, 97, 106),
    }
}

/// Gruvbox 主题
pub fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),
        bg_secondary: Color::Rgb(60, 56, 54),
        logo: Color::Rgb(250, 189, 47),
        highlight: Color::Rgb(254, 128, 25),
        text: Color::Rgb(235, 219, 178),
        muted: Color::Rgb(146, 131, 116),
        border: Color::Rgb(80, 73, 69),
        done: Color::Rgb(184, 187, 38),
        danger: Color::Rgb(251, 73, 52),
    }
}

/// Tokyo Night 主题
pub fn tokyo_night_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(26, 27, 38),
        bg_secondary: Color::Rgb(41, 46, 66),
        logo: Color::Rgb(122, 162, 247),
        highlight: Color::Rgb(187, 154, 247),
        text: Color::Rgb(192, 202, 245),
        muted: Color::Rgb(86, 95, 137),
        border: Color::Rgb(59, 66, 97),
        done: Color::Rgb(158, 206, 106),
        danger: Color::Rgb(247, 118, 142),
    }
}

/// Catppuccin (Mocha) 主题
pub fn catppuccin_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(30, 30, 46),
        bg_secondary: Color::Rgb(49, 50, 68),
        logo: Color::Rgb(137, 180, 250),
        highlight: Color::Rgb(203, 166, 247),
        text: Color::Rgb(205, 214, 244),
        muted: Color::Rgb(108, 112, 134),
        border: Color::Rgb(69, 71, 90),
        done: Color::Rgb(166, 227, 161),
        danger: Color::Rgb(243, 139, 168),
    }
}
