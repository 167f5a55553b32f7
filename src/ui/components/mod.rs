use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断字符串到指定显示宽度（列数），超出部分用省略号替代
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // 留一列给省略号
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// 取字符串末尾不超过指定显示宽度的部分（输入框光标跟随）
pub fn tail(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    let mut start = s.len();
    for (i, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width {
            break;
        }
        used += w;
        start = i;
    }
    &s[start..]
}

pub mod dialog_utils;
pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_box;
pub mod logo;
pub mod task_list;
pub mod theme_selector;
pub mod toast;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly", 7), "exactly");
        assert_eq!(truncate("too long text", 8), "too lon…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars_fit_columns() {
        // 每个汉字占两列
        assert_eq!(truncate("中文任务名称", 4), "中…");
        assert_eq!(truncate("中文任务名称", 5), "中文…");
        assert_eq!(truncate("中文", 4), "中文");

        for max in 0..20 {
            let cut = truncate(&"买牛奶".repeat(20), max);
            assert!(cut.width() <= max, "{:?} is wider than {}", cut, max);
        }
    }

    #[test]
    fn test_tail_by_width() {
        assert_eq!(tail("hello", 10), "hello");
        assert_eq!(tail("hello", 3), "llo");
        assert_eq!(tail("买牛奶", 4), "牛奶");
        assert_eq!(tail("买牛奶", 5), "牛奶");
        assert_eq!(tail("abc", 0), "");
    }
}
