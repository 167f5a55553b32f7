//! 系统主题检测

use std::process::Command;

/// 检测系统主题
///
/// 返回 `true` 表示深色模式，`false` 表示浅色模式。
/// macOS 读取 `AppleInterfaceStyle`，其他系统看终端的 `COLORFGBG`。
pub fn detect_system_theme() -> bool {
    if cfg!(target_os = "macos") {
        return Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
            .map(|output| {
                output.status.success()
                    && String::from_utf8_lossy(&output.stdout)
                        .trim()
                        .eq_ignore_ascii_case("dark")
            })
            .unwrap_or(false);
    }

    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| is_dark_colorfgbg(&v))
        .unwrap_or(true) // 大多数终端默认深色背景
}

/// 解析 `COLORFGBG`（形如 "15;0"，最后一段是背景色号）
fn is_dark_colorfgbg(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // 0-6 和 8 是深色背景，7 和 9-15 是浅色
    Some(matches!(bg, 0..=6 | 8))
}
