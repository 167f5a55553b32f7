//! 快捷键帮助面板

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

use super::dialog_utils::{center_dialog, render_dialog_frame};

/// 帮助面板宽度
const PANEL_WIDTH: u16 = 36;

/// 渲染帮助面板
pub fn render(frame: &mut Frame, colors: &ThemeColors) {
    let lines = build_help_lines(colors);
    let height = lines.len() as u16 + 2;

    let panel_area = center_dialog(frame.area(), PANEL_WIDTH, height);
    let inner = render_dialog_frame(frame, panel_area, " Help ", colors.highlight, colors);

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 构建帮助内容行
fn build_help_lines(colors: &ThemeColors) -> Vec<Line<'static>> {
    vec![
        section_header("Tasks", colors),
        key_line("a / i / n", "Add a task", colors),
        key_line("Space / Enter", "Toggle done", colors),
        key_line("x / d / Del", "Delete task", colors),
        key_line("click [ ]", "Toggle done", colors),
        key_line("click ✕", "Delete task", colors),
        Line::from(""),
        section_header("Navigation", colors),
        key_line("j / ↓", "Move down", colors),
        key_line("k / ↑", "Move up", colors),
        Line::from(""),
        section_header("Input", colors),
        key_line("Enter", "Add task", colors),
        key_line("Esc / Tab", "Back to list", colors),
        Line::from(""),
        section_header("Other", colors),
        key_line("t", "Theme selector", colors),
        key_line("?", "This help", colors),
        key_line("q / Ctrl-C", "Quit", colors),
        Line::from(""),
        Line::from(Span::styled(
            format!("  tasklist v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors.muted),
        )),
    ]
}

fn section_header(title: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default()
            .fg(colors.text)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("    {:<15}", key),
            Style::default().fg(colors.highlight),
        ),
        Span::styled(desc.to_string(), Style::default().fg(colors.muted)),
    ])
}
