//! Dialog 组件共享工具函数

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 计算居中 dialog 区域
pub fn center_dialog(frame_area: Rect, width: u16, height: u16) -> Rect {
    let x = frame_area.width.saturating_sub(width) / 2;
    let y = frame_area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(frame_area.width),
        height.min(frame_area.height),
    )
}

/// 渲染 dialog 框架（带标题、边框）并返回内部可用区域
pub fn render_dialog_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    colors: &ThemeColors,
) -> Rect {
    // 清除背景
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(colors.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// 渲染标准提示行，格式为 [(快捷键, 描述), ...]
pub fn render_hint(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], colors: &ThemeColors) {
    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, desc))| {
            let mut v = vec![];
            if i > 0 {
                v.push(Span::styled("  ", Style::default().fg(colors.muted)));
            }
            v.push(Span::styled(*key, Style::default().fg(colors.highlight)));
            v.push(Span::styled(
                format!(" {}", desc),
                Style::default().fg(colors.muted),
            ));
            v
        })
        .collect();

    let hint = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_dialog() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(center_dialog(area, 30, 10), Rect::new(35, 15, 30, 10));
    }

    #[test]
    fn test_center_dialog_clamps_to_frame() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(center_dialog(area, 30, 10), Rect::new(0, 0, 20, 5));
    }
}
