//! 新任务输入框

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::tail;

pub const INPUT_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Add a new task";

/// 渲染输入框
/// is_editing: 是否正在输入（显示光标和高亮边框）
pub fn render(frame: &mut Frame, area: Rect, input: &str, is_editing: bool, colors: &ThemeColors) {
    let border_color = if is_editing {
        colors.highlight
    } else {
        colors.border
    };

    let block = Block::default()
        .title(" New task ")
        .title_style(Style::default().fg(border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![Span::raw(" ")];
    if input.is_empty() && !is_editing {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(colors.muted)));
    } else {
        // 只显示末尾部分，保证光标可见（前导空格 + 光标各占一列）
        let max_width = (inner_area.width as usize).saturating_sub(2);
        let visible = tail(input, max_width);
        spans.push(Span::styled(visible, Style::default().fg(colors.text)));
    }

    if is_editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner_area);
}
