use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{format_relative_time, Task};
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

use super::truncate;

/// 选择指示器宽度 ("❯ ")
const SELECTOR_WIDTH: u16 = 2;
/// 复选框宽度 ("[x]")
const CHECKBOX_WIDTH: u16 = 3;
/// 创建时间列宽度
const AGE_WIDTH: u16 = 13;
/// 删除按钮宽度 (" ✕ ")
const DELETE_WIDTH: u16 = 3;

/// 渲染任务列表，并登记每行的可点击区域
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected: Option<usize>,
    offset: &mut usize,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    if height == 0 {
        return;
    }
    *offset = scroll_offset(*offset, selected, tasks.len(), height);

    // 窄屏时隐藏时间列
    let show_age = inner.width >= 40;
    let age_width = if show_age { AGE_WIDTH } else { 0 };
    let text_width = inner
        .width
        .saturating_sub(SELECTOR_WIDTH + CHECKBOX_WIDTH + 1 + age_width + DELETE_WIDTH);

    for (row, (index, task)) in tasks
        .iter()
        .enumerate()
        .skip(*offset)
        .take(height)
        .enumerate()
    {
        let y = inner.y + row as u16;
        let row_rect = Rect::new(inner.x, y, inner.width, 1);
        let is_selected = selected == Some(index);

        let text_style = if task.completed {
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_selected {
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        let checkbox_style = if task.completed {
            Style::default().fg(colors.done)
        } else {
            Style::default().fg(colors.muted)
        };

        let text = truncate(&task.text, text_width as usize);
        let text_padding = (text_width as usize).saturating_sub(Span::raw(text.as_str()).width());

        let mut spans = vec![
            Span::styled(
                if is_selected { "❯ " } else { "  " },
                Style::default().fg(colors.highlight),
            ),
            Span::styled(task.checkbox(), checkbox_style),
            Span::raw(" "),
            Span::styled(text, text_style),
            Span::raw(" ".repeat(text_padding)),
        ];
        if show_age {
            spans.push(Span::styled(
                format!("{:>width$}", format_relative_time(task.created_at), width = AGE_WIDTH as usize),
                Style::default().fg(colors.muted),
            ));
        }
        spans.push(Span::styled(" ✕ ", Style::default().fg(colors.danger)));

        let row_style = if is_selected {
            Style::default().bg(colors.bg_secondary)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(Line::from(spans)).style(row_style), row_rect);

        // 注册点击区域
        click_areas.task_rows.push((row_rect, index, task.id));
        click_areas.checkboxes.push((
            Rect::new(inner.x + SELECTOR_WIDTH, y, CHECKBOX_WIDTH, 1),
            task.id,
        ));
        let delete_x = inner.x + inner.width.saturating_sub(DELETE_WIDTH);
        click_areas
            .delete_buttons
            .push((Rect::new(delete_x, y, DELETE_WIDTH, 1), task.id));
    }
}

/// 计算滚动偏移，保证选中行可见
fn scroll_offset(offset: usize, selected: Option<usize>, len: usize, height: usize) -> usize {
    let max_offset = len.saturating_sub(height);
    let offset = match selected {
        Some(i) if i < offset => i,
        Some(i) if i >= offset + height => i + 1 - height,
        _ => offset,
    };
    offset.min(max_offset)
}
