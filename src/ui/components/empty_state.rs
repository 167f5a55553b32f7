use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染空列表提示
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled("No tasks yet", Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                " a ",
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("to add one", Style::default().fg(colors.text)),
        ]),
    ];

    // 垂直居中
    let y_offset = inner_area.height.saturating_sub(lines.len() as u16) / 2;
    let centered_area = Rect {
        x: inner_area.x,
        y: inner_area.y + y_offset,
        width: inner_area.width,
        height: inner_area.height.saturating_sub(y_offset),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered_area,
    );
}
