//! 启动加载界面

use std::time::{Duration, Instant};

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
    Frame,
};

use crate::app::App;

use super::components::logo;

/// 每个圆点弹起的时长
const BOUNCE_STEP: Duration = Duration::from_millis(200);
const DOT_COUNT: usize = 3;

/// 渲染加载界面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let show_logo = area.width >= logo::LOGO_WIDTH && area.height >= logo::LOGO_HEIGHT + 6;
    let logo_height = if show_logo { logo::LOGO_HEIGHT } else { 0 };

    // Logo + 空行 + 文字 + 空行 + 圆点，整体垂直居中
    let [_, logo_area, _, text_area, _, dots_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(logo_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    if show_logo {
        logo::render(frame, logo_area, colors);
    }

    let text = Paragraph::new(Line::from(Span::styled(
        "Loading...",
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(text, text_area);

    let active = active_dot(app.boot.elapsed(Instant::now()));
    let spans: Vec<Span> = (0..DOT_COUNT)
        .flat_map(|i| {
            let (glyph, style) = if i == active {
                ("●", Style::default().fg(colors.highlight))
            } else {
                ("•", Style::default().fg(colors.muted))
            };
            [Span::styled(glyph, style), Span::raw(" ")]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        dots_area,
    );
}

/// 当前弹起的圆点（依次轮转）
fn active_dot(elapsed: Duration) -> usize {
    (elapsed.as_millis() / BOUNCE_STEP.as_millis()) as usize % DOT_COUNT
}
