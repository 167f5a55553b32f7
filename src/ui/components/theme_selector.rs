//! 主题选择器组件

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

use super::dialog_utils::{center_dialog, render_dialog_frame, render_hint};

/// 渲染主题选择器弹窗
pub fn render(
    frame: &mut Frame,
    selected_index: usize,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let themes = Theme::all();

    // 标题 + 边框 + 内容 + 提示
    let popup_height = (themes.len() as u16) + 4;
    let popup_area = center_dialog(frame.area(), 30, popup_height);
    let inner_area = render_dialog_frame(frame, popup_area, " Theme ", colors.highlight, colors);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    let lines: Vec<Line> = themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let is_selected = i == selected_index;
            let prefix = if is_selected { "❯ " } else { "  " };
            let style = if is_selected {
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };
            Line::from(Span::styled(format!("{}{}", prefix, theme.label()), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), list_area);
    render_hint(frame, hint_area, &[("Enter", "select"), ("Esc", "cancel")], colors);

    // 注册点击区域
    for i in 0..themes.len() {
        let y = list_area.y + i as u16;
        if y >= list_area.y + list_area.height {
            break;
        }
        click_areas
            .theme_items
            .push((Rect::new(list_area.x, y, list_area.width, 1), i));
    }
}
