use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::{App, InputMode};

use super::components::{
    empty_state, footer, header, help_panel, input_box, task_list, theme_selector, toast,
};

/// 渲染任务列表页面
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.ui.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(input_box::INPUT_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(footer::FOOTER_HEIGHT),
    ])
    .areas(area);

    header::render(
        frame,
        header_area,
        app.store.completed_count(),
        app.store.len(),
        &app.backend_label(),
        &colors,
    );

    let is_editing = app.input_mode == InputMode::Editing;
    input_box::render(frame, input_area, &app.input, is_editing, &colors);
    app.ui.click_areas.input_area = Some(input_area);

    if app.store.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            app.store.view(),
            app.selected,
            &mut app.list_offset,
            &colors,
            &mut app.ui.click_areas,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.input_mode,
        !app.store.is_empty(),
        &colors,
    );

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.ui.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.ui.show_theme_selector {
        theme_selector::render(
            frame,
            app.ui.theme_selector_index,
            &colors,
            &mut app.ui.click_areas,
        );
    }

    // 渲染帮助面板
    if app.ui.show_help {
        help_panel::render(frame, &colors);
    }
}
