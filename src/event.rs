use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, InputMode, Phase};
use crate::ui::click_areas::RowTarget;

/// 事件轮询超时（同时决定加载动画帧率）
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    app.tick(Instant::now());

    if event::poll(POLL_TIMEOUT)? {
        match event::read()? {
            // 只处理按下事件
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
        }
    }

    Ok(!app.should_quit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C 任何时候都退出
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    // 加载界面只响应退出
    if app.phase == Phase::Loading {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            app.quit();
        }
        return;
    }

    // 优先处理弹窗事件
    if app.ui.show_help {
        handle_help_key(app, key);
        return;
    }

    if app.ui.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    match app.input_mode {
        InputMode::Editing => handle_editing_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

/// 处理列表导航模式的键盘事件
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected(),

        // 删除
        KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        // 进入输入模式
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Char('n') | KeyCode::Tab => {
            app.start_editing()
        }

        // Theme 选择器
        KeyCode::Char('t') | KeyCode::Char('T') => app.ui.open_theme_selector(),

        // 帮助
        KeyCode::Char('?') => app.ui.show_help = true,

        _ => {}
    }
}

/// 处理输入模式的键盘事件
fn handle_editing_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_input(),
        KeyCode::Esc | KeyCode::Tab => app.stop_editing(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),
        _ => {}
    }
}

/// 处理主题选择器
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.ui.theme_selector_prev(),
        KeyCode::Char('j') | KeyCode::Down => app.ui.theme_selector_next(),
        KeyCode::Enter => app.confirm_theme(),
        KeyCode::Esc | KeyCode::Char('q') => app.ui.theme_selector_cancel(),
        _ => {}
    }
}

/// 处理帮助面板（任意关闭键）
fn handle_help_key(app: &mut App, key: KeyEvent) {
    if matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter
    ) {
        app.ui.show_help = false;
    }
}

/// 处理鼠标点击（只响应左键按下）
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.phase == Phase::Loading {
        return;
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (col, row) = (mouse.column, mouse.row);

    if app.ui.show_help {
        app.ui.show_help = false;
        return;
    }

    if app.ui.show_theme_selector {
        if let Some(index) = app.ui.click_areas.hit_theme_item(col, row) {
            app.ui.theme_selector_select(index);
            app.confirm_theme();
        }
        return;
    }

    if app.ui.click_areas.hit_input(col, row) {
        app.start_editing();
        return;
    }

    if let Some((target, index, id)) = app.ui.click_areas.hit_task(col, row) {
        app.stop_editing();
        match target {
            RowTarget::Checkbox => {
                app.select(index);
                app.toggle_task(id);
            }
            RowTarget::Delete => {
                app.select(index);
                app.delete_task(id);
            }
            RowTarget::Row => app.select(index),
        }
    }
}
