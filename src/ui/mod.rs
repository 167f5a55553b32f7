pub mod click_areas;
pub mod components;
pub mod loading;
pub mod tasks;

use ratatui::Frame;

use crate::app::{App, Phase};

/// 根据当前阶段渲染整个界面
pub fn render(frame: &mut Frame, app: &mut App) {
    app.ui.click_areas.reset();
    match app.phase {
        Phase::Loading => loading::render(frame, app),
        Phase::Ready => tasks::render(frame, app),
    }
}
