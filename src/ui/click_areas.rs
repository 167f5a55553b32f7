use ratatui::layout::Rect;

use crate::model::TaskId;

/// 任务行上的可点击部件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    /// 复选框 → toggle
    Checkbox,
    /// ✕ → delete
    Delete,
    /// 行的其余部分 → 选中
    Row,
}

/// 每帧渲染时缓存的可点击区域
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 任务行 (区域, 行索引, 任务 id)
    pub task_rows: Vec<(Rect, usize, TaskId)>,
    /// 复选框 (区域, 任务 id)
    pub checkboxes: Vec<(Rect, TaskId)>,
    /// 删除按钮 (区域, 任务 id)
    pub delete_buttons: Vec<(Rect, TaskId)>,
    /// 输入框区域
    pub input_area: Option<Rect>,
    /// 主题选择器条目 (区域, 主题索引)
    pub theme_items: Vec<(Rect, usize)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.task_rows.clear();
        self.checkboxes.clear();
        self.delete_buttons.clear();
        self.input_area = None;
        self.theme_items.clear();
    }

    /// 命中测试：返回点击位置对应的任务部件
    pub fn hit_task(&self, col: u16, row: u16) -> Option<(RowTarget, usize, TaskId)> {
        let (_, index, id) = self
            .task_rows
            .iter()
            .find(|(rect, _, _)| contains(rect, col, row))?;

        if self.checkboxes.iter().any(|(r, i)| i == id && contains(r, col, row)) {
            return Some((RowTarget::Checkbox, *index, *id));
        }
        if self.delete_buttons.iter().any(|(r, i)| i == id && contains(r, col, row)) {
            return Some((RowTarget::Delete, *index, *id));
        }
        Some((RowTarget::Row, *index, *id))
    }

    pub fn hit_theme_item(&self, col: u16, row: u16) -> Option<usize> {
        self.theme_items
            .iter()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, i)| *i)
    }

    pub fn hit_input(&self, col: u16, row: u16) -> bool {
        self.input_area.is_some_and(|r| contains(&r, col, row))
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x + rect.width
        && row >= rect.y
        && row < rect.y + rect.height
}
