//! 任务列表 store
//!
//! 持有有序的任务序列，是唯一的修改者。所有非法输入（空文本、未知 id）
//! 都是 no-op，不返回错误。

use std::collections::HashSet;

use super::task::{Task, TaskId};

/// 有序任务列表
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// 下一个分配的 id，严格大于列表中所有 id
    next_id: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// 用已有任务初始化（如从存储加载）
    ///
    /// 文本会被 trim，空白任务被丢弃；重复的 id 会被重新编号，
    /// 保证 id 唯一。其余任务顺序保持不变。
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let tasks: Vec<Task> = tasks
            .into_iter()
            .filter_map(|mut task| {
                let text = task.text.trim();
                if text.is_empty() {
                    return None;
                }
                if text.len() != task.text.len() {
                    task.text = text.to_string();
                }
                Some(task)
            })
            .collect();

        let mut next_id = tasks.iter().map(|t| t.id.0).max().map_or(1, |max| max + 1);

        let mut seen = HashSet::with_capacity(tasks.len());
        let tasks = tasks
            .into_iter()
            .map(|mut task| {
                if !seen.insert(task.id) {
                    task.id = TaskId(next_id);
                    next_id += 1;
                    seen.insert(task.id);
                }
                task
            })
            .collect();

        Self { tasks, next_id }
    }

    /// 添加任务，返回新任务的 id；trim 后为空则不做任何事
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text));
        Some(id)
    }

    /// 切换完成状态，返回是否有任务被修改
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// 删除任务，保持其余任务的相对顺序
    pub fn delete(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    /// 当前有序列表（只读）
    pub fn view(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
