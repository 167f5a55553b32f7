//! TOML 文件存储（`--file` 启用）

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{load_toml, save_toml, TaskRepository};
use crate::error::{Result, TaskListError};
use crate::model::Task;

/// 任务列表容器 (用于 TOML 序列化)
#[derive(Debug, Default, Serialize, Deserialize)]
struct TasksFile {
    #[serde(default)]
    tasks: Vec<Task>,
}

#[derive(Debug, Clone)]
pub struct TomlRepository {
    path: PathBuf,
}

impl TomlRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskRepository for TomlRepository {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        if self.path.is_dir() {
            return Err(TaskListError::storage(format!(
                "{} is a directory",
                self.path.display()
            )));
        }

        let file: TasksFile = load_toml(&self.path)?;
        Ok(file.tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let file = TasksFile {
            tasks: tasks.to_vec(),
        };
        save_toml(&self.path, &file)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
