//! 内存存储（默认），进程退出即丢弃

use std::cell::RefCell;

use super::TaskRepository;
use crate::error::Result;
use crate::model::Task;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    tasks: RefCell<Vec<Task>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for MemoryRepository {
    fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.borrow().clone())
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskId;

    #[test]
    fn test_starts_empty() {
        let repo = MemoryRepository::new();
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repo = MemoryRepository::new();
        let mut done = Task::new(TaskId(2), "B");
        done.completed = true;
        let tasks = vec![Task::new(TaskId(1), "A"), done];

        repo.save(&tasks).unwrap();
        assert_eq!(repo.load().unwrap(), tasks);

        repo.save(&[]).unwrap();
        assert!(repo.load().unwrap().is_empty());
    }
}
