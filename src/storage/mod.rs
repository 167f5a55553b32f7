pub mod config;
pub mod memory;
pub mod toml_file;

use std::path::{Path, PathBuf};

use crate::error::{Result, TaskListError};
use crate::model::Task;

pub use memory::MemoryRepository;
pub use toml_file::TomlRepository;

/// 任务列表的加载/保存后端
///
/// store 的修改逻辑不依赖具体实现，内存版和文件版可以互换。
pub trait TaskRepository {
    /// 加载全部任务（按原有顺序）
    fn load(&self) -> Result<Vec<Task>>;

    /// 保存全部任务（覆盖）
    fn save(&self, tasks: &[Task]) -> Result<()>;

    /// 用于日志和界面显示的简短描述
    fn describe(&self) -> String;
}

/// 获取 ~/.tasklist/ 目录路径
pub fn tasklist_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".tasklist"))
        .ok_or_else(|| TaskListError::config("Cannot find home directory"))
}

/// 从 TOML 文件加载反序列化数据
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 将数据序列化后保存到 TOML 文件（自动创建父目录）
///
/// 先写临时文件再 rename，写到一半中断不会留下截断的文件。
pub fn save_toml<T: serde::Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let content = toml::to_string_pretty(data)?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    std::fs::write(&tmp, content)?;
    // 原子替换
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_save_toml_replaces_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.toml");
        std::fs::write(&path, "stale = true\n").unwrap();

        let mut data = BTreeMap::new();
        data.insert("answer".to_string(), 42);
        save_toml(&path, &data).unwrap();

        let loaded: BTreeMap<String, i64> = load_toml(&path).unwrap();
        assert_eq!(loaded.get("answer"), Some(&42));
        assert!(!loaded.contains_key("stale"));

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("data.toml")]);
    }

    #[test]
    fn test_save_toml_failure_keeps_original() {
        let dir = tempfile::tempdir().unwrap();
        // 目标是目录，rename 失败
        let target = dir.path().join("occupied");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let mut data = BTreeMap::new();
        data.insert("a".to_string(), 1);
        assert!(save_toml(&target, &data).is_err());

        assert!(target.join("keep").exists());
        assert!(!dir.path().join("occupied.tmp").exists());
    }
}
