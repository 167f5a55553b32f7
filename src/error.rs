//! 统一错误类型定义
//!
//! 使用 `thiserror` 提供存储与配置层的错误，任务操作本身不会失败。

use std::io;
use thiserror::Error;

/// tasklist 错误类型
#[derive(Debug, Error)]
pub enum TaskListError {
    /// I/O 错误（文件读写、目录操作等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),

    /// 存储错误（通用）
    #[error("Storage error: {0}")]
    Storage(String),
}

/// tasklist Result 类型别名
pub type Result<T> = std::result::Result<T, TaskListError>;

impl TaskListError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// 创建 Storage 错误
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
