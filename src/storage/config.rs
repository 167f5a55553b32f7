//! 应用配置持久化（~/.tasklist/config.toml）

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{load_toml, save_toml, tasklist_dir};
use crate::error::Result;

/// 默认加载界面时长（毫秒）
pub const DEFAULT_LOADING_MS: u64 = 2000;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub boot: BootConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 启动配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootConfig {
    /// 加载界面持续时间，0 表示跳过
    #[serde(default = "default_loading_ms")]
    pub loading_ms: u64,
}

fn default_loading_ms() -> u64 {
    DEFAULT_LOADING_MS
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            loading_ms: default_loading_ms(),
        }
    }
}

/// 存储配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// 任务文件路径；未设置时只保存在内存中
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    Ok(tasklist_dir()?.join("config.toml"))
}

/// 加载配置（不存在或无法解析则返回默认值）
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(e) => {
            tracing::warn!(error = %e, "config path unavailable, using defaults");
            Config::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    match load_toml(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Config::default()
        }
    }
}

/// 保存配置
pub fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    save_toml(path, config)
}
