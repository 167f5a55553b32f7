//! CLI 模块

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::storage::config::Config;
use crate::theme::Theme;

#[derive(Parser, Debug, Default)]
#[command(name = "tasklist")]
#[command(version)]
#[command(about = "A small task list for the terminal")]
pub struct Cli {
    /// Keep tasks in this TOML file (default: in-memory, discarded on exit)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Loading screen duration in milliseconds
    #[arg(long, value_name = "MS")]
    pub loading_ms: Option<u64>,

    /// Skip the loading screen (same as --loading-ms 0)
    #[arg(long, conflicts_with = "loading_ms")]
    pub no_splash: bool,

    /// Color theme (Auto, Dark, Light, Dracula, Nord, Gruvbox, "Tokyo Night", Catppuccin)
    #[arg(short, long)]
    pub theme: Option<String>,
}

/// 合并 CLI 参数与配置文件后的运行设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub loading: Duration,
    pub theme: Theme,
    pub file: Option<PathBuf>,
    /// 主题变更写回的配置文件；`None` 表示不写
    pub config_path: Option<PathBuf>,
}

impl Settings {
    /// CLI 优先于配置文件，配置文件优先于默认值
    pub fn resolve(cli: &Cli, config: &Config, config_path: Option<PathBuf>) -> Self {
        let loading_ms = if cli.no_splash {
            0
        } else {
            cli.loading_ms.unwrap_or(config.boot.loading_ms)
        };

        let theme_name = cli.theme.as_deref().unwrap_or(&config.theme.name);

        Self {
            loading: Duration::from_millis(loading_ms),
            theme: Theme::from_name(theme_name),
            file: cli.file.clone().or_else(|| config.storage.file.clone()),
            config_path,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&Cli::default(), &Config::default(), None)
    }
}
