mod app;
mod boot;
mod cli;
mod error;
mod event;
mod model;
mod storage;
mod theme;
mod ui;
mod ui_state;

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::sync::Mutex;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, Settings};
use storage::{MemoryRepository, TaskRepository, TomlRepository};

/// 日志级别环境变量（EnvFilter 语法）
const LOG_ENV: &str = "TASKLIST_LOG";

/// 初始化日志，写入 ~/.tasklist/tasklist.log（终端归 TUI 使用）
fn init_logging() -> error::Result<()> {
    let dir = storage::tasklist_dir()?;
    std::fs::create_dir_all(&dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("tasklist.log"))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| error::TaskListError::config(e.to_string()))
}

fn open_repository(settings: &Settings) -> Box<dyn TaskRepository> {
    match &settings.file {
        Some(path) => Box::new(TomlRepository::new(path)),
        None => Box::new(MemoryRepository::new()),
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let config = storage::config::load_config();
    let settings = Settings::resolve(&cli, &config, storage::config::config_path().ok());
    tracing::info!(
        loading_ms = settings.loading.as_millis() as u64,
        theme = settings.theme.label(),
        "starting"
    );

    // Set up panic hook to restore terminal state on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    let repo = open_repository(&settings);
    let mut app = App::new(settings, repo);

    // 初始化终端
    let mut terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(&mut terminal, &mut app);

    // 恢复终端
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    tracing::info!(tasks = app.store.len(), "exiting");
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::handle_events(app)? {
            break;
        }
    }
    Ok(())
}
