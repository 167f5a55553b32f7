use std::path::PathBuf;
use std::time::Instant;

use crate::boot::BootTimer;
use crate::cli::Settings;
use crate::model::{TaskId, TaskStore};
use crate::storage::config::{load_config_from, save_config_to};
use crate::storage::{MemoryRepository, TaskRepository};
use crate::theme::Theme;
use crate::ui_state::UiState;

/// 应用阶段：加载界面 → 任务列表，只前进不回退
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// 输入模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// 列表导航
    Normal,
    /// 正在输入新任务
    Editing,
}

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    pub phase: Phase,
    /// 启动加载计时器
    pub boot: BootTimer,
    /// 任务列表
    pub store: TaskStore,
    /// 任务存储后端
    repo: Box<dyn TaskRepository>,
    /// 新任务输入内容
    pub input: String,
    pub input_mode: InputMode,
    /// 当前选中行
    pub selected: Option<usize>,
    /// 列表滚动偏移（渲染时维护）
    pub list_offset: usize,
    /// UI 状态（主题、Toast、弹窗、点击区域）
    pub ui: UiState,
    /// 主题变更写回的配置文件
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new(settings: Settings, repo: Box<dyn TaskRepository>) -> Self {
        let mut ui = UiState::new(settings.theme);

        // 加载失败时退回内存存储，避免覆盖用户的文件
        let (store, repo) = match repo.load() {
            Ok(tasks) => {
                tracing::info!(backend = %repo.describe(), count = tasks.len(), "tasks loaded");
                (TaskStore::from_tasks(tasks), repo)
            }
            Err(e) => {
                tracing::warn!(backend = %repo.describe(), error = %e, "failed to load tasks");
                ui.show_toast(format!("Load failed, changes won't be saved: {}", e));
                let fallback: Box<dyn TaskRepository> = Box::new(MemoryRepository::new());
                (TaskStore::new(), fallback)
            }
        };

        let selected = if store.is_empty() { None } else { Some(0) };

        Self {
            should_quit: false,
            phase: Phase::Loading,
            boot: BootTimer::new(settings.loading),
            store,
            repo,
            input: String::new(),
            input_mode: InputMode::Normal,
            selected,
            list_offset: 0,
            ui,
            config_path: settings.config_path,
        }
    }

    /// 每轮主循环调用：推进加载计时器、清理过期 Toast
    pub fn tick(&mut self, now: Instant) {
        if self.phase == Phase::Loading && self.boot.poll(now) {
            tracing::debug!("loading finished");
            self.phase = Phase::Ready;
        }
        self.ui.clear_expired_toast();
        self.ui.check_system_theme();
    }

    /// 退出应用；加载中退出会丢弃挂起的切换
    pub fn quit(&mut self) {
        if self.boot.cancel() {
            tracing::debug!("loading cancelled by teardown");
        }
        self.should_quit = true;
    }

    // ========== Input ==========

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    /// 退出输入模式（保留草稿）
    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// 提交输入框内容；空白内容不创建任务也不清空草稿
    pub fn submit_input(&mut self) {
        let Some(id) = self.store.add(&self.input) else {
            return;
        };
        self.input.clear();
        self.selected = self.store.position(id);
        tracing::debug!(%id, "task added");
        self.persist();
    }

    // ========== Task Actions ==========

    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected
            .and_then(|i| self.store.view().get(i))
            .map(|t| t.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.toggle_task(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.delete_task(id);
        }
    }

    pub fn toggle_task(&mut self, id: TaskId) {
        if self.store.toggle(id) {
            let completed = self.store.get(id).is_some_and(|t| t.completed);
            tracing::debug!(%id, completed, "task toggled");
            self.persist();
        }
    }

    pub fn delete_task(&mut self, id: TaskId) {
        let Some(task) = self.store.delete(id) else {
            return;
        };
        tracing::debug!(%id, "task deleted");
        self.clamp_selection();
        self.ui.show_toast(format!("Deleted: {}", task.text));
        self.persist();
    }

    /// 保存当前列表；失败只提示，内存中的列表仍然有效
    fn persist(&mut self) {
        if let Err(e) = self.repo.save(self.store.view()) {
            tracing::warn!(backend = %self.repo.describe(), error = %e, "failed to save tasks");
            self.ui.show_toast(format!("Save failed: {}", e));
        }
    }

    pub fn backend_label(&self) -> String {
        self.repo.describe()
    }

    // ========== Selection ==========

    pub fn select(&mut self, index: usize) {
        if index < self.store.len() {
            self.selected = Some(index);
        }
    }

    /// 选中下一项（循环）
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let next = self.selected.map_or(0, |i| (i + 1) % len);
        self.selected = Some(next);
    }

    /// 选中上一项（循环）
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let prev = match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.selected = Some(prev);
    }

    /// 删除后保持相同索引，超出末尾则选中最后一项
    fn clamp_selection(&mut self) {
        let len = self.store.len();
        self.selected = match self.selected {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    // ========== Theme ==========

    pub fn confirm_theme(&mut self) {
        let theme = self.ui.theme_selector_confirm();
        self.ui.show_toast(format!("Theme: {}", theme.label()));
        self.save_theme(theme);
    }

    fn save_theme(&self, theme: Theme) {
        let Some(path) = &self.config_path else {
            return;
        };
        let mut config = load_config_from(path);
        config.theme.name = theme.label().to_string();
        if let Err(e) = save_config_to(path, &config) {
            tracing::warn!(error = %e, "failed to save theme");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::error::{Result, TaskListError};
    use crate::model::Task;

    fn test_app() -> App {
        App::new(Settings::default(), Box::new(MemoryRepository::new()))
    }

    fn texts(app: &App) -> Vec<&str> {
        app.store.view().iter().map(|t| t.text.as_str()).collect()
    }

    fn type_and_submit(app: &mut App, text: &str) {
        app.start_editing();
        for c in text.chars() {
            app.input_char(c);
        }
        app.submit_input();
    }

    /// 记录 save 次数，可选择让 save 失败
    struct CountingRepo {
        saves: Rc<Cell<usize>>,
        fail: bool,
    }

    impl TaskRepository for CountingRepo {
        fn load(&self) -> Result<Vec<Task>> {
            Ok(Vec::new())
        }
        fn save(&self, _tasks: &[Task]) -> Result<()> {
            self.saves.set(self.saves.get() + 1);
            if self.fail {
                return Err(TaskListError::storage("read-only"));
            }
            Ok(())
        }
        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    struct BrokenRepo;

    impl TaskRepository for BrokenRepo {
        fn load(&self) -> Result<Vec<Task>> {
            Err(TaskListError::storage("corrupt"))
        }
        fn save(&self, _tasks: &[Task]) -> Result<()> {
            panic!("must not save to a repository that failed to load");
        }
        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    #[test]
    fn test_loading_phase_until_deadline() {
        let mut app = test_app();
        let start = Instant::now();
        app.boot = BootTimer::starting_at(start, Duration::from_millis(2000));

        app.tick(start + Duration::from_millis(1000));
        assert_eq!(app.phase, Phase::Loading);

        app.tick(start + Duration::from_millis(2000));
        assert_eq!(app.phase, Phase::Ready);

        // 不会回到加载界面
        app.tick(start + Duration::from_millis(5000));
        assert_eq!(app.phase, Phase::Ready);
    }

    #[test]
    fn test_quit_during_loading_cancels_timer() {
        let mut app = test_app();
        let start = Instant::now();
        app.boot = BootTimer::starting_at(start, Duration::from_millis(2000));

        app.quit();
        assert!(app.should_quit);
        assert!(!app.boot.is_pending());

        app.tick(start + Duration::from_secs(3));
        assert_eq!(app.phase, Phase::Loading);
    }

    #[test]
    fn test_submit_adds_and_clears_input() {
        let mut app = test_app();
        type_and_submit(&mut app, "  Buy milk ");

        assert_eq!(texts(&app), vec!["Buy milk"]);
        assert!(app.input.is_empty());
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_submit_blank_keeps_draft() {
        let mut app = test_app();
        type_and_submit(&mut app, "   ");

        assert!(app.store.is_empty());
        assert_eq!(app.input, "   ");
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_new_task_is_selected() {
        let mut app = test_app();
        type_and_submit(&mut app, "A");
        type_and_submit(&mut app, "B");
        assert_eq!(app.selected, Some(1));
        assert_eq!(texts(&app), vec!["A", "B"]);
    }

    #[test]
    fn test_toggle_and_delete_selected() {
        let mut app = test_app();
        type_and_submit(&mut app, "Buy milk");

        app.toggle_selected();
        assert!(app.store.view()[0].completed);

        app.delete_selected();
        assert!(app.store.is_empty());
        assert_eq!(app.selected, None);
        assert_eq!(
            app.ui.toast.as_ref().map(|t| t.message.as_str()),
            Some("Deleted: Buy milk")
        );
    }

    #[test]
    fn test_delete_clamps_selection() {
        let mut app = test_app();
        for t in ["A", "B", "C"] {
            type_and_submit(&mut app, t);
        }

        app.select(1);
        app.delete_selected();
        assert_eq!(texts(&app), vec!["A", "C"]);
        assert_eq!(app.selected, Some(1));

        app.delete_selected();
        assert_eq!(texts(&app), vec!["A"]);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_actions_on_empty_list_are_noops() {
        let mut app = test_app();
        app.toggle_selected();
        app.delete_selected();
        app.select_next();
        app.select_previous();
        assert!(app.store.is_empty());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = test_app();
        for t in ["A", "B", "C"] {
            type_and_submit(&mut app, t);
        }
        app.select(0);
        app.select_previous();
        assert_eq!(app.selected, Some(2));
        app.select_next();
        assert_eq!(app.selected, Some(0));

        // 越界选择被忽略
        app.select(10);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_persists_only_on_change() {
        let saves = Rc::new(Cell::new(0));
        let repo = CountingRepo {
            saves: Rc::clone(&saves),
            fail: false,
        };
        let mut app = App::new(Settings::default(), Box::new(repo));

        type_and_submit(&mut app, "A");
        assert_eq!(saves.get(), 1);

        type_and_submit(&mut app, "   ");
        app.toggle_task(TaskId(999));
        app.delete_task(TaskId(999));
        assert_eq!(saves.get(), 1);

        app.toggle_selected();
        app.delete_selected();
        assert_eq!(saves.get(), 3);
    }

    #[test]
    fn test_save_failure_keeps_list() {
        let saves = Rc::new(Cell::new(0));
        let repo = CountingRepo {
            saves: Rc::clone(&saves),
            fail: true,
        };
        let mut app = App::new(Settings::default(), Box::new(repo));

        type_and_submit(&mut app, "A");
        assert_eq!(texts(&app), vec!["A"]);
        assert!(app
            .ui
            .toast
            .as_ref()
            .is_some_and(|t| t.message.starts_with("Save failed")));
    }

    #[test]
    fn test_load_failure_falls_back_to_memory() {
        let mut app = App::new(Settings::default(), Box::new(BrokenRepo));
        assert!(app.store.is_empty());
        assert_eq!(app.backend_label(), "in-memory");

        // 不会写回损坏的存储
        type_and_submit(&mut app, "A");
        assert_eq!(texts(&app), vec!["A"]);
    }

    #[test]
    fn test_loads_existing_tasks() {
        let repo = MemoryRepository::new();
        repo.save(&[Task::new(TaskId(4), "from disk")]).unwrap();

        let mut app = App::new(Settings::default(), Box::new(repo));
        assert_eq!(texts(&app), vec!["from disk"]);
        assert_eq!(app.selected, Some(0));

        type_and_submit(&mut app, "next");
        assert_eq!(app.store.view()[1].id, TaskId(5));
    }

    #[test]
    fn test_confirm_theme_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let settings = Settings {
            theme: Theme::Dark,
            config_path: Some(path.clone()),
            ..Settings::default()
        };
        let mut app = App::new(settings, Box::new(MemoryRepository::new()));

        app.ui.open_theme_selector();
        app.ui.theme_selector_next();
        app.confirm_theme();

        assert_eq!(app.ui.theme, Theme::Light);
        assert_eq!(load_config_from(&path).theme.name, "Light");
    }
}
