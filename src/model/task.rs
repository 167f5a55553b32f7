use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 任务 ID（store 内唯一，由计数器分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 任务数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// 显示文本（已 trim，非空）
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// 创建时间（仅用于显示）
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// 复选框字形
    pub fn checkbox(&self) -> &'static str {
        if self.completed {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

/// 格式化相对时间
pub fn format_relative_time(dt: DateTime<Utc>) -> String {
    format_relative_time_from(dt, Utc::now())
}

fn format_relative_time_from(dt: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(dt);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "min")
    } else if hours < 24 {
        plural(hours, "hour")
    } else {
        plural(days, "day")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new(TaskId(7), "Buy milk");
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.checkbox(), "[ ]");
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId(42).to_string(), "#42");
    }

    #[test]
    fn test_format_relative_time() {
        let now = Utc::now();
        assert_eq!(format_relative_time_from(now, now), "just now");
        // 时钟回拨也视为刚刚
        assert_eq!(
            format_relative_time_from(now + Duration::seconds(30), now),
            "just now"
        );
        assert_eq!(
            format_relative_time_from(now - Duration::minutes(1), now),
            "1 min ago"
        );
        assert_eq!(
            format_relative_time_from(now - Duration::minutes(5), now),
            "5 mins ago"
        );
        assert_eq!(
            format_relative_time_from(now - Duration::hours(3), now),
            "3 hours ago"
        );
        assert_eq!(
            format_relative_time_from(now - Duration::days(1), now),
            "1 day ago"
        );
    }
}
