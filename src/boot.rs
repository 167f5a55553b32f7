//! 启动加载计时器
//!
//! 一次性、可取消的延迟切换：到期后从加载界面切换到任务列表，且不再回退。
//! 视图在到期前被销毁时调用 `cancel()`，挂起的切换被丢弃。

use std::time::{Duration, Instant};

/// 计时器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Pending,
    Fired,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct BootTimer {
    started_at: Instant,
    deadline: Instant,
    state: TimerState,
}

impl BootTimer {
    pub fn new(duration: Duration) -> Self {
        Self::starting_at(Instant::now(), duration)
    }

    pub fn starting_at(started_at: Instant, duration: Duration) -> Self {
        Self {
            started_at,
            deadline: started_at + duration,
            state: TimerState::Pending,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state() == TimerState::Pending
    }

    /// 检查是否到期，只在到期的那一次返回 true
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Pending && now >= self.deadline {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    /// 取消挂起的切换；已触发的计时器保持不变
    pub fn cancel(&mut self) -> bool {
        if self.state == TimerState::Pending {
            self.state = TimerState::Cancelled;
            return true;
        }
        false
    }

    /// 自启动以来经过的时间（用于加载动画）
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECS: Duration = Duration::from_millis(2000);

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = BootTimer::starting_at(start, TWO_SECS);

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(1999)));
        assert!(timer.is_pending());

        assert!(timer.poll(start + TWO_SECS));
        assert_eq!(timer.state(), TimerState::Fired);

        // 之后不再触发
        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert_eq!(timer.state(), TimerState::Fired);
    }

    #[test]
    fn test_cancel_before_deadline_discards_transition() {
        let start = Instant::now();
        let mut timer = BootTimer::starting_at(start, TWO_SECS);

        assert!(timer.cancel());
        assert_eq!(timer.state(), TimerState::Cancelled);
        assert!(!timer.poll(start + Duration::from_secs(5)));
        assert_eq!(timer.state(), TimerState::Cancelled);
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let start = Instant::now();
        let mut timer = BootTimer::starting_at(start, TWO_SECS);
        timer.poll(start + TWO_SECS);

        assert!(!timer.cancel());
        assert_eq!(timer.state(), TimerState::Fired);
    }

    #[test]
    fn test_zero_duration_fires_on_first_poll() {
        let start = Instant::now();
        let mut timer = BootTimer::starting_at(start, Duration::ZERO);
        assert!(timer.poll(start));
    }

    #[test]
    fn test_elapsed() {
        let start = Instant::now();
        let timer = BootTimer::starting_at(start, TWO_SECS);
        assert_eq!(
            timer.elapsed(start + Duration::from_millis(250)),
            Duration::from_millis(250)
        );
    }
}
