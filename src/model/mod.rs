pub mod store;
pub mod task;

pub use store::TaskStore;
pub use task::{format_relative_time, Task, TaskId};
