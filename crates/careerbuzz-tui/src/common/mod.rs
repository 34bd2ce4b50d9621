//! Shared building blocks for the landing TUI.

mod task;
mod text;
mod text_field;

pub use task::{TaskCompleted, TaskId, TaskKind, TaskSeq, TaskState, Tasks};
pub use text::{truncate_start_with_ellipsis, truncate_with_ellipsis};
pub use text_field::TextField;
