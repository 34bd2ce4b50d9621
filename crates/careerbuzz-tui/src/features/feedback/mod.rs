//! Feedback form slice.

mod render;
mod state;
mod update;

pub use render::render_feedback;
pub use state::{FeedbackField, FeedbackState, FeedbackStatus};
pub use update::handle_feedback_event;
