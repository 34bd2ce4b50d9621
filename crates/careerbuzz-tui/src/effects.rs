//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only; the reducer never performs
//! either directly.

use careerbuzz_core::api::FeedbackRequest;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Flip and persist the theme preference.
    ToggleTheme,

    /// Run the skills analysis under the given task id.
    AnalyzeSkills { task: TaskId, skills: Vec<String> },

    /// Submit a snapshot of the feedback form.
    SubmitFeedback { request: FeedbackRequest },

    /// Send one chat message.
    SendChat { message: String },
}
