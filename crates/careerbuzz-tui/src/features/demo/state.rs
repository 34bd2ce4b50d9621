use careerbuzz_core::analysis::DemoResultView;
use serde_json::Value;

use crate::common::TextField;

/// Demo lifecycle. A new submission from a terminal phase re-enters
/// `Submitting`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DemoPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

#[derive(Debug, Default)]
pub struct DemoState {
    /// Raw comma-separated skills text.
    pub draft: TextField,
    pub phase: DemoPhase,
    /// Last completed result: the response body, or the failure object.
    pub result: Option<Value>,
}

impl DemoState {
    pub fn is_submitting(&self) -> bool {
        self.phase == DemoPhase::Submitting
    }

    pub fn result_view(&self) -> Option<DemoResultView> {
        self.result.as_ref().map(DemoResultView::classify)
    }
}
