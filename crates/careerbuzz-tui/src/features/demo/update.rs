//! Demo reducer.
//!
//! The single-flight guard lives here: a submit while `Submitting` is dropped
//! without emitting a request.

use careerbuzz_core::analysis::{failure_result, parse_skills};

use super::{DemoPhase, DemoState};
use crate::common::{TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::events::DemoUiEvent;

pub fn handle_demo_event(
    demo: &mut DemoState,
    tasks: &mut Tasks,
    task_seq: &mut TaskSeq,
    event: DemoUiEvent,
) -> Vec<UiEffect> {
    match event {
        DemoUiEvent::InputChanged(text) => {
            demo.draft.set(text);
            vec![]
        }
        DemoUiEvent::Submit => submit(demo, tasks, task_seq),
        DemoUiEvent::Analyzed(body) => {
            demo.result = Some(body);
            demo.phase = DemoPhase::Success;
            tracing::debug!("Demo analysis completed");
            vec![]
        }
        DemoUiEvent::AnalyzeFailed => {
            demo.result = Some(failure_result());
            demo.phase = DemoPhase::Failure;
            vec![]
        }
    }
}

fn submit(demo: &mut DemoState, tasks: &mut Tasks, task_seq: &mut TaskSeq) -> Vec<UiEffect> {
    if demo.draft.is_blank() {
        return vec![];
    }
    if demo.is_submitting() {
        tracing::debug!("Demo submit ignored: analysis already in flight");
        return vec![];
    }

    let skills = parse_skills(demo.draft.text());
    let task = task_seq.next_id();
    tasks.demo_analyze.start(task);
    demo.phase = DemoPhase::Submitting;

    vec![UiEffect::AnalyzeSkills { task, skills }]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn submit_with(demo: &mut DemoState, tasks: &mut Tasks, seq: &mut TaskSeq) -> Vec<UiEffect> {
        handle_demo_event(demo, tasks, seq, DemoUiEvent::Submit)
    }

    #[test]
    fn test_blank_draft_is_noop() {
        let mut demo = DemoState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();

        for draft in ["", "   ", "\t"] {
            demo.draft.set(draft);
            assert!(submit_with(&mut demo, &mut tasks, &mut seq).is_empty());
        }
        assert_eq!(demo.phase, DemoPhase::Idle);
        assert_eq!(demo.result, None);
        assert!(!tasks.is_any_running());
    }

    #[test]
    fn test_submit_emits_split_skills() {
        let mut demo = DemoState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        demo.draft.set("python, sql, pandas");

        let effects = submit_with(&mut demo, &mut tasks, &mut seq);

        let [UiEffect::AnalyzeSkills { task, skills }] = effects.as_slice() else {
            panic!("expected one analyze effect, got {effects:?}");
        };
        assert_eq!(skills, &["python", "sql", "pandas"]);
        assert_eq!(tasks.demo_analyze.active, Some(*task));
        assert_eq!(demo.phase, DemoPhase::Submitting);
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let mut demo = DemoState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        demo.draft.set("java");

        assert_eq!(submit_with(&mut demo, &mut tasks, &mut seq).len(), 1);
        assert!(submit_with(&mut demo, &mut tasks, &mut seq).is_empty());
    }

    #[test]
    fn test_result_replaced_by_each_completion() {
        let mut demo = DemoState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();

        handle_demo_event(
            &mut demo,
            &mut tasks,
            &mut seq,
            DemoUiEvent::Analyzed(json!(["Data Analyst"])),
        );
        assert_eq!(demo.phase, DemoPhase::Success);

        handle_demo_event(&mut demo, &mut tasks, &mut seq, DemoUiEvent::AnalyzeFailed);
        assert_eq!(demo.phase, DemoPhase::Failure);
        assert_eq!(demo.result, Some(json!({ "error": "Server error. Try later." })));

        demo.draft.set("go");
        assert_eq!(submit_with(&mut demo, &mut tasks, &mut seq).len(), 1);
        assert_eq!(demo.phase, DemoPhase::Submitting);
    }

    #[test]
    fn test_blank_submit_keeps_previous_result() {
        let mut demo = DemoState::default();
        let mut tasks = Tasks::default();
        let mut seq = TaskSeq::default();
        demo.draft.set("java");
        submit_with(&mut demo, &mut tasks, &mut seq);
        handle_demo_event(
            &mut demo,
            &mut tasks,
            &mut seq,
            DemoUiEvent::Analyzed(json!(["Backend Developer"])),
        );

        demo.draft.set("  ");
        let effects = submit_with(&mut demo, &mut tasks, &mut seq);

        assert!(effects.is_empty());
        assert_eq!(demo.phase, DemoPhase::Success);
        assert_eq!(demo.result, Some(json!(["Backend Developer"])));
    }
}
