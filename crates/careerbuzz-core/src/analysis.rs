//! Skills draft parsing and analyze-response classification.
//!
//! The analyze endpoint is loosely typed: depending on the deployment it
//! answers with a bare list of careers (strings or `{title}` records), an
//! `{enteredSkills, suggestedCareers}` object, or an `{error}` object.
//! `DemoResultView::classify` resolves the stored JSON into one explicit
//! variant per shape so the render paths never probe the JSON themselves.

use serde_json::Value;

/// Message stored as the demo result when the analyze call fails.
pub const ANALYZE_FAILURE_MESSAGE: &str = "Server error. Try later.";

/// Splits a comma-separated skills draft into the request list.
///
/// Each segment is trimmed; empty segments are kept so the service sees the
/// draft exactly as typed.
pub fn parse_skills(draft: &str) -> Vec<String> {
    draft.split(',').map(|s| s.trim().to_string()).collect()
}

/// Failure body stored in place of a response.
pub fn failure_result() -> Value {
    serde_json::json!({ "error": ANALYZE_FAILURE_MESSAGE })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoResultView {
    /// Top-level array of careers.
    Careers(Vec<String>),
    /// Object echoing the entered skills next to the suggested careers.
    Analysis {
        entered_skills: Vec<String>,
        suggested_careers: Vec<String>,
    },
    /// Object carrying an `error` message.
    Error(String),
    /// Any other JSON value, rendered as text.
    Raw(String),
}

impl DemoResultView {
    pub fn classify(value: &Value) -> Self {
        if let Value::Array(items) = value {
            return DemoResultView::Careers(items.iter().map(career_label).collect());
        }

        if let Some(error) = value.get("error").and_then(Value::as_str) {
            return DemoResultView::Error(error.to_string());
        }

        let entered = field(value, "enteredSkills", "entered_skills").and_then(Value::as_array);
        let suggested =
            field(value, "suggestedCareers", "suggested_careers").and_then(Value::as_array);
        if let (Some(entered), Some(suggested)) = (entered, suggested) {
            return DemoResultView::Analysis {
                entered_skills: entered.iter().map(career_label).collect(),
                suggested_careers: suggested.iter().map(career_label).collect(),
            };
        }

        DemoResultView::Raw(compact_json(value))
    }
}

fn field<'a>(value: &'a Value, camel: &str, snake: &str) -> Option<&'a Value> {
    value.get(camel).or_else(|| value.get(snake))
}

/// Display label for one list element: the string itself, the `title` of a
/// record, or the element as compact JSON.
fn career_label(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other
            .get("title")
            .and_then(Value::as_str)
            .map_or_else(|| compact_json(other), ToString::to_string),
    }
}

fn compact_json(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
