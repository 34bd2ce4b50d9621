//! One-shot skills analysis.

use std::fmt::Write as _;

use anyhow::{Result, bail};
use careerbuzz_core::analysis::{ANALYZE_FAILURE_MESSAGE, DemoResultView, parse_skills};
use careerbuzz_core::api::{AnalyzeRequest, CareerApi, HttpCareerApi};
use careerbuzz_core::config::Config;

pub async fn run(config: &Config, skills: &str) -> Result<()> {
    if skills.trim().is_empty() {
        bail!("--skills must list at least one skill");
    }

    let api = HttpCareerApi::from_config(config)?;
    let request = AnalyzeRequest {
        skills: parse_skills(skills),
    };

    let body = match api.analyze(request).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("Skills analysis failed: {err:#}");
            bail!(ANALYZE_FAILURE_MESSAGE);
        }
    };

    match DemoResultView::classify(&body) {
        DemoResultView::Error(message) => bail!(message),
        view => {
            print!("{}", format_view(&view));
            Ok(())
        }
    }
}

fn format_view(view: &DemoResultView) -> String {
    let mut out = String::new();
    let careers = match view {
        DemoResultView::Careers(careers) => careers,
        DemoResultView::Analysis {
            entered_skills,
            suggested_careers,
        } => {
            let _ = writeln!(out, "Entered skills: {}", entered_skills.join(", "));
            suggested_careers
        }
        DemoResultView::Error(message) => {
            let _ = writeln!(out, "{message}");
            return out;
        }
        DemoResultView::Raw(text) => {
            let _ = writeln!(out, "{text}");
            return out;
        }
    };

    if careers.is_empty() {
        out.push_str("No careers suggested.\n");
        return out;
    }
    out.push_str("Suggested careers:\n");
    for career in careers {
        let _ = writeln!(out, "  - {career}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_analysis() {
        let view = DemoResultView::Analysis {
            entered_skills: vec!["java".into()],
            suggested_careers: vec!["Backend Developer".into(), "Android Developer".into()],
        };

        assert_eq!(
            format_view(&view),
            "Entered skills: java\nSuggested careers:\n  - Backend Developer\n  - Android Developer\n"
        );
    }

    #[test]
    fn test_format_empty_career_list() {
        assert_eq!(
            format_view(&DemoResultView::Careers(Vec::new())),
            "No careers suggested.\n"
        );
    }

    #[test]
    fn test_format_raw() {
        assert_eq!(
            format_view(&DemoResultView::Raw("{\"ok\":true}".into())),
            "{\"ok\":true}\n"
        );
    }
}
