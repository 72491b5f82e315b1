use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Every edit the patchers know how to make, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    ClockHelper,
    CurrentMinutes,
    ShiftWindow,
    FilterNotStarted,
    GlobalStats,
    ExportCounts,
    RamadanDayLabel,
    MobileStats,
    DateKeyHelper,
    CurrentDateKey,
}

impl Step {
    pub fn name(self) -> &'static str {
        match self {
            Step::ClockHelper => "clock_helper",
            Step::CurrentMinutes => "current_minutes",
            Step::ShiftWindow => "shift_window",
            Step::FilterNotStarted => "filter_not_started",
            Step::GlobalStats => "global_stats",
            Step::ExportCounts => "export_counts",
            Step::RamadanDayLabel => "ramadan_day_label",
            Step::MobileStats => "mobile_stats",
            Step::DateKeyHelper => "date_key_helper",
            Step::CurrentDateKey => "current_date_key",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    /// Zero means the pattern was absent and the text was left as is.
    pub matches: usize,
}

/// Result of running one patcher over an in-memory text blob.
#[derive(Debug, Clone)]
pub struct Patched {
    pub text: String,
    pub steps: Vec<StepOutcome>,
}

impl Patched {
    pub(crate) fn new(text: String) -> Self {
        Self {
            text,
            steps: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, step: Step, matches: usize) {
        if matches == 0 {
            tracing::debug!(step = step.name(), "pattern not found, text left unchanged");
        } else {
            tracing::debug!(step = step.name(), matches, "edit applied");
        }
        self.steps.push(StepOutcome { step, matches });
    }

    pub fn matches(&self, step: Step) -> Option<usize> {
        self.steps
            .iter()
            .find(|outcome| outcome.step == step)
            .map(|outcome| outcome.matches)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PatchReport {
    pub target: PathBuf,
    pub patched_at: DateTime<Utc>,
    pub steps: Vec<StepOutcome>,
}

impl PatchReport {
    pub fn new(target: &Path, steps: Vec<StepOutcome>) -> Self {
        Self {
            target: target.to_path_buf(),
            patched_at: Utc::now(),
            steps,
        }
    }

    pub fn total_matches(&self) -> usize {
        self.steps.iter().map(|outcome| outcome.matches).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn report_serializes_step_names() {
        let report = PatchReport::new(
            Path::new("app.js"),
            vec![
                StepOutcome {
                    step: Step::ClockHelper,
                    matches: 1,
                },
                StepOutcome {
                    step: Step::ShiftWindow,
                    matches: 0,
                },
            ],
        );
        let body: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(body.get("target").and_then(|v| v.as_str()), Some("app.js"));
        let steps = body.get("steps").and_then(|v| v.as_array()).unwrap();
        assert_eq!(steps[0].get("step").and_then(|v| v.as_str()), Some("clock_helper"));
        assert_eq!(steps[1].get("matches").and_then(|v| v.as_u64()), Some(0));
        assert!(body.get("patched_at").is_some());
        assert_eq!(report.total_matches(), 1);
    }

    #[test]
    fn step_names_match_serialized_form() {
        for step in [Step::CurrentMinutes, Step::RamadanDayLabel, Step::CurrentDateKey] {
            let json = serde_json::to_string(&step).unwrap();
            assert_eq!(json, format!("\"{}\"", step.name()));
        }
    }
}
