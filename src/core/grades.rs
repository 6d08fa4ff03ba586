use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::category::derive_category_name;
use crate::core::format::format_timestamp_label;
use crate::core::records::ProgressRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeOutcome {
    Pass,
    Fail,
    InProgress,
}

impl GradeOutcome {
    /// Classifies a raw grade for result listings.
    ///
    /// `>= 1` passes, any other finite grade fails and a missing or
    /// non-finite grade is still in progress. [`PassFailCounts`] is stricter
    /// about what counts as a fail.
    #[must_use]
    pub fn from_grade(grade: Option<f64>) -> Self {
        match grade {
            Some(grade) if !grade.is_finite() => Self::InProgress,
            Some(grade) if grade >= 1.0 => Self::Pass,
            Some(_) => Self::Fail,
            None => Self::InProgress,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Fail => "✗",
            Self::InProgress => "⋯",
        }
    }
}

/// Attempt counts feeding the pass/fail proportion chart.
///
/// Only a grade of exactly zero is a fail here. Other grades below one are
/// `partial` and count toward neither side of the proportion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PassFailCounts {
    pub passes: usize,
    pub fails: usize,
    pub partial: usize,
    pub in_progress: usize,
}

impl PassFailCounts {
    #[must_use]
    pub fn from_progress(records: &[ProgressRecord]) -> Self {
        records
            .iter()
            .fold(Self::default(), |mut counts, record| {
                match (GradeOutcome::from_grade(record.grade), record.grade) {
                    (GradeOutcome::Pass, _) => counts.passes += 1,
                    (GradeOutcome::InProgress, _) => counts.in_progress += 1,
                    (GradeOutcome::Fail, Some(grade)) if grade == 0.0 => counts.fails += 1,
                    (GradeOutcome::Fail, _) => counts.partial += 1,
                }
                counts
            })
    }

    /// Attempts on either side of the proportion.
    #[must_use]
    pub fn decided(self) -> usize {
        self.passes + self.fails
    }
}

/// Most recent outcome for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentResult {
    pub project: String,
    pub outcome: GradeOutcome,
    /// Empty when the record carried no parseable timestamp.
    pub date_label: String,
}

/// Keeps the first record per derived project name.
///
/// Input is expected newest first, so the first occurrence is the latest
/// result for that project.
#[must_use]
pub fn latest_results(records: &[ProgressRecord], label_format: &str) -> Vec<RecentResult> {
    let mut latest: IndexMap<&str, &ProgressRecord> = IndexMap::new();
    for record in records {
        latest
            .entry(derive_category_name(record.path.as_deref()))
            .or_insert(record);
    }

    let results: Vec<RecentResult> = latest
        .into_iter()
        .map(|(project, record)| RecentResult {
            project: project.to_owned(),
            outcome: GradeOutcome::from_grade(record.grade),
            date_label: record
                .timestamp()
                .map(|time| format_timestamp_label(time, label_format))
                .unwrap_or_default(),
        })
        .collect();

    debug!(
        input_count = records.len(),
        unique_count = results.len(),
        "deduplicated recent results"
    );
    results
}
