use serde::{Deserialize, Serialize};

use crate::core::format::format_ratio;
use crate::core::{PassFailCounts, ProgressRecord, TransactionRecord, UserProfile, total_amount};

/// Headline numbers shown next to the charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub greeting: String,
    pub login: String,
    pub email: String,
    pub audit_ratio: f64,
    pub audit_ratio_label: String,
    pub total_amount: f64,
    pub passes: usize,
    pub fails: usize,
}

impl ProfileSummary {
    #[must_use]
    pub fn build(
        profile: &UserProfile,
        transactions: &[TransactionRecord],
        progress: &[ProgressRecord],
    ) -> Self {
        let counts = PassFailCounts::from_progress(progress);
        let name = format!("{} {}", profile.first_name, profile.last_name);
        let name = name.trim();
        let greeting = if name.is_empty() {
            format!("Welcome, {}", profile.login)
        } else {
            format!("Welcome, {name}")
        };

        Self {
            greeting,
            login: profile.login.clone(),
            email: profile.email.clone(),
            audit_ratio: profile.audit_ratio,
            audit_ratio_label: format_ratio(profile.audit_ratio),
            total_amount: total_amount(transactions),
            passes: counts.passes,
            fails: counts.fails,
        }
    }
}
