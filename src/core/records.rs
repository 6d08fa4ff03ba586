//! Input rows as delivered by the query service.
//!
//! Every field the service may omit is optional here; validation happens once
//! at the transform boundary through [`TransactionRecord::validate`] so the
//! transforms never trust shape at the access site.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::format::parse_timestamp;
use crate::error::{ChartError, ChartResult};

/// Reason a record was skipped by a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordIssue {
    MissingAmount,
    NonFiniteAmount,
    MissingTimestamp,
    InvalidTimestamp,
    /// The row could not be read as a record at all, e.g. a wrong-typed field.
    MalformedRow,
}

/// An amount-bearing transaction, e.g. one XP award.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Transaction whose required fields passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidTransaction<'a> {
    pub amount: f64,
    pub created_at: DateTime<Utc>,
    pub path: Option<&'a str>,
}

impl TransactionRecord {
    #[must_use]
    pub fn new(amount: f64, created_at: impl Into<String>) -> Self {
        Self {
            amount: Some(amount),
            created_at: Some(created_at.into()),
            path: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Returns the amount when present and finite.
    pub fn checked_amount(&self) -> Result<f64, RecordIssue> {
        match self.amount {
            None => Err(RecordIssue::MissingAmount),
            Some(amount) if !amount.is_finite() => Err(RecordIssue::NonFiniteAmount),
            Some(amount) => Ok(amount),
        }
    }

    /// Checks both required fields.
    pub fn validate(&self) -> Result<ValidTransaction<'_>, RecordIssue> {
        let amount = self.checked_amount()?;
        let created_at = checked_timestamp(self.created_at.as_deref())?;
        Ok(ValidTransaction {
            amount,
            created_at,
            path: self.path.as_deref(),
        })
    }
}

/// One progress entry; `grade == None` means the attempt is still running.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl ProgressRecord {
    #[must_use]
    pub fn new(grade: Option<f64>, created_at: impl Into<String>) -> Self {
        Self {
            grade,
            created_at: Some(created_at.into()),
            path: None,
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn timestamp(&self) -> Result<DateTime<Utc>, RecordIssue> {
        checked_timestamp(self.created_at.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub audit_ratio: f64,
}

fn checked_timestamp(raw: Option<&str>) -> Result<DateTime<Utc>, RecordIssue> {
    let raw = raw.ok_or(RecordIssue::MissingTimestamp)?;
    parse_timestamp(raw).ok_or(RecordIssue::InvalidTimestamp)
}

/// Parses a JSON array of transactions, skipping rows that do not decode.
pub fn parse_transactions(input: &str) -> ChartResult<Vec<TransactionRecord>> {
    parse_rows(input, "transactions")
}

/// Parses a JSON array of progress entries, skipping rows that do not decode.
pub fn parse_progress(input: &str) -> ChartResult<Vec<ProgressRecord>> {
    parse_rows(input, "progress entries")
}

pub fn parse_user_profile(input: &str) -> ChartResult<UserProfile> {
    serde_json::from_str(input)
        .map_err(|e| ChartError::Serialization(format!("failed to parse user profile: {e}")))
}

// Only a payload that is not an array fails; rows are decoded one by one.
fn parse_rows<T: DeserializeOwned>(input: &str, what: &str) -> ChartResult<Vec<T>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(input)
        .map_err(|e| ChartError::Serialization(format!("failed to parse {what}: {e}")))?;
    let row_count = rows.len();

    let records: Vec<T> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(position, row)| match serde_json::from_value(row) {
            Ok(record) => Some(record),
            Err(error) => {
                trace!(position, issue = ?RecordIssue::MalformedRow, %error, "skip malformed row");
                None
            }
        })
        .collect();

    debug!(what, row_count, kept_count = records.len(), "parsed rows");
    Ok(records)
}
