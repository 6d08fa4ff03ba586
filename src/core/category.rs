use std::cmp::Reverse;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::Category;
use crate::core::records::TransactionRecord;
use crate::error::{ChartError, ChartResult};

/// Name used when a path yields no usable segment.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Derives a category name from a slash-delimited path.
///
/// Precedence: last segment, then second-to-last segment, then
/// [`UNKNOWN_CATEGORY`]. Earlier segments are never consulted, so
/// `"a//"` resolves to the sentinel.
#[must_use]
pub fn derive_category_name(path: Option<&str>) -> &str {
    let Some(path) = path else {
        return UNKNOWN_CATEGORY;
    };

    let mut segments = path.rsplit('/');
    let last = segments.next().unwrap_or_default();
    if !last.is_empty() {
        return last;
    }
    match segments.next() {
        Some(previous) if !previous.is_empty() => previous,
        _ => UNKNOWN_CATEGORY,
    }
}

/// Grouping options for [`aggregate_categories`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Case-insensitive substrings; empty tokens are ignored.
    #[serde(default = "default_exclude_tokens")]
    pub exclude_tokens: Vec<String>,
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            exclude_tokens: default_exclude_tokens(),
            top_n: default_top_n(),
        }
    }
}

impl AggregationConfig {
    #[must_use]
    pub fn new(exclude_tokens: Vec<String>, top_n: usize) -> Self {
        Self {
            exclude_tokens,
            top_n,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.top_n == 0 {
            return Err(ChartError::InvalidConfig("top_n must be > 0".to_owned()));
        }
        Ok(())
    }
}

pub(crate) fn default_exclude_tokens() -> Vec<String> {
    vec!["deprecated".to_owned()]
}

pub(crate) fn default_top_n() -> usize {
    8
}

/// Sums amounts per derived category in first-seen order, without ranking.
///
/// Records without a finite amount and categories matching an exclude token
/// are skipped.
#[must_use]
pub fn category_totals(records: &[TransactionRecord], exclude_tokens: &[String]) -> Vec<Category> {
    let tokens: SmallVec<[String; 4]> = exclude_tokens
        .iter()
        .map(|token| token.to_lowercase())
        .filter(|token| !token.is_empty())
        .collect();

    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for (position, record) in records.iter().enumerate() {
        let amount = match record.checked_amount() {
            Ok(amount) => amount,
            Err(issue) => {
                trace!(position, ?issue, "skip malformed transaction");
                continue;
            }
        };
        let name = derive_category_name(record.path.as_deref());
        if is_excluded(name, &tokens) {
            trace!(position, name, "skip excluded category");
            continue;
        }
        *totals.entry(name).or_insert(0.0) += amount;
    }

    totals
        .into_iter()
        .map(|(name, total)| Category::new(name, total))
        .collect()
}

/// Groups records by category, ranks by descending total and keeps `top_n`.
///
/// Ties keep first-seen order. Fails only when the configuration itself is
/// invalid.
pub fn aggregate_categories(
    records: &[TransactionRecord],
    config: &AggregationConfig,
) -> ChartResult<Vec<Category>> {
    config.validate()?;

    let mut categories = category_totals(records, &config.exclude_tokens);
    let grouped_count = categories.len();
    categories.sort_by_key(|category| Reverse(OrderedFloat(category.total)));
    categories.truncate(config.top_n);

    debug!(
        input_count = records.len(),
        grouped_count,
        kept_count = categories.len(),
        "aggregated categories"
    );
    Ok(categories)
}

fn is_excluded(name: &str, lowered_tokens: &[String]) -> bool {
    let name = name.to_lowercase();
    lowered_tokens
        .iter()
        .any(|token| name.contains(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_fallback_order() {
        assert_eq!(derive_category_name(Some("/school/div-01/graphql")), "graphql");
        assert_eq!(derive_category_name(Some("/school/div-01/")), "div-01");
        assert_eq!(derive_category_name(Some("single")), "single");
        assert_eq!(derive_category_name(Some("a//")), UNKNOWN_CATEGORY);
        assert_eq!(derive_category_name(Some("/")), UNKNOWN_CATEGORY);
        assert_eq!(derive_category_name(Some("")), UNKNOWN_CATEGORY);
        assert_eq!(derive_category_name(None), UNKNOWN_CATEGORY);
    }

    #[test]
    fn empty_tokens_do_not_exclude_everything() {
        let records = vec![TransactionRecord::new(5.0, "2024-01-01T00:00:00Z").with_path("/a/b")];
        let totals = category_totals(&records, &[String::new()]);
        assert_eq!(totals, vec![Category::new("b", 5.0)]);
    }
}
