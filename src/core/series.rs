use tracing::{debug, trace};

use crate::core::Point;
use crate::core::format::format_timestamp_label;
use crate::core::records::TransactionRecord;

/// Builds a cumulative series from amount/timestamp records.
///
/// Records missing an amount or a parseable timestamp are skipped. The rest
/// are sorted by timestamp with a stable sort, so equal timestamps keep their
/// input order, and `value[i]` is the running sum of `amount[0..=i]`.
#[must_use]
pub fn build_cumulative_series(records: &[TransactionRecord], label_format: &str) -> Vec<Point> {
    let mut valid = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        match record.validate() {
            Ok(transaction) => valid.push(transaction),
            Err(issue) => trace!(position, ?issue, "skip malformed transaction"),
        }
    }
    valid.sort_by_key(|transaction| transaction.created_at);

    let mut running = 0.0;
    let points: Vec<Point> = valid
        .iter()
        .enumerate()
        .map(|(index, transaction)| {
            running += transaction.amount;
            Point::new(
                index,
                running,
                format_timestamp_label(transaction.created_at, label_format),
            )
        })
        .collect();

    debug!(
        input_count = records.len(),
        point_count = points.len(),
        "built cumulative series"
    );
    points
}

/// Sums the amounts of all well-formed records.
#[must_use]
pub fn total_amount(records: &[TransactionRecord]) -> f64 {
    records
        .iter()
        .filter_map(|record| record.checked_amount().ok())
        .sum()
}
