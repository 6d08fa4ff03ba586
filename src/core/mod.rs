pub mod category;
pub mod format;
pub mod grades;
pub mod plot;
pub mod records;
pub mod scale;
pub mod series;
pub mod types;

pub use category::{
    AggregationConfig, UNKNOWN_CATEGORY, aggregate_categories, category_totals,
    derive_category_name,
};
pub use format::{format_amount, format_ratio, format_timestamp_label, parse_timestamp};
pub use grades::{GradeOutcome, PassFailCounts, RecentResult, latest_results};
pub use plot::LinePlot;
pub use records::{
    ProgressRecord, RecordIssue, TransactionRecord, UserProfile, ValidTransaction,
    parse_progress, parse_transactions, parse_user_profile,
};
pub use scale::{IndexScale, LinearScale, PlotArea, ValueScale, ValueScaleTuning};
pub use series::{build_cumulative_series, total_amount};
pub use types::{Category, Margins, Point, Position, Viewport};
