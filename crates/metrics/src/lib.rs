pub mod derived;
pub mod format;

use serde::{Deserialize, Serialize};

pub use derived::{Delta, HistoryBar, Sign, delta, normalize_history};
pub use format::{PLACEHOLDER, format_amount, format_count};

/// One month of program figures for a district.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthMetrics {
    pub families_worked: i64,
    pub avg_wage: f64,
    pub total_days: i64,
}

/// One point of the trailing history, most-recent last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub month: String,
    pub families: i64,
}

/// Displayable metrics for one (state, district) selection.
///
/// Absent until a fetch for the active selection succeeds; destroyed whenever
/// the selected state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub current_month: MonthMetrics,
    pub prev_month: MonthMetrics,
    pub history: Vec<HistoryPoint>,
}
