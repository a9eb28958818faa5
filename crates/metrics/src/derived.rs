//! Pure month-over-month and history transforms.
//!
//! No I/O and no shared state; every function is total over its inputs,
//! including zero, negative, and empty cases.

use crate::HistoryPoint;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
    Zero,
}

/// Month-over-month change, split into direction and absolute size.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Delta {
    pub sign: Sign,
    pub magnitude: f64,
}

pub fn delta(current: f64, previous: f64) -> Delta {
    let diff = current - previous;
    let sign = if diff > 0.0 {
        Sign::Positive
    } else if diff < 0.0 {
        Sign::Negative
    } else {
        Sign::Zero
    };
    Delta {
        sign,
        magnitude: diff.abs(),
    }
}

/// One history bar, scaled against the largest value in the series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBar {
    pub month: String,
    pub families: i64,
    /// In `[0, 1]`; `families / max(families)` with an explicit zero-guard.
    pub proportion: f64,
}

/// Scales each point against the series maximum.
///
/// An empty series or a non-positive maximum yields proportion 0 for every
/// bar; the division is never performed in that case, so no NaN can escape.
pub fn normalize_history(points: &[HistoryPoint]) -> Vec<HistoryBar> {
    let max = points.iter().map(|p| p.families).max().unwrap_or(0);
    points
        .iter()
        .map(|p| HistoryBar {
            month: p.month.clone(),
            families: p.families,
            proportion: if max > 0 {
                p.families as f64 / max as f64
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Sign, delta, normalize_history};
    use crate::HistoryPoint;
    use pretty_assertions::assert_eq;

    fn point(month: &str, families: i64) -> HistoryPoint {
        HistoryPoint {
            month: month.to_string(),
            families,
        }
    }

    #[test]
    fn delta_positive() {
        let d = delta(120.0, 100.0);
        assert_eq!(d.sign, Sign::Positive);
        assert_eq!(d.magnitude, 20.0);
    }

    #[test]
    fn delta_negative() {
        let d = delta(80.0, 100.0);
        assert_eq!(d.sign, Sign::Negative);
        assert_eq!(d.magnitude, 20.0);
    }

    #[test]
    fn delta_zero_on_equal_inputs() {
        let d = delta(100.0, 100.0);
        assert_eq!(d.sign, Sign::Zero);
        assert_eq!(d.magnitude, 0.0);
    }

    #[test]
    fn delta_handles_negative_inputs() {
        let d = delta(-5.0, -15.0);
        assert_eq!(d.sign, Sign::Positive);
        assert_eq!(d.magnitude, 10.0);
    }

    #[test]
    fn history_scales_against_series_max() {
        let bars = normalize_history(&[point("m1", 10), point("m2", 20), point("m3", 40)]);
        let props: Vec<f64> = bars.iter().map(|b| b.proportion).collect();
        assert_eq!(props, vec![0.25, 0.5, 1.0]);
        assert_eq!(bars[2].month, "m3");
    }

    #[test]
    fn empty_history_yields_no_bars() {
        assert!(normalize_history(&[]).is_empty());
    }

    #[test]
    fn all_zero_history_yields_zero_proportions() {
        let bars = normalize_history(&[point("m1", 0), point("m2", 0)]);
        let props: Vec<f64> = bars.iter().map(|b| b.proportion).collect();
        assert_eq!(props, vec![0.0, 0.0]);
        assert!(props.iter().all(|p| p.is_finite()));
    }
}
