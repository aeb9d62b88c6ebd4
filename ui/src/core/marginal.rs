//! Marginal time between adjacent conditions of an ordered sweep.
//!
//! For an ordering such as "length 8, 9, 10, ..." each consecutive pair yields
//! the extra mean crack time and its growth relative to the predecessor.

use serde::{Serialize, Serializer};

use super::summary::StatSummary;

/// Smallest marginal a log-scaled bar axis can show.
pub const LOG_AXIS_FLOOR: f64 = 0.1;

/// Relative change against the predecessor's mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Growth {
    Percent(f64),
    /// The predecessor's mean was zero, so no ratio exists.
    Undefined,
}

impl Growth {
    pub fn percent(&self) -> Option<f64> {
        match self {
            Growth::Percent(value) => Some(*value),
            Growth::Undefined => None,
        }
    }
}

impl Serialize for Growth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Growth::Percent(value) => serializer.serialize_f64(*value),
            Growth::Undefined => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarginalRecord {
    pub from_category: String,
    pub to_category: String,
    pub marginal_seconds: f64,
    pub growth: Growth,
}

impl MarginalRecord {
    /// `"8→9"` style label for chart axes.
    pub fn transition_label(&self) -> String {
        format!("{}→{}", self.from_category, self.to_category)
    }
}

/// Axis kind for a marginal bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Log,
    Linear,
}

/// One record per consecutive pair, in input order. Sweeps with fewer than
/// two entries produce no records.
pub fn marginal_records(series: &[StatSummary]) -> Vec<MarginalRecord> {
    series
        .windows(2)
        .map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let base = from.center();
            let marginal = to.center() - base;
            MarginalRecord {
                from_category: from.category.clone(),
                to_category: to.category.clone(),
                marginal_seconds: marginal,
                growth: growth(marginal, base),
            }
        })
        .collect()
}

fn growth(marginal: f64, base: f64) -> Growth {
    if base == 0.0 {
        return Growth::Undefined;
    }
    let pct = marginal / base * 100.0;
    if pct.is_finite() {
        Growth::Percent(pct)
    } else {
        Growth::Undefined
    }
}

/// Log only when every marginal is at least [`LOG_AXIS_FLOOR`]; zero or
/// negative bars force a linear axis.
pub fn axis_scale(records: &[MarginalRecord]) -> AxisScale {
    axis_scale_for(records.iter().map(|r| r.marginal_seconds))
}

/// Same policy for arbitrary bar values.
pub fn axis_scale_for(values: impl IntoIterator<Item = f64>) -> AxisScale {
    let loggable = values.into_iter().all(|v| v >= LOG_AXIS_FLOOR);
    if loggable {
        AxisScale::Log
    } else {
        AxisScale::Linear
    }
}

/// Marginal of `category` against the entry whose category is `previous`
/// in the same sweep, or 0 when either is absent.
pub fn marginal_against(series: &[StatSummary], category: &str, previous: &str) -> f64 {
    let find = |name: &str| series.iter().find(|s| s.category == name);
    match (find(category), find(previous)) {
        (Some(current), Some(prev)) => current.center() - prev.center(),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_mean(category: &str, mean: f64) -> StatSummary {
        StatSummary {
            category: category.into(),
            min: 1.0,
            q1: 1.0,
            median: 1.0,
            q3: 1.0,
            max: 1.0,
            mean: Some(mean),
            sample_size: 10,
        }
    }

    #[test]
    fn growth_from_ten_to_forty() {
        let records = marginal_records(&[with_mean("8", 10.0), with_mean("9", 40.0)]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].marginal_seconds, 30.0);
        assert_eq!(records[0].growth, Growth::Percent(300.0));
        assert_eq!(records[0].transition_label(), "8→9");
    }

    #[test]
    fn negative_growth_is_preserved() {
        let records = marginal_records(&[with_mean("8", 20.0), with_mean("9", 10.0)]);
        assert_eq!(records[0].marginal_seconds, -10.0);
        assert_eq!(records[0].growth, Growth::Percent(-50.0));
    }

    #[test]
    fn zero_base_mean_is_undefined_growth() {
        let records = marginal_records(&[with_mean("1", 0.0), with_mean("2", 5.0)]);
        assert_eq!(records[0].marginal_seconds, 5.0);
        assert_eq!(records[0].growth, Growth::Undefined);
        assert_eq!(records[0].growth.percent(), None);
    }

    #[test]
    fn short_series_produce_nothing() {
        assert!(marginal_records(&[]).is_empty());
        assert!(marginal_records(&[with_mean("8", 10.0)]).is_empty());
    }

    #[test]
    fn records_keep_input_order() {
        let series = [
            with_mean("8", 14.07),
            with_mean("9", 23.17),
            with_mean("10", 152.36),
        ];
        let labels: Vec<String> = marginal_records(&series)
            .iter()
            .map(MarginalRecord::transition_label)
            .collect();
        assert_eq!(labels, vec!["8→9", "9→10"]);
    }

    #[test]
    fn falls_back_to_median_without_mean() {
        let mut a = with_mean("Level 1", 1.0);
        a.mean = None;
        a.median = 14.0;
        let mut b = with_mean("Level 2", 1.0);
        b.mean = None;
        b.median = 21.0;
        let records = marginal_records(&[a, b]);
        assert_eq!(records[0].marginal_seconds, 7.0);
        assert_eq!(records[0].growth, Growth::Percent(50.0));
    }

    #[test]
    fn axis_is_log_only_for_positive_marginals() {
        let rising = marginal_records(&[with_mean("8", 10.0), with_mean("9", 40.0)]);
        assert_eq!(axis_scale(&rising), AxisScale::Log);

        let falling = marginal_records(&[with_mean("8", 20.0), with_mean("9", 10.0)]);
        assert_eq!(axis_scale(&falling), AxisScale::Linear);

        let tiny = marginal_records(&[with_mean("8", 10.0), with_mean("9", 10.05)]);
        assert_eq!(axis_scale(&tiny), AxisScale::Linear);
    }

    #[test]
    fn marginal_against_missing_predecessor_is_zero() {
        let series = [with_mean("1", 13.72), with_mean("2", 14.46)];
        assert!((marginal_against(&series, "2", "1") - 0.74).abs() < 1e-9);
        assert_eq!(marginal_against(&series, "1", "0"), 0.0);
    }

    #[test]
    fn undefined_growth_serializes_as_null() {
        let records = marginal_records(&[with_mean("1", 0.0), with_mean("2", 5.0)]);
        let json = serde_json::to_value(&records[0]).unwrap();
        assert!(json["growth"].is_null());
    }

    proptest! {
        #[test]
        fn one_record_per_adjacent_pair(means in prop::collection::vec(0.5f64..1e5, 0..12)) {
            let series: Vec<StatSummary> = means
                .iter()
                .enumerate()
                .map(|(i, m)| with_mean(&i.to_string(), *m))
                .collect();
            let records = marginal_records(&series);
            prop_assert_eq!(records.len(), series.len().saturating_sub(1));
            prop_assert_eq!(records.clone(), marginal_records(&series));
        }
    }
}
