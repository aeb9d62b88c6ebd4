//! Five-number timing summaries for one experimental condition.

use serde::{Deserialize, Serialize};

use super::error::SummaryProblem;

/// Aggregated crack-time distribution (seconds) for one condition, e.g.
/// password length "10" or special-character position "Prefix".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    pub category: String,
    pub min: f64,
    pub q1: f64,
    #[serde(alias = "med")]
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    #[serde(default, alias = "avg", skip_serializing_if = "Option::is_none")]
    pub mean: Option<f64>,
    #[serde(rename = "n")]
    pub sample_size: u32,
}

impl StatSummary {
    /// Build a summary from raw crack times. Percentiles interpolate linearly
    /// at rank `(n - 1) * p`. Returns `None` for an empty or non-finite sample.
    pub fn from_samples(category: impl Into<String>, samples: &[f64]) -> Option<Self> {
        if samples.is_empty() || samples.iter().any(|value| !value.is_finite()) {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            category: category.into(),
            min: sorted[0],
            q1: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.5),
            q3: percentile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
            mean: Some(sorted.iter().sum::<f64>() / sorted.len() as f64),
            sample_size: sorted.len() as u32,
        })
    }

    /// Check `min ≤ q1 ≤ median ≤ q3 ≤ max`, positivity and `n ≥ 1`.
    pub fn validate(&self) -> Result<(), SummaryProblem> {
        let fields = [
            ("min", self.min),
            ("q1", self.q1),
            ("median", self.median),
            ("q3", self.q3),
            ("max", self.max),
        ];
        for (field, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(SummaryProblem::NonPositive { field, value });
            }
        }
        if let Some(mean) = self.mean {
            if !(mean.is_finite() && mean > 0.0) {
                return Err(SummaryProblem::NonPositive {
                    field: "mean",
                    value: mean,
                });
            }
        }

        let ordered = self.min <= self.q1
            && self.q1 <= self.median
            && self.median <= self.q3
            && self.q3 <= self.max;
        if !ordered {
            return Err(SummaryProblem::OutOfOrder {
                min: self.min,
                q1: self.q1,
                median: self.median,
                q3: self.q3,
                max: self.max,
            });
        }

        if self.sample_size == 0 {
            return Err(SummaryProblem::EmptySample);
        }

        Ok(())
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Central value used by the marginal transform. Sweeps published without
    /// a mean fall back to their median.
    pub fn center(&self) -> f64 {
        self.mean.unwrap_or(self.median)
    }
}

fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = pct.clamp(0.0, 1.0) * (sorted.len() as f64 - 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = rank - lower as f64;
        sorted[lower] + (sorted[upper] - sorted[lower]) * weight
    }
}
