//! Value axes and rectangle layout for the bar charts (marginal times,
//! transition comparisons, mean comparisons).

use super::boxplot::{BoundingBox, LogScale};
use super::marginal::{AxisScale, LOG_AXIS_FLOOR};

/// Fraction of a group's width taken by its bars.
const GROUP_FILL: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueAxis {
    Log(LogScale),
    Linear { min: f64, max: f64 },
}

impl ValueAxis {
    /// Axis covering `values`. A log axis runs from [`LOG_AXIS_FLOOR`] to the
    /// next power of ten above the largest value plus 20 % headroom. A linear
    /// axis always includes zero so bars have a baseline.
    pub fn for_values(kind: AxisScale, values: &[f64]) -> Option<Self> {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        let hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lo = finite.iter().copied().fold(f64::INFINITY, f64::min);

        match kind {
            AxisScale::Log => {
                let peak = (hi * 1.2).max(LOG_AXIS_FLOOR * 10.0);
                let upper = 10f64.powf(peak.log10().ceil());
                LogScale::new(LOG_AXIS_FLOOR, upper).map(ValueAxis::Log)
            }
            AxisScale::Linear => {
                let mut max = hi.max(0.0);
                let mut min = lo.min(0.0);
                if max > 0.0 {
                    max *= 1.1;
                }
                if min < 0.0 {
                    min *= 1.1;
                }
                if max == min {
                    max = min + 1.0;
                }
                Some(ValueAxis::Linear { min, max })
            }
        }
    }

    pub fn to_pixel(&self, value: f64, bbox: &BoundingBox) -> f64 {
        match self {
            ValueAxis::Log(scale) => scale.to_pixel(value, bbox),
            ValueAxis::Linear { min, max } => {
                let ratio = (value.clamp(*min, *max) - min) / (max - min);
                bbox.y + bbox.height * (1.0 - ratio)
            }
        }
    }

    /// Pixel row bars grow from: zero on a linear axis, the floor on a log axis.
    pub fn baseline(&self, bbox: &BoundingBox) -> f64 {
        match self {
            ValueAxis::Log(scale) => scale.to_pixel(scale.y_min(), bbox),
            ValueAxis::Linear { .. } => self.to_pixel(0.0, bbox),
        }
    }

    pub fn ticks(&self) -> Vec<f64> {
        match self {
            ValueAxis::Log(scale) => scale.decade_ticks(),
            ValueAxis::Linear { min, max } => {
                let step = (max - min) / 4.0;
                (0..=4).map(|i| min + step * i as f64).collect()
            }
        }
    }

    pub fn is_log(&self) -> bool {
        matches!(self, ValueAxis::Log(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
    /// Position of the value within its group, counting skipped values.
    pub series: usize,
}

impl BarRect {
    /// Anchor for the value label: just above a rising bar, below a falling one.
    pub fn label_anchor(&self, baseline: f64) -> (f64, f64) {
        let cx = self.x + self.width / 2.0;
        if self.y < baseline {
            (cx, self.y - 6.0)
        } else {
            (cx, self.y + self.height + 14.0)
        }
    }
}

/// Lay out `groups` side by side in `plot`, each group holding one bar per
/// series. Non-finite values yield no bar but keep their slot.
pub fn layout(groups: &[Vec<f64>], axis: &ValueAxis, plot: &BoundingBox) -> Vec<Vec<BarRect>> {
    if groups.is_empty() {
        return Vec::new();
    }
    let group_width = plot.width / groups.len() as f64;
    let baseline = axis.baseline(plot);

    groups
        .iter()
        .enumerate()
        .map(|(gi, values)| {
            let slots = values.len().max(1) as f64;
            let inner = group_width * GROUP_FILL;
            let bar_width = inner / slots;
            let left = plot.x + group_width * gi as f64 + (group_width - inner) / 2.0;
            values
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_finite())
                .map(|(si, &value)| {
                    let top = axis.to_pixel(value, plot);
                    BarRect {
                        x: left + bar_width * si as f64,
                        y: top.min(baseline),
                        width: bar_width,
                        height: (top - baseline).abs(),
                        value,
                        series: si,
                    }
                })
                .collect()
        })
        .collect()
}
