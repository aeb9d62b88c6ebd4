//! Box-plot geometry on a logarithmic value axis.
//!
//! The engine turns a [`StatSummary`] into declarative drawing primitives
//! positioned inside a pixel bounding box. It never draws anything itself:
//! the Dioxus chart component and the SVG exporter both paint the same
//! primitive list, so on-screen charts and exported snapshots agree.
//!
//! Mapping for a value `v`:
//!
//! ```text
//! ratio = (log10(max(v, floor)) - log10(y_min)) / (log10(y_max) - log10(y_min))
//! py    = y + height * (1 - ratio)
//! ```
//!
//! Larger values therefore land higher on screen (smaller `py`).

use super::summary::StatSummary;

/// Rectangles never collapse below this height so narrow IQRs stay visible.
pub const MIN_BOX_HEIGHT_PX: f64 = 1.0;

/// Pixel-space column a single box plot is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn is_drawable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width >= 0.0
            && self.height >= 0.0
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Logarithmic value axis `[y_min, y_max]` with a clamp floor for values at
/// or below zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    y_min: f64,
    y_max: f64,
    floor: f64,
}

impl LogScale {
    /// Axis spanning `[y_min, y_max]`; the floor defaults to `y_min`.
    /// Returns `None` unless `0 < y_min < y_max` and both are finite.
    pub fn new(y_min: f64, y_max: f64) -> Option<Self> {
        let valid = y_min.is_finite() && y_max.is_finite() && y_min > 0.0 && y_max > y_min;
        valid.then_some(Self {
            y_min,
            y_max,
            floor: y_min,
        })
    }

    /// Axis from `y_min` up to the largest `max` in `series` times `headroom`.
    pub fn fit(series: &[StatSummary], y_min: f64, headroom: f64) -> Option<Self> {
        let peak = series
            .iter()
            .map(|s| s.max)
            .filter(|v| v.is_finite())
            .fold(f64::NEG_INFINITY, f64::max);
        Self::new(y_min, peak * headroom)
    }

    /// Replace the clamp floor. Non-positive floors are ignored.
    pub fn with_floor(mut self, floor: f64) -> Self {
        if floor.is_finite() && floor > 0.0 {
            self.floor = floor;
        }
        self
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Position of `value` along the axis, 0 at `y_min` and 1 at `y_max`.
    pub fn ratio(&self, value: f64) -> f64 {
        let clamped = if value.is_nan() {
            self.floor
        } else {
            value.max(self.floor)
        };
        let log_min = self.y_min.log10();
        let log_max = self.y_max.log10();
        (clamped.log10() - log_min) / (log_max - log_min)
    }

    pub fn to_pixel(&self, value: f64, bbox: &BoundingBox) -> f64 {
        bbox.y + bbox.height * (1.0 - self.ratio(value))
    }

    /// Powers of ten within the axis range, used for gridlines and tick labels.
    pub fn decade_ticks(&self) -> Vec<f64> {
        let first = self.y_min.log10().ceil() as i32;
        let last = self.y_max.log10().floor() as i32;
        (first..=last).map(|exp| 10f64.powi(exp)).collect()
    }
}

/// How long the min/max caps are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CapWidth {
    /// Half-length in pixels on each side of the column centre.
    Fixed(f64),
    /// Total length as a fraction of the box width.
    FractionOfBox(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPlotStyle {
    /// Box width relative to the column width, kept within 0.5..=0.6.
    pub box_width_ratio: f64,
    pub cap: CapWidth,
    pub mean_radius: f64,
}

impl BoxPlotStyle {
    /// Wide columns with fixed 20 px caps (length, diversity, position charts).
    pub fn standard() -> Self {
        Self {
            box_width_ratio: 0.5,
            cap: CapWidth::Fixed(10.0),
            mean_radius: 5.0,
        }
    }

    /// Slightly wider boxes with caps half the box width (special-character charts).
    pub fn compact() -> Self {
        Self {
            box_width_ratio: 0.6,
            cap: CapWidth::FractionOfBox(0.5),
            mean_radius: 4.0,
        }
    }
}

impl Default for BoxPlotStyle {
    fn default() -> Self {
        Self::standard()
    }
}

/// What a primitive depicts; renderers pick colours from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    LowerWhisker,
    UpperWhisker,
    MinCap,
    MaxCap,
    Box,
    Median,
    Mean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        role: Role,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Stroke,
    },
    Rect {
        role: Role,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Circle {
        role: Role,
        cx: f64,
        cy: f64,
        r: f64,
    },
}

impl Primitive {
    pub fn role(&self) -> Role {
        match self {
            Primitive::Line { role, .. }
            | Primitive::Rect { role, .. }
            | Primitive::Circle { role, .. } => *role,
        }
    }
}

/// Resolved pixel positions plus the primitives built from them.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlotGeometry {
    pub center_x: f64,
    pub min_y: f64,
    pub q1_y: f64,
    pub median_y: f64,
    pub q3_y: f64,
    pub max_y: f64,
    pub mean_y: Option<f64>,
    pub primitives: Vec<Primitive>,
}

/// Lay out one box plot. Returns `None` for geometry that cannot be drawn
/// (non-finite bounding box or summary values).
pub fn layout(
    bbox: &BoundingBox,
    summary: &StatSummary,
    scale: &LogScale,
    style: &BoxPlotStyle,
) -> Option<BoxPlotGeometry> {
    let values = [summary.min, summary.q1, summary.median, summary.q3, summary.max];
    if !bbox.is_drawable() || values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let center_x = bbox.center_x();
    let box_width = bbox.width * style.box_width_ratio.clamp(0.5, 0.6);
    let box_left = center_x - box_width / 2.0;
    let box_right = center_x + box_width / 2.0;
    let cap_half = match style.cap {
        CapWidth::Fixed(half) => half,
        CapWidth::FractionOfBox(fraction) => box_width * fraction / 2.0,
    };

    let min_y = scale.to_pixel(summary.min, bbox);
    let q1_y = scale.to_pixel(summary.q1, bbox);
    let median_y = scale.to_pixel(summary.median, bbox);
    let q3_y = scale.to_pixel(summary.q3, bbox);
    let max_y = scale.to_pixel(summary.max, bbox);
    let mean_y = summary
        .mean
        .filter(|m| m.is_finite())
        .map(|m| scale.to_pixel(m, bbox));

    let mut primitives = vec![
        Primitive::Line {
            role: Role::LowerWhisker,
            x1: center_x,
            y1: min_y,
            x2: center_x,
            y2: q1_y,
            stroke: Stroke::Dashed,
        },
        Primitive::Line {
            role: Role::MinCap,
            x1: center_x - cap_half,
            y1: min_y,
            x2: center_x + cap_half,
            y2: min_y,
            stroke: Stroke::Solid,
        },
        Primitive::Rect {
            role: Role::Box,
            x: box_left,
            y: q3_y,
            width: box_width,
            height: (q1_y - q3_y).max(MIN_BOX_HEIGHT_PX),
        },
        Primitive::Line {
            role: Role::Median,
            x1: box_left,
            y1: median_y,
            x2: box_right,
            y2: median_y,
            stroke: Stroke::Solid,
        },
        Primitive::Line {
            role: Role::UpperWhisker,
            x1: center_x,
            y1: q3_y,
            x2: center_x,
            y2: max_y,
            stroke: Stroke::Dashed,
        },
        Primitive::Line {
            role: Role::MaxCap,
            x1: center_x - cap_half,
            y1: max_y,
            x2: center_x + cap_half,
            y2: max_y,
            stroke: Stroke::Solid,
        },
    ];

    if let Some(cy) = mean_y {
        primitives.push(Primitive::Circle {
            role: Role::Mean,
            cx: center_x,
            cy,
            r: style.mean_radius,
        });
    }

    Some(BoxPlotGeometry {
        center_x,
        min_y,
        q1_y,
        median_y,
        q3_y,
        max_y,
        mean_y,
        primitives,
    })
}

/// Primitives for one chart column. A missing summary renders nothing so the
/// remaining columns still compose.
pub fn box_plot(
    bbox: &BoundingBox,
    summary: Option<&StatSummary>,
    scale: &LogScale,
    style: &BoxPlotStyle,
) -> Vec<Primitive> {
    summary
        .and_then(|s| layout(bbox, s, scale, style))
        .map(|geometry| geometry.primitives)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(min: f64, q1: f64, median: f64, q3: f64, max: f64, mean: Option<f64>) -> StatSummary {
        StatSummary {
            category: "10".into(),
            min,
            q1,
            median,
            q3,
            max,
            mean,
            sample_size: 20,
        }
    }

    fn chart() -> (BoundingBox, LogScale) {
        (
            BoundingBox::new(40.0, 20.0, 120.0, 400.0),
            LogScale::new(10.0, 100_000.0).unwrap(),
        )
    }

    #[test]
    fn maps_axis_bounds_to_box_edges() {
        let (bbox, scale) = chart();
        assert!((scale.to_pixel(10.0, &bbox) - 420.0).abs() < 1e-9);
        assert!((scale.to_pixel(100_000.0, &bbox) - 20.0).abs() < 1e-9);
        assert!((scale.to_pixel(1_000.0, &bbox) - 220.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_values_below_floor() {
        let (bbox, scale) = chart();
        let floor_y = scale.to_pixel(10.0, &bbox);
        assert_eq!(scale.to_pixel(0.0, &bbox), floor_y);
        assert_eq!(scale.to_pixel(-5.0, &bbox), floor_y);
        assert_eq!(scale.to_pixel(3.0, &bbox), floor_y);
    }

    #[test]
    fn rejects_degenerate_scales() {
        assert!(LogScale::new(0.0, 10.0).is_none());
        assert!(LogScale::new(10.0, 10.0).is_none());
        assert!(LogScale::new(100.0, 10.0).is_none());
        assert!(LogScale::new(1.0, f64::INFINITY).is_none());
    }

    #[test]
    fn fit_adds_headroom_above_largest_max() {
        let series = vec![
            summary(12.7, 12.9, 13.7, 13.8, 16.8, Some(13.7)),
            summary(12.7, 12.8, 13.7, 14.5, 22.8, Some(14.5)),
        ];
        let scale = LogScale::fit(&series, 1.0, 1.2).unwrap();
        assert_eq!(scale.y_min(), 1.0);
        assert!((scale.y_max() - 22.8 * 1.2).abs() < 1e-9);
        assert!(LogScale::fit(&[], 1.0, 1.2).is_none());
    }

    #[test]
    fn decade_ticks_cover_range() {
        let (_, scale) = chart();
        assert_eq!(
            scale.decade_ticks(),
            vec![10.0, 100.0, 1_000.0, 10_000.0, 100_000.0]
        );
    }

    #[test]
    fn emits_all_parts_with_mean_marker() {
        let (bbox, scale) = chart();
        let stats = summary(12.44, 14.43, 28.95, 81.14, 954.68, Some(152.36));
        let prims = box_plot(&bbox, Some(&stats), &scale, &BoxPlotStyle::standard());
        let roles: Vec<Role> = prims.iter().map(Primitive::role).collect();
        assert_eq!(
            roles,
            vec![
                Role::LowerWhisker,
                Role::MinCap,
                Role::Box,
                Role::Median,
                Role::UpperWhisker,
                Role::MaxCap,
                Role::Mean
            ]
        );

        let whiskers_dashed = prims.iter().all(|p| match p {
            Primitive::Line { role, stroke, .. }
                if matches!(role, Role::LowerWhisker | Role::UpperWhisker) =>
            {
                *stroke == Stroke::Dashed
            }
            _ => true,
        });
        assert!(whiskers_dashed);
    }

    #[test]
    fn omits_mean_marker_without_mean() {
        let (bbox, scale) = chart();
        let stats = summary(12.78, 13.81, 14.01, 15.43, 15.84, None);
        let prims = box_plot(&bbox, Some(&stats), &scale, &BoxPlotStyle::standard());
        assert_eq!(prims.len(), 6);
        assert!(prims.iter().all(|p| p.role() != Role::Mean));
    }

    #[test]
    fn box_is_centered_at_half_column_width() {
        let (bbox, scale) = chart();
        let stats = summary(12.0, 20.0, 30.0, 40.0, 50.0, None);
        let geometry = layout(&bbox, &stats, &scale, &BoxPlotStyle::standard()).unwrap();
        let rect = geometry
            .primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Rect { x, width, .. } => Some((*x, *width)),
                _ => None,
            })
            .unwrap();
        assert!((rect.1 - 60.0).abs() < 1e-9);
        assert!((rect.0 + rect.1 / 2.0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn compact_style_uses_wider_box_and_relative_caps() {
        let (bbox, scale) = chart();
        let stats = summary(12.0, 20.0, 30.0, 40.0, 50.0, None);
        let geometry = layout(&bbox, &stats, &scale, &BoxPlotStyle::compact()).unwrap();
        let cap = geometry
            .primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Line {
                    role: Role::MinCap,
                    x1,
                    x2,
                    ..
                } => Some(x2 - x1),
                _ => None,
            })
            .unwrap();
        // box = 72 px, caps span half of it
        assert!((cap - 36.0).abs() < 1e-9);
    }

    #[test]
    fn narrow_iqr_keeps_one_pixel_box() {
        let (bbox, scale) = chart();
        let stats = summary(12.0, 13.0, 13.0, 13.0001, 20.0, None);
        let geometry = layout(&bbox, &stats, &scale, &BoxPlotStyle::standard()).unwrap();
        assert!(geometry.q1_y - geometry.q3_y < 1.0);
        let height = geometry
            .primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Rect { height, .. } => Some(*height),
                _ => None,
            })
            .unwrap();
        assert!(height >= MIN_BOX_HEIGHT_PX);
    }

    #[test]
    fn missing_or_malformed_input_renders_nothing() {
        let (bbox, scale) = chart();
        assert!(box_plot(&bbox, None, &scale, &BoxPlotStyle::standard()).is_empty());

        let stats = summary(12.0, 20.0, f64::NAN, 40.0, 50.0, None);
        assert!(box_plot(&bbox, Some(&stats), &scale, &BoxPlotStyle::standard()).is_empty());

        let ok = summary(12.0, 20.0, 30.0, 40.0, 50.0, None);
        let broken = BoundingBox::new(0.0, f64::INFINITY, 10.0, 10.0);
        assert!(box_plot(&broken, Some(&ok), &scale, &BoxPlotStyle::standard()).is_empty());
    }

    #[test]
    fn identical_inputs_give_identical_geometry() {
        let (bbox, scale) = chart();
        let stats = summary(144.99, 1658.21, 2959.18, 3934.69, 7399.42, Some(3159.8));
        let first = layout(&bbox, &stats, &scale, &BoxPlotStyle::standard());
        let second = layout(&bbox, &stats, &scale, &BoxPlotStyle::standard());
        assert_eq!(first, second);
    }

    fn ordered_summary() -> impl Strategy<Value = StatSummary> {
        prop::collection::vec(0.01f64..200_000.0, 5).prop_map(|mut v| {
            v.sort_by(f64::total_cmp);
            summary(v[0], v[1], v[2], v[3], v[4], None)
        })
    }

    proptest! {
        #[test]
        fn pixel_positions_never_increase_with_value(stats in ordered_summary()) {
            let (bbox, scale) = chart();
            let g = layout(&bbox, &stats, &scale, &BoxPlotStyle::standard()).unwrap();
            prop_assert!(g.min_y >= g.q1_y);
            prop_assert!(g.q1_y >= g.median_y);
            prop_assert!(g.median_y >= g.q3_y);
            prop_assert!(g.q3_y >= g.max_y);
        }
    }
}
