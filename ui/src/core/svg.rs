//! Shared chart frame, palette and standalone SVG serialisation.
//!
//! The Dioxus components and the export pipeline both lay charts out through
//! [`ChartFrame`] and colour primitives through [`paint`], so what the user
//! sees and what gets exported stay identical.

use super::boxplot::{self, BoundingBox, BoxPlotStyle, LogScale, Primitive, Role, Stroke};
use super::format;
use super::summary::StatSummary;

pub const WHISKER_DASH: &str = "3,3";

/// Plot area inside a chart of `width × height` pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl ChartFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 44.0,
            margin_left: 76.0,
        }
    }

    pub fn plot(&self) -> BoundingBox {
        BoundingBox::new(
            self.margin_left,
            self.margin_top,
            (self.width - self.margin_left - self.margin_right).max(0.0),
            (self.height - self.margin_top - self.margin_bottom).max(0.0),
        )
    }

    /// Equal-width column per category, left to right.
    pub fn columns(&self, count: usize) -> Vec<BoundingBox> {
        if count == 0 {
            return Vec::new();
        }
        let plot = self.plot();
        let step = plot.width / count as f64;
        (0..count)
            .map(|i| BoundingBox::new(plot.x + step * i as f64, plot.y, step, plot.height))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub fill: &'static str,
    pub fill_opacity: f64,
}

pub fn paint(role: Role) -> Paint {
    let line = |stroke, stroke_width| Paint {
        stroke,
        stroke_width,
        fill: "none",
        fill_opacity: 1.0,
    };
    match role {
        Role::LowerWhisker | Role::UpperWhisker => line("#666666", 1.5),
        Role::MinCap => line("#00ccff", 2.0),
        Role::MaxCap => line("#ff6b6b", 2.0),
        Role::Median => line("#ffd700", 3.0),
        Role::Box => Paint {
            stroke: "#5566cc",
            stroke_width: 2.0,
            fill: "#8884d8",
            fill_opacity: 0.7,
        },
        Role::Mean => Paint {
            stroke: "#ffffff",
            stroke_width: 2.0,
            fill: "#00ff88",
            fill_opacity: 1.0,
        },
    }
}

/// One primitive as an SVG element.
pub fn primitive_markup(primitive: &Primitive) -> String {
    let p = paint(primitive.role());
    match primitive {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            ..
        } => {
            let dash = match stroke {
                Stroke::Dashed => format!(" stroke-dasharray='{WHISKER_DASH}'"),
                Stroke::Solid => String::new(),
            };
            format!(
                "<line x1='{x1:.2}' y1='{y1:.2}' x2='{x2:.2}' y2='{y2:.2}' stroke='{}' stroke-width='{}'{dash}/>",
                p.stroke, p.stroke_width
            )
        }
        Primitive::Rect {
            x,
            y,
            width,
            height,
            ..
        } => format!(
            "<rect x='{x:.2}' y='{y:.2}' width='{width:.2}' height='{height:.2}' fill='{}' fill-opacity='{}' stroke='{}' stroke-width='{}'/>",
            p.fill, p.fill_opacity, p.stroke, p.stroke_width
        ),
        Primitive::Circle { cx, cy, r, .. } => format!(
            "<circle cx='{cx:.2}' cy='{cy:.2}' r='{r}' fill='{}' stroke='{}' stroke-width='{}'/>",
            p.fill, p.stroke, p.stroke_width
        ),
    }
}

/// Standalone SVG document of a box-plot chart, used for exports.
pub fn box_plot_document(
    title: &str,
    series: &[StatSummary],
    scale: &LogScale,
    style: &BoxPlotStyle,
    frame: &ChartFrame,
) -> String {
    let (w, h) = (frame.width, frame.height);
    let plot = frame.plot();
    let mut lines = vec![
        format!("<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>"),
        format!("  <rect width='{w}' height='{h}' fill='#12141a'/>"),
        format!(
            "  <text x='{}' y='14' fill='#f5f7fb' font-family='Inter, sans-serif' font-size='13' font-weight='600'>{}</text>",
            plot.x,
            escape_xml(title)
        ),
    ];

    for tick in scale.decade_ticks() {
        let y = scale.to_pixel(tick, &plot);
        lines.push(format!(
            "  <line x1='{:.2}' y1='{y:.2}' x2='{:.2}' y2='{y:.2}' stroke='#333333' stroke-dasharray='3 3'/>",
            plot.x,
            plot.x + plot.width
        ));
        lines.push(format!(
            "  <text x='{:.2}' y='{:.2}' fill='#888888' font-family='Inter, sans-serif' font-size='11' text-anchor='end'>{}</text>",
            plot.x - 8.0,
            y + 4.0,
            format::format_tick(tick)
        ));
    }

    for (column, summary) in frame.columns(series.len()).iter().zip(series) {
        lines.push("  <g>".to_string());
        lines.extend(
            boxplot::box_plot(column, Some(summary), scale, style)
                .iter()
                .map(|primitive| format!("    {}", primitive_markup(primitive))),
        );
        lines.push(format!(
            "    <text x='{:.2}' y='{:.2}' fill='#888888' font-family='Inter, sans-serif' font-size='12' text-anchor='middle'>{}</text>",
            column.center_x(),
            plot.y + plot.height + 18.0,
            escape_xml(&summary.category)
        ));
        lines.push("  </g>".to_string());
    }

    lines.push("</svg>".to_string());
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(category: &str, median: f64) -> StatSummary {
        StatSummary {
            category: category.into(),
            min: median / 2.0,
            q1: median * 0.8,
            median,
            q3: median * 1.5,
            max: median * 3.0,
            mean: Some(median * 1.1),
            sample_size: 10,
        }
    }

    #[test]
    fn columns_split_plot_evenly() {
        let frame = ChartFrame::new(600.0, 400.0);
        let cols = frame.columns(4);
        assert_eq!(cols.len(), 4);
        let plot = frame.plot();
        assert!((cols[0].x - plot.x).abs() < 1e-9);
        assert!((cols[3].x + cols[3].width - (plot.x + plot.width)).abs() < 1e-9);
        assert!(frame.columns(0).is_empty());
    }

    #[test]
    fn dashed_whiskers_in_markup() {
        let line = Primitive::Line {
            role: Role::LowerWhisker,
            x1: 1.0,
            y1: 2.0,
            x2: 1.0,
            y2: 8.0,
            stroke: Stroke::Dashed,
        };
        let markup = primitive_markup(&line);
        assert!(markup.starts_with("<line"));
        assert!(markup.contains("stroke-dasharray='3,3'"));
    }

    #[test]
    fn document_contains_one_group_per_category() {
        let series = vec![summary("Prefix", 25.0), summary("Suffix", 21.0), summary("Mixed", 41.0)];
        let scale = LogScale::new(10.0, 10_000.0).unwrap();
        let svg = box_plot_document(
            "Position <impact>",
            &series,
            &scale,
            &BoxPlotStyle::standard(),
            &ChartFrame::new(720.0, 450.0),
        );
        assert!(svg.starts_with("<svg"));
        assert_eq!(svg.matches("<g>").count(), 3);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("Position &lt;impact&gt;"));
        assert!(svg.contains(">1,000<"));
    }

    #[test]
    fn document_is_one_element_per_line() {
        let scale = LogScale::new(10.0, 1_000.0).unwrap();
        let svg = box_plot_document(
            "Length",
            &[summary("8", 14.0)],
            &scale,
            &BoxPlotStyle::standard(),
            &ChartFrame::new(400.0, 300.0),
        );
        assert!(svg.ends_with("</svg>\n"));
        let lines: Vec<&str> = svg.lines().collect();
        assert_eq!(lines.first().map(|l| l.starts_with("<svg")), Some(true));
        assert!(lines.iter().all(|line| line.trim_start().starts_with('<')));
        assert_eq!(lines.iter().filter(|l| l.trim() == "<g>").count(), 1);
        assert_eq!(lines.iter().filter(|l| l.trim() == "</g>").count(), 1);
    }
}
