use dioxus::prelude::*;

use super::viewport::{chart_width, use_viewport_width};
use crate::core::bars::{self, ValueAxis};
use crate::core::format::{format_bar_label, format_linear_tick, format_tick};
use crate::core::marginal::AxisScale;
use crate::core::svg::ChartFrame;
use crate::t;

/// One bar series in a grouped bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: String,
}

/// One x-axis group, holding a value per series.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub label: String,
    pub values: Vec<f64>,
}

/// Grouped bar chart with signed value labels on every bar.
#[component]
pub fn BarChart(
    groups: Vec<BarGroup>,
    series: Vec<BarSeries>,
    axis: AxisScale,
    height: f64,
    x_label: String,
    y_label: String,
) -> Element {
    let viewport = use_viewport_width();
    let width = chart_width(viewport());
    let frame = ChartFrame::new(width, height);
    let plot = frame.plot();

    let values: Vec<f64> = groups.iter().flat_map(|g| g.values.iter().copied()).collect();
    let Some(value_axis) = ValueAxis::for_values(axis, &values) else {
        return rsx! {
            p { class: "chart__placeholder", {t!("chart-unavailable")} }
        };
    };

    let baseline = value_axis.baseline(&plot);
    let tick_label = |tick: f64| {
        if value_axis.is_log() {
            format_tick(tick)
        } else {
            format_linear_tick(tick)
        }
    };
    let ticks: Vec<(f64, String)> = value_axis
        .ticks()
        .into_iter()
        .map(|tick| (value_axis.to_pixel(tick, &plot), tick_label(tick)))
        .collect();

    let value_rows: Vec<Vec<f64>> = groups.iter().map(|g| g.values.clone()).collect();
    let laid_out = bars::layout(&value_rows, &value_axis, &plot);
    let group_width = if groups.is_empty() {
        0.0
    } else {
        plot.width / groups.len() as f64
    };

    let mut rects = Vec::new();
    for (group, row) in laid_out.iter().enumerate() {
        for bar in row {
            let slot = bar.series;
            let color = series
                .get(slot)
                .map(|s| s.color.clone())
                .unwrap_or_else(|| "#00ccff".to_string());
            let (lx, ly) = bar.label_anchor(baseline);
            rects.push((group, slot, *bar, color, lx, ly, format_bar_label(bar.value)));
        }
    }

    let group_labels: Vec<(f64, String)> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| (plot.x + group_width * (i as f64 + 0.5), g.label.clone()))
        .collect();
    let label_y = plot.y + plot.height + 18.0;
    let y_title_x = 16.0;
    let y_title_cy = plot.y + plot.height / 2.0;

    rsx! {
        div { class: "chart chart--bars",
            svg {
                class: "chart__svg",
                width: "{width}",
                height: "{height}",
                view_box: "0 0 {width} {height}",
                for (y, label) in ticks {
                    line {
                        x1: "{plot.x}",
                        y1: "{y}",
                        x2: "{plot.x + plot.width}",
                        y2: "{y}",
                        stroke: "#333333",
                        stroke_dasharray: "3 3",
                    }
                    text {
                        x: "{plot.x - 8.0}",
                        y: "{y + 4.0}",
                        class: "chart__tick",
                        text_anchor: "end",
                        "{label}"
                    }
                }
                line {
                    x1: "{plot.x}",
                    y1: "{baseline}",
                    x2: "{plot.x + plot.width}",
                    y2: "{baseline}",
                    stroke: "#888888",
                }
                for (group, slot, bar, color, lx, ly, label) in rects {
                    g { key: "{group}-{slot}",
                        rect {
                            x: "{bar.x}",
                            y: "{bar.y}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            fill: "{color}",
                        }
                        text {
                            x: "{lx}",
                            y: "{ly}",
                            class: "chart__bar-label",
                            fill: "{color}",
                            text_anchor: "middle",
                            "{label}"
                        }
                    }
                }
                for (x, label) in group_labels {
                    text {
                        x: "{x}",
                        y: "{label_y}",
                        class: "chart__tick",
                        text_anchor: "middle",
                        "{label}"
                    }
                }
                text {
                    x: "{plot.x + plot.width / 2.0}",
                    y: "{height - 6.0}",
                    class: "chart__axis-title",
                    text_anchor: "middle",
                    "{x_label}"
                }
                text {
                    x: "{y_title_x}",
                    y: "{y_title_cy}",
                    class: "chart__axis-title",
                    text_anchor: "middle",
                    transform: "rotate(-90 {y_title_x} {y_title_cy})",
                    "{y_label}"
                }
            }
            if series.len() > 1 {
                ul { class: "chart__legend",
                    for entry in series.iter() {
                        li { key: "{entry.name}",
                            span { class: "chart__swatch", style: "background: {entry.color}" }
                            "{entry.name}"
                        }
                    }
                }
            }
        }
    }
}
