use dioxus::prelude::*;

use super::viewport::{chart_width, use_viewport_width};
use crate::core::boxplot::{self, BoxPlotStyle, Primitive, Stroke};
use crate::core::format::{format_seconds, format_tick};
use crate::core::layout;
use crate::core::summary::StatSummary;
use crate::core::svg::{self, ChartFrame};
use crate::datasets::ChartPreset;
use crate::t;

/// Log-scale box-plot chart, one column per summary, with a hover card.
#[component]
pub fn BoxPlotChart(
    series: Vec<StatSummary>,
    preset: ChartPreset,
    #[props(default)] style: BoxPlotStyle,
    x_label: String,
    y_label: String,
) -> Element {
    let viewport = use_viewport_width();
    let mut hovered = use_signal(|| None::<usize>);

    let width = chart_width(viewport());
    let height = layout::chart_height(preset.nominal_height, viewport());
    let frame = ChartFrame::new(width, height);
    let plot = frame.plot();

    let Some(scale) = preset.scale_for(&series) else {
        return rsx! {
            p { class: "chart__placeholder", {t!("chart-unavailable")} }
        };
    };

    let ticks: Vec<(f64, String)> = scale
        .decade_ticks()
        .into_iter()
        .map(|tick| (scale.to_pixel(tick, &plot), format_tick(tick)))
        .collect();
    let columns: Vec<(f64, String, Vec<Primitive>)> = frame
        .columns(series.len())
        .iter()
        .zip(&series)
        .map(|(column, summary)| {
            (
                column.center_x(),
                summary.category.clone(),
                boxplot::box_plot(column, Some(summary), &scale, &style),
            )
        })
        .collect();

    let card = hovered().and_then(|index| series.get(index)).map(tooltip_rows);
    let has_mean = series.iter().any(|s| s.mean.is_some());
    let axis_y = plot.y + plot.height;
    let label_y = axis_y + 18.0;
    let x_title_y = height - 6.0;
    let y_title_x = 16.0;
    let y_title_cy = plot.y + plot.height / 2.0;

    rsx! {
        div { class: "chart",
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
                    y1: "{axis_y}",
                    x2: "{plot.x + plot.width}",
                    y2: "{axis_y}",
                    stroke: "#888888",
                }
                for (index, (center, category, primitives)) in columns.into_iter().enumerate() {
                    g {
                        key: "{category}",
                        class: "chart__column",
                        onmouseenter: move |_| hovered.set(Some(index)),
                        onmouseleave: move |_| hovered.set(None),
                        for primitive in primitives {
                            {render_primitive(&primitive)}
                        }
                        text {
                            x: "{center}",
                            y: "{label_y}",
                            class: "chart__tick",
                            text_anchor: "middle",
                            "{category}"
                        }
                    }
                }
                text {
                    x: "{plot.x + plot.width / 2.0}",
                    y: "{x_title_y}",
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

            if let Some((heading, rows)) = card {
                div { class: "chart__tooltip",
                    p { class: "chart__tooltip-title", "{heading}" }
                    for (label, value, accent) in rows {
                        div { class: "chart__tooltip-row",
                            span { style: "color: {accent}", "{label}" }
                            span { "{value}" }
                        }
                    }
                }
            }

            BoxPlotLegend { show_mean: has_mean }
        }
    }
}

#[component]
pub fn BoxPlotLegend(show_mean: bool) -> Element {
    rsx! {
        ul { class: "chart__legend",
            li { span { class: "chart__swatch chart__swatch--box" } {t!("legend-box")} }
            li { span { class: "chart__swatch chart__swatch--median" } {t!("legend-median")} }
            if show_mean {
                li { span { class: "chart__swatch chart__swatch--mean" } {t!("legend-mean")} }
            }
            li { span { class: "chart__swatch chart__swatch--whisker" } {t!("legend-whiskers")} }
        }
    }
}

pub(crate) fn render_primitive(primitive: &Primitive) -> Element {
    let paint = svg::paint(primitive.role());
    match *primitive {
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            ..
        } => {
            let dash = match stroke {
                Stroke::Dashed => svg::WHISKER_DASH,
                Stroke::Solid => "none",
            };
            rsx! {
                line {
                    x1: "{x1}",
                    y1: "{y1}",
                    x2: "{x2}",
                    y2: "{y2}",
                    stroke: paint.stroke,
                    stroke_width: "{paint.stroke_width}",
                    stroke_dasharray: dash,
                }
            }
        }
        Primitive::Rect {
            x,
            y,
            width,
            height,
            ..
        } => rsx! {
            rect {
                x: "{x}",
                y: "{y}",
                width: "{width}",
                height: "{height}",
                fill: paint.fill,
                fill_opacity: "{paint.fill_opacity}",
                stroke: paint.stroke,
                stroke_width: "{paint.stroke_width}",
            }
        },
        Primitive::Circle { cx, cy, r, .. } => rsx! {
            circle {
                cx: "{cx}",
                cy: "{cy}",
                r: "{r}",
                fill: paint.fill,
                stroke: paint.stroke,
                stroke_width: "{paint.stroke_width}",
            }
        },
    }
}

/// Hover card content, top (max) to bottom (min), coloured like the chart.
fn tooltip_rows(summary: &StatSummary) -> (String, Vec<(String, String, &'static str)>) {
    let mut rows = vec![
        (t!("stat-max"), format_seconds(summary.max), "#ff6b6b"),
        (t!("stat-q3"), format_seconds(summary.q3), "#82ca9d"),
        (t!("stat-median"), format_seconds(summary.median), "#ffd700"),
    ];
    if let Some(mean) = summary.mean {
        rows.push((t!("stat-mean"), format_seconds(mean), "#00ff88"));
    }
    rows.extend([
        (t!("stat-q1"), format_seconds(summary.q1), "#8884d8"),
        (t!("stat-min"), format_seconds(summary.min), "#00ccff"),
        (t!("stat-iqr"), format_seconds(summary.iqr()), "#999999"),
    ]);
    let heading = t!(
        "chart-tooltip-heading",
        category = summary.category.clone(),
        n = summary.sample_size
    );
    (heading, rows)
}
