use dioxus::prelude::*;

use super::{compare_to_fastest, sample_description, ExportSweep, ResultsExportPanel};
use crate::components::bar_chart::{BarChart, BarGroup, BarSeries};
use crate::components::box_plot_chart::BoxPlotChart;
use crate::components::viewport::use_chart_height;
use crate::core::boxplot::BoxPlotStyle;
use crate::core::format::{format_seconds, format_signed_seconds};
use crate::core::marginal::AxisScale;
use crate::datasets::SweepDataset;
use crate::t;

#[component]
fn CategoryNotes(dataset: &'static SweepDataset) -> Element {
    rsx! {
        div { class: "note-grid",
            for note in dataset.notes.iter() {
                article { key: "{note.category}", class: "note-card",
                    h3 { class: "note-card__title", "{note.category}" }
                    p { "{note.description}" }
                    code { class: "note-card__example", "{note.example}" }
                }
            }
        }
    }
}

/// Character-class diversity levels. The sweep carries no means, so the
/// chart shows no mean markers.
#[component]
pub fn DiversityResults(dataset: &'static SweepDataset) -> Element {
    let export = ExportSweep {
        title: t!("diversity-chart-title"),
        slug: "diversity".to_string(),
        series: dataset.series.clone(),
        preset: dataset.preset,
        style: BoxPlotStyle::standard(),
    };

    rsx! {
        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("diversity-chart-title")} }
            }
            BoxPlotChart {
                series: dataset.series.clone(),
                preset: dataset.preset,
                x_label: t!("axis-diversity"),
                y_label: t!("axis-time-log"),
            }
            p { class: "results-card__meta", {sample_description(&dataset.series)} }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("diversity-levels-title")} }
            }
            CategoryNotes { dataset }
        }

        ResultsExportPanel { sweep: export }
    }
}

/// Placement of the special characters (prefix, suffix, mixed).
#[component]
pub fn PositionResults(dataset: &'static SweepDataset) -> Element {
    let comparison = compare_to_fastest(&dataset.series);
    let bar_height = use_chart_height(dataset.preset.nominal_height * 0.8);
    let groups: Vec<BarGroup> = comparison
        .iter()
        .map(|row| BarGroup {
            label: row.category.clone(),
            values: vec![row.mean],
        })
        .collect();
    let series = vec![BarSeries {
        name: t!("legend-mean"),
        color: "#00ff88".to_string(),
    }];
    let fastest = comparison.iter().find(|row| row.fastest).cloned();

    let export = ExportSweep {
        title: t!("position-chart-title"),
        slug: "position".to_string(),
        series: dataset.series.clone(),
        preset: dataset.preset,
        style: BoxPlotStyle::standard(),
    };

    rsx! {
        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("position-chart-title")} }
            }
            BoxPlotChart {
                series: dataset.series.clone(),
                preset: dataset.preset,
                x_label: t!("axis-position"),
                y_label: t!("axis-time-log"),
            }
            p { class: "results-card__meta", {sample_description(&dataset.series)} }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("position-mean-title")} }
            }
            BarChart {
                groups,
                series,
                axis: AxisScale::Linear,
                height: bar_height,
                x_label: t!("axis-position"),
                y_label: t!("axis-mean-linear"),
            }
            div { class: "data-table__wrap",
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("table-position")} }
                            th { class: "data-table__num", {t!("stat-mean")} }
                            th { class: "data-table__num", {t!("table-vs-fastest")} }
                            th { class: "data-table__num", {t!("table-growth")} }
                        }
                    }
                    tbody {
                        for row in comparison.iter() {
                            tr {
                                key: "{row.category}",
                                class: if row.fastest { "data-table__row--highlight" } else { "" },
                                td { "{row.category}" }
                                td { class: "data-table__num", "{format_seconds(row.mean)}" }
                                td { class: "data-table__num data-table__num--accent",
                                    "{format_signed_seconds(row.extra_seconds)}"
                                }
                                td { class: "data-table__num data-table__num--growth",
                                    "{row.extra_percent:.1}%"
                                }
                            }
                        }
                    }
                }
            }
            if let Some(best) = fastest {
                p { class: "results-card__meta results-card__meta--accent",
                    {t!("position-fastest", position = best.category.clone(), seconds = format_seconds(best.mean))}
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("position-notes-title")} }
            }
            CategoryNotes { dataset }
        }

        ResultsExportPanel { sweep: export }
    }
}
