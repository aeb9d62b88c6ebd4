use dioxus::prelude::*;

use super::{
    round_label, sample_description, transition_bars, ExportSweep, ResultsExportPanel, RoundTabs,
};
use crate::components::bar_chart::BarChart;
use crate::components::box_plot_chart::BoxPlotChart;
use crate::components::marginal::{MarginalChart, MarginalTable};
use crate::components::viewport::use_chart_height;
use crate::core::boxplot::BoxPlotStyle;
use crate::core::format::{format_count, format_signed_seconds};
use crate::core::marginal::{axis_scale, axis_scale_for, marginal_records, AxisScale};
use crate::datasets::{LengthDataset, Round};
use crate::t;

/// Crack time against password length for one test round.
#[component]
pub fn LengthResults(dataset: &'static LengthDataset) -> Element {
    let mut round = use_signal(Round::default);
    let series = dataset.series(round()).to_vec();
    let records = marginal_records(&series);
    let marginal_height = use_chart_height(dataset.preset.nominal_height) * 0.9;
    let transition_height = use_chart_height(dataset.preset.nominal_height * 0.8);
    let (transition_groups, transition_series) = transition_bars(&dataset.transitions);
    let transition_axis =
        axis_scale_for(transition_groups.iter().flat_map(|g| g.values.iter().copied()));
    let transition_y_label = match transition_axis {
        AxisScale::Log => t!("axis-marginal-log"),
        AxisScale::Linear => t!("axis-marginal-linear"),
    };
    let largest = records
        .iter()
        .max_by(|a, b| a.marginal_seconds.total_cmp(&b.marginal_seconds))
        .cloned();

    #[cfg(debug_assertions)]
    tracing::debug!(round = round().slug(), categories = series.len(), "length results render");

    let export = ExportSweep {
        title: t!("length-chart-title", round = round_label(round())),
        slug: format!("length-{}", round().slug()),
        series: series.clone(),
        preset: dataset.preset,
        style: BoxPlotStyle::standard(),
    };
    let keyspace: Vec<(String, String)> = series
        .iter()
        .filter_map(|s| {
            dataset
                .keyspace
                .get(&s.category)
                .map(|k| (s.category.clone(), format_count(*k)))
        })
        .collect();

    rsx! {
        RoundTabs { selected: round(), on_select: move |r| round.set(r) }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("length-chart-title", round = round_label(round()))} }
            }
            BoxPlotChart {
                series: series.clone(),
                preset: dataset.preset,
                x_label: t!("axis-length"),
                y_label: t!("axis-time-log"),
            }
            p { class: "results-card__meta", {sample_description(&series)} }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("length-marginal-title")} }
            }
            p { class: "results-card__meta", {t!("marginal-explainer")} }
            MarginalChart {
                records: records.clone(),
                height: marginal_height,
                x_label: t!("axis-length-transition"),
            }
            if axis_scale(&records) == AxisScale::Linear {
                p { class: "results-card__meta", {t!("marginal-linear-note")} }
            }
            MarginalTable { records: records.clone(), series: series.clone() }
            if let Some(peak) = largest {
                p { class: "results-card__meta results-card__meta--accent",
                    {t!("marginal-largest",
                        transition = peak.transition_label(),
                        seconds = format_signed_seconds(peak.marginal_seconds))}
                }
            }
        }

        if !keyspace.is_empty() {
            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("length-keyspace-title")} }
                }
                div { class: "data-table__wrap",
                    table { class: "data-table",
                        thead {
                            tr {
                                th { {t!("table-length")} }
                                th { class: "data-table__num", {t!("table-keyspace")} }
                            }
                        }
                        tbody {
                            for (length, size) in keyspace {
                                tr { key: "{length}",
                                    td { "{length}" }
                                    td { class: "data-table__num", "{size}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("length-transition-title")} }
            }
            p { class: "results-card__meta",
                {t!("length-transition-explainer", source = dataset.transitions.source.clone())}
            }
            BarChart {
                groups: transition_groups,
                series: transition_series,
                axis: transition_axis,
                height: transition_height,
                x_label: t!("axis-special-count"),
                y_label: transition_y_label,
            }
            div { class: "data-table__wrap",
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("table-special-count")} }
                            th { {t!("table-transition")} }
                            th { class: "data-table__num", {t!("table-marginal")} }
                            th { class: "data-table__num", {t!("table-growth")} }
                        }
                    }
                    tbody {
                        for row in dataset.transitions.rows.iter() {
                            for step in row.steps.iter() {
                                tr { key: "{row.special}-{step.label()}",
                                    td { "{row.special}" }
                                    td { "{step.label()}" }
                                    td { class: "data-table__num data-table__num--accent",
                                        "{format_signed_seconds(step.marginal_seconds)}"
                                    }
                                    td { class: "data-table__num data-table__num--growth",
                                        "{step.growth_percent:.1}%"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        ResultsExportPanel { sweep: export }
    }
}
