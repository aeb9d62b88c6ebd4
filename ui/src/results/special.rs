use dioxus::prelude::*;

use super::{
    cross_length_bars, round_label, sample_description, ExportSweep, ResultsExportPanel, RoundTabs,
};
use crate::components::bar_chart::BarChart;
use crate::components::box_plot_chart::BoxPlotChart;
use crate::components::marginal::{MarginalChart, MarginalTable};
use crate::components::tab_bar::TabBar;
use crate::components::viewport::use_chart_height;
use crate::core::boxplot::BoxPlotStyle;
use crate::core::format::{format_growth, format_signed_seconds};
use crate::core::marginal::{axis_scale_for, marginal_records, AxisScale};
use crate::datasets::{Round, SpecialDataset};
use crate::t;

/// Crack time against the number of appended special characters, per base
/// length and round.
#[component]
pub fn SpecialResults(dataset: &'static SpecialDataset) -> Element {
    let mut round = use_signal(Round::default);
    let mut base_index = use_signal(|| 0usize);

    let base = dataset
        .base_lengths
        .get(base_index())
        .or_else(|| dataset.base_lengths.first())
        .cloned()
        .unwrap_or_default();
    let series = dataset.series(round(), &base).to_vec();
    let records = marginal_records(&series);
    let style = BoxPlotStyle::compact();
    let comparison_height = use_chart_height(dataset.preset.nominal_height);
    let marginal_height = comparison_height * 0.9;
    let (comparison_groups, comparison_series) = cross_length_bars(dataset, round());
    let comparison_axis =
        axis_scale_for(comparison_groups.iter().flat_map(|g| g.values.iter().copied()));
    let comparison_y_label = match comparison_axis {
        AxisScale::Log => t!("axis-marginal-log"),
        AxisScale::Linear => t!("axis-marginal-linear"),
    };
    let base_labels: Vec<String> = dataset
        .base_lengths
        .iter()
        .map(|len| t!("results-base-length", length = len.clone()))
        .collect();
    let all_transitions: Vec<(String, Vec<_>)> = dataset
        .base_lengths
        .iter()
        .map(|len| (len.clone(), marginal_records(dataset.series(round(), len))))
        .collect();

    #[cfg(debug_assertions)]
    tracing::debug!(round = round().slug(), base = %base, "special results render");

    let title = t!(
        "special-chart-title",
        length = base.clone(),
        round = round_label(round())
    );
    let export = ExportSweep {
        title: title.clone(),
        slug: format!("special-{base}-{}", round().slug()),
        series: series.clone(),
        preset: dataset.preset,
        style,
    };

    rsx! {
        RoundTabs { selected: round(), on_select: move |r| round.set(r) }

        div { class: "results-card results-card--selector",
            p { class: "results-card__label", {t!("results-select-base-length")} }
            TabBar {
                labels: base_labels,
                active: base_index(),
                class: "tab-bar tab-bar--compact".to_string(),
                on_select: move |index: usize| base_index.set(index),
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { "{title}" }
            }
            BoxPlotChart {
                series: series.clone(),
                preset: dataset.preset,
                style,
                x_label: t!("axis-special-count"),
                y_label: t!("axis-time-log"),
            }
            p { class: "results-card__meta", {sample_description(&series)} }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("special-marginal-title", length = base.clone())} }
            }
            MarginalChart {
                records: records.clone(),
                height: marginal_height,
                x_label: t!("axis-special-transition"),
            }
            MarginalTable { records, series: series.clone() }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("special-comparison-title", round = round_label(round()))} }
            }
            p { class: "results-card__meta", {t!("special-comparison-explainer")} }
            BarChart {
                groups: comparison_groups,
                series: comparison_series,
                axis: comparison_axis,
                height: comparison_height,
                x_label: t!("axis-special-count"),
                y_label: comparison_y_label,
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("special-transitions-title")} }
            }
            div { class: "data-table__wrap",
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("table-base-length")} }
                            th { {t!("table-transition")} }
                            th { class: "data-table__num", {t!("table-marginal")} }
                            th { class: "data-table__num", {t!("table-growth")} }
                        }
                    }
                    tbody {
                        for (len, rows) in all_transitions {
                            for record in rows {
                                tr { key: "{len}-{record.transition_label()}",
                                    td { "{len}" }
                                    td { "+{record.from_category} → +{record.to_category}" }
                                    td { class: "data-table__num data-table__num--accent",
                                        "{format_signed_seconds(record.marginal_seconds)}"
                                    }
                                    td { class: "data-table__num data-table__num--growth",
                                        "{format_growth(record.growth)}"
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
