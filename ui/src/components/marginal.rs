use dioxus::prelude::*;

use super::bar_chart::{BarChart, BarGroup, BarSeries};
use crate::core::format::{format_growth, format_signed_seconds};
use crate::core::marginal::{axis_scale, AxisScale, MarginalRecord};
use crate::core::summary::StatSummary;
use crate::t;

/// Marginal-time bars for consecutive categories of one sweep. The value
/// axis goes linear as soon as any bar is below the log floor.
#[component]
pub fn MarginalChart(records: Vec<MarginalRecord>, height: f64, x_label: String) -> Element {
    let axis = axis_scale(&records);
    let y_label = match axis {
        AxisScale::Log => t!("axis-marginal-log"),
        AxisScale::Linear => t!("axis-marginal-linear"),
    };
    let groups: Vec<BarGroup> = records
        .iter()
        .map(|r| BarGroup {
            label: r.transition_label(),
            values: vec![r.marginal_seconds],
        })
        .collect();
    let series = vec![BarSeries {
        name: t!("legend-marginal"),
        color: "#00ccff".to_string(),
    }];

    rsx! {
        BarChart { groups, series, axis, height, x_label, y_label }
    }
}

/// from→to, signed marginal, growth and the target's sample size.
#[component]
pub fn MarginalTable(records: Vec<MarginalRecord>, series: Vec<StatSummary>) -> Element {
    rsx! {
        div { class: "data-table__wrap",
            table { class: "data-table",
                thead {
                    tr {
                        th { {t!("table-transition")} }
                        th { class: "data-table__num", {t!("table-marginal")} }
                        th { class: "data-table__num", {t!("table-growth")} }
                        th { class: "data-table__num", {t!("table-samples")} }
                    }
                }
                tbody {
                    for record in records.iter() {
                        tr { key: "{record.transition_label()}",
                            td { "{record.from_category} → {record.to_category}" }
                            td { class: "data-table__num data-table__num--accent",
                                "{format_signed_seconds(record.marginal_seconds)}"
                            }
                            td { class: "data-table__num data-table__num--growth",
                                "{format_growth(record.growth)}"
                            }
                            td { class: "data-table__num",
                                {sample_size(&series, &record.to_category)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sample_size(series: &[StatSummary], category: &str) -> String {
    series
        .iter()
        .find(|s| s.category == category)
        .map(|s| s.sample_size.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}
