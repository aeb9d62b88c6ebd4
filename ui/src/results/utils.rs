use dioxus::prelude::*;

use crate::components::bar_chart::{BarGroup, BarSeries};
use crate::components::tab_bar::TabBar;
use crate::core::marginal::marginal_against;
use crate::core::summary::StatSummary;
use crate::datasets::{Round, SpecialDataset, TransitionTable};
use crate::t;

/// Series colours for grouped bars, in slot order.
pub(crate) const SERIES_COLORS: [&str; 4] = ["#8884d8", "#82ca9d", "#ffc658", "#ff6b6b"];

pub(crate) fn round_label(round: Round) -> String {
    match round {
        Round::Round1 => t!("round-1"),
        Round::Round2 => t!("round-2"),
        Round::Total => t!("round-total"),
    }
}

/// Round selector shared by the length and special views.
#[component]
pub(crate) fn RoundTabs(selected: Round, on_select: EventHandler<Round>) -> Element {
    let labels: Vec<String> = Round::ALL.into_iter().map(round_label).collect();
    let active = Round::ALL
        .iter()
        .position(|r| *r == selected)
        .unwrap_or_default();

    rsx! {
        div { class: "results-card results-card--selector",
            p { class: "results-card__label", {t!("results-select-round")} }
            TabBar {
                labels,
                active,
                class: "tab-bar tab-bar--compact".to_string(),
                on_select: move |index: usize| {
                    if let Some(round) = Round::ALL.get(index) {
                        on_select.call(*round);
                    }
                },
            }
        }
    }
}

/// Smallest and largest per-category sample size.
pub(crate) fn sample_range(series: &[StatSummary]) -> Option<(u32, u32)> {
    let min = series.iter().map(|s| s.sample_size).min()?;
    let max = series.iter().map(|s| s.sample_size).max()?;
    Some((min, max))
}

pub(crate) fn sample_description(series: &[StatSummary]) -> String {
    match sample_range(series) {
        Some((min, max)) if min == max => t!("results-samples-uniform", n = min),
        Some((min, max)) => t!("results-samples-range", min = min, max = max),
        None => String::new(),
    }
}

/// Fixed-special-count length transitions: one group per special count, one
/// bar per length step.
pub(crate) fn transition_bars(table: &TransitionTable) -> (Vec<BarGroup>, Vec<BarSeries>) {
    let groups = table
        .rows
        .iter()
        .map(|row| BarGroup {
            label: row.special.clone(),
            values: row.steps.iter().map(|s| s.marginal_seconds).collect(),
        })
        .collect();
    let series = table
        .rows
        .first()
        .map(|row| {
            row.steps
                .iter()
                .zip(SERIES_COLORS.iter().cycle())
                .map(|(step, color)| BarSeries {
                    name: step.label(),
                    color: color.to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    (groups, series)
}

/// Marginal of each special count against count − 1, per base length.
/// A missing predecessor (count 1 has no count 0) contributes zero.
pub(crate) fn cross_length_bars(dataset: &SpecialDataset, round: Round) -> (Vec<BarGroup>, Vec<BarSeries>) {
    let counts: Vec<String> = dataset
        .base_lengths
        .first()
        .map(|base| {
            dataset
                .series(round, base)
                .iter()
                .map(|s| s.category.clone())
                .collect()
        })
        .unwrap_or_default();

    let groups = counts
        .iter()
        .map(|count| {
            let previous = count
                .parse::<u32>()
                .ok()
                .and_then(|c| c.checked_sub(1))
                .map(|c| c.to_string())
                .unwrap_or_default();
            BarGroup {
                label: format!("+{count}"),
                values: dataset
                    .base_lengths
                    .iter()
                    .map(|base| marginal_against(dataset.series(round, base), count, &previous))
                    .collect(),
            }
        })
        .collect();
    let series = dataset
        .base_lengths
        .iter()
        .zip(SERIES_COLORS.iter().cycle())
        .map(|(base, color)| BarSeries {
            name: t!("results-base-length", length = base.clone()),
            color: color.to_string(),
        })
        .collect();
    (groups, series)
}

/// Mean time of one category relative to the fastest category of the sweep.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MeanComparison {
    pub category: String,
    pub mean: f64,
    pub extra_seconds: f64,
    pub extra_percent: f64,
    pub fastest: bool,
}

/// Categories without a mean are skipped.
pub(crate) fn compare_to_fastest(series: &[StatSummary]) -> Vec<MeanComparison> {
    let means: Vec<(&str, f64)> = series
        .iter()
        .filter_map(|s| s.mean.map(|m| (s.category.as_str(), m)))
        .collect();
    let Some(fastest) = means.iter().map(|(_, m)| *m).reduce(f64::min) else {
        return Vec::new();
    };
    means
        .into_iter()
        .map(|(category, mean)| {
            let extra = mean - fastest;
            MeanComparison {
                category: category.to_string(),
                mean,
                extra_seconds: extra,
                extra_percent: if fastest > 0.0 { extra / fastest * 100.0 } else { 0.0 },
                fastest: mean == fastest,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Catalog;

    fn with_mean(category: &str, mean: Option<f64>, n: u32) -> StatSummary {
        StatSummary {
            category: category.into(),
            min: 1.0,
            q1: 2.0,
            median: 3.0,
            q3: 4.0,
            max: 5.0,
            mean,
            sample_size: n,
        }
    }

    #[test]
    fn sample_range_spans_sizes() {
        let series = [with_mean("a", None, 20), with_mean("b", None, 5)];
        assert_eq!(sample_range(&series), Some((5, 20)));
        assert_eq!(sample_range(&[]), None);
    }

    #[test]
    fn fastest_category_is_the_reference() {
        let series = [
            with_mean("Prefix", Some(200.0), 77),
            with_mean("Suffix", Some(100.0), 77),
            with_mean("Mixed", None, 77),
        ];
        let rows = compare_to_fastest(&series);
        assert_eq!(rows.len(), 2);
        assert!(rows[1].fastest);
        assert_eq!(rows[0].extra_seconds, 100.0);
        assert_eq!(rows[0].extra_percent, 100.0);
    }

    #[test]
    fn cross_length_first_count_has_no_predecessor() {
        let catalog = Catalog::shared().unwrap();
        let (groups, series) = cross_length_bars(&catalog.special, Round::Total);
        assert_eq!(series.len(), catalog.special.base_lengths.len());
        assert_eq!(groups[0].label, "+1");
        assert!(groups[0].values.iter().all(|v| *v == 0.0));
        assert!(groups[1].values.iter().any(|v| *v != 0.0));
    }

    #[test]
    fn transition_bars_group_by_special_count() {
        let catalog = Catalog::shared().unwrap();
        let (groups, series) = transition_bars(&catalog.length.transitions);
        assert_eq!(groups.len(), 4);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "8→9");
        assert_eq!(groups[0].values, vec![38.8, 354.1]);
    }
}
