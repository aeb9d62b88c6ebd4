use dioxus::prelude::*;

use super::{use_locale_marker, CatalogError};
use crate::components::tab_bar::TabBar;
use crate::datasets::{Catalog, Design};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DesignTab {
    #[default]
    Overview,
    Methodology,
    Configuration,
}

impl DesignTab {
    const ALL: [DesignTab; 3] = [
        DesignTab::Overview,
        DesignTab::Methodology,
        DesignTab::Configuration,
    ];

    fn label(self) -> String {
        match self {
            DesignTab::Overview => t!("design-tab-overview"),
            DesignTab::Methodology => t!("design-tab-methodology"),
            DesignTab::Configuration => t!("design-tab-config"),
        }
    }

    fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

#[component]
pub fn ExperimentDesign() -> Element {
    let lang = use_locale_marker();
    let mut tab = use_signal(DesignTab::default);

    #[cfg(debug_assertions)]
    tracing::debug!(%lang, tab = ?tab(), "design render");
    #[cfg(not(debug_assertions))]
    let _ = lang;

    let design = match Catalog::shared() {
        Ok(catalog) => &catalog.design,
        Err(err) => {
            return rsx! {
                section { class: "page page-design",
                    CatalogError { message: t!("results-load-error", reason = err.to_string()) }
                }
            }
        }
    };
    let labels: Vec<String> = DesignTab::ALL.into_iter().map(DesignTab::label).collect();

    rsx! {
        section { class: "page page-design",
            h1 { {t!("design-title")} }
            p { class: "page__lead", {t!("design-intro")} }

            TabBar {
                labels,
                active: tab().index(),
                on_select: move |index: usize| tab.set(DesignTab::from_index(index)),
            }

            {match tab() {
                DesignTab::Overview => rsx! { DesignOverview { design } },
                DesignTab::Methodology => rsx! { DesignMethodology { design } },
                DesignTab::Configuration => rsx! { DesignConfiguration { design } },
            }}
        }
    }
}

#[component]
fn DesignOverview(design: &'static Design) -> Element {
    let variables = [
        (t!("design-variables-independent"), &design.variables.independent),
        (t!("design-variables-dependent"), &design.variables.dependent),
        (t!("design-variables-controlled"), &design.variables.controlled),
    ];

    rsx! {
        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-objectives-title")} }
            }
            div { class: "note-grid",
                for objective in design.objectives.iter() {
                    article { key: "{objective.title}", class: "note-card",
                        h3 { class: "note-card__title", "{objective.icon} {objective.title}" }
                        p { "{objective.description}" }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-rounds-title")} }
            }
            div { class: "note-grid",
                for plan in design.rounds.iter() {
                    article { key: "{plan.round}", class: "note-card",
                        h3 { class: "note-card__title",
                            "{plan.round}: {plan.title}"
                            if plan.completed {
                                span { class: "badge badge--success", {t!("design-round-completed")} }
                            } else {
                                span { class: "badge badge--info", {t!("design-round-planned")} }
                            }
                        }
                        ul {
                            for test in plan.tests.iter() {
                                li { key: "{test}", "{test}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-variables-title")} }
            }
            div { class: "note-grid",
                for (heading, items) in variables {
                    article { key: "{heading}", class: "note-card",
                        h3 { class: "note-card__title", "{heading}" }
                        ul {
                            for item in items.iter() {
                                li { key: "{item}", "{item}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DesignMethodology(design: &'static Design) -> Element {
    let mode = &design.attack_mode;

    rsx! {
        section { class: "results-card",
            div { class: "results-card__header",
                h2 { "{mode.mode}: {mode.name}" }
            }
            p { "{mode.description}" }
            pre { class: "code-block", code { "{mode.command}" } }
            div { class: "page-home__columns",
                div {
                    h3 { {t!("design-pros")} }
                    ul {
                        for pro in mode.pros.iter() {
                            li { key: "{pro}", "{pro}" }
                        }
                    }
                }
                div {
                    h3 { {t!("design-cons")} }
                    ul {
                        for con in mode.cons.iter() {
                            li { key: "{con}", "{con}" }
                        }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-tests-title")} }
            }
            div { class: "note-grid",
                for test in design.test_designs.iter() {
                    article { key: "{test.round}", class: "note-card",
                        h3 { class: "note-card__title", "{test.round}" }
                        p { class: "note-card__subtitle", "{test.focus}" }
                        ul {
                            for detail in test.details.iter() {
                                li { key: "{detail}", "{detail}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-charsets-title")} }
            }
            div { class: "data-table__wrap",
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("table-symbol")} }
                            th { {t!("table-description")} }
                            th { {t!("table-example")} }
                            th { class: "data-table__num", {t!("table-count")} }
                        }
                    }
                    tbody {
                        for charset in design.charsets.iter() {
                            tr { key: "{charset.symbol}",
                                td { code { "{charset.symbol}" } }
                                td { "{charset.description}" }
                                td { "{charset.example}" }
                                td { class: "data-table__num", "{charset.count}" }
                            }
                        }
                    }
                }
            }
            for example in design.mask_examples.iter() {
                div { key: "{example.mask}", class: "note-card",
                    code { class: "note-card__example", "{example.mask}" }
                    ul {
                        for part in example.parts.iter() {
                            li { key: "{part}", "{part}" }
                        }
                    }
                    p { class: "note-card__subtitle",
                        {t!("design-keyspace", keyspace = example.keyspace.clone())}
                    }
                }
            }
        }
    }
}

#[component]
fn DesignConfiguration(design: &'static Design) -> Element {
    rsx! {
        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-system-title")} }
            }
            dl { class: "definition-list",
                for item in design.system.iter() {
                    div { key: "{item.label}", class: "definition-list__row",
                        dt { "{item.label}" }
                        dd { "{item.value}" }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-flags-title")} }
            }
            dl { class: "definition-list",
                for flag in design.flags.iter() {
                    div { key: "{flag.param}", class: "definition-list__row",
                        dt { code { "{flag.param}" } }
                        dd { "{flag.description}" }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-workloads-title")} }
            }
            div { class: "stat-grid stat-grid--compact",
                for workload in design.workloads.iter() {
                    article { key: "{workload.flag}", class: "stat-card",
                        p { class: "stat-card__value", "{workload.flag}" }
                        h3 { class: "stat-card__title", "{workload.name}" }
                        p { class: "stat-card__subtitle", "{workload.description}" }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("design-optimizations-title")} }
            }
            div { class: "note-grid",
                for item in design.optimizations.iter() {
                    article { key: "{item.title}", class: "note-card",
                        h3 { class: "note-card__title", "{item.title}" }
                        p { "{item.description}" }
                        p { class: "note-card__subtitle",
                            {t!("design-impact", impact = item.impact.clone())}
                        }
                        p { class: "note-card__subtitle",
                            {t!("design-limitation", limitation = item.limitation.clone())}
                        }
                    }
                }
            }
        }
    }
}
