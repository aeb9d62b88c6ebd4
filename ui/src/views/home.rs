use dioxus::prelude::*;

use super::{use_locale_marker, CatalogError};
use crate::datasets::{Catalog, Overview};
use crate::t;

#[component]
pub fn Home() -> Element {
    let lang = use_locale_marker();

    #[cfg(debug_assertions)]
    tracing::debug!(%lang, "home render");
    #[cfg(not(debug_assertions))]
    let _ = lang;

    match Catalog::shared() {
        Ok(catalog) => rsx! { OverviewDashboard { overview: &catalog.overview } },
        Err(err) => rsx! {
            section { class: "page page-home",
                CatalogError { message: t!("results-load-error", reason = err.to_string()) }
            }
        },
    }
}

#[component]
fn OverviewDashboard(overview: &'static Overview) -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { class: "page__lead", {t!("home-intro")} }

            div { class: "stat-grid",
                for card in overview.stats.iter() {
                    article { key: "{card.title}", class: "stat-card stat-card--{card.tone}",
                        p { class: "stat-card__value", "{card.value}" }
                        h3 { class: "stat-card__title", "{card.title}" }
                        p { class: "stat-card__subtitle", "{card.subtitle}" }
                    }
                }
            }

            div { class: "page-home__columns",
                section { class: "results-card",
                    div { class: "results-card__header",
                        h2 { {t!("home-config-title")} }
                    }
                    dl { class: "definition-list",
                        for item in overview.config.iter() {
                            div { key: "{item.label}", class: "definition-list__row",
                                dt { "{item.label}" }
                                dd { "{item.value}" }
                            }
                        }
                    }
                    div { class: "gpu-status",
                        span { class: "gpu-status__item",
                            {t!("home-gpu-temperature", value = overview.gpu.temperature.clone())}
                        }
                        span { class: "gpu-status__item",
                            {t!("home-gpu-utilisation", value = overview.gpu.utilisation.clone())}
                        }
                    }
                }

                section { class: "results-card",
                    div { class: "results-card__header",
                        h2 { {t!("home-phases-title")} }
                    }
                    ol { class: "timeline",
                        for phase in overview.phases.iter() {
                            li { key: "{phase.title}", class: "timeline__item",
                                strong { "{phase.title}" }
                                p { "{phase.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("home-focus-title")} }
                }
                div { class: "note-grid",
                    for area in overview.focus.iter() {
                        article { key: "{area.title}", class: "note-card",
                            h3 { class: "note-card__title", "{area.icon} {area.title}" }
                            p { "{area.description}" }
                            if !area.details.is_empty() {
                                ul {
                                    for detail in area.details.iter() {
                                        li { key: "{detail}", "{detail}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("home-matrix-title")} }
                }
                div { class: "stat-grid stat-grid--compact",
                    for cell in overview.test_matrix.iter() {
                        article { key: "{cell.label}", class: "stat-card",
                            p { class: "stat-card__value", "{cell.count}" }
                            h3 { class: "stat-card__title", "{cell.label}" }
                            p { class: "stat-card__subtitle", "{cell.detail}" }
                        }
                    }
                }
            }

            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("home-distribution-title")} }
                }
                div { class: "share-bars",
                    for share in overview.length_distribution.iter() {
                        div { key: "{share.length}", class: "share-bars__row",
                            span { class: "share-bars__label",
                                {t!("home-distribution-length", length = share.length.clone())}
                            }
                            div { class: "share-bars__track",
                                div {
                                    class: "share-bars__fill",
                                    style: "width: {share.percentage.clamp(0.0, 100.0)}%",
                                }
                            }
                            span { class: "share-bars__value",
                                "{share.count} ({share.percentage:.1}%)"
                            }
                        }
                    }
                }
            }

            section { class: "results-card",
                div { class: "results-card__header",
                    h2 { {t!("home-findings-title")} }
                }
                div { class: "note-grid",
                    for finding in overview.findings.iter() {
                        article { key: "{finding.title}", class: "note-card",
                            h3 { class: "note-card__title", "{finding.icon} {finding.title}" }
                            p { "{finding.text}" }
                        }
                    }
                }
            }
        }
    }
}
