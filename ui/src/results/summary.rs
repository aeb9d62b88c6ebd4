use dioxus::prelude::*;

use crate::datasets::Findings;
use crate::t;

/// Key findings, recommended password policies and best practices.
#[component]
pub fn SummaryResults(findings: &'static Findings) -> Element {
    rsx! {
        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("summary-findings-title")} }
            }
            div { class: "stat-grid",
                for finding in findings.key_findings.iter() {
                    article { key: "{finding.title}", class: "stat-card",
                        p { class: "stat-card__value", "{finding.stat}" }
                        h3 { class: "stat-card__title", "{finding.title}" }
                        p { class: "stat-card__subtitle", "{finding.description}" }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("summary-recommendations-title")} }
            }
            div { class: "data-table__wrap",
                table { class: "data-table",
                    thead {
                        tr {
                            th { {t!("table-level")} }
                            th { {t!("table-min-length")} }
                            th { {t!("table-crack-time")} }
                            th { {t!("table-description")} }
                        }
                    }
                    tbody {
                        for rec in findings.recommendations.iter() {
                            tr { key: "{rec.level}",
                                td {
                                    span { class: "badge badge--{rec.tone}", "{rec.level}" }
                                }
                                td { "{rec.length}" }
                                td { "{rec.time}" }
                                td { "{rec.description}" }
                            }
                        }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("summary-practices-title")} }
            }
            div { class: "note-grid",
                for practice in findings.practices.iter() {
                    article { key: "{practice.title}", class: "note-card",
                        h3 { class: "note-card__title", "{practice.icon} {practice.title}" }
                        p { "{practice.description}" }
                    }
                }
            }
        }

        section { class: "results-card",
            div { class: "results-card__header",
                h2 { {t!("summary-conclusions-title")} }
            }
            ol { class: "conclusion-list",
                for conclusion in findings.conclusions.iter() {
                    li { key: "{conclusion.title}",
                        strong { "{conclusion.title}" }
                        " "
                        "{conclusion.text}"
                    }
                }
            }
            p { class: "results-card__callout", "{findings.final_recommendation}" }
        }
    }
}
