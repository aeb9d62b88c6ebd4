use dioxus::prelude::*;

use super::{use_locale_marker, CatalogError};
use crate::components::tab_bar::TabBar;
use crate::results::{
    Category, DiversityResults, LengthResults, PositionResults, ResultsState, SpecialResults,
    SummaryResults,
};
use crate::t;

#[component]
pub fn Results() -> Element {
    let lang = use_locale_marker();
    let state = use_hook(ResultsState::load);
    let mut category = use_signal(Category::default);

    #[cfg(debug_assertions)]
    tracing::debug!(%lang, category = ?category(), "results render");
    #[cfg(not(debug_assertions))]
    let _ = lang;

    let labels: Vec<String> = Category::ALL.into_iter().map(Category::label).collect();
    let body = match (state.catalog, state.error.clone()) {
        (Some(catalog), _) => match category() {
            Category::Length => rsx! { LengthResults { dataset: &catalog.length } },
            Category::Special => rsx! { SpecialResults { dataset: &catalog.special } },
            Category::Diversity => rsx! { DiversityResults { dataset: &catalog.diversity } },
            Category::Position => rsx! { PositionResults { dataset: &catalog.position } },
            Category::Summary => rsx! { SummaryResults { findings: &catalog.findings } },
        },
        (None, error) => rsx! {
            CatalogError { message: error.unwrap_or_default() }
        },
    };

    rsx! {
        section { class: "page page-results",
            h1 { {t!("results-title")} }
            p { class: "page__lead", {t!("results-intro")} }

            TabBar {
                labels,
                active: category().index(),
                class: "tab-bar tab-bar--categories".to_string(),
                on_select: move |index: usize| category.set(Category::from_index(index)),
            }

            div { class: "results__panels", {body} }
        }
    }
}
