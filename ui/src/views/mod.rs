mod design;
pub use design::ExperimentDesign;

mod home;
pub use home::Home;

mod results;
pub use results::Results;

use dioxus::prelude::*;

use crate::t;

/// Rendered in place of a page when the embedded catalog failed validation.
#[component]
pub(crate) fn CatalogError(message: String) -> Element {
    rsx! {
        section { class: "results-card results-card--error",
            h2 { {t!("catalog-error-title")} }
            p { class: "results-card__meta results-card__meta--error", "{message}" }
        }
    }
}

/// Re-render when the locale context changes.
pub(crate) fn use_locale_marker() -> String {
    try_use_context::<Signal<String>>()
        .map(|code| code())
        .unwrap_or_else(|| "en-US".to_string())
}
