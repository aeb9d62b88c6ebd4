use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{
    register_nav, use_sidebar_provider, use_viewport_provider, AppSidebar, NavBuilder,
};
use ui::views::{ExperimentDesign, Home, Results};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Home {},
    #[route("/design")]
    ExperimentDesign {},
    #[route("/results")]
    Results {},
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_design(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::ExperimentDesign {},
        "{label}"
    })
}
fn nav_results(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        active_class: "sidebar__link--active",
        to: Route::Results {},
        "{label}"
    })
}

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger init failed: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        overview: nav_overview,
        design: nav_design,
        results: nav_results,
    });

    // Shared by the sidebar and every chart; re-published on `resize`.
    let hub = use_viewport_provider();
    // Above the keyed wrapper so a language switch keeps the sidebar as the user left it.
    use_sidebar_provider(hub.width());

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div { key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web-specific layout so the shared sidebar can wrap this crate's `Route` outlet.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppSidebar {
            Outlet::<Route> {}
        }
    }
}
