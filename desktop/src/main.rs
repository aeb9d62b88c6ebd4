#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::{
    register_nav, use_sidebar_provider, use_viewport_provider, AppSidebar, NavBuilder,
};
use ui::views::{ExperimentDesign, Home, Results};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Home {},
    #[route("/design")]
    ExperimentDesign {},
    #[route("/results")]
    Results {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger init failed: {err}");
    }
}

#[cfg(feature = "desktop")]
fn main() {
    init_logging();
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Crackbench – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    init_logging();
    LaunchBuilder::server().launch(App);
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Home {}, "{label}" })
}
fn nav_design(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::ExperimentDesign {}, "{label}" })
}
fn nav_results(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", active_class: "sidebar__link--active", to: Route::Results {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppSidebar updates this on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    register_nav(NavBuilder {
        overview: nav_overview,
        design: nav_design,
        results: nav_results,
    });

    let hub = use_viewport_provider();
    // Above the keyed wrapper so a language switch keeps the sidebar as the user left it.
    use_sidebar_provider(hub.width());

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::tao::event::{Event, WindowEvent};

        let desktop = dioxus::desktop::use_window();

        // The window opens maximised, so the first width differs from the default.
        let initial_hub = hub.clone();
        let initial_window = desktop.clone();
        use_hook(move || {
            let scale = initial_window.window.scale_factor();
            let size = initial_window.window.inner_size().to_logical::<f64>(scale);
            initial_hub.publish(size.width.max(0.0) as u32);
        });

        let resize_window = desktop.clone();
        dioxus::desktop::use_wry_event_handler(move |event, _| {
            if let Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } = event
            {
                let scale = resize_window.window.scale_factor();
                let logical = size.to_logical::<f64>(scale);
                hub.publish(logical.width.max(0.0) as u32);
            }
        });

        // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
        use_effect(move || {
            desktop.set_maximized(true);
        });
    }
    #[cfg(not(feature = "desktop"))]
    let _ = hub;

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper forces a full remount of the routed subtree on language change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop-specific layout so the shared sidebar can wrap this crate's `Route` outlet.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppSidebar {
            Outlet::<Route> {}
        }
    }
}
