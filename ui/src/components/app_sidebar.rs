use crate::components::viewport::use_viewport_width;
use crate::core::layout::{self, SidebarState};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");
const SIDEBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/sidebar.css"
));

/// Platform-supplied navigation links.
///
/// The shared crate cannot name each platform's `Route` enum, so the web and
/// desktop shells register one closure per destination. Each closure receives
/// the localized label and returns a `Link` containing it:
///
/// ```ignore
/// register_nav(NavBuilder {
///     overview: |label| rsx!( Link { class: "sidebar__link", to: Route::Home {}, "{label}" } ),
///     design: |label| rsx!( Link { class: "sidebar__link", to: Route::Design {}, "{label}" } ),
///     results: |label| rsx!( Link { class: "sidebar__link", to: Route::Results {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub overview: fn(label: &str) -> Element,
    pub design: fn(label: &str) -> Element,
    pub results: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Shell-level sidebar state.
///
/// Call from the platform `App` above the language-keyed wrapper; the routed
/// layout remounts on a language switch and must not reset the user's
/// open/closed choice.
pub fn use_sidebar_provider(width: u32) -> Signal<SidebarState> {
    let state = use_signal(|| SidebarState::initial(width));
    use_context_provider(|| state)
}

/// The shell's sidebar state, or a local one when no shell provides it.
pub fn use_sidebar_state(width: u32) -> Signal<SidebarState> {
    let shared = try_use_context::<Signal<SidebarState>>();
    let local = use_signal(|| SidebarState::initial(width));
    shared.unwrap_or(local)
}

/// App frame: collapsible sidebar, header with menu toggle, routed content.
///
/// Open state starts from the layout policy and collapses whenever the
/// viewport shrinks to tablet or mobile width. On those widths the sidebar
/// overlays the content; tapping the overlay or a link closes it.
#[component]
pub fn AppSidebar(children: Element) -> Element {
    i18n::init();

    let width = use_viewport_width();
    let mut sidebar = use_sidebar_state(width());

    use_effect(move || {
        let current = width();
        sidebar.with_mut(|state| state.on_resize(current));
    });

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();
    // The routed subtree remounts on a language switch; start from the shared code.
    let initial_lang = if lang_marker.is_empty() {
        "en-US".to_string()
    } else {
        lang_marker.clone()
    };
    let mut current_lang = use_signal(move || initial_lang);
    let langs = use_signal(i18n::available_languages);
    let lang_options = langs();
    let show_switcher = lang_options.len() > 1;

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %lang_marker, width = width(), "sidebar render");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, "language switch failed"),
        }
    };

    let nav_links: Vec<Element> = NAV_BUILDER
        .get()
        .map(|b| {
            vec![
                (b.overview)(&t!("nav-overview")),
                (b.design)(&t!("nav-design")),
                (b.results)(&t!("nav-results")),
            ]
        })
        .unwrap_or_default();

    let open = sidebar().is_open();
    let overlay = sidebar().shows_overlay(width());
    let viewport_class = layout::evaluate(width()).class.css_class();
    let shell_class = if open {
        format!("app-shell app-shell--open {viewport_class}")
    } else {
        format!("app-shell {viewport_class}")
    };
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        document::Link { rel: "stylesheet", href: SIDEBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SIDEBAR_CSS_INLINE}" }
        }

        div { class: "{shell_class}",
            div { style: "display:none", "{lang_marker}" }

            aside {
                id: "sidebar",
                class: if open { "sidebar sidebar--open" } else { "sidebar" },
                div { class: "sidebar__brand",
                    span { class: "sidebar__brand-mark", "Crackbench" }
                    span { class: "sidebar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "sidebar__links",
                    for (index, link) in nav_links.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "sidebar__item",
                            onclick: move |_| sidebar.with_mut(|s| s.on_navigate(width())),
                            {link}
                        }
                    }
                }

                if show_switcher {
                    div { class: "sidebar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in lang_options.iter() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }

                p { class: "sidebar__footer", {t!("sidebar-version", version = version)} }
            }

            if overlay {
                div {
                    class: "sidebar__overlay",
                    onclick: move |_| sidebar.with_mut(|s| s.close()),
                }
            }

            div { class: "app-shell__main",
                header { class: "app-header",
                    button {
                        r#type: "button",
                        class: "app-header__toggle",
                        aria_label: t!("sidebar-toggle"),
                        aria_expanded: open,
                        onclick: move |_| sidebar.with_mut(|s| s.toggle()),
                        span { class: "app-header__toggle-bar" }
                        span { class: "app-header__toggle-bar" }
                        span { class: "app-header__toggle-bar" }
                    }
                    h1 { class: "app-header__title", {t!("app-title")} }
                }
                main { class: "app-shell__content",
                    {children}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Seen = Rc<RefCell<Vec<bool>>>;

    #[component]
    fn SidebarReader() -> Element {
        let sidebar = use_sidebar_state(1280);
        let seen = consume_context::<Seen>();
        seen.borrow_mut().push(sidebar.peek().is_open());
        rsx! {}
    }

    // Second render unmounts the layout, third mounts a fresh one, as the
    // keyed wrapper does on a language switch.
    fn shell(seen: Seen) -> Element {
        use_context_provider(|| seen.clone());
        use_sidebar_provider(1280);
        rsx! {
            if generation() != 1 {
                SidebarReader {}
            }
        }
    }

    fn remount(dom: &mut VirtualDom) {
        for _ in 0..2 {
            dom.mark_dirty(ScopeId::APP);
            let _ = dom.render_immediate_to_vec();
        }
    }

    #[test]
    fn closed_sidebar_stays_closed_across_remount() {
        let seen: Seen = Rc::default();
        let mut dom = VirtualDom::new_with_props(shell, seen.clone());
        dom.rebuild_in_place();
        assert_eq!(*seen.borrow(), vec![true]);

        dom.in_runtime(|| {
            let mut state = ScopeId::APP
                .consume_context::<Signal<SidebarState>>()
                .expect("shell provides sidebar state");
            state.with_mut(|s| s.toggle());
        });
        remount(&mut dom);

        assert_eq!(seen.borrow().last(), Some(&false));
    }

    #[test]
    fn without_a_shell_the_state_starts_from_the_layout_policy() {
        fn bare(seen: Seen) -> Element {
            use_context_provider(|| seen.clone());
            rsx! { SidebarReader {} }
        }

        let seen: Seen = Rc::default();
        let mut dom = VirtualDom::new_with_props(bare, seen.clone());
        dom.rebuild_in_place();
        assert_eq!(*seen.borrow(), vec![true]);
    }
}
