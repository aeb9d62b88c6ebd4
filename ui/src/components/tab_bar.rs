use dioxus::prelude::*;

/// Row of toggle buttons; exactly one is active.
#[component]
pub fn TabBar(
    labels: Vec<String>,
    active: usize,
    on_select: EventHandler<usize>,
    #[props(default = "tab-bar".to_string())] class: String,
) -> Element {
    rsx! {
        div { class: "{class}", role: "tablist",
            for (index, label) in labels.into_iter().enumerate() {
                button {
                    key: "{index}",
                    r#type: "button",
                    role: "tab",
                    class: if index == active { "tab-bar__button tab-bar__button--active" } else { "tab-bar__button" },
                    aria_selected: index == active,
                    onclick: move |_| on_select.call(index),
                    "{label}"
                }
            }
        }
    }
}
