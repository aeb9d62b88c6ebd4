use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::layout;
use crate::core::platform;
use crate::core::viewport::ViewportHub;

/// Install the app-wide [`ViewportHub`] and, in the browser, the `resize`
/// listener feeding it. Call once from the platform's root component.
pub fn use_viewport_provider() -> ViewportHub {
    let hub = use_context_provider(platform::initial_hub);

    #[cfg(target_arch = "wasm32")]
    {
        let source_hub = hub.clone();
        use_hook(move || Rc::new(platform::ResizeSource::install(source_hub)));
    }

    hub
}

/// Current viewport width as a signal. The hub listener lives exactly as long
/// as the calling component.
pub fn use_viewport_width() -> Signal<u32> {
    let hub = try_use_context::<ViewportHub>();
    let hub = use_hook(move || hub.unwrap_or_else(platform::initial_hub));

    let initial = hub.width();
    let width = use_signal(move || initial);

    use_hook(move || {
        let mut width = width;
        Rc::new(hub.subscribe(move |next| width.set(next)))
    });

    width
}

/// Rendered height for a chart with the given desktop height.
pub fn use_chart_height(nominal: f64) -> f64 {
    let width = use_viewport_width();
    layout::chart_height(nominal, width())
}

/// Logical drawing width for full-width charts on the current viewport.
pub fn chart_width(viewport_width: u32) -> f64 {
    let available = viewport_width as f64 - 96.0;
    available.clamp(300.0, 960.0)
}
