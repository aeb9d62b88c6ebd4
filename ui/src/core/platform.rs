//! Platform glue for reading and tracking the viewport width.

use super::viewport::ViewportHub;

/// Width assumed before the platform reports one (and on native targets
/// until the window emits its first resize).
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

pub fn current_viewport_width() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|value| value.as_f64())
            .map(|width| width.max(0.0) as u32)
            .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_VIEWPORT_WIDTH
    }
}

/// Browser `resize` listener feeding a [`ViewportHub`]. Removed on drop.
#[cfg(target_arch = "wasm32")]
pub struct ResizeSource {
    window: web_sys::Window,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl ResizeSource {
    pub fn install(hub: ViewportHub) -> Option<Self> {
        use wasm_bindgen::{closure::Closure, JsCast};

        let window = web_sys::window()?;
        let source = window.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            if let Some(width) = source.inner_width().ok().and_then(|v| v.as_f64()) {
                hub.publish(width.max(0.0) as u32);
            }
        });

        if window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("could not attach resize listener");
            return None;
        }

        Some(Self { window, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeSource {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}

/// Hub seeded with the width the platform reports right now.
pub fn initial_hub() -> ViewportHub {
    ViewportHub::new(current_viewport_width())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_width_defaults_to_desktop() {
        assert_eq!(current_viewport_width(), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(initial_hub().width(), DEFAULT_VIEWPORT_WIDTH);
    }
}
