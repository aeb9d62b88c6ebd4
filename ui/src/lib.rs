//! Shared UI crate for Crackbench. Chart engines, the embedded benchmark
//! catalog and every view live here; the web and desktop crates are shells.

use dioxus::prelude::*;

pub mod core;
pub mod datasets;
pub mod i18n;
pub mod results;
pub mod views;

pub mod components {
    // Collapsible application sidebar (components/app_sidebar.rs)
    pub mod app_sidebar;
    pub use app_sidebar::register_nav;
    pub use app_sidebar::use_sidebar_provider;
    pub use app_sidebar::AppSidebar;
    pub use app_sidebar::NavBuilder;

    pub mod bar_chart;
    pub mod box_plot_chart;
    pub mod marginal;
    pub mod tab_bar;

    // Viewport width context shared by charts and the sidebar
    pub mod viewport;
    pub use viewport::{use_chart_height, use_viewport_provider, use_viewport_width};
}

/// Shared theme stylesheet (`ui/assets/theme/main.css`) as a bundled asset.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
