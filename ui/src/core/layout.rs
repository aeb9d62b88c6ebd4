//! Responsive layout policy.
//!
//! | width (px) | class   | sidebar auto-open | chart height scale |
//! |------------|---------|-------------------|--------------------|
//! | ≤ 480      | mobile  | no                | 0.70               |
//! | 481–768    | tablet  | no                | 0.85               |
//! | > 768      | desktop | initially         | 1.00               |

pub const MOBILE_MAX_WIDTH: u32 = 480;
pub const TABLET_MAX_WIDTH: u32 = 768;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Mobile,
    Tablet,
    Desktop,
}

impl ViewportClass {
    pub fn classify(width: u32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    pub fn chart_height_scale(self) -> f64 {
        match self {
            Self::Mobile => 0.70,
            Self::Tablet => 0.85,
            Self::Desktop => 1.0,
        }
    }

    pub fn sidebar_auto_open(self) -> bool {
        matches!(self, Self::Desktop)
    }

    /// Mobile and tablet overlay the sidebar instead of shifting content.
    pub fn is_compact(self) -> bool {
        !matches!(self, Self::Desktop)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Mobile => "viewport--mobile",
            Self::Tablet => "viewport--tablet",
            Self::Desktop => "viewport--desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutDecision {
    pub class: ViewportClass,
    pub sidebar_auto_open: bool,
    pub chart_height_scale: f64,
}

pub fn evaluate(width: u32) -> LayoutDecision {
    let class = ViewportClass::classify(width);
    LayoutDecision {
        class,
        sidebar_auto_open: class.sidebar_auto_open(),
        chart_height_scale: class.chart_height_scale(),
    }
}

/// Rendered chart height for a component's nominal (desktop) height.
pub fn chart_height(nominal: f64, width: u32) -> f64 {
    nominal * evaluate(width).chart_height_scale
}

/// Sidebar open/closed state driven by the policy plus user toggles.
///
/// The policy decides the initial state and collapses the sidebar when the
/// viewport shrinks to tablet or mobile width. Growing back to desktop never
/// reopens a sidebar the user closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn initial(width: u32) -> Self {
        Self {
            open: evaluate(width).sidebar_auto_open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn on_resize(&mut self, width: u32) {
        if ViewportClass::classify(width).is_compact() {
            self.open = false;
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Following a nav link closes the overlay sidebar on compact viewports.
    pub fn on_navigate(&mut self, width: u32) {
        if ViewportClass::classify(width).is_compact() {
            self.open = false;
        }
    }

    pub fn shows_overlay(&self, width: u32) -> bool {
        self.open && ViewportClass::classify(width).is_compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_table() {
        let mobile = evaluate(400);
        assert!(!mobile.sidebar_auto_open);
        assert_eq!(mobile.chart_height_scale, 0.70);

        let tablet = evaluate(600);
        assert!(!tablet.sidebar_auto_open);
        assert_eq!(tablet.chart_height_scale, 0.85);

        let desktop = evaluate(1024);
        assert!(desktop.sidebar_auto_open);
        assert_eq!(desktop.chart_height_scale, 1.0);
    }

    #[test]
    fn class_boundaries_are_inclusive() {
        assert_eq!(ViewportClass::classify(480), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(481), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(768), ViewportClass::Tablet);
        assert_eq!(ViewportClass::classify(769), ViewportClass::Desktop);
        assert_eq!(ViewportClass::classify(0), ViewportClass::Mobile);
    }

    #[test]
    fn chart_height_scales_nominal() {
        assert!((chart_height(450.0, 400) - 315.0).abs() < 1e-9);
        assert!((chart_height(380.0, 700) - 323.0).abs() < 1e-9);
        assert_eq!(chart_height(400.0, 1440), 400.0);
    }

    #[test]
    fn sidebar_collapses_on_shrink_but_never_force_opens() {
        let mut sidebar = SidebarState::initial(1280);
        assert!(sidebar.is_open());

        sidebar.on_resize(700);
        assert!(!sidebar.is_open());

        sidebar.on_resize(1280);
        assert!(!sidebar.is_open());

        sidebar.toggle();
        assert!(sidebar.is_open());
        sidebar.on_resize(1440);
        assert!(sidebar.is_open());
    }

    #[test]
    fn user_closed_sidebar_stays_closed_at_desktop() {
        let mut sidebar = SidebarState::initial(1280);
        sidebar.toggle();
        sidebar.on_resize(1600);
        assert!(!sidebar.is_open());
    }

    #[test]
    fn compact_navigation_and_overlay() {
        let mut sidebar = SidebarState::initial(400);
        assert!(!sidebar.is_open());
        sidebar.toggle();
        assert!(sidebar.shows_overlay(400));
        sidebar.on_navigate(400);
        assert!(!sidebar.is_open());

        let mut wide = SidebarState::initial(1280);
        assert!(!wide.shows_overlay(1280));
        wide.on_navigate(1280);
        assert!(wide.is_open());
    }
}
