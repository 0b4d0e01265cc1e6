pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

/// Media query a fine, hover-capable pointer (mouse or trackpad) matches.
pub const HOVER_QUERY: &str = "(hover: hover) and (pointer: fine)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCategory {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceCategory {
    pub fn from_width(width: f64) -> Self {
        if width < TABLET_MIN_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceClass {
    pub category: DeviceCategory,
    pub has_hover: bool,
    pub has_touch: bool,
}

impl Default for DeviceClass {
    // Desktop-like until the first measurement so SSR output matches the common case.
    fn default() -> Self {
        Self {
            category: DeviceCategory::Desktop,
            has_hover: true,
            has_touch: false,
        }
    }
}

impl DeviceClass {
    /// `fine_hover` is whether [`HOVER_QUERY`] matches. A touch screen with a
    /// mouse attached still counts as touch-only for hover purposes.
    pub fn classify(width: f64, fine_hover: bool, has_touch: bool) -> Self {
        Self {
            category: DeviceCategory::from_width(width),
            has_hover: fine_hover && !has_touch,
            has_touch,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.category == DeviceCategory::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.category == DeviceCategory::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.category == DeviceCategory::Desktop
    }

    /// Cards can't be hovered, so they get an explicit expand button instead.
    pub fn tap_to_expand(&self) -> bool {
        self.has_touch && !self.has_hover
    }
}
