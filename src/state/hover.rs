//! Single hovered / single expanded card tracking.
//!
//! The store only ever holds one id of each kind; whether a given card is
//! hovered is derived by comparing ids in [`HoverConfig::props`], so there is
//! no per-card flag that could fall out of sync.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<String>,
    expanded: Option<String>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when `id` was already the hovered item.
    pub fn set_hovered(&mut self, id: Option<&str>) -> bool {
        if self.hovered.as_deref() == id {
            return false;
        }
        self.hovered = id.map(str::to_owned);
        true
    }

    /// Returns false when `id` was already the expanded item.
    pub fn set_expanded(&mut self, id: Option<&str>) -> bool {
        if self.expanded.as_deref() == id {
            return false;
        }
        self.expanded = id.map(str::to_owned);
        true
    }

    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 400.0,
            damping: 25.0,
            mass: 0.8,
        }
    }
}

impl SpringConfig {
    /// Rough settle time of the spring, used to pick a CSS transition duration.
    pub fn settle_ms(&self) -> u32 {
        if self.damping <= 0.0 {
            return 300;
        }
        // 4 time constants of the envelope, 2m/c each
        let secs = 4.0 * 2.0 * self.mass / self.damping;
        (secs * 1000.0).round().clamp(100.0, 1000.0) as u32
    }
}

/// Geometry of the paginated grid the cards sit in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub items_per_page: usize,
    pub columns_per_row: usize,
    /// Wide grids lift bottom-row cards further so the expanded body fits.
    pub wide: bool,
}

impl GridConfig {
    pub fn total_rows(&self) -> usize {
        if self.columns_per_row == 0 {
            return 0;
        }
        self.items_per_page.div_ceil(self.columns_per_row)
    }

    /// Out-of-range indexes and degenerate grids count as interior.
    pub fn is_bottom_row(&self, index: usize) -> bool {
        if self.columns_per_row == 0 || index >= self.items_per_page {
            return false;
        }
        let row = index / self.columns_per_row;
        row + 1 == self.total_rows()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverConfig {
    pub scale_on_hover: f64,
    pub translate_on_hover: f64,
    /// Seconds between successive cards' entrance animations.
    pub stagger_delay: f64,
    pub spring: SpringConfig,
    pub grid: Option<GridConfig>,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            scale_on_hover: 1.05,
            translate_on_hover: 0.0,
            stagger_delay: 0.05,
            spring: SpringConfig::default(),
            grid: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverAnimation {
    pub scale: f64,
    pub y: f64,
    pub z_index: i32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransform {
    pub scale: f64,
    pub translate_y: f64,
}

impl GridTransform {
    pub fn is_upward(&self) -> bool {
        self.translate_y < 0.0
    }

    pub fn css(&self) -> String {
        format!("scale({}) translateY({}px)", self.scale, self.translate_y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HoverProps {
    pub is_hovered: bool,
    pub is_expanded: bool,
    pub animation: HoverAnimation,
    pub spring: SpringConfig,
    pub stagger_delay: f64,
    pub is_bottom_row: bool,
    pub transform: Option<GridTransform>,
    pub transform_origin: &'static str,
}

impl HoverProps {
    /// Inline style for the card wrapper.
    pub fn style(&self) -> String {
        let transform = match self.transform {
            Some(t) => t.css(),
            None => format!(
                "scale({}) translateY({}px)",
                self.animation.scale, self.animation.y
            ),
        };
        format!(
            "transform: {transform}; transform-origin: {}; z-index: {}; transition: transform {}ms cubic-bezier(0.34, 1.3, 0.64, 1);",
            self.transform_origin,
            self.animation.z_index,
            self.spring.settle_ms(),
        )
    }
}

const HOVERED_Z: i32 = 50;
const RESTING_Z: i32 = 10;

impl HoverConfig {
    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn props(&self, state: &HoverState, id: &str, index: usize) -> HoverProps {
        let is_hovered = state.is_hovered(id);
        let is_expanded = state.is_expanded(id);
        let z_index = if is_hovered { HOVERED_Z } else { RESTING_Z };

        let (animation, is_bottom_row, transform, transform_origin) = match self.grid {
            Some(grid) => {
                let is_bottom_row = grid.is_bottom_row(index);
                let transform = is_hovered.then(|| GridTransform {
                    scale: self.scale_on_hover,
                    translate_y: match (is_bottom_row, grid.wide) {
                        (true, true) => -128.0,
                        (true, false) => -32.0,
                        (false, true) => 12.0,
                        (false, false) => 8.0,
                    },
                });
                let origin = if is_hovered && is_bottom_row {
                    "bottom center"
                } else {
                    "center center"
                };
                let animation = HoverAnimation {
                    scale: 1.0,
                    y: 0.0,
                    z_index,
                };
                (animation, is_bottom_row, transform, origin)
            }
            None => {
                let animation = HoverAnimation {
                    scale: if is_hovered { self.scale_on_hover } else { 1.0 },
                    y: if is_hovered { self.translate_on_hover } else { 0.0 },
                    z_index,
                };
                (animation, false, None, "center center")
            }
        };

        HoverProps {
            is_hovered,
            is_expanded,
            animation,
            spring: self.spring,
            stagger_delay: index as f64 * self.stagger_delay,
            is_bottom_row,
            transform,
            transform_origin,
        }
    }
}
