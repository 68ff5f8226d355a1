//! Composer configuration.

use crate::grid::AreaShape;
use crate::layout::{Anchor, Fill, Insets};

/// Defaults applied by the layout builders of a pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerConfig {
    /// How grid area shapes are checked.
    pub area_shape: AreaShape,
    /// Anchor for grid cells that do not set one.
    pub default_anchor: Anchor,
    /// Fill for grid cells that do not set one.
    pub default_fill: Fill,
    /// Initial padding around grid cells.
    pub padding: Insets,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            area_shape: AreaShape::Strict,
            default_anchor: Anchor::NorthWest,
            default_fill: Fill::NONE,
            padding: Insets::ZERO,
        }
    }
}

impl ComposerConfig {
    /// Accept grids whose areas are not proper rectangles.
    #[must_use]
    pub const fn lenient(mut self) -> Self {
        self.area_shape = AreaShape::Lenient;
        self
    }

    /// Use `padding` around every grid cell.
    #[must_use]
    pub const fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }
}
