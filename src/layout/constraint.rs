//! Constraint: the per-cell record handed to a grid layout manager.

use bitflags::bitflags;

use crate::grid::{GridRegion, ResolvedGrid};

/// Alignment of a widget inside a cell larger than the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Anchor {
    /// Centered on both axes.
    Center,
    /// Top edge, centered horizontally.
    North,
    /// Bottom edge, centered horizontally.
    South,
    /// Right edge, centered vertically.
    East,
    /// Left edge, centered vertically.
    West,
    /// Top-right corner.
    NorthEast,
    /// Top-left corner.
    #[default]
    NorthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Bottom-left corner.
    SouthWest,
}

impl Anchor {
    /// All anchors, center first then clockwise from north.
    pub const ALL: [Self; 9] = [
        Self::Center,
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Horizontal position within the cell: 0.0 left, 0.5 center, 1.0 right.
    pub const fn horizontal_bias(self) -> f32 {
        match self {
            Self::West | Self::NorthWest | Self::SouthWest => 0.0,
            Self::Center | Self::North | Self::South => 0.5,
            Self::East | Self::NorthEast | Self::SouthEast => 1.0,
        }
    }

    /// Vertical position within the cell: 0.0 top, 0.5 center, 1.0 bottom.
    pub const fn vertical_bias(self) -> f32 {
        match self {
            Self::North | Self::NorthEast | Self::NorthWest => 0.0,
            Self::Center | Self::East | Self::West => 0.5,
            Self::South | Self::SouthEast | Self::SouthWest => 1.0,
        }
    }
}

bitflags! {
    /// Axes along which a widget stretches to fill its cell.
    ///
    /// # Example
    /// ```
    /// use composer::Fill;
    /// assert_eq!(Fill::HORIZONTAL | Fill::VERTICAL, Fill::BOTH);
    /// assert!(Fill::NONE.is_empty());
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Fill: u8 {
        /// Keep the natural size.
        const NONE = 0;
        /// Stretch to the cell width.
        const HORIZONTAL = 0b01;
        /// Stretch to the cell height.
        const VERTICAL = 0b10;
        /// Stretch on both axes.
        const BOTH = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl std::fmt::Debug for Fill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            f.write_str("NONE")
        } else {
            bitflags::parser::to_writer(self, f)
        }
    }
}

/// Empty space around a widget, in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Insets {
    /// Space above.
    pub top: u16,
    /// Space to the right.
    pub right: u16,
    /// Space below.
    pub bottom: u16,
    /// Space to the left.
    pub left: u16,
}

impl Insets {
    /// No padding.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create insets in CSS order: top, right, bottom, left.
    #[inline]
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same padding on every side.
    #[inline]
    pub const fn uniform(n: u16) -> Self {
        Self::new(n, n, n, n)
    }

    /// Total horizontal padding.
    #[inline]
    pub const fn horizontal(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// Total vertical padding.
    #[inline]
    pub const fn vertical(&self) -> u32 {
        self.top as u32 + self.bottom as u32
    }
}

/// Placement of one widget in a grid layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConstraint {
    /// Leftmost column.
    pub column: usize,
    /// Top row.
    pub row: usize,
    /// Columns covered.
    pub column_span: usize,
    /// Rows covered.
    pub row_span: usize,
    /// Alignment inside the cell.
    pub anchor: Anchor,
    /// Stretch behavior inside the cell.
    pub fill: Fill,
    /// Padding around the widget.
    pub insets: Insets,
    /// Share of extra width the column absorbs on resize.
    pub weight_x: f64,
    /// Share of extra height the row absorbs on resize.
    pub weight_y: f64,
}

impl GridConstraint {
    /// Build a constraint covering `region` of `grid`.
    ///
    /// Only regions that reach the last column (row) of the grid get a
    /// horizontal (vertical) weight of 1.0, so the right and bottom edges
    /// absorb all extra space.
    pub fn for_region(
        grid: &ResolvedGrid,
        region: &GridRegion,
        anchor: Anchor,
        fill: Fill,
        insets: Insets,
    ) -> Self {
        Self {
            column: region.start_col,
            row: region.start_row,
            column_span: region.column_span(),
            row_span: region.row_span(),
            anchor,
            fill,
            insets,
            weight_x: if grid.touches_last_column(region) { 1.0 } else { 0.0 },
            weight_y: if grid.touches_last_row(region) { 1.0 } else { 0.0 },
        }
    }
}
