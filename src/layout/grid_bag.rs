//! Grid-bag builder: place widgets into the named areas of a grid.
//!
//! A builder starts empty, accepts exactly one grid, then any number of
//! cells (one per area). Every failure leaves the builder and its container
//! exactly as they were.

use tracing::debug;

use super::constraint::{Anchor, Fill, GridConstraint, Insets};
use crate::config::ComposerConfig;
use crate::error::{LayoutError, Result};
use crate::grid::{normalize_label, AreaShape, GridRegion, GridTemplate, ResolvedGrid};
use crate::pane::{Container, LayoutKind, Node, Placement};
use crate::widget::Widget;

/// One widget bound to a grid area, with its alignment hints.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    widget: Widget,
    anchor: Option<Anchor>,
    fill: Option<Fill>,
}

impl Cell {
    /// Bind `widget` with the configured default anchor and fill.
    pub const fn new(widget: Widget) -> Self {
        Self {
            widget,
            anchor: None,
            fill: None,
        }
    }

    /// Align the widget inside its area.
    #[must_use]
    pub const fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = Some(anchor);
        self
    }

    /// Stretch the widget to its area.
    #[must_use]
    pub const fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }
}

/// Builds a named-area grid layout into a container.
#[derive(Debug)]
pub struct GridBagBuilder<'a, C: Container + ?Sized> {
    container: &'a mut C,
    grid: Option<ResolvedGrid>,
    bound: Vec<String>,
    insets: Insets,
    area_shape: AreaShape,
    default_anchor: Anchor,
    default_fill: Fill,
}

impl<'a, C: Container + ?Sized> GridBagBuilder<'a, C> {
    /// Switch `container` to a grid layout.
    pub fn new(container: &'a mut C, config: &ComposerConfig) -> Self {
        container.set_layout(LayoutKind::GridBag);
        Self {
            container,
            grid: None,
            bound: Vec::new(),
            insets: config.padding,
            area_shape: config.area_shape,
            default_anchor: config.default_anchor,
            default_fill: config.default_fill,
        }
    }

    /// Padding applied to every cell declared after this call.
    pub fn padding(&mut self, top: u16, right: u16, bottom: u16, left: u16) -> &mut Self {
        self.insets = Insets::new(top, right, bottom, left);
        self
    }

    /// Define the grid from its rows, e.g. `["A B B B", "C D D D"]`.
    ///
    /// Labels are case-insensitive. Fails if a grid was already defined, if
    /// rows differ in length, or (in strict mode) if an area is not a
    /// rectangle.
    pub fn define_grid<I, S>(&mut self, rows: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.grid.is_some() {
            return Err(LayoutError::DuplicateGrid);
        }

        let template = GridTemplate::parse(rows)?;
        let resolved = ResolvedGrid::new(template, self.area_shape)?;
        debug!(
            rows = resolved.template().row_count(),
            columns = resolved.template().column_count(),
            areas = resolved.regions().len(),
            "grid defined:\n{}",
            resolved.template()
        );

        self.grid = Some(resolved);
        Ok(self)
    }

    /// Bind a widget to an area and hand it to the container.
    pub fn cell(&mut self, area: &str, cell: Cell) -> Result<&mut Self> {
        let label = normalize_label(area);
        let grid = self
            .grid
            .as_ref()
            .ok_or_else(|| LayoutError::UnknownArea(label.clone()))?;
        let region = grid
            .region(&label)
            .ok_or_else(|| LayoutError::UnknownArea(label.clone()))?;
        if self.bound.contains(&label) {
            return Err(LayoutError::DuplicateCell(label));
        }

        let constraint = GridConstraint::for_region(
            grid,
            region,
            cell.anchor.unwrap_or(self.default_anchor),
            cell.fill.unwrap_or(self.default_fill),
            self.insets,
        );
        debug!(
            area = %label,
            widget = cell.widget.kind().name(),
            id = cell.widget.id(),
            column = constraint.column,
            row = constraint.row,
            column_span = constraint.column_span,
            row_span = constraint.row_span,
            weight_x = constraint.weight_x,
            weight_y = constraint.weight_y,
            "cell placed"
        );

        self.container
            .add(Node::Widget(cell.widget), Placement::Grid(constraint));
        self.bound.push(label);
        Ok(self)
    }

    /// The resolved grid, once defined.
    pub const fn grid(&self) -> Option<&ResolvedGrid> {
        self.grid.as_ref()
    }

    /// The region of an area, once the grid is defined.
    pub fn region(&self, area: &str) -> Option<&GridRegion> {
        self.grid.as_ref()?.region(area)
    }

    /// Whether a cell has been declared for `area`.
    pub fn is_bound(&self, area: &str) -> bool {
        self.bound.contains(&normalize_label(area))
    }

    /// Areas of the grid that have no cell yet.
    pub fn unbound_areas(&self) -> Vec<&str> {
        self.grid.as_ref().map_or_else(Vec::new, |g| {
            g.template()
                .areas()
                .iter()
                .filter(|a| !self.bound.contains(a))
                .map(String::as_str)
                .collect()
        })
    }
}
