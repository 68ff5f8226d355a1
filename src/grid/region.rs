//! Region computation: one rectangle per named area.
//!
//! Each area is grown independently from its first occurrence (scanning
//! rows top-to-bottom, columns left-to-right): occurrences in the start row
//! push the right edge, occurrences in the start column push the bottom
//! edge. Everything else is interior and does not move the bounds.

use tracing::{trace, warn};

use super::template::{normalize_label, GridTemplate};
use crate::error::{LayoutError, Result};

/// How strictly area shapes are checked after region growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaShape {
    /// Every cell of the grown rectangle must carry the label, and the label
    /// may not occur outside it.
    #[default]
    Strict,
    /// Trust the grid: stray occurrences are logged and ignored.
    Lenient,
}

/// The rectangle covered by one named area. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridRegion {
    /// Normalized area label.
    pub area: String,
    /// Top row.
    pub start_row: usize,
    /// Left column.
    pub start_col: usize,
    /// Bottom row (inclusive).
    pub end_row: usize,
    /// Right column (inclusive).
    pub end_col: usize,
}

impl GridRegion {
    /// Number of columns covered.
    #[inline]
    pub const fn column_span(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Number of rows covered.
    #[inline]
    pub const fn row_span(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    /// Check if a cell lies inside the region.
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.start_row && row <= self.end_row && col >= self.start_col && col <= self.end_col
    }
}

/// Grow the region of a single area over the template.
///
/// Returns `None` if the area does not occur at all.
fn grow(template: &GridTemplate, area: &str) -> Option<GridRegion> {
    let mut region: Option<GridRegion> = None;

    for (row, col, label) in template.cells() {
        if label != area {
            continue;
        }
        match region.as_mut() {
            None => {
                region = Some(GridRegion {
                    area: area.to_owned(),
                    start_row: row,
                    start_col: col,
                    end_row: row,
                    end_col: col,
                });
            }
            Some(r) if row == r.start_row => r.end_col = col,
            Some(r) if col == r.start_col => r.end_row = row,
            Some(_) => {}
        }
    }

    region
}

/// Compute the region of every area in the template.
///
/// Regions come back in the order areas first appear in the grid.
pub fn compute_regions(template: &GridTemplate, shape: AreaShape) -> Result<Vec<GridRegion>> {
    let mut regions = Vec::with_capacity(template.areas().len());

    for area in template.areas().iter().map(String::as_str) {
        // Every listed area occurs at least once.
        let Some(region) = grow(template, area) else {
            continue;
        };

        for (row, col, label) in template.cells() {
            let inside = region.contains(row, col);
            if (label == area) == inside {
                continue;
            }
            match shape {
                AreaShape::Strict => {
                    return Err(LayoutError::NonRectangularArea { area: area.to_owned() });
                }
                AreaShape::Lenient if label == area => {
                    warn!(area = %area, row, col, "area occurrence outside its region ignored");
                }
                AreaShape::Lenient => {}
            }
        }

        trace!(
            area = %region.area,
            row = region.start_row,
            col = region.start_col,
            row_span = region.row_span(),
            col_span = region.column_span(),
            "resolved grid region"
        );
        regions.push(region);
    }

    Ok(regions)
}

/// A validated template together with its computed regions.
#[derive(Debug, Clone)]
pub struct ResolvedGrid {
    template: GridTemplate,
    regions: Vec<GridRegion>,
}

impl ResolvedGrid {
    /// Resolve every area of a template.
    pub fn new(template: GridTemplate, shape: AreaShape) -> Result<Self> {
        let regions = compute_regions(&template, shape)?;
        Ok(Self { template, regions })
    }

    /// The underlying template.
    pub const fn template(&self) -> &GridTemplate {
        &self.template
    }

    /// All regions, in order of first appearance.
    pub fn regions(&self) -> &[GridRegion] {
        &self.regions
    }

    /// Look up a region by label (any case).
    pub fn region(&self, label: &str) -> Option<&GridRegion> {
        let label = normalize_label(label);
        self.regions.iter().find(|r| r.area == label)
    }

    /// Whether a region reaches the rightmost column.
    pub fn touches_last_column(&self, region: &GridRegion) -> bool {
        region.end_col == self.template.last_column()
    }

    /// Whether a region reaches the bottom row.
    pub fn touches_last_row(&self, region: &GridRegion) -> bool {
        region.end_row == self.template.last_row()
    }
}
