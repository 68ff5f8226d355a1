//! Error types for layout and widget construction.
//!
//! Every error here is a defect in the layout description. They are raised
//! at declaration time and abort the enclosing build pass.

use thiserror::Error;

/// Errors raised while declaring a layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A grid row does not have the same number of columns as the first row.
    #[error("grid row {row} has {found} columns, expected {expected}")]
    MalformedGrid {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// The grid of a layout was defined more than once.
    #[error("grid must be defined just once")]
    DuplicateGrid,

    /// The grid has no rows or no columns.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    /// A cell refers to an area that does not appear in the grid.
    #[error("cell '{0}' not found in the grid")]
    UnknownArea(String),

    /// A cell was declared twice for the same area.
    #[error("cell '{0}' already defined")]
    DuplicateCell(String),

    /// The occurrences of an area do not form a single rectangle.
    #[error("area '{area}' is not a rectangle")]
    NonRectangularArea {
        /// The offending area label.
        area: String,
    },

    /// A border or split layout slot was filled twice.
    #[error("{slot} pane already defined")]
    DuplicateSlot {
        /// Name of the slot, e.g. `north` or `first`.
        slot: &'static str,
    },

    /// A widget failed validation while being finalized.
    #[error(transparent)]
    Widget(#[from] WidgetError),
}

/// Errors raised when a widget builder is finalized.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// A numeric widget has an inconsistent range.
    #[error("{widget}: value {value} outside {min}..={max} (step {step})")]
    OutOfRange {
        /// Widget kind name.
        widget: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
        /// Step size.
        step: f64,
        /// Initial value.
        value: f64,
    },

    /// A formatted text field value does not fit its mask.
    #[error("value '{value}' does not match mask '{mask}'")]
    MaskMismatch {
        /// The mask, e.g. `#####-###`.
        mask: String,
        /// The rejected value.
        value: String,
    },
}

/// Convenience result alias used across the crate.
pub type Result<T, E = LayoutError> = std::result::Result<T, E>;
