//! # Pane Composer
//!
//! Declarative pane and layout builders over a retained widget tree.
//!
//! Instead of constructing widgets and wiring them into layout managers by
//! hand, an application describes each pane's layout with a builder and the
//! widgets that go into it. The centerpiece is the named-area grid: a text
//! template such as
//!
//! ```text
//! A B B B
//! C D D D
//! ```
//!
//! is resolved into one rectangle per label, and each widget bound to a
//! label receives a ready-made [`GridConstraint`] (position, span, anchor,
//! fill, padding and stretch weights).
//!
//! ## Core Concepts
//!
//! - **Two-phase widgets**: [`WidgetBuilder`] accumulates settings,
//!   `finalize()` validates them once
//! - **Fail fast**: malformed grids, unknown or repeated areas and repeated
//!   border or split slots are rejected at declaration time
//! - **One-shot placement**: each child is handed to its [`Container`] once
//!
//! ## Example
//!
//! ```rust
//! use composer::{Cell, Fill, Pane, Widget};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut form = Pane::new();
//! form.grid_bag_layout()
//!     .padding(2, 5, 2, 5)
//!     .define_grid(["A B B B", "C D D D"])?
//!     .cell("A", Cell::new(Widget::label("CPF:").finalize()?))?
//!     .cell("B", Cell::new(Widget::text_field(15, "").id("cpf").finalize()?))?
//!     .cell("C", Cell::new(Widget::label("Name:").finalize()?))?
//!     .cell("D", Cell::new(Widget::text_field(40, "").id("name").finalize()?).fill(Fill::HORIZONTAL))?;
//!
//! let name = form.children()[3].grid_constraint().unwrap();
//! assert_eq!((name.column, name.row, name.column_span), (1, 1, 3));
//! assert_eq!((name.weight_x, name.weight_y), (1.0, 1.0));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod pane;
pub mod widget;

// Re-exports for convenience
pub use config::ComposerConfig;
pub use error::{LayoutError, Result, WidgetError};
pub use grid::{AreaShape, GridRegion, GridTemplate, ResolvedGrid};
pub use layout::{
    Anchor, BorderBuilder, BorderSlot, BoxAlignment, BoxBuilder, Cell, Fill, FlowAlignment,
    FlowBuilder, GridBagBuilder, GridConstraint, Insets, SplitAxis, SplitBuilder, SplitPosition,
    SplitSettings,
};
pub use pane::{Child, Container, LayoutKind, Node, Pane, Placement};
pub use widget::{Widget, WidgetBuilder, WidgetKind};
