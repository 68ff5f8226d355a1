//! Layout module: builders that place nodes into a [`Container`].
//!
//! Every builder switches its container to the matching layout manager when
//! created and hands each child over once, together with the placement the
//! host layout manager needs. Nothing is recomputed afterwards.
//!
//! [`Container`]: crate::pane::Container

mod border;
mod constraint;
mod flow;
mod grid_bag;
mod split;

pub use border::{BorderBuilder, BorderSlot};
pub use constraint::{Anchor, Fill, GridConstraint, Insets};
pub use flow::{BoxAlignment, BoxAxis, BoxBuilder, FlowAlignment, FlowBuilder};
pub use grid_bag::{Cell, GridBagBuilder};
pub use split::{SplitAxis, SplitBuilder, SplitPosition, SplitSettings};
