//! Container: the seam between layout builders and the widget tree.

use crate::layout::{
    BorderSlot, BoxAlignment, FlowAlignment, GridConstraint, SplitPosition, SplitSettings,
};
use crate::widget::Widget;

use super::Pane;

/// Layout manager a pane was configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// Children in a wrapping row.
    Flow(FlowAlignment),
    /// Children stacked left to right.
    HorizontalBox,
    /// Children stacked top to bottom.
    VerticalBox,
    /// Five compass slots.
    Border,
    /// Named-area grid.
    GridBag,
    /// Two panes around a movable divider.
    Split(SplitSettings),
}

impl Default for LayoutKind {
    fn default() -> Self {
        Self::Flow(FlowAlignment::default())
    }
}

/// Something that can be placed into a container.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf widget.
    Widget(Widget),
    /// A nested pane.
    Pane(Pane),
    /// Invisible rigid spacer.
    Filler {
        /// Width in pixels.
        width: u16,
        /// Height in pixels.
        height: u16,
    },
}

impl Node {
    /// The widget, if this node is one.
    pub const fn as_widget(&self) -> Option<&Widget> {
        match self {
            Self::Widget(w) => Some(w),
            _ => None,
        }
    }

    /// The pane, if this node is one.
    pub const fn as_pane(&self) -> Option<&Pane> {
        match self {
            Self::Pane(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Widget> for Node {
    fn from(widget: Widget) -> Self {
        Self::Widget(widget)
    }
}

impl From<Pane> for Node {
    fn from(pane: Pane) -> Self {
        Self::Pane(pane)
    }
}

/// How a child was added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Next in flow order.
    Flow,
    /// Next in box order, with optional per-axis alignment.
    Box {
        /// Horizontal alignment.
        align_x: Option<BoxAlignment>,
        /// Vertical alignment.
        align_y: Option<BoxAlignment>,
    },
    /// Into a border slot.
    Border(BorderSlot),
    /// Into a grid area.
    Grid(GridConstraint),
    /// Onto one side of a split.
    Split(SplitPosition),
}

/// A placed node.
#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    /// What was placed.
    pub node: Node,
    /// How it was placed.
    pub placement: Placement,
}

impl Child {
    /// Whether the host wraps this child in a scroll viewport.
    pub fn is_scrolled(&self) -> bool {
        self.node
            .as_widget()
            .is_some_and(|w| w.kind().is_scrollable())
    }

    /// The grid constraint, if placed in a grid.
    pub const fn grid_constraint(&self) -> Option<&GridConstraint> {
        match &self.placement {
            Placement::Grid(c) => Some(c),
            _ => None,
        }
    }
}

/// A widget container that layout builders place nodes into.
///
/// [`Pane`] is the in-memory implementation; a host toolkit binding
/// implements this to receive placements directly.
pub trait Container {
    /// Switch the container to a layout manager.
    fn set_layout(&mut self, layout: LayoutKind);

    /// Add a node with its placement.
    fn add(&mut self, node: Node, placement: Placement);
}
