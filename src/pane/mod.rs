//! Pane: the retained container tree.
//!
//! A pane owns its children in insertion order, each tagged with the
//! [`Placement`] it was added with. Layout builders borrow a pane mutably
//! for one build pass:
//!
//! ```
//! use composer::{Cell, Pane, Widget};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pane = Pane::new();
//! pane.grid_bag_layout()
//!     .define_grid(["A B B"])?
//!     .cell("a", Cell::new(Widget::label("Name:").finalize()?))?
//!     .cell("b", Cell::new(Widget::text_field(20, "").id("name").finalize()?))?;
//!
//! assert!(pane.find("name").is_some());
//! # Ok(())
//! # }
//! ```

mod container;

pub use container::{Child, Container, LayoutKind, Node, Placement};

use tracing::debug;

use crate::config::ComposerConfig;
use crate::layout::{
    BorderBuilder, BoxAxis, BoxBuilder, FlowBuilder, GridBagBuilder, SplitAxis, SplitBuilder,
};
use crate::widget::Widget;

/// A container node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pane {
    id: String,
    layout: LayoutKind,
    children: Vec<Child>,
    config: ComposerConfig,
}

impl Pane {
    /// Create an empty pane with a centered flow layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty pane whose builders use `config`.
    pub fn with_config(config: ComposerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the lookup identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Create an empty child pane sharing this pane's configuration.
    pub fn child(&self) -> Self {
        Self::with_config(self.config)
    }

    /// Lookup identifier; empty if unset.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current layout manager.
    pub const fn layout(&self) -> LayoutKind {
        self.layout
    }

    /// Builder defaults.
    pub const fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Placed children, in insertion order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// Lay children out in a flow.
    pub fn flow_layout(&mut self) -> FlowBuilder<'_, Self> {
        FlowBuilder::new(self)
    }

    /// Stack children left to right.
    pub fn horizontal_box_layout(&mut self) -> BoxBuilder<'_, Self> {
        BoxBuilder::new(self, BoxAxis::Horizontal)
    }

    /// Stack children top to bottom.
    pub fn vertical_box_layout(&mut self) -> BoxBuilder<'_, Self> {
        BoxBuilder::new(self, BoxAxis::Vertical)
    }

    /// Place child panes into compass slots.
    pub fn border_layout(&mut self) -> BorderBuilder<'_, Self> {
        BorderBuilder::new(self)
    }

    /// Place two child panes side by side.
    pub fn horizontal_split_layout(&mut self) -> SplitBuilder<'_, Self> {
        SplitBuilder::new(self, SplitAxis::Horizontal)
    }

    /// Place two child panes one above the other.
    pub fn vertical_split_layout(&mut self) -> SplitBuilder<'_, Self> {
        SplitBuilder::new(self, SplitAxis::Vertical)
    }

    /// Place widgets into named grid areas.
    pub fn grid_bag_layout(&mut self) -> GridBagBuilder<'_, Self> {
        let config = self.config;
        GridBagBuilder::new(self, &config)
    }

    /// Find a widget by id, searching nested panes depth-first.
    pub fn find(&self, id: &str) -> Option<&Widget> {
        self.widgets().find(|w| w.id() == id)
    }

    /// Find a nested pane by id (including this one).
    pub fn find_pane(&self, id: &str) -> Option<&Self> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(|c| c.node.as_pane())
            .find_map(|p| p.find_pane(id))
    }

    /// Every widget in `group`, in tree order.
    pub fn find_group(&self, group: &str) -> Vec<&Widget> {
        self.widgets().filter(|w| w.group() == group).collect()
    }

    /// Find the placement of a widget by id, searching nested panes.
    pub fn placement_of(&self, id: &str) -> Option<&Placement> {
        self.children.iter().find_map(|c| match &c.node {
            Node::Widget(w) if w.id() == id => Some(&c.placement),
            Node::Pane(p) => p.placement_of(id),
            _ => None,
        })
    }

    /// Whether a direct child is a checked radio of `group`.
    fn has_checked_radio(&self, group: &str) -> bool {
        self.children
            .iter()
            .filter_map(|c| c.node.as_widget())
            .any(|w| w.is_exclusive() && w.group() == group && w.is_checked())
    }

    /// Iterate every widget in the tree, depth-first.
    pub fn widgets(&self) -> Widgets<'_> {
        Widgets {
            stack: vec![self.children.iter()],
        }
    }
}

/// Radios sharing a group within one pane form a button group: a checked
/// radio added after the group already has a selection is unchecked.
impl Container for Pane {
    fn set_layout(&mut self, layout: LayoutKind) {
        self.layout = layout;
    }

    fn add(&mut self, mut node: Node, placement: Placement) {
        if let Node::Widget(widget) = &mut node {
            if widget.is_exclusive() && widget.is_checked() && self.has_checked_radio(widget.group())
            {
                debug!(
                    group = widget.group(),
                    id = widget.id(),
                    "radio unchecked, group already has a selection"
                );
                widget.uncheck();
            }
        }
        self.children.push(Child { node, placement });
    }
}

/// Depth-first iterator over the widgets of a pane tree.
#[derive(Debug)]
pub struct Widgets<'a> {
    stack: Vec<std::slice::Iter<'a, Child>>,
}

impl<'a> Iterator for Widgets<'a> {
    type Item = &'a Widget;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(child) => match &child.node {
                    Node::Widget(w) => return Some(w),
                    Node::Pane(p) => self.stack.push(p.children.iter()),
                    Node::Filler { .. } => {}
                },
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
