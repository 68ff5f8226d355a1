//! Flow and box builders: children placed one after another.

use tracing::trace;

use crate::pane::{Container, LayoutKind, Node, Pane, Placement};
use crate::widget::Widget;

/// Row alignment of a flow layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowAlignment {
    /// Packed to the left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Packed to the right.
    Right,
}

/// Per-axis alignment of a child in a box layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxAlignment {
    /// Left edge.
    Left,
    /// Middle.
    Center,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl BoxAlignment {
    /// Position along the axis: 0.0 start, 0.5 middle, 1.0 end.
    pub const fn value(self) -> f32 {
        match self {
            Self::Left | Self::Top => 0.0,
            Self::Center => 0.5,
            Self::Right | Self::Bottom => 1.0,
        }
    }
}

/// Stacking direction of a box layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxAxis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Builds a flow layout into a container.
#[derive(Debug)]
pub struct FlowBuilder<'a, C: Container + ?Sized> {
    container: &'a mut C,
}

impl<'a, C: Container + ?Sized> FlowBuilder<'a, C> {
    /// Switch `container` to a centered flow layout.
    pub fn new(container: &'a mut C) -> Self {
        container.set_layout(LayoutKind::Flow(FlowAlignment::Center));
        Self { container }
    }

    /// Change the row alignment.
    pub fn align(&mut self, alignment: FlowAlignment) -> &mut Self {
        self.container.set_layout(LayoutKind::Flow(alignment));
        self
    }

    /// Place a widget.
    pub fn widget(&mut self, widget: Widget) -> &mut Self {
        trace!(widget = widget.kind().name(), id = widget.id(), "flow widget placed");
        self.container.add(Node::Widget(widget), Placement::Flow);
        self
    }

    /// Place a nested pane.
    pub fn pane(&mut self, pane: Pane) -> &mut Self {
        self.container.add(Node::Pane(pane), Placement::Flow);
        self
    }

    /// Insert a horizontal gap of `size` pixels.
    pub fn filler(&mut self, size: u16) -> &mut Self {
        self.container
            .add(Node::Filler { width: size, height: 1 }, Placement::Flow);
        self
    }
}

/// Builds a horizontal or vertical box layout into a container.
#[derive(Debug)]
pub struct BoxBuilder<'a, C: Container + ?Sized> {
    container: &'a mut C,
    axis: BoxAxis,
    align_x: Option<BoxAlignment>,
    align_y: Option<BoxAlignment>,
}

impl<'a, C: Container + ?Sized> BoxBuilder<'a, C> {
    /// Switch `container` to a box layout along `axis`.
    pub fn new(container: &'a mut C, axis: BoxAxis) -> Self {
        container.set_layout(match axis {
            BoxAxis::Horizontal => LayoutKind::HorizontalBox,
            BoxAxis::Vertical => LayoutKind::VerticalBox,
        });
        Self {
            container,
            axis,
            align_x: None,
            align_y: None,
        }
    }

    /// Horizontal alignment for children placed after this call.
    pub fn align_x(&mut self, alignment: BoxAlignment) -> &mut Self {
        self.align_x = Some(alignment);
        self
    }

    /// Vertical alignment for children placed after this call.
    pub fn align_y(&mut self, alignment: BoxAlignment) -> &mut Self {
        self.align_y = Some(alignment);
        self
    }

    /// Stop stamping alignment on later children.
    pub fn clear_alignment(&mut self) -> &mut Self {
        self.align_x = None;
        self.align_y = None;
        self
    }

    const fn placement(&self) -> Placement {
        Placement::Box {
            align_x: self.align_x,
            align_y: self.align_y,
        }
    }

    /// Place a widget.
    pub fn widget(&mut self, widget: Widget) -> &mut Self {
        trace!(widget = widget.kind().name(), id = widget.id(), axis = ?self.axis, "box widget placed");
        let placement = self.placement();
        self.container.add(Node::Widget(widget), placement);
        self
    }

    /// Place a nested pane.
    pub fn pane(&mut self, pane: Pane) -> &mut Self {
        let placement = self.placement();
        self.container.add(Node::Pane(pane), placement);
        self
    }

    /// Insert a rigid gap of `size` pixels along the axis.
    pub fn filler(&mut self, size: u16) -> &mut Self {
        let (width, height) = match self.axis {
            BoxAxis::Horizontal => (size, 1),
            BoxAxis::Vertical => (1, size),
        };
        let placement = self.placement();
        self.container.add(Node::Filler { width, height }, placement);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(id: &str) -> Widget {
        Widget::button(id).id(id).finalize().unwrap()
    }

    #[test]
    fn test_flow_alignment_and_order() {
        let mut pane = Pane::new();
        pane.flow_layout()
            .align(FlowAlignment::Right)
            .widget(button("ok"))
            .filler(8)
            .widget(button("cancel"));

        assert_eq!(pane.layout(), LayoutKind::Flow(FlowAlignment::Right));
        let nodes: Vec<&Node> = pane.children().iter().map(|c| &c.node).collect();
        assert_eq!(nodes[1], &Node::Filler { width: 8, height: 1 });
        assert_eq!(pane.widgets().map(Widget::id).collect::<Vec<_>>(), ["ok", "cancel"]);
    }

    #[test]
    fn test_vertical_box_filler_is_tall() {
        let mut pane = Pane::new();
        pane.vertical_box_layout().widget(button("a")).filler(10);
        assert_eq!(pane.layout(), LayoutKind::VerticalBox);
        assert_eq!(pane.children()[1].node, Node::Filler { width: 1, height: 10 });
    }

    #[test]
    fn test_horizontal_box_filler_is_wide() {
        let mut pane = Pane::new();
        pane.horizontal_box_layout().filler(10);
        assert_eq!(pane.layout(), LayoutKind::HorizontalBox);
        assert_eq!(pane.children()[0].node, Node::Filler { width: 10, height: 1 });
    }

    #[test]
    fn test_box_alignment_stamped_on_later_children() {
        let mut pane = Pane::new();
        pane.vertical_box_layout()
            .widget(button("plain"))
            .align_x(BoxAlignment::Left)
            .widget(button("left"))
            .clear_alignment()
            .widget(button("plain2"));

        assert_eq!(
            pane.placement_of("plain"),
            Some(&Placement::Box { align_x: None, align_y: None })
        );
        assert_eq!(
            pane.placement_of("left"),
            Some(&Placement::Box { align_x: Some(BoxAlignment::Left), align_y: None })
        );
        assert_eq!(
            pane.placement_of("plain2"),
            Some(&Placement::Box { align_x: None, align_y: None })
        );
        assert_eq!(BoxAlignment::Bottom.value(), 1.0);
    }

    #[test]
    fn test_nested_pane() {
        let mut inner = Pane::new().with_id("inner");
        inner.flow_layout().widget(button("deep"));

        let mut outer = Pane::new();
        outer.horizontal_box_layout().pane(inner);
        assert!(outer.find("deep").is_some());
        assert!(outer.find_pane("inner").is_some());
    }
}
