//! Split builder: two panes on either side of a movable divider.

use std::fmt;

use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::pane::{Container, LayoutKind, Node, Pane, Placement};

/// Direction in which a split layout divides its space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitAxis {
    /// Side by side: first on the left, second on the right.
    #[default]
    Horizontal,
    /// Stacked: first on top, second below.
    Vertical,
}

/// One side of a split layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SplitPosition {
    /// Left or top.
    First,
    /// Right or bottom.
    Second,
}

impl SplitPosition {
    /// Lower-case side name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 1 << 1,
        }
    }
}

impl fmt::Display for SplitPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Divider settings of a split layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SplitSettings {
    /// Division direction.
    pub axis: SplitAxis,
    /// Show the arrows that collapse either side with one click.
    pub one_touch_expandable: bool,
    /// Divider thickness in pixels; host default if unset.
    pub divider_size: Option<u16>,
    /// Divider offset from the left/top edge in pixels; host default if unset.
    pub location: Option<u16>,
}

impl SplitSettings {
    /// Settings for `axis` with host defaults for the divider.
    pub const fn new(axis: SplitAxis) -> Self {
        Self {
            axis,
            one_touch_expandable: false,
            divider_size: None,
            location: None,
        }
    }
}

/// Builds a split layout into a container.
///
/// Divider settings can change at any point of the build pass; the
/// container is told the updated layout each time.
#[derive(Debug)]
pub struct SplitBuilder<'a, C: Container + ?Sized> {
    container: &'a mut C,
    settings: SplitSettings,
    filled: u8,
}

impl<'a, C: Container + ?Sized> SplitBuilder<'a, C> {
    /// Switch `container` to a split layout along `axis`.
    pub fn new(container: &'a mut C, axis: SplitAxis) -> Self {
        let settings = SplitSettings::new(axis);
        container.set_layout(LayoutKind::Split(settings));
        Self {
            container,
            settings,
            filled: 0,
        }
    }

    /// Show or hide the one-click collapse arrows.
    pub fn one_touch_expandable(&mut self, expandable: bool) -> &mut Self {
        self.settings.one_touch_expandable = expandable;
        self.update()
    }

    /// Set the divider thickness.
    pub fn divider_size(&mut self, size: u16) -> &mut Self {
        self.settings.divider_size = Some(size);
        self.update()
    }

    /// Set the initial divider offset.
    pub fn split_location(&mut self, location: u16) -> &mut Self {
        self.settings.location = Some(location);
        self.update()
    }

    fn update(&mut self) -> &mut Self {
        self.container.set_layout(LayoutKind::Split(self.settings));
        self
    }

    /// Put `pane` on one side. Each side takes one pane.
    pub fn position(&mut self, position: SplitPosition, pane: Pane) -> Result<&mut Self> {
        if self.is_filled(position) {
            return Err(LayoutError::DuplicateSlot {
                slot: position.name(),
            });
        }
        debug!(position = position.name(), id = pane.id(), "split pane placed");
        self.container
            .add(Node::Pane(pane), Placement::Split(position));
        self.filled |= position.bit();
        Ok(self)
    }

    /// Put `pane` on the left (top).
    pub fn first(&mut self, pane: Pane) -> Result<&mut Self> {
        self.position(SplitPosition::First, pane)
    }

    /// Put `pane` on the right (bottom).
    pub fn second(&mut self, pane: Pane) -> Result<&mut Self> {
        self.position(SplitPosition::Second, pane)
    }

    /// Whether `position` already holds a pane.
    pub const fn is_filled(&self, position: SplitPosition) -> bool {
        self.filled & position.bit() != 0
    }

    /// Current divider settings.
    pub const fn settings(&self) -> &SplitSettings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_placed_once() {
        let mut pane = Pane::new();
        let mut split = pane.horizontal_split_layout();
        split
            .first(Pane::new().with_id("tree"))
            .unwrap()
            .second(Pane::new().with_id("detail"))
            .unwrap();
        assert!(split.is_filled(SplitPosition::First));

        let err = split.first(Pane::new().with_id("again")).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateSlot { slot: "first" });
        assert_eq!(err.to_string(), "first pane already defined");
        let err = split.second(Pane::new()).unwrap_err();
        assert_eq!(err.to_string(), "second pane already defined");
        drop(split);

        assert_eq!(pane.children().len(), 2);
        assert_eq!(pane.children()[0].placement, Placement::Split(SplitPosition::First));
        assert_eq!(pane.children()[1].placement, Placement::Split(SplitPosition::Second));
        assert!(pane.find_pane("again").is_none());
    }

    #[test]
    fn test_settings_reach_the_container() {
        let mut pane = Pane::new();
        pane.vertical_split_layout()
            .split_location(280)
            .one_touch_expandable(true)
            .divider_size(6);

        let LayoutKind::Split(settings) = pane.layout() else {
            panic!("expected a split layout");
        };
        assert_eq!(settings.axis, SplitAxis::Vertical);
        assert_eq!(settings.location, Some(280));
        assert_eq!(settings.divider_size, Some(6));
        assert!(settings.one_touch_expandable);
    }

    #[test]
    fn test_defaults_leave_divider_to_host() {
        let mut pane = Pane::new();
        let split = pane.horizontal_split_layout();
        assert_eq!(split.settings(), &SplitSettings::new(SplitAxis::Horizontal));
        assert!(!split.is_filled(SplitPosition::Second));
        drop(split);
        assert_eq!(
            pane.layout(),
            LayoutKind::Split(SplitSettings {
                axis: SplitAxis::Horizontal,
                one_touch_expandable: false,
                divider_size: None,
                location: None,
            })
        );
    }
}
