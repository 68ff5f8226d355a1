//! Border builder: up to five panes around a center.

use std::fmt;

use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::pane::{Container, LayoutKind, Node, Pane, Placement};

/// A slot of a border layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSlot {
    /// Top edge, full width.
    North,
    /// Bottom edge, full width.
    South,
    /// Right edge, between north and south.
    East,
    /// Left edge, between north and south.
    West,
    /// Remaining space.
    Center,
}

impl BorderSlot {
    /// Lower-case slot name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Center => "center",
        }
    }

    const fn bit(self) -> u8 {
        match self {
            Self::North => 1,
            Self::South => 1 << 1,
            Self::East => 1 << 2,
            Self::West => 1 << 3,
            Self::Center => 1 << 4,
        }
    }
}

impl fmt::Display for BorderSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builds a border layout into a container.
#[derive(Debug)]
pub struct BorderBuilder<'a, C: Container + ?Sized> {
    container: &'a mut C,
    filled: u8,
}

impl<'a, C: Container + ?Sized> BorderBuilder<'a, C> {
    /// Switch `container` to a border layout.
    pub fn new(container: &'a mut C) -> Self {
        container.set_layout(LayoutKind::Border);
        Self { container, filled: 0 }
    }

    /// Put `pane` into `slot`. Each slot takes one pane.
    pub fn slot(&mut self, slot: BorderSlot, pane: Pane) -> Result<&mut Self> {
        if self.is_filled(slot) {
            return Err(LayoutError::DuplicateSlot { slot: slot.name() });
        }
        debug!(slot = slot.name(), id = pane.id(), "border pane placed");
        self.container.add(Node::Pane(pane), Placement::Border(slot));
        self.filled |= slot.bit();
        Ok(self)
    }

    /// Put `pane` at the top.
    pub fn north(&mut self, pane: Pane) -> Result<&mut Self> {
        self.slot(BorderSlot::North, pane)
    }

    /// Put `pane` at the bottom.
    pub fn south(&mut self, pane: Pane) -> Result<&mut Self> {
        self.slot(BorderSlot::South, pane)
    }

    /// Put `pane` on the right.
    pub fn east(&mut self, pane: Pane) -> Result<&mut Self> {
        self.slot(BorderSlot::East, pane)
    }

    /// Put `pane` on the left.
    pub fn west(&mut self, pane: Pane) -> Result<&mut Self> {
        self.slot(BorderSlot::West, pane)
    }

    /// Put `pane` in the middle.
    pub fn center(&mut self, pane: Pane) -> Result<&mut Self> {
        self.slot(BorderSlot::Center, pane)
    }

    /// Whether `slot` already holds a pane.
    pub const fn is_filled(&self, slot: BorderSlot) -> bool {
        self.filled & slot.bit() != 0
    }
}
