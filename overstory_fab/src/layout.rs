// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the primary button, the item stack and the backdrop.
//!
//! Everything here is a pure function of [`TriggerConfig`] and the container
//! size. Coordinates are y-down with the origin at the container's top-left
//! corner; the configuration's offsets are insets from the bottom edge and
//! from the `position` side.

use kurbo::{Point, Rect, Size};

use crate::config::{Position, TriggerConfig, VerticalOrientation};

/// Additional side inset of the item stack relative to the primary button.
pub const STACK_INSET: f64 = 8.0;

/// Signed translation that carries item `index` from the primary row into
/// its slot: `(index + 1) * (size + spacing)`, negative when items go up.
#[must_use]
pub fn reveal_offset(
    index: usize,
    size: f64,
    spacing: f64,
    orientation: VerticalOrientation,
) -> f64 {
    let slot = (index + 1) as f64;
    orientation.sign() * slot * (size + spacing)
}

/// Resolved geometry of one item slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemSlot {
    /// Index of the slot in the item sequence.
    pub index: usize,
    /// Item button before any reveal translation, level with the primary.
    pub rest: Rect,
    /// Full reveal translation along y.
    pub reveal_offset: f64,
}

impl ItemSlot {
    /// Button rect once fully revealed.
    #[must_use]
    pub fn revealed(&self) -> Rect {
        self.rest + kurbo::Vec2::new(0.0, self.reveal_offset)
    }
}

/// Geometry shared by every element of a trigger for one container size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    container: Size,
    position: Position,
    orientation: VerticalOrientation,
    size: f64,
    spacing: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Layout {
    /// Computes the layout of `config` inside `container`.
    #[must_use]
    pub fn new(config: &TriggerConfig, container: Size) -> Self {
        Self {
            container,
            position: config.position,
            orientation: config.vertical_orientation,
            size: config.size,
            spacing: config.spacing,
            offset_x: config.offset_x,
            offset_y: config.offset_y,
        }
    }

    /// Container the layout was computed for.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// The whole container; the backdrop covers it.
    #[must_use]
    pub fn backdrop(&self) -> Rect {
        self.container.to_rect()
    }

    /// Bounds of the primary button.
    #[must_use]
    pub fn primary(&self) -> Rect {
        self.anchored(self.offset_x, self.offset_y, self.size)
    }

    /// Distance of the stack's bottom edge from the container's bottom edge.
    #[must_use]
    pub fn stack_bottom(&self) -> f64 {
        self.offset_y + self.size + self.spacing
    }

    /// Distance of the stack's outer edge from the `position` side.
    #[must_use]
    pub fn stack_inset(&self) -> f64 {
        self.offset_x + STACK_INSET
    }

    /// Point where the stack's bottom edge meets its outer edge.
    #[must_use]
    pub fn stack_anchor(&self) -> Point {
        let y = self.container.height - self.stack_bottom();
        match self.position {
            Position::Left => Point::new(self.stack_inset(), y),
            Position::Right => Point::new(self.container.width - self.stack_inset(), y),
        }
    }

    /// Geometry of the item at `index` whose button is `item_size` wide.
    #[must_use]
    pub fn item(&self, index: usize, item_size: f64) -> ItemSlot {
        ItemSlot {
            index,
            rest: self.anchored(self.stack_inset(), self.offset_y, item_size),
            reveal_offset: reveal_offset(index, self.size, self.spacing, self.orientation),
        }
    }

    /// A `size`-square whose bottom edge is `bottom` above the container's
    /// bottom and whose outer edge is `inset` from the `position` side.
    fn anchored(&self, inset: f64, bottom: f64, size: f64) -> Rect {
        let y1 = self.container.height - bottom;
        let y0 = y1 - size;
        match self.position {
            Position::Left => Rect::new(inset, y0, inset + size, y1),
            Position::Right => {
                let x1 = self.container.width - inset;
                Rect::new(x1 - size, y0, x1, y1)
            }
        }
    }
}
