//! Rows of slots and the per-frame layout pass.

use glam::Vec3;
use smallvec::SmallVec;
use std::time::Duration;

use crate::carousel::{rotation, wrap};
use crate::controller::{ControllerConfig, SnapController};
use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    Heads,
    Torsos,
    Legs,
}

impl RowKind {
    /// Top to bottom.
    pub const ALL: [RowKind; 3] = [RowKind::Heads, RowKind::Torsos, RowKind::Legs];

    pub fn label(self) -> &'static str {
        match self {
            RowKind::Heads => "heads",
            RowKind::Torsos => "torsos",
            RowKind::Legs => "legs",
        }
    }

    pub fn index(self) -> usize {
        match self {
            RowKind::Heads => 0,
            RowKind::Torsos => 1,
            RowKind::Legs => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId {
    pub row: RowKind,
    pub index: usize,
}

/// Where one slot sits this frame. Only `position.x` varies with the drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotTransform {
    pub slot: SlotId,
    pub position: Vec3,
    /// Radians about the vertical axis, shared by every slot in the row.
    pub rotation_y: f32,
}

/// Fixed, evenly spaced base positions centred on zero.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    base_xs: SmallVec<[f32; 8]>,
    spacing: f32,
    total_width: f32,
}

impl RowLayout {
    pub fn new(count: usize, spacing: f32) -> Self {
        let start_x = -(count as f32 - 1.0) * spacing / 2.0;
        let base_xs = (0..count)
            .map(|i| start_x + i as f32 * spacing)
            .collect();
        Self {
            base_xs,
            spacing,
            total_width: count as f32 * spacing,
        }
    }

    pub fn base_xs(&self) -> &[f32] {
        &self.base_xs
    }

    pub fn len(&self) -> usize {
        self.base_xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_xs.is_empty()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn total_width(&self) -> f32 {
        self.total_width
    }

    /// Wrapped world x of slot `index` for drag offset `offset`.
    #[inline]
    pub fn slot_x(&self, index: usize, offset: f32) -> f32 {
        wrap(self.base_xs[index] + offset, self.total_width)
    }
}

#[derive(Clone, Debug)]
pub struct Row {
    kind: RowKind,
    y: f32,
    layout: RowLayout,
    controller: SnapController,
}

impl Row {
    pub fn new(
        kind: RowKind,
        y: f32,
        count: usize,
        config: ControllerConfig,
    ) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoCharacters);
        }
        let controller = SnapController::new(config)?;
        Ok(Self {
            kind,
            y,
            layout: RowLayout::new(count, config.spacing),
            controller,
        })
    }

    pub fn kind(&self) -> RowKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    pub fn controller(&self) -> &SnapController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SnapController {
        &mut self.controller
    }

    pub fn offset(&self) -> f32 {
        self.controller.offset()
    }

    pub fn tick(&mut self, dt: Duration) -> bool {
        self.controller.tick(dt)
    }

    /// Append this frame's slot transforms to `out`.
    pub fn layout_into(&self, out: &mut Vec<SlotTransform>) {
        let d = self.controller.offset();
        let r = rotation(d, self.layout.spacing);
        out.extend((0..self.layout.len()).map(|index| SlotTransform {
            slot: SlotId {
                row: self.kind,
                index,
            },
            position: Vec3::new(self.layout.slot_x(index, d), self.y, 0.0),
            rotation_y: r,
        }));
    }

    /// Index of the slot currently closest to `world_x`.
    pub fn slot_nearest(&self, world_x: f32) -> usize {
        let d = self.controller.offset();
        let mut best_i = 0usize;
        let mut best_dx = f32::MAX;
        for i in 0..self.layout.len() {
            let dx = (self.layout.slot_x(i, d) - world_x).abs();
            if dx < best_dx {
                best_dx = dx;
                best_i = i;
            }
        }
        best_i
    }
}
