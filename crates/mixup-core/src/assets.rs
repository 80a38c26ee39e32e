//! Box-built segment geometry for each row kind.
//!
//! Each segment is a handful of boxes in the slot's local frame. The body
//! parts take the character colour; accents use a fixed tint.

use glam::Vec3;
use smallvec::SmallVec;

use crate::constants::{CHARACTER_COLORS, CHARACTER_COUNT};
use crate::row::RowKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tint {
    Character,
    Fixed([f32; 3]),
}

/// One box of a segment, centred at `offset` with full extents `size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub offset: Vec3,
    pub size: Vec3,
    pub tint: Tint,
}

const EYE: [f32; 3] = [0.08, 0.08, 0.1];
const SKIN: [f32; 3] = [0.95, 0.82, 0.7];
const SHOE: [f32; 3] = [0.2, 0.15, 0.12];

const fn part(offset: [f32; 3], size: [f32; 3], tint: Tint) -> Part {
    Part {
        offset: Vec3::new(offset[0], offset[1], offset[2]),
        size: Vec3::new(size[0], size[1], size[2]),
        tint,
    }
}

const HEAD_PARTS: [Part; 4] = [
    part([0.0, 0.0, 0.0], [1.4, 1.4, 1.4], Tint::Character),
    part([-0.3, 0.2, 0.72], [0.22, 0.22, 0.06], Tint::Fixed(EYE)),
    part([0.3, 0.2, 0.72], [0.22, 0.22, 0.06], Tint::Fixed(EYE)),
    part([0.0, -0.25, 0.72], [0.2, 0.2, 0.2], Tint::Fixed(SKIN)),
];

const TORSO_PARTS: [Part; 3] = [
    part([0.0, 0.0, 0.0], [1.6, 1.8, 1.0], Tint::Character),
    part([-1.05, 0.2, 0.0], [0.45, 1.3, 0.45], Tint::Character),
    part([1.05, 0.2, 0.0], [0.45, 1.3, 0.45], Tint::Character),
];

const LEG_PARTS: [Part; 4] = [
    part([-0.4, 0.15, 0.0], [0.55, 1.6, 0.6], Tint::Character),
    part([0.4, 0.15, 0.0], [0.55, 1.6, 0.6], Tint::Character),
    part([-0.4, -0.75, 0.15], [0.65, 0.3, 0.9], Tint::Fixed(SHOE)),
    part([0.4, -0.75, 0.15], [0.65, 0.3, 0.9], Tint::Fixed(SHOE)),
];

pub fn segment_parts(kind: RowKind) -> SmallVec<[Part; 4]> {
    match kind {
        RowKind::Heads => SmallVec::from_slice(&HEAD_PARTS),
        RowKind::Torsos => SmallVec::from_slice(&TORSO_PARTS),
        RowKind::Legs => SmallVec::from_slice(&LEG_PARTS),
    }
}

/// Colour of character `index`; indices past the palette wrap around.
#[inline]
pub fn character_color(index: usize) -> [f32; 3] {
    CHARACTER_COLORS[index % CHARACTER_COUNT]
}

impl Part {
    pub fn color(&self, character: usize) -> [f32; 3] {
        match self.tint {
            Tint::Character => character_color(character),
            Tint::Fixed(rgb) => rgb,
        }
    }
}
