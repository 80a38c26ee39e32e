//! Pure carousel math: wrapping and the drag-to-rotation mapping.
//!
//! Nothing here holds state. The row layout and the snap controller are built
//! on these functions so the infinite loop and the "spin in place" look can be
//! tested without any rendering context.

/// One complete rotation in radians.
pub const FULL_TURN: f32 = std::f32::consts::TAU;

/// Map an unbounded position into `[-period / 2, period / 2)`.
///
/// The result is congruent to `position` modulo `period`, including for
/// negative inputs.
#[inline]
pub fn wrap(position: f32, period: f32) -> f32 {
    let half = period * 0.5;
    let wrapped = (position + half).rem_euclid(period) - half;
    // rem_euclid may round up to exactly `period` for tiny negative inputs
    if wrapped >= half {
        wrapped - period
    } else {
        wrapped
    }
}

/// Angle about the vertical axis for a given drag offset.
///
/// Every multiple of `spacing` maps to a whole number of turns, so a settled
/// row always shows its segments facing forward.
#[inline]
pub fn rotation(drag_offset: f32, spacing: f32) -> f32 {
    (drag_offset / spacing) * FULL_TURN
}

/// Number of whole slots nearest to `offset`. Ties round away from zero.
#[inline]
pub fn snap_step(offset: f32, spacing: f32) -> i32 {
    (offset / spacing).round() as i32
}

/// Nearest multiple of `spacing` to `offset`.
#[inline]
pub fn snap_target(offset: f32, spacing: f32) -> f32 {
    (offset / spacing).round() * spacing
}
