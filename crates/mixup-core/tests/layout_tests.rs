// Host-side tests for the row layout pass.

use mixup_core::{
    rotation, ControllerConfig, Row, RowKind, RowLayout, SlotTransform, CHARACTER_COUNT, FULL_TURN,
    SPACING, START_X, TOTAL_WIDTH,
};

fn row(kind: RowKind) -> Row {
    Row::new(kind, 0.0, CHARACTER_COUNT, ControllerConfig::default()).expect("valid row")
}

fn layout_of(row: &Row) -> Vec<SlotTransform> {
    let mut out = Vec::new();
    row.layout_into(&mut out);
    out
}

#[test]
fn base_positions_are_evenly_spaced_and_symmetric() {
    let layout = RowLayout::new(CHARACTER_COUNT, SPACING);
    assert_eq!(layout.base_xs(), &[-7.5, -4.5, -1.5, 1.5, 4.5, 7.5]);
    assert_eq!(layout.total_width(), 18.0);
    assert_eq!(layout.base_xs()[0], START_X);
    for pair in layout.base_xs().windows(2) {
        assert_eq!(pair[1] - pair[0], SPACING);
    }
    let sum: f32 = layout.base_xs().iter().sum();
    assert_eq!(sum, 0.0);
}

#[test]
fn three_spacings_of_drag_lands_slot_zero_at_one_and_a_half() {
    let mut r = row(RowKind::Heads);
    r.controller_mut().on_drag_update(9.0 * 40.0);
    let slots = layout_of(&r);
    assert_eq!(slots[0].position.x, 1.5);
    assert_eq!(slots[0].rotation_y, 3.0 * FULL_TURN);
    let turns = slots[0].rotation_y / FULL_TURN;
    assert!((turns - turns.round()).abs() < 1e-6);
}

#[test]
fn every_slot_shares_the_row_rotation() {
    let mut r = row(RowKind::Torsos);
    r.controller_mut().on_drag_update(57.0);
    let slots = layout_of(&r);
    let expected = rotation(57.0 / 40.0, SPACING);
    assert_eq!(slots.len(), CHARACTER_COUNT);
    for s in &slots {
        assert_eq!(s.rotation_y, expected);
        assert_eq!(s.slot.row, RowKind::Torsos);
    }
}

#[test]
fn wrapped_positions_always_cover_the_interval_evenly() {
    let mut r = row(RowKind::Legs);
    let half = TOTAL_WIDTH / 2.0;
    let mut px = -2000.0_f32;
    while px < 2000.0 {
        r.controller_mut().on_drag_update(px);
        let mut xs: Vec<f32> = layout_of(&r).iter().map(|s| s.position.x).collect();
        for x in &xs {
            assert!((-half..half).contains(x), "x={x} out of range at px={px}");
        }
        xs.sort_by(f32::total_cmp);
        for pair in xs.windows(2) {
            assert!(
                (pair[1] - pair[0] - SPACING).abs() < 1e-3,
                "uneven gap {:?} at px={px}",
                pair
            );
        }
        px += 13.7;
    }
}

#[test]
fn slot_moves_continuously_except_at_the_wrap_seam() {
    let mut r = row(RowKind::Heads);
    let mut prev = layout_of(&r);
    for step in 1..=400 {
        r.controller_mut().on_drag_update(step as f32 * 4.0);
        let cur = layout_of(&r);
        for (a, b) in prev.iter().zip(&cur) {
            let dx = b.position.x - a.position.x;
            let wrapped = (dx + TOTAL_WIDTH).abs() < 0.2;
            assert!(dx.abs() < 0.2 || wrapped, "slot {} jumped by {dx}", a.slot.index);
        }
        prev = cur;
    }
}

#[test]
fn slot_ids_and_heights_are_fixed() {
    let r = Row::new(RowKind::Legs, -2.2, CHARACTER_COUNT, ControllerConfig::default())
        .expect("valid row");
    for (i, s) in layout_of(&r).iter().enumerate() {
        assert_eq!(s.slot.index, i);
        assert_eq!(s.position.y, -2.2);
        assert_eq!(s.position.z, 0.0);
    }
}

#[test]
fn slot_nearest_tracks_the_drag() {
    let mut r = row(RowKind::Heads);
    assert_eq!(r.slot_nearest(-1.5), 2);
    r.controller_mut().on_drag_update(3.0 * 40.0);
    assert_eq!(r.slot_nearest(-1.5), 1);
    r.controller_mut().on_drag_update(-3.0 * 40.0);
    assert_eq!(r.slot_nearest(-1.5), 3);
    // wraps past the strip end
    r.controller_mut().on_drag_update(9.0 * 40.0);
    assert_eq!(r.slot_nearest(-1.5), 5);
}

#[test]
fn zero_slots_are_rejected() {
    assert!(Row::new(RowKind::Heads, 0.0, 0, ControllerConfig::default()).is_err());
}
