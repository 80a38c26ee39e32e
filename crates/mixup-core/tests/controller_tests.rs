// Host-side tests for the per-row drag/snap controller.

use mixup_core::{ConfigError, ControllerConfig, Phase, SnapController, SpringConfig};
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn controller() -> SnapController {
    SnapController::new(ControllerConfig::default()).expect("default config is valid")
}

fn settle(c: &mut SnapController) -> usize {
    for frame in 0..600 {
        if c.is_settled() {
            return frame;
        }
        c.tick(FRAME);
    }
    panic!("controller did not settle within 600 frames");
}

#[test]
fn drag_update_maps_pixels_to_world_units() {
    let mut c = controller();
    c.on_drag_update(80.0);
    assert_eq!(c.offset(), 2.0);
    assert!(matches!(c.phase(), Phase::Dragging { .. }));
    c.on_drag_update(-40.0);
    assert_eq!(c.offset(), -1.0);
}

#[test]
fn drag_update_has_no_easing() {
    let mut c = controller();
    c.on_drag_update(120.0);
    c.tick(FRAME);
    c.tick(FRAME);
    assert_eq!(c.offset(), 3.0);
}

#[test]
fn release_settles_to_nearest_multiple() {
    let mut c = controller();
    c.on_drag_end(160.0); // 4.0 world units
    assert_eq!(c.phase(), Phase::Settling);
    assert_eq!(c.target(), 3.0);
    settle(&mut c);
    assert_eq!(c.offset(), 3.0);
    assert_eq!(c.settled_step(), Some(1));
}

#[test]
fn release_settles_exactly_for_negative_and_far_offsets() {
    for px in [-173.0_f32, -60.0, 999.0, 24_000.0, -31_337.0] {
        let mut c = controller();
        c.on_drag_end(px);
        let at_release = px / 40.0;
        let expected = (at_release / 3.0).round() * 3.0;
        settle(&mut c);
        assert!(
            (c.offset() - expected).abs() <= 0.001,
            "released at {at_release}, settled at {}",
            c.offset()
        );
        assert_eq!(c.offset(), c.target());
    }
}

#[test]
fn settling_moves_toward_target_over_frames() {
    let mut c = controller();
    c.on_drag_end(160.0);
    let start_gap = (c.offset() - c.target()).abs();
    c.tick(FRAME);
    c.tick(FRAME);
    let gap = (c.offset() - c.target()).abs();
    assert!(gap < start_gap);
    assert!(!c.is_settled());
}

#[test]
fn regrab_mid_settle_continues_from_in_flight_offset() {
    let mut c = controller();
    c.on_drag_end(100.0); // 2.5 -> target 3.0
    for _ in 0..3 {
        c.tick(FRAME);
    }
    assert_eq!(c.phase(), Phase::Settling);
    let in_flight = c.offset();
    assert!(in_flight > 2.5 && in_flight != 3.0);

    c.on_drag_update(0.0);
    assert_eq!(c.offset(), in_flight);
    assert_eq!(c.phase(), Phase::Dragging { baseline: in_flight });

    c.on_drag_update(40.0);
    assert!((c.offset() - (in_flight + 1.0)).abs() < 1e-6);
}

#[test]
fn second_gesture_starts_from_settled_offset() {
    let mut c = controller();
    c.on_drag_end(120.0);
    settle(&mut c);
    assert_eq!(c.offset(), 3.0);
    c.on_drag(40.0, true);
    assert_eq!(c.offset(), 4.0);
    c.on_drag(40.0, false);
    settle(&mut c);
    assert_eq!(c.offset(), 3.0);
}

#[test]
fn release_on_snap_point_is_immediately_idle() {
    let mut c = controller();
    c.on_drag_end(240.0);
    assert!(c.is_settled());
    assert_eq!(c.offset(), 6.0);
    assert!(!c.tick(FRAME));
}

#[test]
fn tick_reports_the_frame_it_comes_to_rest() {
    let mut c = controller();
    c.on_drag_end(50.0);
    let mut rested_frames = 0;
    for _ in 0..600 {
        if c.tick(FRAME) {
            rested_frames += 1;
        }
    }
    assert_eq!(rested_frames, 1);
    assert!(c.is_settled());
}

#[test]
fn settle_to_is_ignored_while_dragging() {
    let mut c = controller();
    c.on_drag_update(20.0);
    c.settle_to(4);
    assert!(matches!(c.phase(), Phase::Dragging { .. }));
    assert_eq!(c.offset(), 0.5);
}

#[test]
fn settle_to_reaches_requested_step() {
    let mut c = controller();
    c.settle_to(-2);
    settle(&mut c);
    assert_eq!(c.offset(), -6.0);
    assert_eq!(c.settled_step(), Some(-2));
}

#[test]
fn long_frame_stall_still_converges() {
    let mut c = controller();
    c.on_drag_end(170.0);
    for _ in 0..40 {
        c.tick(Duration::from_secs(2));
    }
    assert!(c.is_settled());
    assert_eq!(c.offset(), 3.0);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero_spacing = ControllerConfig {
        spacing: 0.0,
        ..ControllerConfig::default()
    };
    assert_eq!(
        SnapController::new(zero_spacing).err(),
        Some(ConfigError::Spacing(0.0))
    );

    let nan_sensitivity = ControllerConfig {
        sensitivity: f32::NAN,
        ..ControllerConfig::default()
    };
    assert!(matches!(
        SnapController::new(nan_sensitivity).err(),
        Some(ConfigError::Sensitivity(_))
    ));

    let bad_spring = ControllerConfig {
        spring: SpringConfig {
            friction: -1.0,
            ..SpringConfig::default()
        },
        ..ControllerConfig::default()
    };
    assert_eq!(
        SnapController::new(bad_spring).err(),
        Some(ConfigError::SpringFriction(-1.0))
    );

    // an undamped spring oscillates forever and never rests on a step
    let undamped = ControllerConfig {
        spring: SpringConfig {
            friction: 0.0,
            ..SpringConfig::default()
        },
        ..ControllerConfig::default()
    };
    assert_eq!(
        SnapController::new(undamped).err(),
        Some(ConfigError::SpringFriction(0.0))
    );

    let no_mass = ControllerConfig {
        spring: SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        },
        ..ControllerConfig::default()
    };
    assert_eq!(
        SnapController::new(no_mass).err(),
        Some(ConfigError::SpringMass(0.0))
    );
}
