// Host-side tests for pure canvas coordinate helpers.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod coords {
    include!("../src/coords.rs");
}

use coords::*;
use glam::Vec2;

#[test]
fn css_maps_to_backing_pixels_at_device_ratio() {
    let px = css_to_backing(
        Vec2::new(100.0, 50.0),
        Vec2::new(400.0, 200.0),
        Vec2::new(800.0, 400.0),
    );
    assert_eq!(px, Vec2::new(200.0, 100.0));
}

#[test]
fn degenerate_rect_falls_back_to_centre() {
    let px = css_to_backing(Vec2::new(10.0, 10.0), Vec2::ZERO, Vec2::new(640.0, 480.0));
    assert_eq!(px, Vec2::new(320.0, 240.0));
}

#[test]
fn backing_size_scales_and_never_hits_zero() {
    assert_eq!(backing_size(400.0, 300.0, 2.0), (800, 600));
    assert_eq!(backing_size(401.5, 300.0, 1.0), (401, 300));
    assert_eq!(backing_size(0.0, 0.0, 3.0), (1, 1));
}
