use glam::Vec2;

/// Map a CSS-pixel position inside the canvas rect to backing-store pixels.
///
/// Picking rays use backing pixels; drag deltas stay in CSS pixels so the
/// feel does not change with the device pixel ratio.
#[inline]
pub fn css_to_backing(css: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return backing * 0.5;
    }
    Vec2::new(
        css.x / rect_size.x * backing.x,
        css.y / rect_size.y * backing.y,
    )
}

/// Backing-store size for a CSS size at the given device pixel ratio, never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}
