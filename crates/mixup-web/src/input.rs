use crate::coords;
use glam::Vec2;
use mixup_core::{ray_plane_z, Scene};
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

/// Height on the row plane under a CSS-pixel canvas position.
pub fn pointer_world_y(scene: &Scene, canvas: &web::HtmlCanvasElement, css: Vec2) -> Option<f32> {
    let rect = canvas.get_bounding_client_rect();
    let backing = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let px = coords::css_to_backing(
        css,
        Vec2::new(rect.width() as f32, rect.height() as f32),
        backing,
    );
    let (ro, rd) = scene
        .camera
        .screen_to_world_ray(backing.x, backing.y, px.x, px.y);
    ray_plane_z(ro, rd, 0.0).map(|hit| hit.y)
}
