//! Pointer gesture routing.
//!
//! Frontends forward raw pointer events here; the router turns them into one
//! logical drag stream for the row under the pointer. Only the first captured
//! pointer drives a row, others are ignored until it is released.

use glam::Vec3;

use crate::row::RowKind;
use crate::scene::Scene;

/// Intersect a ray with the plane `z = plane_z`, in front of the origin only.
#[inline]
pub fn ray_plane_z(ray_origin: Vec3, ray_dir: Vec3, plane_z: f32) -> Option<Vec3> {
    if ray_dir.z.abs() <= 1e-6 {
        return None;
    }
    let t = (plane_z - ray_origin.z) / ray_dir.z;
    (t >= 0.0).then(|| ray_origin + ray_dir * t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Capture {
    pointer_id: i64,
    row: RowKind,
    start_x: f32,
}

#[derive(Clone, Debug, Default)]
pub struct DragRouter {
    capture: Option<Capture>,
}

impl DragRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row currently driven by a pointer, if any.
    pub fn active_row(&self) -> Option<RowKind> {
        self.capture.map(|c| c.row)
    }

    /// Press at pixel `x_px`; `world_y` is the height where the pointer ray
    /// meets the row plane. Returns the grabbed row.
    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        pointer_id: i64,
        x_px: f32,
        world_y: f32,
    ) -> Option<RowKind> {
        if self.capture.is_some() {
            log::debug!("[gesture] pointer {pointer_id} ignored; another pointer owns the drag");
            return None;
        }
        let row = scene.row_at_height(world_y)?;
        self.capture = Some(Capture {
            pointer_id,
            row,
            start_x: x_px,
        });
        // Grab immediately so a settling row stops where it is.
        scene.drag(row, 0.0, true);
        log::debug!("[gesture] pointer {pointer_id} grabbed {}", row.label());
        Some(row)
    }

    pub fn pointer_move(&mut self, scene: &mut Scene, pointer_id: i64, x_px: f32) {
        if let Some(c) = self.capture.filter(|c| c.pointer_id == pointer_id) {
            scene.drag(c.row, x_px - c.start_x, true);
        }
    }

    pub fn pointer_up(&mut self, scene: &mut Scene, pointer_id: i64, x_px: f32) {
        if let Some(c) = self.capture.filter(|c| c.pointer_id == pointer_id) {
            self.capture = None;
            scene.drag(c.row, x_px - c.start_x, false);
            log::debug!("[gesture] pointer {pointer_id} released {}", c.row.label());
        }
    }

    /// A cancelled pointer settles the row as if it had been released in place.
    pub fn pointer_cancel(&mut self, scene: &mut Scene, pointer_id: i64, x_px: f32) {
        self.pointer_up(scene, pointer_id, x_px);
    }
}
