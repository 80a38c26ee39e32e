//! GPU-facing data: the unit cube mesh, per-instance transforms and uniforms.
//!
//! This is the adapter between the pure layout records and whatever renderer a
//! frontend owns. Both frontends upload exactly these layouts.

use glam::{Mat4, Vec3};

use crate::assets::segment_parts;
use crate::constants::{FLOOR_COLOR, FLOOR_SIZE, FLOOR_Y};
use crate::row::SlotTransform;
use crate::scene::Scene;

/// Upper bound on instances per frame; sizes the instance buffer.
pub const MAX_INSTANCES: usize = 128;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 3],
    pub normal: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    /// xyz: direction light travels, w: ambient term
    pub light: [f32; 4],
}

impl Uniforms {
    pub fn from_scene(scene: &Scene) -> Self {
        let d = scene.light.direction;
        Self {
            view_proj: scene.camera.view_proj().to_cols_array_2d(),
            light: [d.x, d.y, d.z, scene.light.ambient],
        }
    }
}

/// Unit cube centred at the origin, 36 vertices with flat normals.
pub fn cube_vertices() -> Vec<Vertex> {
    // (normal, u axis, v axis) per face; u x v == normal keeps CCW winding
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u, v) in faces {
        let c = n * 0.5;
        let corner = |su: f32, sv: f32| Vertex {
            pos: (c + u * (0.5 * su) + v * (0.5 * sv)).to_array(),
            normal: n.to_array(),
        };
        out.extend([
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ]);
    }
    out
}

/// Turn slot transforms into box instances, followed by the static floor.
pub fn build_instances(transforms: &[SlotTransform], out: &mut Vec<InstanceData>) {
    out.clear();
    for t in transforms {
        let slot_frame = Mat4::from_translation(t.position) * Mat4::from_rotation_y(t.rotation_y);
        for part in segment_parts(t.slot.row) {
            let model = slot_frame
                * Mat4::from_translation(part.offset)
                * Mat4::from_scale(part.size);
            let [r, g, b] = part.color(t.slot.index);
            out.push(InstanceData {
                model: model.to_cols_array_2d(),
                color: [r, g, b, 1.0],
            });
        }
    }
    let floor = Mat4::from_translation(Vec3::new(0.0, FLOOR_Y, 0.0)) * Mat4::from_scale(FLOOR_SIZE);
    let [r, g, b] = FLOOR_COLOR;
    out.push(InstanceData {
        model: floor.to_cols_array_2d(),
        color: [r, g, b, 1.0],
    });
    if out.len() > MAX_INSTANCES {
        log::warn!(
            "[gpu] {} instances exceed buffer capacity {}; truncating",
            out.len(),
            MAX_INSTANCES
        );
        out.truncate(MAX_INSTANCES);
    }
}
