pub mod assets;
pub mod camera;
pub mod carousel;
pub mod constants;
pub mod controller;
pub mod error;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod input;
pub mod instances;
pub mod row;
pub mod scene;
pub mod spring;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::Camera;
pub use carousel::{rotation, snap_step, snap_target, wrap, FULL_TURN};
pub use constants::*;
pub use controller::{ControllerConfig, Phase, SnapController};
pub use error::ConfigError;
#[cfg(feature = "gpu")]
pub use gpu::{GpuError, GpuState};
pub use input::{ray_plane_z, DragRouter};
pub use instances::{
    build_instances, cube_vertices, InstanceData, Uniforms, Vertex, MAX_INSTANCES,
};
pub use row::{Row, RowKind, RowLayout, SlotId, SlotTransform};
pub use scene::{DirectionalLight, Scene, SceneConfig};
pub use spring::{Spring, SpringConfig};
