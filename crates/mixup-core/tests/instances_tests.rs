// Host-side tests for the render adapter data.

use glam::{Mat4, Vec3, Vec4};
use mixup_core::{
    build_instances, cube_vertices, InstanceData, RowKind, Scene, SceneConfig, SlotTransform,
    Uniforms, Vertex, CHARACTER_COLORS, MAX_INSTANCES,
};

fn frame(scene: &Scene) -> Vec<InstanceData> {
    let mut transforms: Vec<SlotTransform> = Vec::new();
    scene.transforms(&mut transforms);
    let mut instances = Vec::new();
    build_instances(&transforms, &mut instances);
    instances
}

#[test]
fn cube_faces_wind_counter_clockwise_outward() {
    let verts = cube_vertices();
    assert_eq!(verts.len(), 36);
    for tri in verts.chunks(3) {
        let [a, b, c]: [Vec3; 3] = [tri[0].pos.into(), tri[1].pos.into(), tri[2].pos.into()];
        let n = Vec3::from(tri[0].normal);
        let face_n = (b - a).cross(c - a).normalize();
        assert!((face_n - n).length() < 1e-5);
        for v in [a, b, c] {
            assert!(v.abs().max_element() <= 0.5 + 1e-6);
            assert!((v.dot(n) - 0.5).abs() < 1e-6);
        }
    }
}

#[test]
fn vertex_and_instance_layouts_are_tightly_packed() {
    assert_eq!(std::mem::size_of::<Vertex>(), 24);
    assert_eq!(std::mem::size_of::<InstanceData>(), 80);
    assert_eq!(std::mem::size_of::<Uniforms>(), 80);
}

#[test]
fn default_scene_fits_instance_buffer() {
    let scene = Scene::new(&SceneConfig::default()).expect("valid scene");
    let instances = frame(&scene);
    // 6 heads x 4 + 6 torsos x 3 + 6 legs x 4 + floor
    assert_eq!(instances.len(), 24 + 18 + 24 + 1);
    assert!(instances.len() <= MAX_INSTANCES);
}

#[test]
fn instances_follow_slot_position_and_colour() {
    let mut scene = Scene::new(&SceneConfig::default()).expect("valid scene");
    scene.drag(RowKind::Heads, 60.0, true);
    let instances = frame(&scene);
    // first instance is the body box of heads slot 0
    let model = Mat4::from_cols_array_2d(&instances[0].model);
    let centre = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!((centre.x - (-7.5 + 1.5)).abs() < 1e-5);
    assert!((centre.y - scene.row(RowKind::Heads).y()).abs() < 1e-5);
    let [r, g, b] = CHARACTER_COLORS[0];
    assert_eq!(instances[0].color, [r, g, b, 1.0]);
}

#[test]
fn uniforms_carry_light_and_ambient() {
    let scene = Scene::new(&SceneConfig::default()).expect("valid scene");
    let u = Uniforms::from_scene(&scene);
    let dir = Vec3::new(u.light[0], u.light[1], u.light[2]);
    assert!((dir.length() - 1.0).abs() < 1e-5);
    assert_eq!(u.light[3], scene.light.ambient);
}
