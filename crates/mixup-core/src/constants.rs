use glam::Vec3;

// Shared layout/interaction tuning constants used by both web and native frontends.

// Carousel layout
pub const CHARACTER_COUNT: usize = 6; // slots per row, identical across rows
pub const SPACING: f32 = 3.0; // world units between neighbouring slots
pub const TOTAL_WIDTH: f32 = CHARACTER_COUNT as f32 * SPACING; // wrap period
pub const START_X: f32 = -(CHARACTER_COUNT as f32 - 1.0) * SPACING / 2.0; // base x of slot 0

// Interaction
pub const DRAG_SENSITIVITY: f32 = 40.0; // pixels of pointer travel per world unit
pub const ROW_PICK_HALF_HEIGHT: f32 = 1.1; // vertical half-extent of a row's grab band
pub const FEATURED_X: f32 = -SPACING / 2.0; // column reported as the current combination

// Settle spring
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_TENSION: f32 = 200.0;
pub const SPRING_FRICTION: f32 = 20.0;
pub const SETTLE_PRECISION: f32 = 0.001;

// Row heights, top to bottom
pub const HEADS_Y: f32 = 2.2;
pub const TORSOS_Y: f32 = 0.0;
pub const LEGS_Y: f32 = -2.2;

// Camera
// At 16:9 the horizontal view edge sits just inside the wrap seam at TOTAL_WIDTH / 2.
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.5, 12.0);
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Lighting
pub const LIGHT_DIR: Vec3 = Vec3::new(-0.4, -1.0, -0.6); // direction light travels
pub const AMBIENT: f32 = 0.35;
pub const CLEAR_COLOR: [f64; 3] = [0.05, 0.05, 0.08];

// Static decoration: floor slab beneath the legs row
pub const FLOOR_Y: f32 = -3.6;
pub const FLOOR_SIZE: Vec3 = Vec3::new(24.0, 0.2, 6.0);
pub const FLOOR_COLOR: [f32; 3] = [0.18, 0.18, 0.22];

// One colour per character, shared by all three segment kinds
pub const CHARACTER_COLORS: [[f32; 3]; CHARACTER_COUNT] = [
    [0.90, 0.30, 0.30], // red
    [0.95, 0.65, 0.20], // orange
    [0.95, 0.90, 0.30], // yellow
    [0.30, 0.85, 0.40], // green
    [0.30, 0.55, 0.95], // blue
    [0.70, 0.40, 0.90], // violet
];
