use glam::Vec3;

// Shared tuning constants for the scroll scene. Runtime-editable values live in
// `SceneParams`; everything here is fixed at build time.

// Continuous spin (radians per second)
pub const SPIN_RATE_X: f32 = 0.1;
pub const SPIN_RATE_Y: f32 = 0.12;

// Parallax: first-order follow rate of the camera rig toward the cursor
pub const PARALLAX_SMOOTHING: f32 = 0.5;

// Section kick animation
pub const KICK_DURATION_SEC: f32 = 1.5;
pub const KICK_OFFSET: [f32; 3] = [6.0, 3.0, 1.5]; // radians added to x, y, z

// Camera
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Light
pub const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const LIGHT_INTENSITY: f32 = 3.0;
pub const LIGHT_POSITION: [f32; 3] = [1.0, 1.0, 0.0]; // directional: points at origin

// Scene defaults
pub const DEFAULT_MATERIAL_COLOR: &str = "#ffeded";
pub const DEFAULT_OBJECTS_DISTANCE: f32 = 4.0;
pub const DEFAULT_PARTICLE_COUNT: usize = 200;
pub const DEFAULT_PARTICLE_SIZE: f32 = 0.03;
pub const PARTICLE_SEED: u64 = 42;
pub const PARTICLE_SPREAD: f32 = 10.0; // x/z extent of the particle box

// Debug panel ranges
pub const OBJECTS_DISTANCE_RANGE: (f32, f32) = (1.0, 10.0);
pub const PARTICLE_SIZE_RANGE: (f32, f32) = (0.005, 0.2);

// Geometry (radius, tube, radial segments, tubular segments)
pub const TORUS: (f32, f32, u32, u32) = (1.0, 0.4, 16, 60);
// (radius, height, radial segments)
pub const CONE: (f32, f32, u32) = (1.0, 2.0, 32);
// (radius, tube, tubular segments, radial segments, p, q)
pub const TORUS_KNOT: (f32, f32, u32, u32, u32, u32) = (0.8, 0.35, 100, 162, 2, 3);

// Toon gradient
pub const GRADIENT_PATH: &str = "/textures/gradients/5.jpg";
pub const FALLBACK_GRADIENT_STEPS: u32 = 5;

#[inline]
pub fn light_direction() -> Vec3 {
    Vec3::from(LIGHT_POSITION).normalize()
}

#[inline]
pub fn camera_fovy_radians() -> f32 {
    CAMERA_FOV_DEG.to_radians()
}
