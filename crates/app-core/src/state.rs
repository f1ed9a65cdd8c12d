//! Scene-side state types shared with the web frontend.
//!
//! These types avoid platform APIs so the frame step can be exercised on the
//! host. The web frontend reads them to build uniforms and draw calls.

use crate::constants::*;
use glam::{EulerRot, Mat4, Vec2, Vec3};

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }
}

/// Right-handed perspective camera mounted on a parallax rig.
///
/// `position` is local to the rig; the camera always looks down -Z.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
            aspect,
            fovy_radians: camera_fovy_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// World-space eye for a given rig offset.
    #[inline]
    pub fn eye(&self, rig: Vec2) -> Vec3 {
        self.position + rig.extend(0.0)
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self, rig: Vec2) -> Mat4 {
        Mat4::look_to_rh(self.eye(rig), Vec3::NEG_Z, Vec3::Y)
    }

    pub fn view_proj(&self, rig: Vec2) -> Mat4 {
        self.projection_matrix() * self.view_matrix(rig)
    }
}

/// The three section shapes, in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Torus,
    Cone,
    TorusKnot,
}

impl ObjectKind {
    pub const SECTIONS: [ObjectKind; 3] = [ObjectKind::Torus, ObjectKind::Cone, ObjectKind::TorusKnot];
}

/// A renderable whose rotation and position the frame step mutates.
#[derive(Clone, Debug)]
pub struct TrackedObject {
    pub kind: ObjectKind,
    pub position: Vec3,
    /// Euler angles in radians (XYZ order). Never wrapped.
    pub rotation: Vec3,
}

impl TrackedObject {
    pub fn new(kind: ObjectKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_translation(self.position) * Mat4::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
    }
}

/// Directional light shining from `direction` toward the origin.
#[derive(Clone, Copy, Debug)]
pub struct Light {
    pub direction: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            direction: light_direction(),
            color: Vec3::from(LIGHT_COLOR),
            intensity: LIGHT_INTENSITY,
        }
    }
}
