use super::config::Smoothing;
use glam::{EulerRot, Mat4, Vec2, Vec3};

// Smoothed camera state and the matrices derived from it.

pub const CAMERA_FOVY_DEG: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_EYE_Y: f32 = 2.0;

/// Relax `value` toward `target` by `alpha` (0 = hold, 1 = snap).
#[inline]
pub fn relax(value: f32, target: f32, alpha: f32) -> f32 {
    value + (target - value) * alpha
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedCamera {
    /// Smoothed look rotation (pitch, yaw) before the camera scale is applied.
    pub rotation: Vec2,
    pub distance_z: f32,
    pub target_distance_z: f32,
}

impl SmoothedCamera {
    pub fn new(distance_z: f32) -> Self {
        Self {
            rotation: Vec2::ZERO,
            distance_z,
            target_distance_z: distance_z,
        }
    }

    pub fn step(&mut self, look_target: Vec2, smoothing: Smoothing, dt_sec: f32) {
        let a = smoothing.alpha(dt_sec);
        self.rotation.x = relax(self.rotation.x, look_target.x, a);
        self.rotation.y = relax(self.rotation.y, look_target.y, a);
        self.distance_z = relax(self.distance_z, self.target_distance_z, a);
    }

    pub fn eye(&self) -> Vec3 {
        Vec3::new(0.0, CAMERA_EYE_Y, self.distance_z)
    }

    /// World-to-view transform for a camera rotated by `rotation * rotation_scale`.
    pub fn view_matrix(&self, rotation_scale: f32) -> Mat4 {
        let r = self.rotation * rotation_scale;
        let world = Mat4::from_translation(self.eye())
            * Mat4::from_euler(EulerRot::XYZ, r.x, r.y, 0.0);
        world.inverse()
    }
}

pub fn projection_matrix(aspect: f32) -> Mat4 {
    Mat4::perspective_rh(
        CAMERA_FOVY_DEG.to_radians(),
        aspect.max(1e-3),
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    )
}
