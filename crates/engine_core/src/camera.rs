//! First-person camera: mouse look plus the ground-plane displacement API
//! the walk integrator drives. The camera position IS the player's eye.

use crate::transform::Transform;
use glam::{Mat4, Vec3};

/// First-person camera with configurable FOV and clipping planes.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera transform (position and rotation).
    pub transform: Transform,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
    /// Mouse sensitivity for look controls.
    pub sensitivity: f32,
    /// Current pitch (up/down rotation) in radians.
    pitch: f32,
    /// Current yaw (left/right rotation) in radians.
    yaw: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            fov_degrees: 70.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
            sensitivity: 0.002,
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

impl Camera {
    /// Create a new camera at the given position.
    pub fn new(position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            ..Default::default()
        }
    }

    /// Update aspect ratio (call on surface resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Process mouse movement for look controls.
    pub fn process_mouse(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw -= delta_x * self.sensitivity;
        self.pitch -= delta_y * self.sensitivity;

        // Clamp pitch to prevent flipping
        let max_pitch = std::f32::consts::FRAC_PI_2 - 0.01;
        self.pitch = self.pitch.clamp(-max_pitch, max_pitch);

        self.rebuild_rotation();
    }

    /// Displace along the view direction projected onto the ground plane.
    /// Looking straight up or down still walks in the facing direction.
    pub fn move_forward(&mut self, distance: f32) {
        let dir = self.forward_flat();
        self.transform.translate(dir * distance);
    }

    /// Displace along the camera's right axis projected onto the ground plane.
    pub fn move_right(&mut self, distance: f32) {
        let dir = self.right_flat();
        self.transform.translate(dir * distance);
    }

    /// Forward direction flattened to the horizontal plane (unit length,
    /// falls back to -Z when the camera looks straight along Y).
    pub fn forward_flat(&self) -> Vec3 {
        let f = self.transform.forward();
        let flat = Vec3::new(f.x, 0.0, f.z);
        if flat.length_squared() > 1e-8 {
            flat.normalize()
        } else {
            // Pitch is clamped short of vertical, so this is a numerical
            // fallback rather than a reachable state.
            glam::Quat::from_rotation_y(self.yaw) * -Vec3::Z
        }
    }

    /// Right direction flattened to the horizontal plane (unit length).
    pub fn right_flat(&self) -> Vec3 {
        let r = self.transform.right();
        let flat = Vec3::new(r.x, 0.0, r.z);
        if flat.length_squared() > 1e-8 {
            flat.normalize()
        } else {
            glam::Quat::from_rotation_y(self.yaw) * Vec3::X
        }
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.transform.position;
        let target = eye + self.transform.forward();
        let up = Vec3::Y;
        Mat4::look_at_rh(eye, target, up)
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Get camera position.
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Get camera forward direction.
    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }

    /// Get current yaw (left/right rotation) in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Get current pitch (up/down rotation) in radians.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set yaw and pitch directly (in radians) and rebuild rotation.
    pub fn set_yaw_pitch(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        let max_pitch = std::f32::consts::FRAC_PI_2 - 0.01;
        self.pitch = pitch.clamp(-max_pitch, max_pitch);
        self.rebuild_rotation();
    }

    fn rebuild_rotation(&mut self) {
        self.transform.rotation =
            glam::Quat::from_rotation_y(self.yaw) * glam::Quat::from_rotation_x(self.pitch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// With default orientation, move_forward walks along -Z.
    #[test]
    fn move_forward_default_is_negative_z() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.move_forward(2.0);
        let p = cam.position();
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        assert!((p.z + 2.0).abs() < 1e-5, "z = {}", p.z);
    }

    /// Looking down must not shorten the walked distance (ground-plane projection).
    #[test]
    fn move_forward_ignores_pitch() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.set_yaw_pitch(0.0, -1.2);
        cam.move_forward(1.0);
        let p = cam.position();
        let horizontal = (p.x * p.x + p.z * p.z).sqrt();
        assert!((horizontal - 1.0).abs() < 1e-4);
        assert!(p.y.abs() < 1e-5);
    }

    /// Pitch is clamped short of vertical no matter how far the mouse moves.
    #[test]
    fn pitch_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse(0.0, -100000.0);
        assert!(cam.pitch() < std::f32::consts::FRAC_PI_2);
        cam.process_mouse(0.0, 100000.0);
        assert!(cam.pitch() > -std::f32::consts::FRAC_PI_2);
    }

    /// Yaw of 90° turns forward from -Z toward -X.
    #[test]
    fn yaw_rotates_walk_direction() {
        let mut cam = Camera::new(Vec3::ZERO);
        cam.set_yaw_pitch(std::f32::consts::FRAC_PI_2, 0.0);
        cam.move_forward(1.0);
        let p = cam.position();
        assert!((p.x + 1.0).abs() < 1e-4, "x = {}", p.x);
        assert!(p.z.abs() < 1e-4);
    }
}
