//! Transform component and utilities for spatial positioning.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Quat, Vec3};

/// A 3D transform representing position, rotation, and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform at the given position.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with position and rotation.
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Create the model matrix for this transform.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Get the forward direction (negative Z in right-handed coordinates).
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::Z
    }

    /// Get the right direction (positive X).
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get the up direction (positive Y).
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Translate the transform by a delta.
    pub fn translate(&mut self, delta: Vec3) {
        self.position += delta;
    }

    /// Rotate around the Y axis (yaw).
    pub fn rotate_y(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle) * self.rotation;
    }

    /// Face a horizontal travel direction (yaw only). Used by wildlife that
    /// steers in the XZ plane; a zero-length direction leaves rotation alone.
    pub fn face_horizontal(&mut self, dir: Vec3) {
        let flat = Vec3::new(dir.x, 0.0, dir.z);
        if flat.length_squared() > 1e-6 {
            // -Z is forward, so yaw = atan2(-x, -z)
            let yaw = (-flat.x).atan2(-flat.z);
            self.rotation = Quat::from_rotation_y(yaw);
        }
    }
}

/// Raw transform data for GPU upload (instance data).
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct TransformRaw {
    pub model: [[f32; 4]; 4],
}

impl From<&Transform> for TransformRaw {
    fn from(transform: &Transform) -> Self {
        Self {
            model: transform.to_matrix().to_cols_array_2d(),
        }
    }
}

impl From<Transform> for TransformRaw {
    fn from(transform: Transform) -> Self {
        Self::from(&transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// face_horizontal must align forward() with the requested direction.
    #[test]
    fn face_horizontal_aligns_forward() {
        let mut t = Transform::default();
        t.face_horizontal(Vec3::new(1.0, 0.0, 0.0));
        let fwd = t.forward();
        assert!((fwd.x - 1.0).abs() < 1e-5, "forward = {:?}", fwd);
        assert!(fwd.z.abs() < 1e-5);
    }

    /// Zero direction must not disturb the rotation.
    #[test]
    fn face_horizontal_ignores_zero_dir() {
        let mut t = Transform::from_position_rotation(Vec3::ZERO, Quat::from_rotation_y(1.0));
        let before = t.rotation;
        t.face_horizontal(Vec3::ZERO);
        assert_eq!(t.rotation, before);
    }
}
