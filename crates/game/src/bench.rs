//! The sittable bench and its interaction volume.

use glam::Vec3;
use procgen::BenchSpot;

use crate::loading::BenchAsset;

/// Bench anchor plus the spawned interaction volume around it.
#[derive(Debug, Clone, Copy)]
pub struct Bench {
    /// Seat anchor on the terrain surface.
    pub position: Vec3,
    /// Yaw a seated player faces, radians.
    pub facing_yaw: f32,
    /// XZ radius of the interaction volume.
    pub interaction_radius: f32,
    /// Seated eye height above the seat anchor.
    pub seat_height: f32,
}

impl Bench {
    /// Combine the layout's placement with the loaded model's interaction
    /// parameters (the asset may refine radius and seat height).
    pub fn new(spot: &BenchSpot, asset: &BenchAsset) -> Self {
        Self {
            position: spot.position,
            facing_yaw: spot.facing_yaw,
            interaction_radius: asset.interaction_radius,
            seat_height: asset.seat_height,
        }
    }

    /// Proximity test against the interaction volume. Compares X and Z only,
    /// so standing uphill or downhill of the bench doesn't matter.
    pub fn is_within_reach(&self, eye: Vec3) -> bool {
        let dx = eye.x - self.position.x;
        let dz = eye.z - self.position.z;
        (dx * dx + dz * dz).sqrt() < self.interaction_radius
    }

    /// Eye position while seated.
    pub fn seat_eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.seat_height
    }
}
