//! Contact resolution: map boundary clamp and ground snap.

use glam::Vec3;

/// Rectangular walkable area, centered on the origin.
#[derive(Debug, Clone, Copy)]
pub struct MapBounds {
    pub half_extent_x: f32,
    pub half_extent_z: f32,
}

impl MapBounds {
    /// A square map, `half` units from the center to each edge.
    pub fn square(half: f32) -> Self {
        Self {
            half_extent_x: half,
            half_extent_z: half,
        }
    }

    /// Whether a position lies inside the rectangle (edges inclusive).
    pub fn contains(&self, position: Vec3) -> bool {
        position.x.abs() <= self.half_extent_x && position.z.abs() <= self.half_extent_z
    }
}

/// What the contact pass did this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactReport {
    /// Feet ended the frame on the terrain surface.
    pub grounded: bool,
    /// X was clamped to the map edge (and velocity.x zeroed).
    pub clamped_x: bool,
    /// Z was clamped to the map edge (and velocity.z zeroed).
    pub clamped_z: bool,
}

/// Resolve walking contacts after displacement.
///
/// Boundary first, ground second: the clamp can move the feet sideways, and
/// the ground height must be sampled at the final horizontal position. Each
/// clamped axis has its velocity component zeroed so pushing into the edge
/// does not bank up speed; the axes clamp independently, which makes the
/// diagonal corner case zero both.
pub fn resolve_walk(
    position: &mut Vec3,
    velocity: &mut Vec3,
    height: impl Fn(f32, f32) -> f32,
    standing_height: f32,
    bounds: &MapBounds,
) -> ContactReport {
    let mut report = ContactReport::default();

    if position.x.abs() > bounds.half_extent_x {
        position.x = position.x.clamp(-bounds.half_extent_x, bounds.half_extent_x);
        velocity.x = 0.0;
        report.clamped_x = true;
    }
    if position.z.abs() > bounds.half_extent_z {
        position.z = position.z.clamp(-bounds.half_extent_z, bounds.half_extent_z);
        velocity.z = 0.0;
        report.clamped_z = true;
    }

    let floor = height(position.x, position.z) + standing_height;
    if position.y < floor {
        position.y = floor;
        velocity.y = 0.0;
        report.grounded = true;
    }

    report
}
