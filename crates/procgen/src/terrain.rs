//! Closed-form rolling-lawn height field.
//!
//! The park floor is two superimposed sine/cosine waves: a short ripple and
//! a broad swell. The expression is total and deterministic. The walk
//! integrator re-evaluates it every frame to keep feet on the ground, so it
//! must stay cheap and must never disagree with itself between callers.

use glam::Vec3;

/// Coefficients of the two-wave height expression
/// `h(x,z) = sin(x·rfx)·cos(z·rfz)·ra + sin(x·sfx)·cos(z·sfz)·sa`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Ripple amplitude.
    pub ripple_amplitude: f32,
    /// Ripple frequency along X.
    pub ripple_freq_x: f32,
    /// Ripple frequency along Z.
    pub ripple_freq_z: f32,
    /// Swell amplitude.
    pub swell_amplitude: f32,
    /// Swell frequency along X.
    pub swell_freq_x: f32,
    /// Swell frequency along Z.
    pub swell_freq_z: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            ripple_amplitude: 0.5,
            ripple_freq_x: 0.5,
            ripple_freq_z: 0.5,
            swell_amplitude: 1.0,
            swell_freq_x: 0.2,
            swell_freq_z: 0.3,
        }
    }
}

/// The park's ground surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParkTerrain {
    pub params: TerrainParams,
}

impl ParkTerrain {
    pub fn new(params: TerrainParams) -> Self {
        Self { params }
    }

    /// Ground height at a horizontal position.
    pub fn height(&self, x: f32, z: f32) -> f32 {
        let p = &self.params;
        (x * p.ripple_freq_x).sin() * (z * p.ripple_freq_z).cos() * p.ripple_amplitude
            + (x * p.swell_freq_x).sin() * (z * p.swell_freq_z).cos() * p.swell_amplitude
    }

    /// Surface point at a horizontal position.
    pub fn surface(&self, x: f32, z: f32) -> Vec3 {
        Vec3::new(x, self.height(x, z), z)
    }

    /// Analytic surface normal (unit length). Used to tilt flora with the
    /// slope instead of finite-differencing the height field.
    pub fn normal(&self, x: f32, z: f32) -> Vec3 {
        let p = &self.params;
        let dx = (x * p.ripple_freq_x).cos() * (z * p.ripple_freq_z).cos()
            * p.ripple_amplitude
            * p.ripple_freq_x
            + (x * p.swell_freq_x).cos() * (z * p.swell_freq_z).cos()
                * p.swell_amplitude
                * p.swell_freq_x;
        let dz = -(x * p.ripple_freq_x).sin() * (z * p.ripple_freq_z).sin()
            * p.ripple_amplitude
            * p.ripple_freq_z
            - (x * p.swell_freq_x).sin() * (z * p.swell_freq_z).sin()
                * p.swell_amplitude
                * p.swell_freq_z;
        Vec3::new(-dx, 1.0, -dz).normalize()
    }
}
