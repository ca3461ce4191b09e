//! Velocity integration: damping, acceleration, gravity.

use glam::Vec3;

/// Reference tick rate the friction coefficient is expressed against.
pub const SIM_TICK_RATE: f32 = 60.0;

/// Tuning for the walk integrator.
#[derive(Debug, Clone, Copy)]
pub struct MotionConfig {
    /// Downward acceleration, m/s².
    pub gravity: f32,
    /// Directional acceleration while a movement key is held, m/s².
    pub acceleration: f32,
    /// Horizontal velocity retained per 60 Hz tick; applied as
    /// `v *= friction^(dt·60)` so damping is frame-rate independent.
    pub friction: f32,
    /// Eye height above the terrain surface while standing, m.
    pub standing_height: f32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            acceleration: 50.0,
            friction: 5.0 / 6.0,
            standing_height: 1.6,
        }
    }
}

/// Apply exponential damping to the horizontal velocity components.
pub fn damp_horizontal(velocity: &mut Vec3, friction: f32, dt: f32) {
    let factor = friction.powf(dt * SIM_TICK_RATE);
    velocity.x *= factor;
    velocity.z *= factor;
}

/// One velocity step: damping, then directional acceleration, then gravity.
///
/// `wish_dir` is the movement intent in world space, flattened to the
/// horizontal plane and normalized (zero when no key is held). Position is
/// not touched here; displacement goes through the camera displacement API
/// and contact resolution afterwards.
pub fn step_velocity(velocity: &mut Vec3, wish_dir: Vec3, config: &MotionConfig, dt: f32) {
    damp_horizontal(velocity, config.friction, dt);
    velocity.x += wish_dir.x * config.acceleration * dt;
    velocity.z += wish_dir.z * config.acceleration * dt;
    velocity.y -= config.gravity * dt;
}
