//! Player controller: walks the integrator through the camera and owns the
//! sit state.

use engine_core::Camera;
use glam::Vec3;
use input::InputState;
use physics::{resolve_walk, step_velocity, ContactReport, MapBounds, MotionConfig};
use procgen::ParkTerrain;

use crate::bench::Bench;

/// Player kinematic state. The camera position is the player's eye; this
/// struct carries what the camera doesn't: velocity, tuning, and the saved
/// pre-sit position.
#[derive(Debug)]
pub struct PlayerController {
    pub velocity: Vec3,
    pub motion: MotionConfig,
    pub grounded: bool,
    /// Where the player stood before sitting; `Some` exactly while seated.
    saved_stand_position: Option<Vec3>,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self {
            velocity: Vec3::ZERO,
            motion: MotionConfig::default(),
            grounded: true,
            saved_stand_position: None,
        }
    }

    /// Eye position for a fresh spawn at the park origin.
    pub fn spawn_eye(terrain: &ParkTerrain, motion: &MotionConfig) -> Vec3 {
        Vec3::new(0.0, terrain.height(0.0, 0.0) + motion.standing_height, 0.0)
    }

    pub fn is_sitting(&self) -> bool {
        self.saved_stand_position.is_some()
    }

    /// Zero all velocity (pause, sit).
    pub fn halt(&mut self) {
        self.velocity = Vec3::ZERO;
    }

    /// One integrator frame: mouse look, velocity step, displacement through
    /// the camera's ground-plane API, then contact resolution. A no-op while
    /// seated, since sitting freezes movement and gravity entirely.
    pub fn update(
        &mut self,
        input: &InputState,
        camera: &mut Camera,
        terrain: &ParkTerrain,
        bounds: &MapBounds,
        dt: f32,
    ) -> ContactReport {
        if self.is_sitting() {
            return ContactReport::default();
        }

        let mouse = input.mouse_delta();
        if input.is_cursor_locked() {
            camera.process_mouse(mouse.x, mouse.y);
        }

        // Movement intent in world space: camera-relative, ground-plane only.
        let intent = input.get_movement_input();
        let wish = camera.forward_flat() * intent.y + camera.right_flat() * intent.x;

        step_velocity(&mut self.velocity, wish, &self.motion, dt);

        // Horizontal displacement goes through the camera displacement API;
        // vertical is applied directly, as the controls own no Y axis.
        let forward = camera.forward_flat();
        let right = camera.right_flat();
        camera.move_forward(self.velocity.dot(forward) * dt);
        camera.move_right(self.velocity.dot(right) * dt);
        camera.transform.position.y += self.velocity.y * dt;

        let report = resolve_walk(
            &mut camera.transform.position,
            &mut self.velocity,
            |x, z| terrain.height(x, z),
            self.motion.standing_height,
            bounds,
        );
        self.grounded = report.grounded;
        report
    }

    /// Pin the eye to the bench seat, remembering where the player stood.
    /// The view starts out facing the way the bench faces; mouse look stays
    /// free afterwards.
    pub fn sit_down(&mut self, camera: &mut Camera, bench: &Bench) {
        self.saved_stand_position = Some(camera.position());
        camera.transform.position = bench.seat_eye_position();
        camera.set_yaw_pitch(bench.facing_yaw, 0.0);
        self.halt();
        log::info!("sat down on the bench at {:?}", bench.position);
    }

    /// Restore the saved pre-sit position. The ground clamp re-asserts the
    /// terrain invariant on the next frame.
    pub fn stand_up(&mut self, camera: &mut Camera) {
        if let Some(position) = self.saved_stand_position.take() {
            camera.transform.position = position;
        }
        self.halt();
        log::info!("stood up from the bench");
    }
}
