//! OpenPark: a first-person stroll through a procedurally decorated park.
//!
//! The rendering library, asset pipeline, and page overlay are boundary
//! interfaces: the session consumes the camera displacement API and produces
//! instance transforms plus an overlay view-model. This binary drives a
//! scripted visit through the whole session (load, start, walk to the
//! bench, sit, stand, reset) at a fixed 60 Hz step, checking the walk
//! invariants as it goes.

mod bench;
mod config;
mod flora;
mod loading;
mod overlay;
mod player;
mod state;
mod update;
mod wildlife;
mod world;

use std::path::Path;
use std::time::Duration;

use anyhow::{ensure, Result};
use engine_core::{Camera, Time, World};
use glam::Vec3;
use input::{ControlEvent, ElementState, EventQueue, InputState, KeyCode};
use physics::MapBounds;
use procgen::{ParkLayout, ParkTerrain};

use bench::Bench;
use config::GameConfig;
use flora::FloraField;
use loading::{AssetCatalog, LoadingTracker};
use overlay::OverlayModel;
use player::PlayerController;
use state::Phase;

/// Half extent of the walkable park rectangle.
pub const MAP_HALF_EXTENT: f32 = 24.0;
/// Items the bootstrap waits for (placeholder textures plus the bench catalog).
const PRELOAD_ITEM_COUNT: usize = 24;

/// The whole session in one explicit context (input layer, park content,
/// player kinematics) passed by reference into the update step. There is
/// no global scene object.
pub struct ParkState {
    time: Time,
    input: InputState,
    events: EventQueue,
    camera: Camera,
    player: PlayerController,
    terrain: ParkTerrain,
    bounds: MapBounds,
    bench: Bench,
    world: World,
    flora: FloraField,
    loading: LoadingTracker,
    overlay: OverlayModel,
    phase: Phase,
    near_bench: bool,
    config: GameConfig,
}

impl ParkState {
    pub fn new(config: GameConfig) -> Self {
        let terrain = ParkTerrain::default();
        let bounds = MapBounds::square(MAP_HALF_EXTENT);
        let layout = ParkLayout::generate(config.seed, &terrain, MAP_HALF_EXTENT);

        let catalog = AssetCatalog::load_or_default(Path::new("assets/park.ron"));
        let bench = Bench::new(&layout.bench, &catalog.bench);

        let player = PlayerController::new();
        let mut camera = Camera::new(PlayerController::spawn_eye(&terrain, &player.motion));
        camera.sensitivity *= config.sensitivity;

        let mut world = World::new();
        world::spawn_wildlife(&mut world, &layout);
        let flora = FloraField::new(&layout, &terrain);

        let mut loading = LoadingTracker::new(PRELOAD_ITEM_COUNT);
        // The catalog read above is the first arrival.
        loading.item_loaded();

        Self {
            time: Time::new(),
            input: InputState::new(),
            events: EventQueue::new(),
            camera,
            player,
            terrain,
            bounds,
            bench,
            world,
            flora,
            loading,
            overlay: OverlayModel::default(),
            phase: Phase::Loading,
            near_bench: false,
            config,
        }
    }

    /// Tear the session down and rebuild it: the explicit stand-in for a
    /// full page reload.
    pub fn reset(&mut self) {
        log::info!("resetting the park");
        let config = self.config.clone();
        *self = Self::new(config);
        // Assets are warm on a rebuild; skip the loading screen.
        while !self.loading.is_complete() {
            self.loading.item_loaded();
        }
        self.phase = Phase::Ready;
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = GameConfig::load();
    log::info!(
        "OpenPark starting: seed {}, {:.0}s scripted stroll",
        config.seed,
        config.demo_seconds
    );

    let mut state = ParkState::new(config);
    run_scripted_stroll(&mut state)
}

/// Drive the session through a complete scripted visit at a fixed 60 Hz.
fn run_scripted_stroll(state: &mut ParkState) -> Result<()> {
    const STEP: Duration = Duration::from_nanos(16_666_667);
    let dt = STEP.as_secs_f32();
    let total_frames = (state.config.demo_seconds * 60.0).max(60.0) as u64;
    let mut driver = DemoDriver::new();

    for frame_idx in 0..total_frames {
        // Simulated asset arrivals: one item per tick until the bar fills.
        if !state.loading.is_complete() {
            state.loading.item_loaded();
        }

        driver.drive(state, dt);
        state.time.advance(STEP);
        while state.time.should_fixed_update() {
            update::frame(state, state.time.fixed_timestep_seconds());
        }

        if !state.player.is_sitting() {
            let p = state.camera.position();
            ensure!(state.bounds.contains(p), "player escaped the map at {:?}", p);
            let floor = state.terrain.height(p.x, p.z) + state.player.motion.standing_height;
            ensure!(
                p.y >= floor - 1e-3,
                "player sank to {} below floor {}",
                p.y,
                floor
            );
        }

        if frame_idx % 60 == 0 {
            let p = state.camera.position();
            let instances = world::wildlife_instances(&state.world);
            log::info!(
                "t={:>4.1}s {:?} eye=({:.2}, {:.2}, {:.2}) instances={} grass={}",
                state.time.elapsed_seconds(),
                state.phase,
                p.x,
                p.y,
                p.z,
                instances.len(),
                state.flora.grass_instances.len()
            );
        }
    }

    if driver.finished() {
        log::info!("scripted stroll complete");
    } else {
        log::warn!("stroll ended early in stage {:?}", driver.stage);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DemoStage {
    AwaitStart,
    Approach,
    Resting,
    Standing,
    Resetting,
    Done,
}

/// Scripted visitor: feeds control events the way a player would.
struct DemoDriver {
    stage: DemoStage,
    timer: f32,
}

impl DemoDriver {
    fn new() -> Self {
        Self {
            stage: DemoStage::AwaitStart,
            timer: 0.0,
        }
    }

    fn finished(&self) -> bool {
        self.stage == DemoStage::Done
    }

    fn drive(&mut self, state: &mut ParkState, dt: f32) {
        match self.stage {
            DemoStage::AwaitStart => {
                if state.phase == Phase::Ready {
                    state.events.push(ControlEvent::CursorLocked);
                    state
                        .events
                        .push(ControlEvent::Key(KeyCode::KeyW, ElementState::Pressed));
                    self.stage = DemoStage::Approach;
                }
            }
            DemoStage::Approach => {
                if state.near_bench {
                    state
                        .events
                        .push(ControlEvent::Key(KeyCode::KeyW, ElementState::Released));
                    tap(state, KeyCode::KeyE);
                    self.stage = DemoStage::Resting;
                    self.timer = 2.0;
                } else {
                    steer_towards(state, state.bench.position);
                }
            }
            DemoStage::Resting => {
                self.timer -= dt;
                if self.timer <= 0.0 {
                    tap(state, KeyCode::KeyE);
                    self.stage = DemoStage::Standing;
                    self.timer = 1.0;
                }
            }
            DemoStage::Standing => {
                self.timer -= dt;
                if self.timer <= 0.0 {
                    // Sit back down and pull the reset lever.
                    tap(state, KeyCode::KeyE);
                    self.stage = DemoStage::Resetting;
                }
            }
            DemoStage::Resetting => {
                if state.phase == Phase::Sitting {
                    tap(state, KeyCode::KeyR);
                    self.stage = DemoStage::Done;
                }
            }
            DemoStage::Done => {}
        }
    }
}

/// Press and release a key within one tick.
fn tap(state: &mut ParkState, key: KeyCode) {
    state
        .events
        .push(ControlEvent::Key(key, ElementState::Pressed));
    state
        .events
        .push(ControlEvent::Key(key, ElementState::Released));
}

/// Push mouse motion turning the view toward a target point.
fn steer_towards(state: &mut ParkState, target: Vec3) {
    let to_target = target - state.camera.position();
    let desired_yaw = (-to_target.x).atan2(-to_target.z);
    let mut err = desired_yaw - state.camera.yaw();
    while err > std::f32::consts::PI {
        err -= std::f32::consts::TAU;
    }
    while err < -std::f32::consts::PI {
        err += std::f32::consts::TAU;
    }
    let dx = (-err / state.camera.sensitivity).clamp(-40.0, 40.0);
    state.events.push(ControlEvent::MouseMotion { dx: dx as f64, dy: 0.0 });
}
