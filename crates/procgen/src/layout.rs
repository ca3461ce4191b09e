//! One-shot park layout scatter.
//!
//! Everything decorative gets a world position, a phase, and the few scalars
//! the animation systems need. All randomness flows from a single seeded
//! `StdRng` so the same seed reproduces the same park.

use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::terrain::ParkTerrain;

/// The sittable bench: anchor on the terrain plus the interaction volume.
#[derive(Debug, Clone, Copy)]
pub struct BenchSpot {
    /// Seat anchor on the terrain surface.
    pub position: Vec3,
    /// Yaw the bench (and a seated player) faces, radians.
    pub facing_yaw: f32,
    /// XZ radius within which the interact prompt appears.
    pub interaction_radius: f32,
    /// Seated eye height above the seat anchor.
    pub seat_height: f32,
}

/// A single grass blade instance: re-posed every frame by the sway system.
#[derive(Debug, Clone, Copy)]
pub struct GrassBlade {
    pub position: Vec3,
    pub sway_phase: f32,
    pub height: f32,
}

/// A tree placement.
#[derive(Debug, Clone, Copy)]
pub struct TreeSpot {
    pub position: Vec3,
    pub sway_phase: f32,
    pub scale: f32,
}

/// A flower placement.
#[derive(Debug, Clone, Copy)]
pub struct FlowerSpot {
    pub position: Vec3,
    pub sway_phase: f32,
}

/// A closed ring of waypoints one bird flies forever.
#[derive(Debug, Clone)]
pub struct BirdCircuit {
    pub waypoints: Vec<Vec3>,
    pub speed: f32,
}

/// Home point a butterfly flutters around (always near a flower).
#[derive(Debug, Clone, Copy)]
pub struct ButterflyAnchor {
    pub position: Vec3,
    pub phase: f32,
}

/// A cloud in the slow-drifting deck.
#[derive(Debug, Clone, Copy)]
pub struct CloudSpot {
    pub position: Vec3,
    pub drift_speed: f32,
    pub scale: f32,
}

/// Everything the park builder places, generated once at startup.
#[derive(Debug, Clone)]
pub struct ParkLayout {
    pub bench: BenchSpot,
    pub grass: Vec<GrassBlade>,
    pub trees: Vec<TreeSpot>,
    pub flowers: Vec<FlowerSpot>,
    pub bird_circuits: Vec<BirdCircuit>,
    pub butterflies: Vec<ButterflyAnchor>,
    pub clouds: Vec<CloudSpot>,
}

const GRASS_COUNT: usize = 800;
const TREE_COUNT: usize = 12;
const FLOWER_COUNT: usize = 40;
const BIRD_COUNT: usize = 3;
const BUTTERFLY_COUNT: usize = 8;
const CLOUD_COUNT: usize = 10;
const CLOUD_ALTITUDE: f32 = 28.0;

impl ParkLayout {
    /// Scatter the park inside a square of `half_extent` from the origin.
    pub fn generate(seed: u64, terrain: &ParkTerrain, half_extent: f32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        // Bench somewhere in the inner park, never hugging the boundary.
        let bx = rng.gen_range(-half_extent * 0.4..half_extent * 0.4);
        let bz = rng.gen_range(-half_extent * 0.4..half_extent * 0.4);
        let bench = BenchSpot {
            position: terrain.surface(bx, bz),
            facing_yaw: rng.gen_range(0.0..std::f32::consts::TAU),
            interaction_radius: 2.0,
            seat_height: 1.1,
        };

        let scatter = |rng: &mut StdRng, margin: f32| -> (f32, f32) {
            let limit = half_extent - margin;
            (rng.gen_range(-limit..limit), rng.gen_range(-limit..limit))
        };

        let grass = (0..GRASS_COUNT)
            .map(|_| {
                let (x, z) = scatter(&mut rng, 0.5);
                GrassBlade {
                    position: terrain.surface(x, z),
                    sway_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                    height: rng.gen_range(0.15..0.45),
                }
            })
            .collect();

        // Trees keep clear of the bench so the sit spot stays open.
        let mut trees = Vec::with_capacity(TREE_COUNT);
        while trees.len() < TREE_COUNT {
            let (x, z) = scatter(&mut rng, 2.0);
            let dx = x - bench.position.x;
            let dz = z - bench.position.z;
            if dx * dx + dz * dz < 16.0 {
                continue;
            }
            trees.push(TreeSpot {
                position: terrain.surface(x, z),
                sway_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                scale: rng.gen_range(0.8..1.4),
            });
        }

        let flowers: Vec<FlowerSpot> = (0..FLOWER_COUNT)
            .map(|_| {
                let (x, z) = scatter(&mut rng, 1.0);
                FlowerSpot {
                    position: terrain.surface(x, z),
                    sway_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                }
            })
            .collect();

        let bird_circuits = (0..BIRD_COUNT)
            .map(|_| {
                let cx = rng.gen_range(-half_extent * 0.5..half_extent * 0.5);
                let cz = rng.gen_range(-half_extent * 0.5..half_extent * 0.5);
                let radius = rng.gen_range(6.0..half_extent * 0.45);
                let altitude = rng.gen_range(8.0..16.0);
                let count = rng.gen_range(6..9);
                let waypoints = (0..count)
                    .map(|i| {
                        let angle = i as f32 / count as f32 * std::f32::consts::TAU;
                        let x = (cx + angle.cos() * radius).clamp(-half_extent, half_extent);
                        let z = (cz + angle.sin() * radius).clamp(-half_extent, half_extent);
                        Vec3::new(x, terrain.height(x, z) + altitude, z)
                    })
                    .collect();
                BirdCircuit {
                    waypoints,
                    speed: rng.gen_range(4.0..7.0),
                }
            })
            .collect();

        // Butterflies hover near flowers; fall back to open lawn if the
        // flower list were ever empty.
        let butterflies = (0..BUTTERFLY_COUNT)
            .map(|i| {
                let base = flowers
                    .get(i % FLOWER_COUNT.max(1))
                    .map(|f| f.position)
                    .unwrap_or(Vec3::ZERO);
                ButterflyAnchor {
                    position: base + Vec3::new(0.0, rng.gen_range(0.4..0.9), 0.0),
                    phase: rng.gen_range(0.0..std::f32::consts::TAU),
                }
            })
            .collect();

        let clouds = (0..CLOUD_COUNT)
            .map(|_| {
                let (x, z) = scatter(&mut rng, 0.0);
                CloudSpot {
                    position: Vec3::new(x, CLOUD_ALTITUDE + rng.gen_range(-3.0..5.0), z),
                    drift_speed: rng.gen_range(0.3..1.1),
                    scale: rng.gen_range(2.0..5.0),
                }
            })
            .collect();

        log::info!(
            "park layout: {} grass, {} trees, {} flowers, {} birds, {} butterflies, {} clouds",
            GRASS_COUNT,
            TREE_COUNT,
            FLOWER_COUNT,
            BIRD_COUNT,
            BUTTERFLY_COUNT,
            CLOUD_COUNT
        );

        Self {
            bench,
            grass,
            trees,
            flowers,
            bird_circuits,
            butterflies,
            clouds,
        }
    }
}
