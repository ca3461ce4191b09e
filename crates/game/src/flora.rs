//! Flora sway: grass, trees, and flowers re-posed every frame.
//!
//! Each placement gets a base tilt from the terrain slope at build time;
//! the per-frame pass layers a sway rotation on top and emits the result as
//! `TransformRaw` instance buffers for an external instanced renderer.

use engine_core::{Transform, TransformRaw};
use glam::{Quat, Vec3};
use procgen::{ParkLayout, ParkTerrain};

const GRASS_SWAY_FREQ: f32 = 1.6;
const GRASS_SWAY_AMPLITUDE: f32 = 0.25;
const TREE_SWAY_FREQ: f32 = 0.5;
const TREE_SWAY_AMPLITUDE: f32 = 0.04;
const FLOWER_SWAY_FREQ: f32 = 1.1;
const FLOWER_SWAY_AMPLITUDE: f32 = 0.12;

/// One swaying placement: where it grows, how it leans, when it waves.
#[derive(Debug, Clone, Copy)]
struct SwaySpot {
    position: Vec3,
    base_tilt: Quat,
    phase: f32,
    scale: Vec3,
}

/// All flora instance data, rebuilt in place every frame.
#[derive(Debug)]
pub struct FloraField {
    grass: Vec<SwaySpot>,
    trees: Vec<SwaySpot>,
    flowers: Vec<SwaySpot>,
    pub grass_instances: Vec<TransformRaw>,
    pub tree_instances: Vec<TransformRaw>,
    pub flower_instances: Vec<TransformRaw>,
}

impl FloraField {
    pub fn new(layout: &ParkLayout, terrain: &ParkTerrain) -> Self {
        let tilt = |p: Vec3| {
            Quat::from_rotation_arc(Vec3::Y, terrain.normal(p.x, p.z))
        };

        let grass: Vec<SwaySpot> = layout
            .grass
            .iter()
            .map(|blade| SwaySpot {
                position: blade.position,
                base_tilt: tilt(blade.position),
                phase: blade.sway_phase,
                scale: Vec3::new(1.0, blade.height, 1.0),
            })
            .collect();
        let trees: Vec<SwaySpot> = layout
            .trees
            .iter()
            .map(|tree| SwaySpot {
                position: tree.position,
                base_tilt: tilt(tree.position),
                phase: tree.sway_phase,
                scale: Vec3::splat(tree.scale),
            })
            .collect();
        let flowers: Vec<SwaySpot> = layout
            .flowers
            .iter()
            .map(|flower| SwaySpot {
                position: flower.position,
                base_tilt: tilt(flower.position),
                phase: flower.sway_phase,
                scale: Vec3::ONE,
            })
            .collect();

        let mut field = Self {
            grass_instances: Vec::with_capacity(grass.len()),
            tree_instances: Vec::with_capacity(trees.len()),
            flower_instances: Vec::with_capacity(flowers.len()),
            grass,
            trees,
            flowers,
        };
        field.repose(0.0);
        field
    }

    /// Recompute every instance for the current time. Pure re-computation:
    /// calling twice with the same `elapsed` yields identical buffers.
    pub fn repose(&mut self, elapsed: f32) {
        Self::repose_set(
            &self.grass,
            &mut self.grass_instances,
            elapsed,
            GRASS_SWAY_FREQ,
            GRASS_SWAY_AMPLITUDE,
        );
        Self::repose_set(
            &self.trees,
            &mut self.tree_instances,
            elapsed,
            TREE_SWAY_FREQ,
            TREE_SWAY_AMPLITUDE,
        );
        Self::repose_set(
            &self.flowers,
            &mut self.flower_instances,
            elapsed,
            FLOWER_SWAY_FREQ,
            FLOWER_SWAY_AMPLITUDE,
        );
    }

    fn repose_set(
        spots: &[SwaySpot],
        instances: &mut Vec<TransformRaw>,
        elapsed: f32,
        freq: f32,
        amplitude: f32,
    ) {
        instances.clear();
        for spot in spots {
            let sway = (elapsed * freq + spot.phase).sin() * amplitude;
            let transform = Transform {
                position: spot.position,
                rotation: spot.base_tilt * Quat::from_rotation_x(sway),
                scale: spot.scale,
            };
            instances.push(TransformRaw::from(transform));
        }
    }
}
