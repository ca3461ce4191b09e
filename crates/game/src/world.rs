//! Spawning the park's inhabitants into the ECS world.

use engine_core::{MeshInstance, Transform, TransformRaw, Velocity, World};
use glam::Vec3;
use procgen::ParkLayout;

use crate::wildlife::{Bird, Butterfly, CloudLayer};

// Mesh/material ids the external renderer binds instance buffers to.
pub const MESH_BIRD: u32 = 1;
pub const MESH_BUTTERFLY: u32 = 2;
pub const MESH_CLOUD: u32 = 3;

/// Populate the world with every animated inhabitant from the layout.
pub fn spawn_wildlife(world: &mut World, layout: &ParkLayout) {
    for (i, circuit) in layout.bird_circuits.iter().enumerate() {
        let start = circuit.waypoints[0];
        world.spawn((
            Transform::from_position(start),
            MeshInstance::new(MESH_BIRD, 0),
            Bird {
                waypoints: circuit.waypoints.clone(),
                next: 1 % circuit.waypoints.len(),
                speed: circuit.speed,
                wing_phase: i as f32 * 1.9,
            },
        ));
    }

    for anchor in &layout.butterflies {
        world.spawn((
            Transform::from_position(anchor.position),
            MeshInstance::new(MESH_BUTTERFLY, 0),
            Butterfly {
                anchor: anchor.position,
                phase: anchor.phase,
            },
        ));
    }

    for cloud in &layout.clouds {
        let mut transform = Transform::from_position(cloud.position);
        transform.scale = Vec3::splat(cloud.scale);
        world.spawn((
            transform,
            Velocity::new(Vec3::new(cloud.drift_speed, 0.0, 0.0)),
            MeshInstance::new(MESH_CLOUD, 0),
            CloudLayer,
        ));
    }

    log::debug!("spawned {} wildlife entities", world.len());
}

/// Collect the per-frame instance payloads for everything with a mesh:
/// the produced half of the rendering boundary.
pub fn wildlife_instances(world: &World) -> Vec<(MeshInstance, TransformRaw)> {
    world
        .query::<(&Transform, &MeshInstance)>()
        .iter()
        .map(|(_, (transform, mesh))| (*mesh, TransformRaw::from(transform)))
        .collect()
}
