//! Wildlife animation systems: birds, butterflies, clouds.
//!
//! All of it is stateless trigonometric re-computation plus simple waypoint
//! chasing. No coordination, no failure modes. Systems run every frame
//! whether or not the player is moving.

use engine_core::{Transform, Velocity, World};
use glam::Vec3;

/// A bird flying its circuit forever.
#[derive(Debug, Clone)]
pub struct Bird {
    /// Closed ring of waypoints.
    pub waypoints: Vec<Vec3>,
    /// Index of the waypoint currently chased.
    pub next: usize,
    /// Cruise speed, m/s.
    pub speed: f32,
    /// Phase offset for the wing-beat bob.
    pub wing_phase: f32,
}

/// A butterfly fluttering around its home flower.
#[derive(Debug, Clone, Copy)]
pub struct Butterfly {
    pub anchor: Vec3,
    pub phase: f32,
}

/// Tag for the slow-drifting cloud deck; drift speed lives in [`Velocity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudLayer;

/// Distance at which a waypoint counts as reached.
const WAYPOINT_REACH: f32 = 0.6;
/// Wing-beat bob mixed into the chased target so it never integrates into drift.
const WING_BOB_AMPLITUDE: f32 = 0.3;
const WING_BOB_FREQ: f32 = 7.0;

/// Advance every bird along its circuit, facing the travel direction.
pub fn update_birds(world: &mut World, elapsed: f32, dt: f32) {
    for (_, (transform, bird)) in world.query_mut::<(&mut Transform, &mut Bird)>() {
        if bird.waypoints.is_empty() {
            continue;
        }
        let mut target = bird.waypoints[bird.next];
        target.y += (elapsed * WING_BOB_FREQ + bird.wing_phase).sin() * WING_BOB_AMPLITUDE;

        let to_target = target - transform.position;
        let dist = to_target.length();
        if dist < WAYPOINT_REACH {
            bird.next = (bird.next + 1) % bird.waypoints.len();
            continue;
        }

        let dir = to_target / dist;
        transform.position += dir * (bird.speed * dt).min(dist);
        transform.face_horizontal(dir);
    }
}

/// Re-pose every butterfly on its closed flutter path around the anchor.
pub fn update_butterflies(world: &mut World, elapsed: f32) {
    for (_, (transform, butterfly)) in world.query_mut::<(&mut Transform, &Butterfly)>() {
        let t = elapsed;
        let p = butterfly.phase;
        transform.position = butterfly.anchor
            + Vec3::new(
                (t * 1.3 + p).sin() * 0.8,
                (t * 6.0 + p).sin() * 0.25,
                (t * 0.9 + p).cos() * 0.8,
            );
    }
}

/// Drift the cloud deck and wrap it at the map rectangle.
pub fn update_clouds(world: &mut World, dt: f32, half_extent: f32) {
    for (_, (transform, velocity, _)) in
        world.query_mut::<(&mut Transform, &Velocity, &CloudLayer)>()
    {
        transform.position += velocity.linear * dt;
        let limit = half_extent + transform.scale.x;
        if transform.position.x > limit {
            transform.position.x = -limit;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    /// A bird closes in on its waypoint and advances to the next one.
    #[test]
    fn bird_advances_waypoints() {
        let mut world = World::new();
        let waypoints = vec![Vec3::new(0.0, 10.0, 0.0), Vec3::new(8.0, 10.0, 0.0)];
        world.spawn((
            Transform::from_position(waypoints[0]),
            Bird {
                waypoints: waypoints.clone(),
                next: 1,
                speed: 5.0,
                wing_phase: 0.0,
            },
        ));

        let mut elapsed = 0.0;
        for _ in 0..120 {
            elapsed += DT;
            update_birds(&mut world, elapsed, DT);
        }

        let (_, (transform, bird)) = world
            .query_mut::<(&Transform, &Bird)>()
            .into_iter()
            .next()
            .unwrap();
        // Two seconds at 5 m/s crosses the 8 m leg; the ring wraps back to 0.
        assert_eq!(bird.next, 0);
        assert!(transform.position.x > 4.0);
    }

    /// Birds face where they fly.
    #[test]
    fn bird_faces_travel_direction() {
        let mut world = World::new();
        world.spawn((
            Transform::from_position(Vec3::new(0.0, 10.0, 0.0)),
            Bird {
                waypoints: vec![Vec3::new(20.0, 10.0, 0.0)],
                next: 0,
                speed: 5.0,
                wing_phase: 0.0,
            },
        ));
        update_birds(&mut world, 0.1, DT);
        let (_, (transform, _)) = world
            .query_mut::<(&Transform, &Bird)>()
            .into_iter()
            .next()
            .unwrap();
        let fwd = transform.forward();
        assert!(fwd.x > 0.9, "forward = {:?}", fwd);
    }

    /// Butterflies never leave a small envelope around their anchor.
    #[test]
    fn butterfly_stays_near_anchor() {
        let mut world = World::new();
        let anchor = Vec3::new(3.0, 1.0, -4.0);
        world.spawn((
            Transform::from_position(anchor),
            Butterfly { anchor, phase: 1.7 },
        ));

        for i in 0..600 {
            update_butterflies(&mut world, i as f32 * DT);
            let (_, (transform, _)) = world
                .query_mut::<(&Transform, &Butterfly)>()
                .into_iter()
                .next()
                .unwrap();
            let offset = transform.position - anchor;
            assert!(offset.length() < 1.5, "fluttered {} away", offset.length());
        }
    }

    /// Clouds wrap from the far edge back to the near one.
    #[test]
    fn cloud_wraps_at_map_edge() {
        let mut world = World::new();
        let mut transform = Transform::from_position(Vec3::new(23.9, 28.0, 0.0));
        transform.scale = Vec3::splat(3.0);
        world.spawn((transform, Velocity::new(Vec3::new(1.0, 0.0, 0.0)), CloudLayer));

        for _ in 0..600 {
            update_clouds(&mut world, 0.1, 24.0);
        }
        let (_, (transform, _, _)) = world
            .query_mut::<(&Transform, &Velocity, &CloudLayer)>()
            .into_iter()
            .next()
            .unwrap();
        assert!(transform.position.x <= 24.0 + 3.0 + 1e-3);
        assert!(transform.position.x >= -(24.0 + 3.0) - 1e-3);
    }
}
