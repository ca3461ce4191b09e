//! Per-frame session advancement: event drain, phase transitions, player
//! integration, and the cosmetic animation pass.

use crate::state::Phase;
use crate::{overlay, wildlife, ParkState, MAP_HALF_EXTENT};

/// Run one frame of the session. Called once per tick with the frame delta.
pub fn frame(state: &mut ParkState, dt: f32) {
    state.input.begin_frame();
    let signals = state.events.drain_into(&mut state.input);

    // Bootstrap: reveal the start button once every asset arrived.
    if state.phase == Phase::Loading && state.loading.is_complete() {
        state.phase = Phase::Ready;
        log::info!("assets loaded; park ready");
    }

    // Pointer-lock pause machine. A blur counts as losing the pointer.
    match state.phase {
        Phase::Ready | Phase::Paused if signals.lock_acquired => {
            state.phase = Phase::Strolling;
            log::debug!("pointer locked; strolling");
        }
        Phase::Strolling if signals.lock_released || signals.blurred => {
            state.phase = Phase::Paused;
            state.player.halt();
            log::debug!("pointer released; paused");
        }
        _ => {}
    }

    // Bench interaction, only with the pointer locked. Sitting survives an
    // unlock; the pause overlay just covers it until the pointer returns.
    let mut reset_requested = false;
    if state.input.is_cursor_locked() {
        match state.phase {
            Phase::Strolling
                if state.input.is_interact_pressed()
                    && state.bench.is_within_reach(state.camera.position()) =>
            {
                state.player.sit_down(&mut state.camera, &state.bench);
                state.phase = Phase::Sitting;
            }
            Phase::Sitting if state.input.is_interact_pressed() => {
                state.player.stand_up(&mut state.camera);
                state.phase = Phase::Strolling;
            }
            Phase::Sitting if state.input.is_reset_pressed() => {
                reset_requested = true;
            }
            _ => {}
        }
    }

    // Movement integration.
    if state.phase.integrates() {
        state.player.update(
            &state.input,
            &mut state.camera,
            &state.terrain,
            &state.bounds,
            dt,
        );
    }

    state.near_bench = state.bench.is_within_reach(state.camera.position());

    // Cosmetic animation runs in every phase; the park never freezes.
    let elapsed = state.time.elapsed_seconds();
    wildlife::update_birds(&mut state.world, elapsed, dt);
    wildlife::update_butterflies(&mut state.world, elapsed);
    wildlife::update_clouds(&mut state.world, dt, MAP_HALF_EXTENT);
    state.flora.repose(elapsed);

    state.overlay = overlay::assemble(state.phase, state.loading.progress(), state.near_bench);

    if reset_requested {
        state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec3;
    use input::{ControlEvent, ElementState, KeyCode};

    const DT: f32 = 1.0 / 60.0;

    fn ready_state() -> ParkState {
        let mut state = ParkState::new(GameConfig::default());
        while !state.loading.is_complete() {
            state.loading.item_loaded();
        }
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Ready);
        state
    }

    fn tap(state: &mut ParkState, key: KeyCode) {
        state.events.push(ControlEvent::Key(key, ElementState::Pressed));
        state.events.push(ControlEvent::Key(key, ElementState::Released));
    }

    fn teleport_to_bench(state: &mut ParkState) {
        let x = state.bench.position.x + 0.5;
        let z = state.bench.position.z + 0.5;
        let y = state.terrain.height(x, z) + state.player.motion.standing_height;
        state.camera.transform.position = Vec3::new(x, y, z);
    }

    /// Lock starts the stroll; unlock pauses and zeroes velocity; relock resumes.
    #[test]
    fn lock_pause_resume_cycle() {
        let mut state = ready_state();

        state.events.push(ControlEvent::CursorLocked);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Strolling);

        state
            .events
            .push(ControlEvent::Key(KeyCode::KeyW, ElementState::Pressed));
        for _ in 0..30 {
            frame(&mut state, DT);
        }
        assert!(state.player.velocity.length() > 0.1);

        state.events.push(ControlEvent::CursorUnlocked);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Paused);
        assert_eq!(state.player.velocity, Vec3::ZERO);

        let paused_at = state.camera.position();
        for _ in 0..30 {
            frame(&mut state, DT);
        }
        assert_eq!(state.camera.position(), paused_at);

        state.events.push(ControlEvent::CursorLocked);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Strolling);
    }

    /// Interacting at the bench sits, freezes, then stands back where the
    /// player left off.
    #[test]
    fn sit_and_stand_at_bench() {
        let mut state = ready_state();
        state.events.push(ControlEvent::CursorLocked);
        frame(&mut state, DT);

        teleport_to_bench(&mut state);
        let stood_at = state.camera.position();

        tap(&mut state, KeyCode::KeyE);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Sitting);
        assert_eq!(state.camera.position(), state.bench.seat_eye_position());
        assert!(state.overlay.bench_prompt.as_deref().unwrap().contains("Stand up"));

        // Held movement keys must not budge a seated player.
        state
            .events
            .push(ControlEvent::Key(KeyCode::KeyW, ElementState::Pressed));
        for _ in 0..60 {
            frame(&mut state, DT);
        }
        assert_eq!(state.camera.position(), state.bench.seat_eye_position());

        state
            .events
            .push(ControlEvent::Key(KeyCode::KeyW, ElementState::Released));
        frame(&mut state, DT);
        tap(&mut state, KeyCode::KeyE);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Strolling);
        // Standing restores the saved spot; the same frame already ran one
        // integrator step, so allow a whisker of settling drift.
        assert!((state.camera.position() - stood_at).length() < 0.05);
    }

    /// The reset key only works while sitting, and rebuilds the whole park.
    #[test]
    fn reset_requires_sitting() {
        let mut state = ready_state();
        state.events.push(ControlEvent::CursorLocked);
        frame(&mut state, DT);

        // Standing: R does nothing.
        tap(&mut state, KeyCode::KeyR);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Strolling);

        teleport_to_bench(&mut state);
        tap(&mut state, KeyCode::KeyE);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Sitting);

        tap(&mut state, KeyCode::KeyR);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Ready);
        assert!(!state.player.is_sitting());
        assert!(!state.input.is_cursor_locked());
    }

    /// The sit prompt appears near the bench and nowhere else.
    #[test]
    fn bench_prompt_tracks_proximity() {
        let mut state = ready_state();
        state.events.push(ControlEvent::CursorLocked);
        frame(&mut state, DT);

        // Far corner of the park, well outside the interaction volume.
        let x = -state.bench.position.x.signum() * 20.0;
        let z = -state.bench.position.z.signum() * 20.0;
        let y = state.terrain.height(x, z) + state.player.motion.standing_height;
        state.camera.transform.position = Vec3::new(x, y, z);
        frame(&mut state, DT);
        assert!(state.overlay.bench_prompt.is_none());

        teleport_to_bench(&mut state);
        frame(&mut state, DT);
        assert_eq!(state.overlay.bench_prompt.as_deref(), Some("[E] Sit down"));
    }

    /// Wildlife keeps animating while paused; the player does not.
    #[test]
    fn pause_freezes_player_not_park() {
        let mut state = ready_state();
        state.events.push(ControlEvent::CursorLocked);
        frame(&mut state, DT);
        state.events.push(ControlEvent::CursorUnlocked);
        frame(&mut state, DT);
        assert_eq!(state.phase, Phase::Paused);

        let before = crate::world::wildlife_instances(&state.world);
        for _ in 0..60 {
            state.time.advance(std::time::Duration::from_secs_f64(1.0 / 60.0));
            frame(&mut state, DT);
        }
        let after = crate::world::wildlife_instances(&state.world);
        assert!(
            before
                .iter()
                .zip(after.iter())
                .any(|((_, a), (_, b))| a.model != b.model),
            "wildlife froze during pause"
        );
    }
}
