//! Walk kinematics for OpenPark.
//!
//! The whole movement model is closed-form: exponential velocity damping,
//! constant directional acceleration, constant gravity, a deterministic
//! ground-height snap, and a rectangular map clamp. No rigid bodies, no
//! broadphase; every rule is a few lines of per-frame arithmetic, kept
//! here so they can be tested against the analytic solutions.

pub mod collision;
pub mod kinematics;

pub use collision::{resolve_walk, ContactReport, MapBounds};
pub use kinematics::{damp_horizontal, step_velocity, MotionConfig, SIM_TICK_RATE};
