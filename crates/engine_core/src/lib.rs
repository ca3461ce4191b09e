//! Core engine types and utilities for OpenPark.
//!
//! This crate provides the foundational types used across all simulation systems:
//! - Transform and spatial components
//! - First-person camera (mouse look + the displacement API the walk integrator drives)
//! - Time management for the fixed-step loop

pub mod camera;
pub mod components;
pub mod time;
pub mod transform;

pub use camera::*;
pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
pub use hecs::{Entity, World};
