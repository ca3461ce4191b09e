//! Procedural park content for OpenPark.
//!
//! Two halves: the closed-form terrain height field the walk integrator
//! samples every frame, and the one-shot [`ParkLayout`] scatter that places
//! everything decorative (bench, grass, trees, flowers, wildlife routes,
//! clouds). Layout produces positions and parameters only; mesh and
//! material construction belong to whatever renderer consumes them.

pub mod layout;
pub mod terrain;

pub use layout::{
    BenchSpot, BirdCircuit, ButterflyAnchor, CloudSpot, FlowerSpot, GrassBlade, ParkLayout,
    TreeSpot,
};
pub use terrain::{ParkTerrain, TerrainParams};
