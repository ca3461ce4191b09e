//! Bootstrap loading: progress tracking and the asset catalog.
//!
//! Asset arrival is fire-and-forget: each loaded item ticks the tracker, the
//! overlay shows the fraction, and completion reveals the start button. A
//! missing or malformed catalog never aborts the session; the park just
//! falls back to built-in defaults (absent visuals, not errors).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Counts asset arrivals and latches completion for the overlay.
#[derive(Debug, Clone, Copy)]
pub struct LoadingTracker {
    total: usize,
    completed: usize,
}

impl LoadingTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
        }
    }

    /// Record one arrived item. Extra arrivals past the total are ignored.
    pub fn item_loaded(&mut self) {
        if self.completed < self.total {
            self.completed += 1;
        }
    }

    /// Fraction loaded in `0.0..=1.0`. An empty manifest counts as done.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

/// Errors from reading the asset catalog file.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read asset catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed asset catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// The bench model's interaction parameters, as authored alongside the model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BenchAsset {
    /// XZ radius of the spawned interaction volume.
    pub interaction_radius: f32,
    /// Seated eye height above the seat anchor.
    pub seat_height: f32,
}

impl Default for BenchAsset {
    fn default() -> Self {
        Self {
            interaction_radius: 2.0,
            seat_height: 1.1,
        }
    }
}

/// Everything the park loads from disk. Currently just the bench.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AssetCatalog {
    #[serde(default)]
    pub bench: BenchAsset,
}

impl AssetCatalog {
    /// Read the catalog from a RON file.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let text = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&text).map_err(|source| AssetError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Read the catalog, degrading to defaults with a warning on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("{e}; using built-in bench parameters");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Progress walks from 0 to 1 and latches complete.
    #[test]
    fn tracker_progress_and_completion() {
        let mut tracker = LoadingTracker::new(4);
        assert_eq!(tracker.progress(), 0.0);
        assert!(!tracker.is_complete());

        for _ in 0..4 {
            tracker.item_loaded();
        }
        assert_eq!(tracker.progress(), 1.0);
        assert!(tracker.is_complete());

        // Late arrivals must not overflow the fraction.
        tracker.item_loaded();
        assert_eq!(tracker.progress(), 1.0);
    }

    /// Nothing to load counts as already done.
    #[test]
    fn empty_manifest_is_complete() {
        let tracker = LoadingTracker::new(0);
        assert!(tracker.is_complete());
        assert_eq!(tracker.progress(), 1.0);
    }

    /// A missing catalog file degrades to defaults instead of failing.
    #[test]
    fn missing_catalog_degrades_to_default() {
        let catalog = AssetCatalog::load_or_default(Path::new("definitely/not/here.ron"));
        assert_eq!(catalog.bench.interaction_radius, BenchAsset::default().interaction_radius);
    }

    /// A well-formed catalog overrides the defaults.
    #[test]
    fn catalog_parses_overrides() {
        let parsed: AssetCatalog =
            ron::from_str("(bench: (interaction_radius: 3.5, seat_height: 0.9))").unwrap();
        assert_eq!(parsed.bench.interaction_radius, 3.5);
        assert_eq!(parsed.bench.seat_height, 0.9);
    }
}
