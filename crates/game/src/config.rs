//! Session configuration. Loaded from config.ron at startup.

use serde::{Deserialize, Serialize};

/// Persistent settings. Loaded from `config.ron` in the current directory
/// (or next to the binary); missing or invalid files fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Mouse sensitivity multiplier (1.0 = default).
    #[serde(default = "default_sensitivity")]
    pub sensitivity: f32,
    /// Seed for the park layout scatter.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Length of the scripted headless stroll, seconds.
    #[serde(default = "default_demo_seconds")]
    pub demo_seconds: f32,
}

fn default_sensitivity() -> f32 {
    1.0
}
fn default_seed() -> u64 {
    2024
}
fn default_demo_seconds() -> f32 {
    20.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            seed: default_seed(),
            demo_seconds: default_demo_seconds(),
        }
    }
}

impl GameConfig {
    /// Load config from `config.ron`. If the file is missing or invalid,
    /// returns default config.
    pub fn load() -> Self {
        let path = config_path();
        if let Ok(data) = std::fs::read_to_string(&path) {
            match ron::from_str(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        }
        Self::default()
    }

    /// Save current config to `config.ron`. Logs on error.
    pub fn save(&self) {
        let path = config_path();
        if let Ok(s) = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()) {
            if let Err(e) = std::fs::write(&path, s) {
                log::warn!("Could not write config to {:?}: {}", path, e);
            }
        }
    }
}

fn config_path() -> std::path::PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| std::path::PathBuf::from("."))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A partial RON file fills the rest from defaults.
    #[test]
    fn partial_config_uses_defaults() {
        let parsed: GameConfig = ron::from_str("(sensitivity: 2.5)").unwrap();
        assert_eq!(parsed.sensitivity, 2.5);
        assert_eq!(parsed.seed, default_seed());
        assert_eq!(parsed.demo_seconds, default_demo_seconds());
    }
}
