//! Game configuration
//!
//! Serde-backed settings loaded through the engine's [`Config`] trait; the
//! defaults reproduce the classic tuning (64px entities over a 600x800
//! field, ship speed five times its own size).

use arcade_engine::config::{Config, Deserialize, Serialize};
use arcade_engine::{EngineConfig, PacingConfig, WindowConfig};

use crate::state::SimParams;

/// Default configuration file path
pub const CONFIG_PATH: &str = "starfall.toml";

/// Top-level game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Engine settings (window, pacing)
    pub engine: EngineConfig,

    /// Square entity edge length in pixels
    pub entity_size: f32,

    /// Square projectile edge length in pixels
    pub projectile_size: f32,

    /// Path to the sprite atlas image
    pub atlas_path: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig {
                window: WindowConfig {
                    title: "Starfall".to_string(),
                    width: 600,
                    height: 800,
                },
                pacing: PacingConfig::default(),
            },
            entity_size: 64.0,
            projectile_size: 16.0,
            atlas_path: "data/simple_space_tilesheet.png".to_string(),
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Build the simulation parameter bundle from these settings
    pub fn sim_params(&self) -> SimParams {
        SimParams::new(
            self.engine.window.width as f32,
            self.engine.window.height as f32,
            self.entity_size,
            self.projectile_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_field_and_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.engine.window.width, 600);
        assert_eq!(config.engine.window.height, 800);

        let params = config.sim_params();
        assert_eq!(params.entity_size, 64.0);
        assert_eq!(params.player_speed, 320.0);
        assert_eq!(params.projectile_size, 16.0);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = GameConfig::default();
        let path = std::env::temp_dir().join("starfall_config_test.toml");
        let path = path.to_str().expect("Should be valid UTF-8");

        config.save_to_file(path).expect("Should save");
        let loaded = GameConfig::load_from_file(path).expect("Should load");
        assert_eq!(loaded.entity_size, config.entity_size);
        assert_eq!(loaded.engine.window.title, config.engine.window.title);

        std::fs::remove_file(path).expect("Should clean up");
    }
}
