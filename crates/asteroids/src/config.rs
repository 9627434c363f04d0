//! Configuration system
//!
//! Every gameplay tunable lives in [`GameConfig`], which the director hands to
//! the scenes at construction. Files are TOML or RON, picked by extension, and
//! any field left out falls back to its default.

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::collision::Rect;
use crate::math::Vec2;

/// Configuration trait
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        // Try different formats
        match extension(path) {
            Some("toml") => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of its allowed range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed seed for the asteroid spawner; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Playfield dimensions
    pub playfield: PlayfieldConfig,

    /// Player ship handling
    pub player: PlayerConfig,

    /// Bullet behaviour
    pub bullet: BulletConfig,

    /// Asteroid behaviour
    pub asteroid: AsteroidConfig,

    /// Asteroid spawn timing
    pub spawn: SpawnConfig,

    /// Points awarded per destroyed asteroid
    pub scoring: ScoringConfig,

    /// Highscore table settings
    pub highscores: HighscoreConfig,
}

/// Playfield dimensions in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Width
    pub width: f32,

    /// Height
    pub height: f32,
}

/// Player ship handling, all per frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Velocity gained per frame of thrust
    pub acceleration: f32,

    /// Radians turned per frame a turn key is held
    pub rotation_speed: f32,

    /// Sprite width
    pub width: f32,

    /// Sprite height
    pub height: f32,
}

/// Bullet behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletConfig {
    /// Distance travelled per frame
    pub speed: f32,

    /// Sprite edge length
    pub size: f32,

    /// How far past the playfield a bullet may travel before it is culled
    pub cull_margin: f32,
}

/// Asteroid behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Distance travelled per frame, scaled by the direction vector
    pub speed: f32,

    /// Radians of spin per frame
    pub spin: f32,

    /// Edge length of a big asteroid
    pub big_size: f32,

    /// Edge length of a small asteroid
    pub small_size: f32,

    /// How far past the playfield an asteroid may drift before it is culled
    pub cull_margin: f32,

    /// Distance outside the playfield edge where asteroids appear
    pub spawn_offset: f32,

    /// Inset from both ends of an edge bounding where along it asteroids appear
    pub spawn_band_inset: f32,
}

/// Asteroid spawn timing, in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Interval for the first session
    pub initial_interval_ms: u64,

    /// Interval after a restart
    pub restart_interval_ms: u64,

    /// Reduction applied after each spawn
    pub interval_step_ms: u64,

    /// Floor the interval never drops below
    pub min_interval_ms: u64,
}

/// Scoring rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Points per asteroid shot down
    pub points_per_asteroid: u32,
}

/// Highscore table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighscoreConfig {
    /// File the table is loaded from and appended to
    pub path: PathBuf,

    /// Rows shown on the menu
    pub display_count: usize,

    /// Longest name accepted by the name prompt
    pub max_name_len: usize,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 400.0,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            acceleration: 0.1,
            rotation_speed: 0.2,
            width: 48.0,
            height: 32.0,
        }
    }
}

impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            speed: 8.0,
            size: 32.0,
            cull_margin: 32.0,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            speed: 2.0,
            spin: 0.1,
            big_size: 80.0,
            small_size: 48.0,
            cull_margin: 200.0,
            spawn_offset: 100.0,
            spawn_band_inset: 100.0,
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_interval_ms: 1500,
            restart_interval_ms: 2000,
            interval_step_ms: 20,
            min_interval_ms: 100,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_asteroid: 10,
        }
    }
}

impl Default for HighscoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("highscores.txt"),
            display_count: 5,
            max_name_len: 15,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load configuration from `path`, or return the defaults if the file doesn't exist
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let config = Self::load_from_file(path)?;
        config.validate()?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the first of `candidates` that exists, or return the defaults if none do
    pub fn load_first_or_default<P: AsRef<Path>>(candidates: &[P]) -> Result<Self, ConfigError> {
        match candidates.iter().map(AsRef::<Path>::as_ref).find(|path| path.exists()) {
            Some(path) => Self::load_or_default(path),
            None => {
                log::info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("playfield.width", self.playfield.width),
            ("playfield.height", self.playfield.height),
            ("player.width", self.player.width),
            ("player.height", self.player.height),
            ("bullet.size", self.bullet.size),
            ("asteroid.big_size", self.asteroid.big_size),
            ("asteroid.small_size", self.asteroid.small_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("player.acceleration", self.player.acceleration),
            ("player.rotation_speed", self.player.rotation_speed),
            ("bullet.speed", self.bullet.speed),
            ("bullet.cull_margin", self.bullet.cull_margin),
            ("asteroid.speed", self.asteroid.speed),
            ("asteroid.cull_margin", self.asteroid.cull_margin),
            ("asteroid.spawn_band_inset", self.asteroid.spawn_band_inset),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")));
            }
        }

        // Asteroids must start clear of the field, and be culled only after that
        if self.asteroid.spawn_offset <= 0.0 {
            return Err(ConfigError::Invalid("asteroid.spawn_offset must be positive".to_string()));
        }
        if self.asteroid.cull_margin <= self.asteroid.spawn_offset {
            return Err(ConfigError::Invalid(
                "asteroid.cull_margin must exceed asteroid.spawn_offset".to_string(),
            ));
        }

        let spawn = &self.spawn;
        if spawn.min_interval_ms > spawn.initial_interval_ms || spawn.min_interval_ms > spawn.restart_interval_ms {
            return Err(ConfigError::Invalid(
                "spawn.min_interval_ms must not exceed the starting intervals".to_string(),
            ));
        }

        if self.highscores.max_name_len == 0 {
            return Err(ConfigError::Invalid("highscores.max_name_len must be positive".to_string()));
        }

        Ok(())
    }
}

impl PlayfieldConfig {
    /// Playfield rectangle anchored at the origin
    pub fn bounds(&self) -> Rect {
        Rect::from_xywh(0.0, 0.0, self.width, self.height)
    }

    /// Centre of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl SpawnConfig {
    /// Interval for the first session
    pub const fn initial_interval(&self) -> Duration {
        Duration::from_millis(self.initial_interval_ms)
    }

    /// Interval after a restart
    pub const fn restart_interval(&self) -> Duration {
        Duration::from_millis(self.restart_interval_ms)
    }

    /// Reduction applied after each spawn
    pub const fn interval_step(&self) -> Duration {
        Duration::from_millis(self.interval_step_ms)
    }

    /// Floor the interval never drops below
    pub const fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.playfield.width, 600.0);
        assert_eq!(config.spawn.initial_interval(), Duration::from_millis(1500));
        assert_eq!(config.spawn.min_interval(), Duration::from_millis(100));
        assert_eq!(config.scoring.points_per_asteroid, 10);
        assert_eq!(config.highscores.display_count, 5);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            seed = 7

            [playfield]
            width = 800.0

            [spawn]
            min_interval_ms = 250
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.playfield.width, 800.0);
        assert_eq!(config.playfield.height, 400.0);
        assert_eq!(config.spawn.min_interval_ms, 250);
        assert_eq!(config.spawn.initial_interval_ms, 1500);
        assert_eq!(config.asteroid, AsteroidConfig::default());
    }

    #[test]
    fn test_toml_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asteroids.toml");
        let mut config = GameConfig::default();
        config.player.acceleration = 0.25;
        config.seed = Some(42);

        config.save_to_file(&path).unwrap();
        let loaded = GameConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asteroids.ron");
        std::fs::write(&path, "(playfield: (width: 1024.0, height: 768.0), scoring: (points_per_asteroid: 25))").unwrap();
        let loaded = GameConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.playfield.width, 1024.0);
        assert_eq!(loaded.playfield.height, 768.0);
        assert_eq!(loaded.scoring.points_per_asteroid, 25);
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("asteroids.json");
        std::fs::write(&path, "{}").unwrap();
        let result = GameConfig::load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_first_existing_candidate() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join("asteroids.toml");
        let ron_path = dir.path().join("asteroids.ron");
        std::fs::write(&ron_path, "(seed: Some(9))").unwrap();

        let config = GameConfig::load_first_or_default(&[&toml_path, &ron_path]).unwrap();
        assert_eq!(config.seed, Some(9));

        std::fs::write(&toml_path, "seed = 4").unwrap();
        let config = GameConfig::load_first_or_default(&[&toml_path, &ron_path]).unwrap();
        assert_eq!(config.seed, Some(4));

        let empty = tempdir().unwrap();
        let config = GameConfig::load_first_or_default(&[empty.path().join("asteroids.toml")]).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = GameConfig::default();
        config.playfield.width = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.spawn.min_interval_ms = 5000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.asteroid.cull_margin = 50.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.bullet.speed = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_playfield_geometry() {
        let playfield = PlayfieldConfig::default();
        assert_eq!(playfield.center(), Vec2::new(300.0, 200.0));
        assert_eq!(playfield.bounds(), Rect::from_xywh(0.0, 0.0, 600.0, 400.0));
    }
}
