use std::path::{Path, PathBuf};

use crate::ai::StrategyKind;
use crate::error::ConfigError;

/// Settings for the network client.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Host the game server runs on.
    pub host: String,
    /// Port the game server listens on.
    pub port: u16,
    /// Strategy used to select moves.
    pub strategy: StrategyKind,
    /// Optional RNG seed for reproducible tie-breaking.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: "localhost".to_string(),
            port: 1337,
            strategy: StrategyKind::MaxStable,
            seed: None,
        }
    }
}

/// Settings for the arena benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Path to the reference server jar.
    pub jar_path: PathBuf,
    /// Games per benchmarked strategy.
    pub num_games: u32,
    /// Port the server opens for the remote player.
    pub player_port: u16,
    /// Port for the server's web UI.
    pub ui_port: u16,
    /// Minimum per-turn delay the server enforces, in milliseconds.
    pub min_turn_time_ms: u64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            jar_path: PathBuf::from("othello.jar"),
            num_games: 100,
            player_port: 4321,
            ui_port: 8888,
            min_turn_time_ms: 1,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.client.host.is_empty() {
            return Err(ConfigError::Validation("client.host must not be empty".into()));
        }
        if self.client.port == 0 {
            return Err(ConfigError::Validation("client.port must be > 0".into()));
        }
        if self.arena.num_games == 0 {
            return Err(ConfigError::Validation("arena.num_games must be > 0".into()));
        }
        if self.arena.player_port == 0 {
            return Err(ConfigError::Validation("arena.player_port must be > 0".into()));
        }
        if self.arena.ui_port == 0 {
            return Err(ConfigError::Validation("arena.ui_port must be > 0".into()));
        }
        if self.arena.player_port == self.arena.ui_port {
            return Err(ConfigError::Validation(
                "arena.player_port and arena.ui_port must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
