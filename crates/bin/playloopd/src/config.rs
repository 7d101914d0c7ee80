//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `playloop.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use playloop_domain::controls::ControlIds;
use playloop_domain::session::Durations;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Wait and play durations, in seconds.
    pub timing: TimingConfig,
    /// Target player identity and control view ids.
    pub player: PlayerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Durations for each phase of the cycle, in seconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Seconds to sleep between pausing initial playback and pressing play.
    pub before_play: u64,
    /// Minimum seconds of elapsed playback before pausing again.
    pub play: u64,
    /// Seconds to sleep after pausing before relaunching the player.
    pub after_play: u64,
}

/// Player identity and control lookup configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Package name snapshots must carry to be processed.
    pub package: String,
    /// View id of the play/pause toggle.
    pub play_pause_id: String,
    /// View id of the surface tapped to reveal hidden controls.
    pub surface_id: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `playloop.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("playloop.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("PLAYLOOP_BEFORE_PLAY") {
            if let Ok(secs) = val.parse() {
                self.timing.before_play = secs;
            }
        }
        if let Ok(val) = std::env::var("PLAYLOOP_PLAY") {
            if let Ok(secs) = val.parse() {
                self.timing.play = secs;
            }
        }
        if let Ok(val) = std::env::var("PLAYLOOP_AFTER_PLAY") {
            if let Ok(secs) = val.parse() {
                self.timing.after_play = secs;
            }
        }
        if let Ok(val) = std::env::var("PLAYLOOP_PACKAGE") {
            self.player.package = val;
        }
        if let Ok(val) = std::env::var("PLAYLOOP_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.player.package.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player package must be non-empty".to_string(),
            ));
        }
        if self.player.play_pause_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "play/pause view id must be non-empty".to_string(),
            ));
        }
        if self.player.surface_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "surface view id must be non-empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Duration settings as the domain type.
    #[must_use]
    pub fn durations(&self) -> Durations {
        Durations {
            before_play: self.timing.before_play,
            play: self.timing.play,
            after_play: self.timing.after_play,
        }
    }

    /// Control view ids as the domain type.
    #[must_use]
    pub fn control_ids(&self) -> ControlIds {
        ControlIds {
            play_pause: self.player.play_pause_id.as_str().into(),
            surface: self.player.surface_id.as_str().into(),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        let durations = Durations::default();
        Self {
            before_play: durations.before_play,
            play: durations.play,
            after_play: durations.after_play,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        let controls = ControlIds::default();
        Self {
            package: "com.example.player".to_string(),
            play_pause_id: controls.play_pause.as_str().to_string(),
            surface_id: controls.surface.as_str().to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "playloopd=info,playloop=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
