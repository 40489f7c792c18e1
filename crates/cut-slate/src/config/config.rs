//! Configuration management for cut-slate.
//!
//! Handles loading and saving the TOML configuration file with
//! cross-platform paths, validation before use, and atomic writes.

use crate::{
    AppError, AppResult,
    config::{CutConfig, FilenameSettings, OscConfig, ReceiverConfig},
};

use std::{fs, io::Write, panic::Location, path::PathBuf};

use cut_slate_core::{CutIdentity, FilenameConfig, SessionSettings};
use directories::ProjectDirs;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Recorder endpoint and wire dialect.
    #[serde(default)]
    pub osc: OscConfig,
    /// Receiver plugin profile.
    #[serde(default)]
    pub receiver: ReceiverConfig,
    /// Filename element order and prefixes.
    #[serde(default)]
    pub filename: FilenameSettings,
    /// Starting part and scene labels.
    #[serde(default)]
    pub cut: CutConfig,
}

impl Config {
    /// Load configuration from disk, creating default if not found.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                reason: format!("Failed to read config: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

            let config = Self::from_toml(&contents)?;

            info!(config_path = ?config_path, "Configuration loaded");

            Ok(config)
        } else {
            info!("No config found, creating default");
            Self::create_default()
        }
    }

    /// Parse configuration from TOML text. Missing sections and fields
    /// take their defaults.
    #[track_caller]
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check the settings that serde cannot: element order and port.
    ///
    /// Returns the filename config built while checking, so callers do not
    /// build it a second time. Call this before building the session so a
    /// bad file fails at startup instead of on the first recording.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn validate(&self) -> AppResult<FilenameConfig> {
        if self.osc.port == 0 {
            return Err(AppError::ConfigError {
                reason: "osc.port must be between 1 and 65535".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.filename_config()
    }

    /// Endpoint, dialect and receiver profile for the recording session.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            endpoint: self.osc.endpoint(),
            dialect: self.osc.dialect,
            profile: self.receiver.receiver_profile(),
        }
    }

    /// Validated filename order and prefixes.
    #[track_caller]
    pub fn filename_config(&self) -> AppResult<FilenameConfig> {
        Ok(self.filename.filename_config()?)
    }

    /// Identity the session starts from.
    pub fn starting_identity(&self) -> CutIdentity {
        CutIdentity::new(self.cut.part_name.clone(), self.cut.scene_name.clone())
    }

    /// Save configuration to disk using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument]
    pub fn save(&self) -> AppResult<()> {
        let config_path = Self::config_path()?;

        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = config_path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &config_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?config_path, "Configuration saved (atomic write)");

        Ok(())
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "cut-slate", "Cut-Slate").ok_or_else(|| {
            AppError::ConfigError {
                reason: "Failed to get config directory".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }

    #[track_caller]
    fn create_default() -> AppResult<Self> {
        let config = Config::default();

        config.save()?;

        info!(
            endpoint = %config.osc.endpoint(),
            "Default config created"
        );

        Ok(config)
    }
}
