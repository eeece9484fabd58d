use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    catalog::PairingMode,
    error::{ConfigError, Result},
};

/// Main configuration for the morph batcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input/output directory layout
    pub paths: PathsConfig,

    /// Batch processing settings
    pub batch: BatchConfig,

    /// Animated preview settings
    pub preview: PreviewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            batch: BatchConfig::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|_| ConfigError::ParseFailed {
            path: path.display().to_string(),
        })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.batch.validate()?;
        self.preview.validate()?;
        Ok(())
    }
}

/// Directory layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Root directory holding one subdirectory of images per category
    pub image_root: PathBuf,

    /// Root directory for rendered morph results
    pub results_root: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from("images/data"),
            results_root: PathBuf::from("results/morph_results"),
        }
    }
}

/// Batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Pairing strategy across each category's images
    pub mode: PairingMode,

    /// Number of morph steps per pair; a pair renders `frames + 1` images
    pub frames: u32,

    /// Categories to process; empty means every subdirectory of the image root
    pub categories: Vec<String>,

    /// Assemble an animated GIF preview per pair
    pub preview: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            mode: PairingMode::Sequential,
            frames: 10,
            categories: Vec::new(),
            preview: false,
        }
    }
}

impl BatchConfig {
    fn validate(&self) -> Result<()> {
        if self.frames < 1 {
            return Err(ConfigError::InvalidValue {
                key: "batch.frames".to_string(),
                value: self.frames.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Preview assembly configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Frame rate of the assembled GIF
    pub fps: u32,

    /// Bounded wait for the external encoder, in seconds
    pub timeout_secs: u64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            fps: 12,
            timeout_secs: 60,
        }
    }
}

impl PreviewConfig {
    fn validate(&self) -> Result<()> {
        if self.fps < 1 {
            return Err(ConfigError::InvalidValue {
                key: "preview.fps".to_string(),
                value: self.fps.to_string(),
            }
            .into());
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "preview.timeout_secs".to_string(),
                value: self.timeout_secs.to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original = Config::default();
        original.batch.mode = PairingMode::AllPairs;
        original.batch.frames = 5;
        original.batch.categories = vec!["white men".to_string()];

        original.save_to_file(&file_path).unwrap();
        let loaded = Config::from_file(&file_path).unwrap();

        assert_eq!(loaded.batch.mode, PairingMode::AllPairs);
        assert_eq!(loaded.batch.frames, 5);
        assert_eq!(loaded.batch.categories, original.batch.categories);
        assert_eq!(loaded.paths.image_root, original.paths.image_root);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(&file_path, "[batch]\nframes = 4\n").unwrap();

        let loaded = Config::from_file(&file_path).unwrap();
        assert_eq!(loaded.batch.frames, 4);
        assert_eq!(loaded.batch.mode, PairingMode::Sequential);
        assert_eq!(loaded.preview.fps, 12);
    }

    #[test]
    fn test_zero_frames_is_invalid() {
        let mut config = Config::default();
        config.batch.frames = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_fps_is_invalid() {
        let mut config = Config::default();
        config.preview.fps = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_error() {
        let err = Config::from_file("/nonexistent/config.toml").unwrap_err();
        assert!(matches!(
            err,
            crate::error::MorphError::Config(ConfigError::FileNotFound { .. })
        ));
    }
}
