//! Scanner configuration.
//!
//! Loaded from a JSON file when the host provides one. Every field has a
//! default, so a partial file only overrides what it names.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Where the OCR source puts the origin of its normalized coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateOrigin {
    /// y grows upward (0.0 = bottom edge, 1.0 = top edge)
    #[default]
    BottomLeft,
    /// y grows downward (0.0 = top edge, 1.0 = bottom edge)
    TopLeft,
}

/// Complete scanner configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum vertical distance (fraction of frame height) between a fragment
    /// and its row's anchor for the two to share a row
    #[serde(default = "default_row_threshold")]
    pub row_threshold: f32,
    /// Coordinate origin of incoming bounding boxes
    #[serde(default)]
    pub origin: CoordinateOrigin,
    /// Number of accepted readings kept for smoothing
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// History size at which median smoothing kicks in
    #[serde(default = "default_min_history")]
    pub min_history: usize,
}

fn default_row_threshold() -> f32 {
    0.02
}

fn default_history_capacity() -> usize {
    5
}

fn default_min_history() -> usize {
    3
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            row_threshold: default_row_threshold(),
            origin: CoordinateOrigin::default(),
            history_capacity: default_history_capacity(),
            min_history: default_min_history(),
        }
    }
}

impl ScanConfig {
    /// Reads and parses a config file. Errors if the file is missing or invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Loads a config file, falling back to defaults on any problem.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("{} not found. Using default config.", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!("Config loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert!((config.row_threshold - 0.02).abs() < 1e-6);
        assert_eq!(config.origin, CoordinateOrigin::BottomLeft);
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.min_history, 3);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "origin": "top_left" }}"#).unwrap();

        let config = ScanConfig::load(file.path()).unwrap();
        assert_eq!(config.origin, CoordinateOrigin::TopLeft);
        assert_eq!(config.history_capacity, 5);
        assert!((config.row_threshold - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = ScanConfig {
            row_threshold: 0.03,
            history_capacity: 7,
            ..ScanConfig::default()
        };
        config.save(&path).unwrap();

        assert_eq!(ScanConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(ScanConfig::load(Path::new("/nonexistent/config.json")).is_err());
    }

    #[test]
    fn test_load_or_default_on_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json {{").unwrap();

        assert_eq!(ScanConfig::load_or_default(file.path()), ScanConfig::default());
        assert_eq!(
            ScanConfig::load_or_default(Path::new("/nonexistent/config.json")),
            ScanConfig::default()
        );
    }
}
