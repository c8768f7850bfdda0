//! Configuration options for volslice.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::view::ViewOrientation;

/// File name of the per-user configuration.
pub const CONFIG_FILE_NAME: &str = ".volslice.json";

/// Slicing and viewing options, persisted as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Number of slices targeted while the camera is moving.
    pub min_slices: u32,

    /// Number of slices targeted while the camera is still. Also the hard
    /// cap on slices per frame (0 = unlimited).
    pub max_slices: u32,

    /// Camera orientation used when a volume is first shown.
    pub default_orientation: ViewOrientation,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_slices: 128,
            max_slices: 1024,
            default_orientation: ViewOrientation::Axial,
        }
    }
}

impl Options {
    /// Number of slices to target for the current interaction state.
    #[must_use]
    pub fn target_slices(&self, moving: bool) -> u32 {
        if moving {
            self.min_slices
        } else {
            self.max_slices
        }
    }

    /// Reads options from a JSON file. Missing fields take default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Writes options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reads options from `path`, creating the file with defaults if it
    /// does not exist yet.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        log::info!("Creating default configuration: {}", path.display());
        let options = Self::default();
        options.save(path)?;
        Ok(options)
    }

    /// Location of the per-user configuration file.
    #[must_use]
    pub fn default_path() -> PathBuf {
        let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
        home.join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("volslice-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.min_slices, 128);
        assert_eq!(options.max_slices, 1024);
        assert_eq!(options.default_orientation, ViewOrientation::Axial);
    }

    #[test]
    fn test_target_slices() {
        let options = Options::default();
        assert_eq!(options.target_slices(true), 128);
        assert_eq!(options.target_slices(false), 1024);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: Options = serde_json::from_str(r#"{ "max_slices": 256 }"#).unwrap();
        assert_eq!(options.max_slices, 256);
        assert_eq!(options.min_slices, 128);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save.json");
        let options = Options {
            min_slices: 32,
            max_slices: 512,
            default_orientation: ViewOrientation::Sagittal,
        };
        options.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, options);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let path = temp_path("create.json");
        let _ = fs::remove_file(&path);

        let options = Options::load_or_create(&path).unwrap();
        assert_eq!(options, Options::default());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_path("invalid.json");
        fs::write(&path, "not json").unwrap();
        let result = Options::load(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(crate::error::VolsliceError::JsonError(_))
        ));
    }
}
