//! Centralized animation options with TOML preset support.
//!
//! Every tweakable constant (camera start pose and rates, frame rate and
//! world scale, cloud tiling, lighting, keybindings, debug toggles) lives
//! here. Options serialize to/from TOML so a fly-through can be re-tuned
//! without recompiling.

mod camera;
mod clouds;
mod debug;
mod keybindings;
mod lighting;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use clouds::CloudOptions;
pub use debug::DebugOptions;
pub use keybindings::KeybindingOptions;
pub use lighting::LightingOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlightError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[clouds]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera start pose, control rates, and projection.
    pub camera: CameraOptions,
    /// Frame rate and global scene transform.
    pub scene: SceneOptions,
    /// Cloud field generation parameters.
    pub clouds: CloudOptions,
    /// Light placement and intensity.
    pub lighting: LightingOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
    /// Diagnostic toggles.
    pub debug: DebugOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FlightError> {
        let mut options: Self = toml::from_str(content)
            .map_err(|e| FlightError::OptionsParse(e.to_string()))?;
        options.keybindings.rebuild_reverse_map();
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlightError> {
        let content = std::fs::read_to_string(path).map_err(FlightError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlightError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlightError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlightError::Io)?;
        }
        std::fs::write(path, content).map_err(FlightError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Reject values the per-frame arithmetic cannot work with.
    pub fn validate(&self) -> Result<(), FlightError> {
        if self.scene.fps == 0 {
            return Err(FlightError::InvalidOptions(
                "scene.fps must be at least 1".into(),
            ));
        }
        if self.scene.world_scale.is_nan() || self.scene.world_scale <= 0.0 {
            return Err(FlightError::InvalidOptions(
                "scene.world_scale must be positive".into(),
            ));
        }
        if self.clouds.tiles_x == 0 || self.clouds.tiles_z == 0 {
            return Err(FlightError::InvalidOptions(
                "clouds.tiles_x and clouds.tiles_z must be at least 1".into(),
            ));
        }
        if self.clouds.sections < 3 {
            return Err(FlightError::InvalidOptions(format!(
                "clouds.sections must be at least 3, got {}",
                self.clouds.sections
            )));
        }
        Ok(())
    }
}
