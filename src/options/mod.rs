//! Beam configuration with TOML preset support.
//!
//! Geometry, animation timing and presentation settings are consolidated
//! here. Options serialize to/from TOML so a beam's look can be stored as a
//! preset and shared between hosts.

mod animation;
mod geometry;
mod style;

use std::path::Path;

pub use animation::{
    AnimationOptions, RANDOM_DURATION_MAX, RANDOM_DURATION_MIN,
};
pub use geometry::GeometryOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::StyleOptions;

use crate::error::BeamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct BeamOptions {
    /// Path shape and anchor offsets.
    pub geometry: GeometryOptions,
    /// Highlight timing and direction.
    pub animation: AnimationOptions,
    /// Presentation values passed through to the render sink.
    pub style: StyleOptions,
}

impl BeamOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(BeamOptions)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::OptionsParse`] if the text is not valid TOML for
    /// these options.
    pub fn from_toml(content: &str) -> Result<Self, BeamError> {
        toml::from_str(content).map_err(|e| BeamError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::Io`] if the file cannot be read, or
    /// [`BeamError::OptionsParse`] if it does not parse.
    pub fn load(path: &Path) -> Result<Self, BeamError> {
        let content = std::fs::read_to_string(path).map_err(BeamError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`BeamError::OptionsParse`] if serialization fails or
    /// [`BeamError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), BeamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BeamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BeamError::Io)?;
        }
        std::fs::write(path, content).map_err(BeamError::Io)
    }
}
