//! Trail options with TOML preset support.
//!
//! Settings serialize to/from TOML so presets can be stored on disk and
//! shared between sessions. Loading never validates; call
//! [`TrailOptions::validated`] before handing values to an animator.

mod trail;

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use trail::TrailOptions;

use crate::error::TrailError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `fade_speed`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Cursor trail tunables.
    pub trail: TrailOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Io`] if the file cannot be read and
    /// [`TrailError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, TrailError> {
        let content = std::fs::read_to_string(path).map_err(TrailError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::OptionsParse`] on malformed input.
    pub fn from_toml(content: &str) -> Result<Self, TrailError> {
        toml::from_str(content)
            .map_err(|e| TrailError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TrailError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrailError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TrailError::Io)?;
        }
        std::fs::write(path, content).map_err(TrailError::Io)
    }

    /// Load a named preset from `dir`, falling back to defaults on failure.
    #[must_use]
    pub fn load_preset_or_default(dir: &Path, name: &str) -> Self {
        let path = dir.join(format!("{name}.toml"));
        match Self::load(&path) {
            Ok(options) => {
                log::info!("Loaded trail preset '{name}'");
                options
            }
            Err(e) => {
                log::error!("Failed to load trail preset '{name}': {e}");
                Self::default()
            }
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("cursor-trail-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[trail]
fade_speed = 3.0
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.trail.fade_speed, 3.0);
        assert_eq!(opts.trail.animation_speed, 10.0);
        assert_eq!(opts.trail.trail_width, 0.4);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Options::from_toml("[trail]\nfade_speed = \"fast\"")
            .unwrap_err();
        assert!(matches!(err, TrailError::OptionsParse(_)));
    }

    #[test]
    fn validated_replaces_out_of_range_values() {
        let opts = TrailOptions {
            animation_speed: -2.0,
            fade_speed: f64::NAN,
            trail_width: 0.6,
        }
        .validated();
        assert_eq!(opts.animation_speed, TrailOptions::DEFAULT_ANIMATION_SPEED);
        assert_eq!(opts.fade_speed, TrailOptions::DEFAULT_FADE_SPEED);
        assert_eq!(opts.trail_width, 0.6);
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = scratch_dir("presets");
        let mut opts = Options::default();
        opts.trail.animation_speed = 20.0;
        opts.save(&dir.join("snappy.toml")).unwrap();
        Options::default().save(&dir.join("calm.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["calm", "snappy"]);
        let loaded = Options::load_preset_or_default(&dir, "snappy");
        assert_eq!(loaded.trail.animation_speed, 20.0);
        assert_eq!(
            Options::load_preset_or_default(&dir, "missing"),
            Options::default()
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("trail"));

        let trail = &props["trail"]["properties"];
        assert!(trail.get("animation_speed").is_some());
        assert!(trail.get("fade_speed").is_some());
        assert!(trail.get("trail_width").is_some());
    }
}
