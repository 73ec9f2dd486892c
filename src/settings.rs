//! Game settings and tuning
//!
//! Loaded from a JSON file; every field is optional and falls back to the
//! built-in defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::input::KeyBindings;
use crate::sim::{Rect, RoomLayout};

/// Why a settings file could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Movement ===
    /// Pixels per tick while walking
    pub walk_speed: f32,
    /// Pixels per tick while running
    pub run_speed: f32,

    // === Room ===
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub wall_thickness: f32,
    /// Explicit walls; replaces the reference room when set
    pub walls: Option<Vec<Rect>>,

    // === Cat ===
    /// Side of the square hit-box
    pub actor_size: f32,
    /// Bottom-left spawn point; defaults to just below the room's centre
    pub spawn: Option<Vec2>,

    // === Input ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,

            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            wall_thickness: WALL_THICKNESS,
            walls: None,

            actor_size: ACTOR_SIZE,
            spawn: None,

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming a settings file
    pub const ENV_VAR: &'static str = "CATWALK_SETTINGS";

    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse, and validate a settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring {}: {}; using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("wall_thickness", self.wall_thickness),
            ("actor_size", self.actor_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {}", value),
                });
            }
        }

        let conflicts = self.bindings.conflicts();
        if !conflicts.is_empty() {
            return Err(SettingsError::Invalid {
                field: "bindings",
                reason: format!("keys bound twice: {}", conflicts.join(", ")),
            });
        }

        Ok(())
    }

    /// Room layout these settings describe
    pub fn layout(&self) -> RoomLayout {
        match &self.walls {
            Some(walls) => RoomLayout::Custom {
                walls: walls.clone(),
            },
            None => RoomLayout::Reference {
                width: self.viewport_width,
                height: self.viewport_height,
                wall_thickness: self.wall_thickness,
            },
        }
    }

    /// Where the cat starts
    pub fn spawn_position(&self) -> Vec2 {
        self.spawn.unwrap_or_else(|| {
            Vec2::new(
                self.viewport_width / 2.0 - self.actor_size / 2.0,
                self.viewport_height / 2.0 - SPAWN_DROP,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.spawn_position(), Vec2::new(272.0, 176.0));
        assert!(matches!(settings.layout(), RoomLayout::Reference { .. }));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"run_speed": 4.5, "bindings": {"run": "RShift"}}"#)
            .unwrap();
        assert_eq!(settings.run_speed, 4.5);
        assert_eq!(settings.walk_speed, WALK_SPEED);
        assert_eq!(settings.bindings.run, "RShift");
        assert_eq!(settings.bindings.move_west, "A");
    }

    #[test]
    fn test_rejects_bad_speed() {
        let err = Settings::from_json(r#"{"walk_speed": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "walk_speed",
                ..
            }
        ));

        let err = Settings::from_json(r#"{"run_speed": -2}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "run_speed", .. }));
    }

    #[test]
    fn test_rejects_duplicate_bindings() {
        let err = Settings::from_json(r#"{"bindings": {"run": "W"}}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "bindings", .. }));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_custom_walls_and_spawn() {
        let settings = Settings::from_json(
            r#"{"walls": [{"x": 0, "y": 0, "width": 10, "height": 10}], "spawn": [50, 60]}"#,
        )
        .unwrap();
        assert_eq!(
            settings.layout(),
            RoomLayout::Custom {
                walls: vec![Rect::new(0.0, 0.0, 10.0, 10.0)]
            }
        );
        assert_eq!(settings.spawn, Some(Vec2::new(50.0, 60.0)));
        assert_eq!(settings.spawn_position(), Vec2::new(50.0, 60.0));

        // glam writes the point back as the same two-element array
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["spawn"], serde_json::json!([50.0, 60.0]));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("/nonexistent/catwalk-settings.json");
        assert!(matches!(Settings::load_from(path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(Some(path)), Settings::default());
        assert_eq!(Settings::load_or_default(None), Settings::default());
    }
}
