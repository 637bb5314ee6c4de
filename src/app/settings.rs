use serde::{Deserialize, Serialize};

use crate::editor::DEFAULT_TOLERANCE;
use crate::editor::export::EXPORT_FILE_NAME;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(super) struct AppSettings {
    pub export_path: String,
    pub tolerance: f32,
    pub stroke_width: f32,
    pub label_font_size: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            export_path: EXPORT_FILE_NAME.to_string(),
            tolerance: DEFAULT_TOLERANCE,
            stroke_width: 2.0,
            label_font_size: 12.0,
        }
    }
}

pub(super) fn load_settings(path: &str) -> Option<AppSettings> {
    let s = std::fs::read_to_string(path).ok()?;
    let parsed = if path.ends_with(".toml") {
        toml::from_str::<AppSettings>(&s)
            .ok()
            .or_else(|| serde_json::from_str::<AppSettings>(&s).ok())
    } else {
        serde_json::from_str::<AppSettings>(&s)
            .ok()
            .or_else(|| toml::from_str::<AppSettings>(&s).ok())
    };
    if parsed.is_none() {
        tracing::warn!(path, "settings file could not be parsed, using defaults");
    }
    parsed
}

pub(super) fn save_settings(path: &str, settings: &AppSettings) -> Result<(), String> {
    if path.ends_with(".toml") {
        let toml = toml::to_string_pretty(settings).map_err(|e| e.to_string())?;
        std::fs::write(path, toml).map_err(|e| e.to_string())
    } else {
        let json = serde_json::to_string_pretty(settings).map_err(|e| e.to_string())?;
        std::fs::write(path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let s: AppSettings = toml::from_str("tolerance = 8.0").unwrap();
        assert_eq!(s.tolerance, 8.0);
        assert_eq!(s.export_path, "annotations.json");
        assert_eq!(s.stroke_width, 2.0);
    }

    #[test]
    fn round_trips_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings {
            export_path: "out/lines.json".to_string(),
            tolerance: 6.5,
            stroke_width: 3.0,
            label_font_size: 14.0,
        };
        for name in ["settings.toml", "settings.json"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();
            save_settings(path, &settings).unwrap();
            assert_eq!(load_settings(path), Some(settings.clone()));
        }
    }

    #[test]
    fn unreadable_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        assert_eq!(load_settings(path.to_str().unwrap()), None);
        std::fs::write(&path, "tolerance = [").unwrap();
        assert_eq!(load_settings(path.to_str().unwrap()), None);
    }
}
