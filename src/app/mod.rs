use crate::editor::Editor;
use eframe::egui;

mod actions;
mod filter;
mod help;
mod render;
mod settings;
mod update;

/// Decoded image and the texture currently showing it.
struct LoadedImage {
    name: String,
    source: image::RgbaImage,
    texture: egui::TextureHandle,
}

pub struct AnnotatorApp {
    editor: Editor,
    image: Option<LoadedImage>,
    texture_dirty: bool,
    settings: settings::AppSettings,
    settings_path: String,
    status: Option<String>,
    show_help: bool,
}

impl AnnotatorApp {
    fn config_path() -> Option<String> {
        if let Some(home) = std::env::var_os("HOME") {
            let path = std::path::PathBuf::from(home).join(".config").join("linemark.toml");
            if path.exists() {
                return Some(path.display().to_string());
            }
        }
        if std::path::Path::new("settings.toml").exists() {
            return Some("settings.toml".to_string());
        }
        None
    }

    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_path = Self::config_path().unwrap_or_else(|| "settings.toml".to_string());
        let settings = settings::load_settings(&settings_path).unwrap_or_default();
        tracing::info!(path = %settings_path, ?settings, "settings loaded");

        Self {
            editor: Editor::new(settings.tolerance),
            image: None,
            texture_dirty: false,
            settings,
            settings_path,
            status: None,
            show_help: false,
        }
    }
}
