use eframe::egui;
use std::path::Path;

use crate::editor::export::{self, EXPORT_FILE_NAME};
use crate::editor::view::ImageAdjustments;
use crate::error::EditorError;

use super::filter::{apply_adjustments, to_color_image};
use super::{AnnotatorApp, LoadedImage, settings};

impl AnnotatorApp {
    /// Records a recovered error. Interaction errors never end the session.
    pub(super) fn report(&mut self, context: &str, err: EditorError) {
        match &err {
            EditorError::NoImageLoaded => {
                tracing::debug!("{context}: {err}");
                self.status = Some("Open an image to start annotating".to_string());
            }
            EditorError::TargetNotFound(_) | EditorError::GestureInProgress => {
                tracing::debug!("{context}: {err}");
            }
            _ => {
                tracing::warn!("{context}: {err}");
                self.status = Some(format!("{context}: {err}"));
            }
        }
    }

    pub(super) fn open_image_dialog(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "gif", "webp"])
            .pick_file()
        {
            if let Err(e) = self.load_image(ctx, &path) {
                self.report("Open failed", e);
            }
        }
    }

    fn load_image(&mut self, ctx: &egui::Context, path: &Path) -> Result<(), EditorError> {
        let source = image::open(path)?.to_rgba8();
        let (width, height) = source.dimensions();
        let texture = ctx.load_texture(
            "annotated-image",
            to_color_image(&source),
            egui::TextureOptions::LINEAR,
        );
        self.editor.load_image(width, height);
        self.image = Some(LoadedImage {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            source,
            texture,
        });
        self.texture_dirty = false;
        self.status = Some(format!("Loaded {} ({width}x{height})", path.display()));
        Ok(())
    }

    /// Re-filters the image after a brightness or contrast change.
    pub(super) fn refresh_texture(&mut self) {
        if !self.texture_dirty {
            return;
        }
        self.texture_dirty = false;
        let adjustments = self.editor.adjustments();
        if let Some(loaded) = &mut self.image {
            let filtered = apply_adjustments(&loaded.source, adjustments);
            loaded
                .texture
                .set(to_color_image(&filtered), egui::TextureOptions::LINEAR);
            tracing::debug!(
                brightness = adjustments.brightness,
                contrast = adjustments.contrast,
                "image filter updated"
            );
        }
    }

    pub(super) fn adjust(&mut self, f: impl FnOnce(&mut ImageAdjustments)) {
        let before = self.editor.adjustments();
        f(self.editor.adjustments_mut());
        if self.editor.adjustments() != before {
            self.texture_dirty = true;
        }
    }

    pub(super) fn toggle_eraser(&mut self) {
        match self.editor.toggle_erasing() {
            Ok(true) => self.status = Some("Eraser on: click a line to remove it".to_string()),
            Ok(false) => self.status = Some("Eraser off".to_string()),
            Err(e) => self.report("Eraser toggle", e),
        }
    }

    pub(super) fn export_dialog(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .add_filter("JSON", &["json"])
            .save_file()
        {
            match export::write_to_path(self.editor.store(), &path) {
                Ok(()) => {
                    self.settings.export_path = path.display().to_string();
                    self.status = Some(format!("Exported {}", path.display()));
                    self.persist_settings();
                }
                Err(e) => self.report("Export failed", e),
            }
        }
    }

    pub(super) fn quick_export(&mut self) {
        let path = self.settings.export_path.clone();
        match export::write_to_path(self.editor.store(), Path::new(&path)) {
            Ok(()) => self.status = Some(format!("Exported {path}")),
            Err(e) => self.report("Export failed", e),
        }
    }

    pub(super) fn persist_settings(&mut self) {
        if let Err(e) = settings::save_settings(&self.settings_path, &self.settings) {
            tracing::warn!(path = %self.settings_path, "settings save failed: {e}");
            self.status = Some(format!("Settings save failed: {e}"));
        }
    }

    pub(super) fn reload_settings(&mut self) {
        self.settings = settings::load_settings(&self.settings_path).unwrap_or_default();
        self.editor.set_tolerance(self.settings.tolerance);
        self.status = Some("Settings reloaded".to_string());
    }

    pub(super) fn image_name(&self) -> Option<&str> {
        self.image.as_ref().map(|i| i.name.as_str())
    }
}
