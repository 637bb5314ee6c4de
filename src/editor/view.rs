use crate::error::EditorError;
use crate::model::Point;

pub const ZOOM_STEP: f32 = 1.2;
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 8.0;

pub const ADJUSTMENT_STEP: f32 = 0.1;
pub const MAX_ADJUSTMENT: f32 = 3.0;

/// Maps between pointer (view) coordinates and zoom-invariant model
/// coordinates. The scale is only read through these methods.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    zoom_scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { zoom_scale: 1.0 }
    }
}

impl ViewTransform {
    pub fn zoom_scale(&self) -> f32 {
        self.zoom_scale
    }

    pub fn to_model(&self, view: Point) -> Point {
        Point::new(view.x / self.zoom_scale, view.y / self.zoom_scale)
    }

    pub fn to_view(&self, model: Point) -> Point {
        model.scaled(self.zoom_scale)
    }

    pub fn set_zoom(&mut self, scale: f32) -> Result<(), EditorError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(EditorError::InvalidZoom { scale });
        }
        self.zoom_scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
        Ok(())
    }

    pub fn zoom_in(&mut self) {
        self.zoom_scale = (self.zoom_scale * ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_scale = (self.zoom_scale / ZOOM_STEP).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_scale = 1.0;
    }
}

/// Brightness and contrast scalars for the image filter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageAdjustments {
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for ImageAdjustments {
    fn default() -> Self {
        Self {
            brightness: 1.0,
            contrast: 1.0,
        }
    }
}

fn step_adjustment(value: f32, delta: f32) -> f32 {
    // Snap to one decimal so repeated steps land on exact tenths.
    (((value + delta) * 10.0).round() / 10.0).clamp(0.0, MAX_ADJUSTMENT)
}

impl ImageAdjustments {
    pub fn is_identity(&self) -> bool {
        self.brightness == 1.0 && self.contrast == 1.0
    }

    pub fn increase_brightness(&mut self) {
        self.brightness = step_adjustment(self.brightness, ADJUSTMENT_STEP);
    }

    pub fn decrease_brightness(&mut self) {
        self.brightness = step_adjustment(self.brightness, -ADJUSTMENT_STEP);
    }

    pub fn increase_contrast(&mut self) {
        self.contrast = step_adjustment(self.contrast, ADJUSTMENT_STEP);
    }

    pub fn decrease_contrast(&mut self) {
        self.contrast = step_adjustment(self.contrast, -ADJUSTMENT_STEP);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
