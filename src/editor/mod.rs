//! Annotation editing engine: line store, view transform, hit testing and
//! the pointer gesture state machine. Nothing here touches the UI.

pub mod export;
pub mod geometry;
mod interaction;
pub mod store;
pub mod view;


pub use interaction::Gesture;

use crate::error::EditorError;
use crate::model::{Line, Point};
use store::AnnotationStore;
use view::{ImageAdjustments, ViewTransform};

pub const DEFAULT_TOLERANCE: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// One drawing-surface session.
#[derive(Debug)]
pub struct Editor {
    store: AnnotationStore,
    transform: ViewTransform,
    adjustments: ImageAdjustments,
    gesture: Gesture,
    erasing: bool,
    image: Option<ImageInfo>,
    tolerance: f32,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE)
    }
}

impl Editor {
    pub fn new(tolerance: f32) -> Self {
        Self {
            store: AnnotationStore::default(),
            transform: ViewTransform::default(),
            adjustments: ImageAdjustments::default(),
            gesture: Gesture::Idle,
            erasing: false,
            image: None,
            tolerance: valid_tolerance(tolerance),
        }
    }

    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    fn ensure_idle(&self) -> Result<(), EditorError> {
        if !self.gesture.is_idle() {
            return Err(EditorError::GestureInProgress);
        }
        Ok(())
    }

    // Zoom is frozen mid-gesture: drag anchors are stored in model space.
    pub fn set_zoom(&mut self, scale: f32) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.transform.set_zoom(scale)
    }

    pub fn zoom_in(&mut self) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.transform.zoom_in();
        Ok(())
    }

    pub fn zoom_out(&mut self) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.transform.zoom_out();
        Ok(())
    }

    pub fn reset_zoom(&mut self) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.transform.reset_zoom();
        Ok(())
    }

    pub fn adjustments(&self) -> ImageAdjustments {
        self.adjustments
    }

    pub fn adjustments_mut(&mut self) -> &mut ImageAdjustments {
        &mut self.adjustments
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    pub fn image(&self) -> Option<ImageInfo> {
        self.image
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    pub fn set_tolerance(&mut self, tolerance: f32) {
        self.tolerance = valid_tolerance(tolerance);
    }

    /// Starts a new session for an image of the given size.
    pub fn load_image(&mut self, width: u32, height: u32) {
        tracing::info!(width, height, "image loaded, annotations cleared");
        self.image = Some(ImageInfo { width, height });
        self.store.clear();
        self.gesture = Gesture::Idle;
        self.erasing = false;
        self.adjustments.reset();
    }

    pub fn set_erasing(&mut self, erasing: bool) -> Result<(), EditorError> {
        self.ensure_idle()?;
        self.erasing = erasing;
        tracing::debug!(erasing, "erase mode changed");
        Ok(())
    }

    pub fn toggle_erasing(&mut self) -> Result<bool, EditorError> {
        self.set_erasing(!self.erasing)?;
        Ok(self.erasing)
    }

    /// The line being drawn, in model space.
    pub fn pending_line(&self) -> Option<(Point, Point)> {
        match self.gesture {
            Gesture::Drawing { start, end } => Some((start, end)),
            _ => None,
        }
    }

    pub fn lines(&self) -> Vec<Line> {
        self.store.all()
    }

    /// Stores the name as typed. Only an empty string clears it.
    pub fn edit_line_name(&mut self, id: u64, name: &str) -> Result<(), EditorError> {
        let name = (!name.is_empty()).then(|| name.to_string());
        self.store.update_line(id, |l| l.name = name)
    }

    pub fn set_line_name(&mut self, id: u64, name: &str) -> Result<(), EditorError> {
        let name = normalize(name);
        self.store.update_line(id, |l| l.name = name)
    }

    pub fn set_line_color(&mut self, id: u64, color: &str) -> Result<(), EditorError> {
        let color = normalize(color);
        self.store.update_line(id, |l| l.color = color)
    }
}

fn valid_tolerance(tolerance: f32) -> f32 {
    if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        tracing::warn!(tolerance, "ignoring invalid hit tolerance");
        DEFAULT_TOLERANCE
    }
}

fn normalize(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}
