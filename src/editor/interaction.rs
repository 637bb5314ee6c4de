use crate::error::EditorError;
use crate::model::{Endpoint, Point};

use super::Editor;
use super::geometry::{point_to_line_distance, within_segment_bounds};

/// Pointer gesture in progress. Erase mode lives beside this on [`Editor`].
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Drawing {
        start: Point,
        end: Point,
    },
    Dragging {
        target_id: u64,
        last_pointer: Point,
    },
    Resizing {
        target_id: u64,
        endpoint: Endpoint,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

// Every handler takes view-space input and returns whether a repaint is needed.
impl Editor {
    fn ensure_image(&self) -> Result<(), EditorError> {
        if self.image.is_none() {
            return Err(EditorError::NoImageLoaded);
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, view: Point) -> Result<bool, EditorError> {
        self.ensure_image()?;
        if self.erasing || !self.gesture.is_idle() {
            return Ok(false);
        }
        let p = self.transform.to_model(view);

        self.gesture = if let Some((target_id, endpoint)) =
            self.store.find_endpoint_near(p, self.tolerance)
        {
            Gesture::Resizing {
                target_id,
                endpoint,
            }
        } else if let Some(target_id) = self.store.find_on_segment(p, self.tolerance) {
            Gesture::Dragging {
                target_id,
                last_pointer: p,
            }
        } else {
            Gesture::Drawing { start: p, end: p }
        };
        tracing::debug!(gesture = ?self.gesture, "gesture started");
        Ok(matches!(self.gesture, Gesture::Drawing { .. }))
    }

    pub fn pointer_move(&mut self, view: Point) -> Result<bool, EditorError> {
        self.ensure_image()?;
        let p = self.transform.to_model(view);
        let result = match &mut self.gesture {
            Gesture::Idle => return Ok(false),
            Gesture::Drawing { end, .. } => {
                *end = p;
                Ok(())
            }
            Gesture::Dragging {
                target_id,
                last_pointer,
            } => {
                let dx = p.x - last_pointer.x;
                let dy = p.y - last_pointer.y;
                *last_pointer = p;
                self.store.update_line(*target_id, |l| l.translate(dx, dy))
            }
            Gesture::Resizing {
                target_id,
                endpoint,
            } => {
                let endpoint = *endpoint;
                self.store
                    .update_line(*target_id, |l| l.set_endpoint(endpoint, p))
            }
        };
        if let Err(e) = result {
            self.gesture = Gesture::Idle;
            return Err(e);
        }
        Ok(true)
    }

    pub fn pointer_up(&mut self, view: Point) -> Result<bool, EditorError> {
        self.ensure_image()?;
        if self.gesture.is_idle() {
            return Ok(false);
        }
        let moved = self.pointer_move(view)?;
        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing { start, end } => {
                let id = self.store.add_line(start, end);
                tracing::debug!(id, "line committed");
            }
            other => tracing::debug!(gesture = ?other, "gesture finished"),
        }
        Ok(moved)
    }

    /// Erases every line within tolerance of the click. Only active in erase mode.
    pub fn click(&mut self, view: Point) -> Result<bool, EditorError> {
        self.ensure_image()?;
        if !self.erasing {
            return Ok(false);
        }
        let p = self.transform.to_model(view);
        let tolerance = self.tolerance;
        let removed = self.store.remove_where(|l| {
            within_segment_bounds(p, l.start, l.end, tolerance)
                && point_to_line_distance(p, l.start, l.end) <= tolerance
        });
        tracing::debug!(removed, remaining = self.store.len(), "erase click");
        Ok(removed > 0)
    }

    /// Abandons the current gesture. A pending line is discarded.
    pub fn cancel(&mut self) -> bool {
        if self.gesture.is_idle() {
            return false;
        }
        tracing::debug!(gesture = ?self.gesture, "gesture cancelled");
        let had_pending = matches!(self.gesture, Gesture::Drawing { .. });
        self.gesture = Gesture::Idle;
        had_pending
    }
}
