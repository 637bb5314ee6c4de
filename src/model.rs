use eframe::egui;

use crate::editor::geometry;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_pos2(p: egui::Pos2) -> Self {
        Self { x: p.x, y: p.y }
    }

    pub fn to_pos2(self) -> egui::Pos2 {
        egui::pos2(self.x, self.y)
    }

    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

/// A straight-line annotation in model space.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub id: u64,
    pub start: Point,
    pub end: Point,
    pub name: Option<String>,
    pub color: Option<String>,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            id: 0,
            start,
            end,
            name: None,
            color: None,
        }
    }

    pub fn length(&self) -> f32 {
        geometry::segment_length(self.start, self.end)
    }

    pub fn set_endpoint(&mut self, which: Endpoint, p: Point) {
        match which {
            Endpoint::Start => self.start = p,
            Endpoint::End => self.end = p,
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.start = self.start.offset(dx, dy);
        self.end = self.end.offset(dx, dy);
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Line")
    }

    pub fn label(&self) -> String {
        format!(
            "ID: {}, {}, Length: {} px",
            self.id,
            self.display_name(),
            self.length().round() as i64
        )
    }
}
