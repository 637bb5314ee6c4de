use serde::Serialize;
use std::path::Path;

use crate::error::EditorError;
use crate::model::{Line, Point};

use super::store::AnnotationStore;

pub const EXPORT_FILE_NAME: &str = "annotations.json";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct ExportedPoint {
    pub x: i64,
    pub y: i64,
}

impl From<Point> for ExportedPoint {
    fn from(p: Point) -> Self {
        Self {
            x: p.x.round() as i64,
            y: p.y.round() as i64,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ExportedLine {
    pub id: u64,
    pub start: ExportedPoint,
    pub end: ExportedPoint,
    pub length: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<&Line> for ExportedLine {
    fn from(line: &Line) -> Self {
        Self {
            id: line.id,
            start: line.start.into(),
            end: line.end.into(),
            length: line.length().round() as i64,
            name: line.name.clone(),
            color: line.color.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ExportPayload {
    pub lines: Vec<ExportedLine>,
}

impl ExportPayload {
    pub fn from_store(store: &AnnotationStore) -> Self {
        Self {
            lines: store.iter().map(ExportedLine::from).collect(),
        }
    }
}

pub fn to_json(store: &AnnotationStore) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(&ExportPayload::from_store(store))?)
}

pub fn write_to_path(store: &AnnotationStore, path: &Path) -> Result<(), EditorError> {
    let json = to_json(store)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), lines = store.len(), "exported annotations");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_coordinates_and_length() {
        let mut store = AnnotationStore::default();
        store.add_line(Point::new(1.4, 2.6), Point::new(11.4, 2.6));
        let payload = ExportPayload::from_store(&store);
        let line = &payload.lines[0];
        assert_eq!(line.id, 1);
        assert_eq!(line.start, ExportedPoint { x: 1, y: 3 });
        assert_eq!(line.end, ExportedPoint { x: 11, y: 3 });
        assert_eq!(line.length, 10);
    }

    #[test]
    fn json_has_stable_shape() {
        let mut store = AnnotationStore::default();
        store.add_line(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        let id = store.add_line(Point::new(10.0, 10.0), Point::new(10.0, 30.0));
        store
            .update_line(id, |l| {
                l.name = Some("Gap".to_string());
                l.color = Some("#ff0000".to_string());
            })
            .unwrap();

        let json = to_json(&store).unwrap();
        let expected = r##"{
  "lines": [
    {
      "id": 1,
      "start": {
        "x": 0,
        "y": 0
      },
      "end": {
        "x": 3,
        "y": 4
      },
      "length": 5
    },
    {
      "id": 2,
      "start": {
        "x": 10,
        "y": 10
      },
      "end": {
        "x": 10,
        "y": 30
      },
      "length": 20,
      "name": "Gap",
      "color": "#ff0000"
    }
  ]
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_store_exports_empty_list() {
        let store = AnnotationStore::default();
        let value: serde_json::Value = serde_json::from_str(&to_json(&store).unwrap()).unwrap();
        assert_eq!(value, serde_json::json!({ "lines": [] }));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        let mut store = AnnotationStore::default();
        store.add_line(Point::new(0.0, 0.0), Point::new(0.0, 12.0));
        write_to_path(&store, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, to_json(&store).unwrap());
    }
}
