use crate::error::EditorError;
use crate::model::{Endpoint, Line, Point};

use super::geometry::{distance, point_to_segment_distance};

/// Ordered line collection. Ids always equal store index + 1.
#[derive(Clone, Debug, Default)]
pub struct AnnotationStore {
    lines: Vec<Line>,
}

impl AnnotationStore {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.lines.len() as u64 + 1
    }

    /// Appends `line`, overwriting its id with the next dense id.
    fn push(&mut self, mut line: Line) -> u64 {
        let id = self.next_id();
        line.id = id;
        self.lines.push(line);
        id
    }

    pub fn add_line(&mut self, start: Point, end: Point) -> u64 {
        self.push(Line::new(start, end))
    }

    pub fn get(&self, id: u64) -> Option<&Line> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Owned snapshot for export and for code that outlives the frame.
    pub fn all(&self) -> Vec<Line> {
        self.lines.clone()
    }

    /// First line, in store order, with an endpoint within `tolerance`.
    pub fn find_near(&self, point: Point, tolerance: f32) -> Option<&Line> {
        self.lines.iter().find(|l| {
            distance(point, l.start) <= tolerance || distance(point, l.end) <= tolerance
        })
    }

    /// Like [`Self::find_near`] but also reports the grabbed endpoint.
    /// Start wins over end when both are in range.
    pub fn find_endpoint_near(&self, point: Point, tolerance: f32) -> Option<(u64, Endpoint)> {
        let line = self.find_near(point, tolerance)?;
        let which = if distance(point, line.start) <= tolerance {
            Endpoint::Start
        } else {
            Endpoint::End
        };
        Some((line.id, which))
    }

    pub fn find_on_segment(&self, point: Point, tolerance: f32) -> Option<u64> {
        self.lines
            .iter()
            .find(|l| point_to_segment_distance(point, l.start, l.end) <= tolerance)
            .map(|l| l.id)
    }

    /// Removes every matching line and renumbers the rest. Returns the
    /// number of lines removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Line) -> bool) -> usize {
        let before = self.lines.len();
        self.lines.retain(|l| !predicate(l));
        for (index, line) in self.lines.iter_mut().enumerate() {
            line.id = index as u64 + 1;
        }
        before - self.lines.len()
    }

    pub fn update_line(
        &mut self,
        id: u64,
        mutator: impl FnOnce(&mut Line),
    ) -> Result<(), EditorError> {
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(EditorError::TargetNotFound(id))?;
        let id = line.id;
        mutator(line);
        // Ids are owned by the store.
        line.id = id;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &AnnotationStore) -> Vec<u64> {
        store.iter().map(|l| l.id).collect()
    }

    fn store_with(n: usize) -> AnnotationStore {
        let mut store = AnnotationStore::default();
        for i in 0..n {
            let y = i as f32 * 20.0;
            store.add_line(Point::new(0.0, y), Point::new(100.0, y));
        }
        store
    }

    #[test]
    fn add_assigns_dense_ids() {
        let store = store_with(3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn push_ignores_caller_id() {
        let mut store = store_with(1);
        let mut line = Line::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        line.id = 42;
        assert_eq!(store.push(line), 2);
        assert_eq!(ids(&store), vec![1, 2]);
    }

    #[test]
    fn remove_where_renumbers_survivors() {
        let mut store = store_with(5);
        let removed = store.remove_where(|l| l.id == 2 || l.id == 4);
        assert_eq!(removed, 2);
        assert_eq!(ids(&store), vec![1, 2, 3]);
        let ys: Vec<f32> = store.iter().map(|l| l.start.y).collect();
        assert_eq!(ys, vec![0.0, 40.0, 80.0]);
        assert_eq!(store.add_line(Point::default(), Point::default()), 4);
    }

    #[test]
    fn remove_where_keeps_ids_dense_for_every_subset() {
        for mask in 0u32..(1 << 5) {
            let mut store = store_with(5);
            store.remove_where(|l| mask & (1 << (l.id - 1)) != 0);
            let expected: Vec<u64> = (1..=store.len() as u64).collect();
            assert_eq!(ids(&store), expected);
        }
    }

    #[test]
    fn find_near_prefers_earliest_line() {
        let mut store = AnnotationStore::default();
        store.add_line(Point::new(0.0, 0.0), Point::new(50.0, 50.0));
        store.add_line(Point::new(52.0, 50.0), Point::new(100.0, 0.0));
        let hit = store.find_near(Point::new(51.0, 50.0), 5.0).unwrap();
        assert_eq!(hit.id, 1);
        assert!(store.find_near(Point::new(25.0, 0.0), 5.0).is_none());
    }

    #[test]
    fn find_endpoint_near_reports_endpoint() {
        let store = store_with(1);
        assert_eq!(
            store.find_endpoint_near(Point::new(98.0, 1.0), 5.0),
            Some((1, Endpoint::End))
        );
        assert_eq!(
            store.find_endpoint_near(Point::new(2.0, -1.0), 5.0),
            Some((1, Endpoint::Start))
        );
    }

    #[test]
    fn find_on_segment_uses_body() {
        let store = store_with(2);
        assert_eq!(store.find_on_segment(Point::new(50.0, 21.0), 5.0), Some(2));
        assert_eq!(store.find_on_segment(Point::new(150.0, 0.0), 5.0), None);
    }

    #[test]
    fn update_missing_line_is_not_found() {
        let mut store = store_with(1);
        let err = store.update_line(7, |l| l.translate(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, EditorError::TargetNotFound(7)));
        assert_eq!(store.get(1).unwrap().start, Point::new(0.0, 0.0));
    }

    #[test]
    fn get_follows_renumbering() {
        let mut store = store_with(3);
        assert_eq!(store.get(3).unwrap().start.y, 40.0);
        store.remove_where(|l| l.id == 1);
        assert_eq!(store.get(2).unwrap().start.y, 40.0);
        assert!(store.get(3).is_none());
        assert!(store.get(0).is_none());
    }

    #[test]
    fn update_cannot_change_id() {
        let mut store = store_with(2);
        store
            .update_line(1, |l| {
                l.id = 2;
                l.name = Some("Edge".to_string());
            })
            .unwrap();
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.get(1).unwrap().display_name(), "Edge");
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = store_with(1);
        let mut snapshot = store.all();
        snapshot[0].translate(10.0, 10.0);
        assert_eq!(store.get(1).unwrap().start, Point::new(0.0, 0.0));
        store.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(store.is_empty());
    }
}
