use crate::model::Point;

pub fn distance(p: Point, q: Point) -> f32 {
    let dx = q.x - p.x;
    let dy = q.y - p.y;
    (dx * dx + dy * dy).sqrt()
}

pub fn segment_length(a: Point, b: Point) -> f32 {
    distance(a, b)
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
/// Falls back to `distance(p, a)` for a zero-length segment.
pub fn point_to_line_distance(p: Point, a: Point, b: Point) -> f32 {
    let len = segment_length(a, b);
    if len <= f32::EPSILON {
        return distance(p, a);
    }
    let cross = (b.y - a.y) * p.x - (b.x - a.x) * p.y + b.x * a.y - b.y * a.x;
    cross.abs() / len
}

/// Distance from `p` to the closest point of the finite segment `a..b`.
pub fn point_to_segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;
    if len2 <= f32::EPSILON {
        return distance(p, a);
    }
    let t = ((p.x - a.x) * abx + (p.y - a.y) * aby) / len2;
    let t = t.clamp(0.0, 1.0);
    distance(p, Point::new(a.x + abx * t, a.y + aby * t))
}

/// Whether `p` lies inside the bounding box of `a..b` grown by `margin`.
pub fn within_segment_bounds(p: Point, a: Point, b: Point, margin: f32) -> bool {
    p.x >= a.x.min(b.x) - margin
        && p.x <= a.x.max(b.x) + margin
        && p.y >= a.y.min(b.y) - margin
        && p.y <= a.y.max(b.y) + margin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn distance_is_euclidean() {
        assert!(approx(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0));
        assert!(approx(distance(Point::new(-1.0, -1.0), Point::new(-1.0, -1.0)), 0.0));
    }

    #[test]
    fn line_distance_is_perpendicular() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(approx(point_to_line_distance(Point::new(5.0, 3.0), a, b), 3.0));
        // Beyond the segment end the infinite line still counts.
        assert!(approx(point_to_line_distance(Point::new(50.0, -2.0), a, b), 2.0));
    }

    #[test]
    fn degenerate_segment_falls_back_to_point_distance() {
        let a = Point::new(2.0, 2.0);
        for p in [
            Point::new(2.0, 2.0),
            Point::new(5.0, 6.0),
            Point::new(-7.5, 3.25),
        ] {
            let d = point_to_line_distance(p, a, a);
            assert!(d.is_finite());
            assert!(approx(d, distance(p, a)));
            assert!(approx(point_to_segment_distance(p, a, a), distance(p, a)));
        }
    }

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(approx(point_to_segment_distance(Point::new(5.0, 4.0), a, b), 4.0));
        assert!(approx(point_to_segment_distance(Point::new(13.0, 4.0), a, b), 5.0));
        assert!(approx(point_to_segment_distance(Point::new(-3.0, 0.0), a, b), 3.0));
    }

    #[test]
    fn bounds_check_uses_margin() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(within_segment_bounds(Point::new(12.0, 3.0), a, b, 5.0));
        assert!(!within_segment_bounds(Point::new(16.0, 0.0), a, b, 5.0));
    }
}
