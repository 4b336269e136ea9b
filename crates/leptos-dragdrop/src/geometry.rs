//! Collision Geometry
//!
//! Rectangles, droppable regions and the two collision detectors used by
//! the board: pointer containment and corner proximity.
//! Pure functions, no DOM access.

/// A point in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right(), self.top),
            Point::new(self.left, self.bottom()),
            Point::new(self.right(), self.bottom()),
        ]
    }

    /// Edges are inclusive
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Rect {
        Rect::new(self.left + dx, self.top + dy, self.width, self.height)
    }
}

/// A registered drop region
#[derive(Clone, Debug, PartialEq)]
pub struct Droppable {
    pub id: String,
    pub rect: Rect,
}

impl Droppable {
    pub fn new(id: impl Into<String>, rect: Rect) -> Self {
        Self { id: id.into(), rect }
    }
}

/// A detected collision. Lower `value` means closer.
#[derive(Clone, Debug, PartialEq)]
pub struct Collision {
    pub id: String,
    pub value: f64,
}

fn average_corner_distance(corners: &[Point; 4], rect: &Rect) -> f64 {
    let sum: f64 = rect
        .corners()
        .iter()
        .zip(corners.iter())
        .map(|(a, b)| a.distance(b))
        .sum();
    sum / 4.0
}

fn sort_ascending(mut collisions: Vec<Collision>) -> Vec<Collision> {
    collisions.sort_by(|a, b| a.value.total_cmp(&b.value));
    collisions
}

/// Droppables whose rect contains the pointer, nearest first.
///
/// Distance is the mean distance from the pointer to the droppable's
/// four corners, so the innermost region wins among nested ones.
pub fn pointer_within(pointer: Point, droppables: &[Droppable]) -> Vec<Collision> {
    let hits = droppables
        .iter()
        .filter(|d| d.rect.contains(pointer))
        .map(|d| {
            let corners = [pointer; 4];
            Collision {
                id: d.id.clone(),
                value: average_corner_distance(&corners, &d.rect),
            }
        })
        .collect();
    sort_ascending(hits)
}

/// Every droppable ranked by corner proximity to the dragged rect.
pub fn closest_corners(active: &Rect, droppables: &[Droppable]) -> Vec<Collision> {
    let corners = active.corners();
    let ranked = droppables
        .iter()
        .map(|d| Collision {
            id: d.id.clone(),
            value: average_corner_distance(&corners, &d.rect),
        })
        .collect();
    sort_ascending(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Droppable> {
        vec![
            Droppable::new("c1", Rect::new(0.0, 0.0, 100.0, 400.0)),
            Droppable::new("c2", Rect::new(120.0, 0.0, 100.0, 400.0)),
            Droppable::new("c3", Rect::new(240.0, 0.0, 100.0, 400.0)),
        ]
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(30.1, 15.0)));
    }

    #[test]
    fn test_pointer_within_misses_gutter() {
        let hits = pointer_within(Point::new(110.0, 50.0), &columns());
        assert!(hits.is_empty());
    }

    #[test]
    fn test_pointer_within_prefers_inner_region() {
        let mut regions = columns();
        regions.push(Droppable::new("card-a", Rect::new(130.0, 40.0, 80.0, 30.0)));
        let hits = pointer_within(Point::new(150.0, 50.0), &regions);
        let ids: Vec<_> = hits.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["card-a", "c2"]);
    }

    #[test]
    fn test_closest_corners_ranks_nearest_column_first() {
        let dragged = Rect::new(200.0, 10.0, 100.0, 400.0);
        let ranked = closest_corners(&dragged, &columns());
        assert_eq!(ranked[0].id, "c3");
        assert_eq!(ranked.len(), 3);
        assert!(ranked[0].value <= ranked[1].value);
    }

    #[test]
    fn test_closest_corners_on_identical_rect_is_zero() {
        let rect = Rect::new(0.0, 0.0, 100.0, 400.0);
        let ranked = closest_corners(&rect, &columns());
        assert_eq!(ranked[0].id, "c1");
        assert_eq!(ranked[0].value, 0.0);
    }

    #[test]
    fn test_translate_keeps_size() {
        let r = Rect::new(0.0, 0.0, 10.0, 5.0).translate(3.0, -2.0);
        assert_eq!(r, Rect::new(3.0, -2.0, 10.0, 5.0));
        assert_eq!(r.center(), Point::new(8.0, 0.5));
    }
}
