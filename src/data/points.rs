//! The point store: up to three user-placed points, newest first.
//!
//! [`PointStore`] is the single owner of sketch state. It has exactly three
//! mutators ([`add_point`](PointStore::add_point), [`reset`](PointStore::reset)
//! and [`update_point`](PointStore::update_point)); everything else in the
//! crate is derived from what it holds.

use egui::Color32;

use super::geometry::Coords;

/// Diameter of a point handle at rest, in logical pixels.
pub const POINT_DIAMETER: f32 = 11.0;
/// Radius of a point handle at rest.
pub const POINT_RADIUS: f32 = POINT_DIAMETER / 2.0;
/// Default fill for newly placed points.
pub const POINT_FILL: Color32 = Color32::RED;

/// A user-placed point with its presentation attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    /// Handle radius; changes while the point is dragged.
    pub radius: f32,
    pub fill: Color32,
}

impl Point {
    /// Create a point at `(x, y)` with the default radius and fill.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            radius: POINT_RADIUS,
            fill: POINT_FILL,
        }
    }

    /// Position only, without presentation attributes.
    pub fn coords(&self) -> Coords {
        Coords::new(self.x, self.y)
    }
}

/// Partial set of point attributes, merged into an existing point by
/// [`PointStore::update_point`]. Unset fields keep their previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointUpdate {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub radius: Option<f32>,
    pub fill: Option<Color32>,
}

impl PointUpdate {
    /// Update that moves the point to `(x, y)`.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Default::default()
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_fill(mut self, fill: Color32) -> Self {
        self.fill = Some(fill);
        self
    }

    fn merge_into(self, p: &mut Point) {
        if let Some(x) = self.x {
            p.x = x;
        }
        if let Some(y) = self.y {
            p.y = y;
        }
        if let Some(radius) = self.radius {
            p.radius = radius;
        }
        if let Some(fill) = self.fill {
            p.fill = fill;
        }
    }
}

/// Ordered sequence of at most [`PointStore::MAX_POINTS`] points,
/// most recently added first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Capacity of the store; a parallelogram needs three given vertices.
    pub const MAX_POINTS: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Place a new point in front of the sequence.
    ///
    /// When the store is already full the oldest point falls off the end and
    /// is returned.
    pub fn add_point(&mut self, x: f64, y: f64) -> Option<Point> {
        self.points.insert(0, Point::new(x, y));
        if self.points.len() > Self::MAX_POINTS {
            self.points.pop()
        } else {
            None
        }
    }

    /// Remove every point.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    /// Merge `update` into the point at `index`.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn update_point(&mut self, index: usize, update: PointUpdate) -> bool {
        match self.points.get_mut(index) {
            Some(p) => {
                update.merge_into(p);
                true
            }
            None => false,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` once three points are placed and the parallelogram is defined.
    pub fn is_complete(&self) -> bool {
        self.points.len() == Self::MAX_POINTS
    }

    /// Positions in store order.
    pub fn positions(&self) -> Vec<Coords> {
        self.points.iter().map(Point::coords).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_point_has_default_presentation() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.radius, 5.5);
        assert_eq!(p.fill, Color32::RED);
    }

    #[test]
    fn add_point_prepends() {
        let mut store = PointStore::new();
        store.add_point(1.0, 1.0);
        store.add_point(2.0, 2.0);
        assert_eq!(store.get(0).unwrap().x, 2.0);
        assert_eq!(store.get(1).unwrap().x, 1.0);
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut p = Point::new(1.0, 2.0);
        PointUpdate::default().with_fill(Color32::BLUE).merge_into(&mut p);
        assert_eq!((p.x, p.y, p.radius), (1.0, 2.0, POINT_RADIUS));
        assert_eq!(p.fill, Color32::BLUE);
    }

    #[test]
    fn update_out_of_range_is_noop() {
        let mut store = PointStore::new();
        store.add_point(0.0, 0.0);
        let before = store.clone();
        assert!(!store.update_point(1, PointUpdate::at(9.0, 9.0)));
        assert_eq!(store, before);
    }
}
