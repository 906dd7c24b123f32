//! Parallelogram geometry derived from the point store.
//!
//! Everything here is a pure function of the point positions and is
//! recomputed from scratch whenever the sketch is drawn. With fewer than three
//! points nothing beyond the raw positions is defined.

use std::f64::consts::PI;
use std::ops::{Add, Sub};

use super::points::Point;

/// A plain coordinate pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Coords {
    pub x: f64,
    pub y: f64,
}

impl Coords {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl Add for Coords {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coords {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f64; 2]> for Coords {
    fn from(p: [f64; 2]) -> Self {
        Self::new(p[0], p[1])
    }
}

/// Build the outline vertices.
///
/// With exactly three positions `A, B, C` the vertex `D = A - B + C` is
/// appended, closing the parallelogram `ABCD`. Any other count is returned
/// unchanged.
pub fn derive_line_set(positions: &[Coords]) -> Vec<Coords> {
    match positions {
        [a, b, c] => vec![*a, *b, *c, *a - *b + *c],
        _ => positions.to_vec(),
    }
}

/// Vector from `p` to `q`.
#[inline]
pub fn edge_vector(p: Coords, q: Coords) -> Coords {
    q - p
}

/// Each vertex paired with its successor, the last wrapping to the first.
pub fn outline_edges(line_set: &[Coords]) -> Vec<(Coords, Coords)> {
    line_set
        .iter()
        .enumerate()
        .map(|(i, p)| (*p, line_set[(i + 1) % line_set.len()]))
        .collect()
}

/// Intersection of the diagonals; only defined for a closed parallelogram.
pub fn parallelogram_center(line_set: &[Coords]) -> Option<Coords> {
    match line_set {
        [a, _, c, _] => Some(a.midpoint(*c)),
        _ => None,
    }
}

/// Twice the unsigned area of triangle `abc`, which is the area of the
/// parallelogram spanned by `ab` and `ac`.
pub fn triangle_area_doubled(a: Coords, b: Coords, c: Coords) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs()
}

/// Area of the closed parallelogram, `None` while it is incomplete.
pub fn parallelogram_area(line_set: &[Coords]) -> Option<f64> {
    match line_set {
        [a, b, c, _] => Some(triangle_area_doubled(*a, *b, *c)),
        _ => None,
    }
}

/// Radius of the circle whose area equals `area`.
pub fn equivalent_radius(area: f64) -> f64 {
    (area / PI).sqrt()
}

/// The closed parallelogram with its derived measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelogramShape {
    /// `[A, B, C, D]` with `D` synthetic.
    pub vertices: [Coords; 4],
    pub center: Coords,
    pub area: f64,
    /// Radius of the equal-area circle.
    pub radius: f64,
}

/// All geometry derived from one snapshot of the point store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchGeometry {
    pub line_set: Vec<Coords>,
    pub center: Option<Coords>,
    pub area: Option<f64>,
    pub circle_radius: Option<f64>,
}

impl SketchGeometry {
    pub fn derive(points: &[Point]) -> Self {
        let positions: Vec<Coords> = points.iter().map(Point::coords).collect();
        Self::from_positions(&positions)
    }

    pub fn from_positions(positions: &[Coords]) -> Self {
        let line_set = derive_line_set(positions);
        let center = parallelogram_center(&line_set);
        let area = parallelogram_area(&line_set);
        let circle_radius = area.map(equivalent_radius);
        Self {
            line_set,
            center,
            area,
            circle_radius,
        }
    }

    /// Synthetic fourth vertex, if the parallelogram is closed.
    pub fn fourth_vertex(&self) -> Option<Coords> {
        match self.line_set.as_slice() {
            [_, _, _, d] => Some(*d),
            _ => None,
        }
    }

    pub fn shape(&self) -> Option<ParallelogramShape> {
        let vertices: [Coords; 4] = self.line_set.as_slice().try_into().ok()?;
        Some(ParallelogramShape {
            vertices,
            center: self.center?,
            area: self.area?,
            radius: self.circle_radius?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_vector_is_plain_difference_in_every_quadrant() {
        let origin = Coords::new(0.0, 0.0);
        for q in [
            Coords::new(3.0, 4.0),
            Coords::new(-3.0, 4.0),
            Coords::new(-3.0, -4.0),
            Coords::new(3.0, -4.0),
        ] {
            assert_eq!(edge_vector(origin, q), q);
            assert_eq!(edge_vector(q, origin), Coords::new(-q.x, -q.y));
        }
    }

    #[test]
    fn outline_edges_wrap_around() {
        let pts = [
            Coords::new(0.0, 0.0),
            Coords::new(1.0, 0.0),
            Coords::new(1.0, 1.0),
        ];
        let edges = outline_edges(&pts);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], (pts[2], pts[0]));
    }

    #[test]
    fn outline_edges_of_nothing_is_empty() {
        assert!(outline_edges(&[]).is_empty());
    }

    #[test]
    fn line_set_mirrors_short_sequences() {
        let pts = [Coords::new(1.0, 2.0), Coords::new(3.0, 4.0)];
        assert_eq!(derive_line_set(&pts), pts.to_vec());
        assert!(derive_line_set(&[]).is_empty());
    }

    #[test]
    fn incomplete_geometry_has_no_shape() {
        let g = SketchGeometry::from_positions(&[Coords::new(1.0, 1.0)]);
        assert_eq!(g.center, None);
        assert_eq!(g.area, None);
        assert_eq!(g.circle_radius, None);
        assert!(g.shape().is_none());
        assert!(g.fourth_vertex().is_none());
    }
}
