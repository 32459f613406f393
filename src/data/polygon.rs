use claims::debug_assert_ok;
use num_traits::*;
use rand::Rng;
use std::f64::consts::PI;
use std::ops::Index;

use crate::data::{Point, PointLocation};
use crate::{Error, Orientation, PolygonScalar, Predicate};

/// An ordered ring of vertices. The last vertex connects back to the first.
///
/// Construction keeps the caller's winding. Nothing checks that the ring is
/// simple.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T> {
  pub(crate) points: Vec<Point<T, 2>>,
}

impl<T> Polygon<T>
where
  T: PolygonScalar,
{
  /// $O(n)$
  pub fn new(points: Vec<Point<T, 2>>) -> Result<Polygon<T>, Error> {
    validate(&points)?;
    Ok(Polygon { points })
  }

  pub fn new_unchecked(points: Vec<Point<T, 2>>) -> Polygon<T> {
    debug_assert_ok!(validate(&points));
    Polygon { points }
  }

  pub fn validate(&self) -> Result<(), Error> {
    validate(&self.points)
  }

  pub fn signed_area<F>(&self) -> F
  where
    T: Into<F>,
    F: NumOps<F, F> + FromPrimitive + Zero + Clone,
  {
    self.signed_area_2x::<F>() / F::from_usize(2).unwrap()
  }

  /// Shoelace sum of `x_i*y_{i+1} - x_{i+1}*y_i`. Positive for
  /// counter-clockwise rings.
  pub fn signed_area_2x<F>(&self) -> F
  where
    T: Into<F>,
    F: NumOps<F, F> + Zero + Clone,
  {
    let mut sum = F::zero();
    for (p, q) in self.iter_edges() {
      let px: F = p.array[0].clone().into();
      let py: F = p.array[1].clone().into();
      let qx: F = q.array[0].clone().into();
      let qy: F = q.array[1].clone().into();
      sum = sum + px * qy - qx * py;
    }
    sum
  }

  /// Winding of the ring, read off the turn at the lowest vertex (smallest
  /// x, then smallest y). That vertex sits on the convex hull, so for simple
  /// rings its exact orientation is the winding. When that turn is flat the
  /// sign of the area decides. `CoLinear` when the ring has no area.
  pub fn orientation(&self) -> Orientation {
    let lowest = self.lowest_vertex();
    let prev = &self.points[self.prev_index(lowest)];
    let next = &self.points[self.next_index(lowest)];
    let corner = prev.orientation(&self.points[lowest], next);
    if !corner.is_colinear() {
      return corner;
    }
    let area: f64 = self
      .iter_edges()
      .map(|(p, q)| {
        let [px, py] = p.to_f64();
        let [qx, qy] = q.to_f64();
        px * qy - qx * py
      })
      .sum();
    if area > 0.0 {
      Orientation::CounterClockWise
    } else if area < 0.0 {
      Orientation::ClockWise
    } else {
      Orientation::CoLinear
    }
  }

  /// Reverse the ring unless it already winds clockwise. Zero-area rings are
  /// reversed too.
  pub fn ensure_cw(&mut self) {
    if !self.orientation().is_cw() {
      self.points.reverse();
    }
  }

  pub fn ensure_ccw(&mut self) {
    if !self.orientation().is_ccw() {
      self.points.reverse();
    }
  }

  /// $O(n)$ Crossing-number test with an exact boundary check.
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    let [px, py] = pt.to_f64();
    let mut inside = false;
    for (p, q) in self.iter_edges() {
      if on_segment(p, q, pt) {
        return PointLocation::OnBoundary;
      }
      let [ax, ay] = p.to_f64();
      let [bx, by] = q.to_f64();
      if (ay > py) != (by > py) {
        let cross_x = ax + (py - ay) * (bx - ax) / (by - ay);
        if px < cross_x {
          inside = !inside;
        }
      }
    }
    if inside {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }

  fn lowest_vertex(&self) -> usize {
    let mut lowest = 0;
    for idx in 1..self.points.len() {
      if self.points[idx] < self.points[lowest] {
        lowest = idx;
      }
    }
    lowest
  }

  /// The vertex at `idx` and its two ring neighbours are colinear.
  pub fn is_colinear_at(&self, predicate: Predicate, idx: usize) -> bool {
    let prev = &self.points[self.prev_index(idx)];
    let next = &self.points[self.next_index(idx)];
    prev
      .orientation_with(predicate, &self.points[idx], next)
      .is_colinear()
  }
}

impl<T> Polygon<T> {
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T, 2>> {
    self.points
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T, 2>> {
    self.points.iter()
  }

  /// Consecutive vertex pairs, including the closing edge.
  pub fn iter_edges(&self) -> impl Iterator<Item = (&Point<T, 2>, &Point<T, 2>)> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| (&self.points[i], &self.points[(i + 1) % n]))
  }

  pub fn prev_index(&self, idx: usize) -> usize {
    if idx == 0 {
      self.points.len() - 1
    } else {
      idx - 1
    }
  }

  pub fn next_index(&self, idx: usize) -> usize {
    if idx + 1 >= self.points.len() {
      0
    } else {
      idx + 1
    }
  }

  pub(crate) fn remove(&mut self, idx: usize) -> Point<T, 2> {
    self.points.remove(idx)
  }
}

impl<T> Index<usize> for Polygon<T> {
  type Output = Point<T, 2>;
  fn index(&self, idx: usize) -> &Point<T, 2> {
    &self.points[idx]
  }
}

impl Polygon<f64> {
  /// $O(n)$ Sample a simple polygon that is star-shaped around the origin.
  ///
  /// Vertex `i` sits at an angle drawn from the first half of the `i`th of
  /// `n` equal sectors, so no angular gap reaches π and the ring never
  /// crosses itself. Radii are drawn from `[0.1, 1.0)`. The ring winds
  /// counter-clockwise.
  pub fn random_star<R>(n: usize, rng: &mut R) -> Polygon<f64>
  where
    R: Rng + ?Sized,
  {
    let n = n.max(3);
    let sector = 2.0 * PI / n as f64;
    let points = (0..n)
      .map(|i| {
        let angle = sector * (i as f64 + rng.gen_range(0.0..0.5));
        let radius = rng.gen_range(0.1..1.0);
        Point::new([radius * angle.cos(), radius * angle.sin()])
      })
      .collect();
    Polygon { points }
  }
}

fn validate<T: PolygonScalar>(points: &[Point<T, 2>]) -> Result<(), Error> {
  if points.len() < 3 {
    return Err(Error::InvalidPolygon {
      vertices: points.len(),
    });
  }
  match points.iter().position(|pt| !pt.is_finite()) {
    Some(index) => Err(Error::NonFiniteCoordinate { index }),
    None => Ok(()),
  }
}

fn on_segment<T: PolygonScalar>(a: &Point<T, 2>, b: &Point<T, 2>, pt: &Point<T, 2>) -> bool {
  let between = |lo: &T, x: &T, hi: &T| (lo <= x && x <= hi) || (hi <= x && x <= lo);
  a.orientation(b, pt).is_colinear()
    && between(a.x_coord(), pt.x_coord(), b.x_coord())
    && between(a.y_coord(), pt.y_coord(), b.y_coord())
}
