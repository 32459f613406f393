// Strategies for:
//  * points
//  * star-shaped polygons, with float or lattice coordinates
use crate::data::{Point, Polygon, TriangleView};
use crate::PolygonScalar;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn any_16() -> impl Strategy<Value = Point<i16, 2>> {
  any::<[i16; 2]>().prop_map(Point::new)
}

pub fn any_32() -> impl Strategy<Value = Point<i32, 2>> {
  any::<[i32; 2]>().prop_map(Point::new)
}

///////////////////////////////////////////////////////////////////////////////
// Star-shaped polygons

pub fn any_star() -> impl Strategy<Value = Polygon<f64>> {
  (3usize..60, any::<u64>()).prop_map(|(n, seed)| {
    let mut rng = SmallRng::seed_from_u64(seed);
    Polygon::random_star(n, &mut rng)
  })
}

pub fn any_lattice_star() -> impl Strategy<Value = Polygon<i32>> {
  any::<u64>().prop_map(|seed| {
    let mut rng = SmallRng::seed_from_u64(seed);
    lattice_star(&mut rng)
  })
}

// Rays from the origin in counter-clockwise order. Entries 0, 6 and 10 are
// never more than 135 degrees apart, so the origin stays strictly inside.
const DIRECTIONS: [[i32; 2]; 16] = [
  [1, 0],
  [2, 1],
  [1, 1],
  [1, 2],
  [0, 1],
  [-1, 2],
  [-1, 1],
  [-2, 1],
  [-1, 0],
  [-2, -1],
  [-1, -1],
  [-1, -2],
  [0, -1],
  [1, -2],
  [1, -1],
  [2, -1],
];

/// Simple polygon with small integer coordinates. One vertex per chosen ray,
/// plus edge midpoints whenever they land on the lattice. The midpoints give
/// plenty of colinear vertices. Winding and starting vertex are random.
pub fn lattice_star<R: Rng + ?Sized>(rng: &mut R) -> Polygon<i32> {
  let mut corners = Vec::with_capacity(DIRECTIONS.len());
  for (i, &[dx, dy]) in DIRECTIONS.iter().enumerate() {
    if i == 0 || i == 6 || i == 10 || rng.gen_bool(0.5) {
      let scale = rng.gen_range(1..=6);
      corners.push([dx * scale, dy * scale]);
    }
  }

  let mut points = Vec::with_capacity(corners.len() * 2);
  for (i, &[px, py]) in corners.iter().enumerate() {
    let [qx, qy] = corners[(i + 1) % corners.len()];
    points.push(Point::new([px, py]));
    if (qx - px) % 2 == 0 && (qy - py) % 2 == 0 && rng.gen_bool(0.5) {
      points.push(Point::new([(px + qx) / 2, (py + qy) / 2]));
    }
  }
  if rng.gen_bool(0.5) {
    points.reverse();
  }
  let start = rng.gen_range(0..points.len());
  points.rotate_left(start);
  Polygon::new_unchecked(points)
}

///////////////////////////////////////////////////////////////////////////////
// Helpers

pub fn to_float<T: PolygonScalar>(poly: &Polygon<T>) -> Polygon<f64> {
  Polygon::new_unchecked(poly.iter().map(|pt| pt.cast(|x: T| x.to_f64())).collect())
}

pub fn centroid<T: PolygonScalar>(trig: &TriangleView<'_, T>) -> Point<f64, 2> {
  let [a, b, c] = trig.points();
  let [ax, ay] = a.to_f64();
  let [bx, by] = b.to_f64();
  let [cx, cy] = c.to_f64();
  Point::new([(ax + bx + cx) / 3.0, (ay + by + cy) / 3.0])
}

#[cfg(test)]
mod tests {
  use super::*;
  use claims::assert_ok;

  #[test]
  fn lattice_stars_are_valid() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
      let poly = lattice_star(&mut rng);
      assert_ok!(poly.validate());
      assert!(poly.len() >= 3);
      assert_ne!(poly.signed_area_2x::<i64>(), 0);
    }
  }
}
