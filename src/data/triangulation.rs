use num_traits::*;

use super::{Point, TriangleView};
use crate::PolygonScalar;

/// Flat list of triangle corners. Every three consecutive points form one
/// triangle. Corners are copied out of the input polygon, so shared vertices
/// appear once per triangle that uses them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Triangulation<T> {
  points: Vec<Point<T, 2>>,
}

impl<T> Triangulation<T> {
  pub(crate) fn new_unchecked(points: Vec<Point<T, 2>>) -> Triangulation<T> {
    debug_assert_eq!(points.len() % 3, 0);
    Triangulation { points }
  }

  /// Number of triangles.
  pub fn len(&self) -> usize {
    self.points.len() / 3
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn points(&self) -> &[Point<T, 2>] {
    &self.points
  }

  pub fn into_points(self) -> Vec<Point<T, 2>> {
    self.points
  }
}

impl<T> Triangulation<T>
where
  T: PolygonScalar,
{
  pub fn triangles(&self) -> impl Iterator<Item = TriangleView<'_, T>> + '_ {
    self
      .points
      .chunks_exact(3)
      .map(|corners| TriangleView::new_unchecked([&corners[0], &corners[1], &corners[2]]))
  }

  /// Twice the covered area: the sum of absolute triangle areas.
  pub fn area_2x<F>(&self) -> F
  where
    T: Into<F>,
    F: NumOps<F, F> + Signed + Clone,
  {
    self
      .triangles()
      .fold(F::zero(), |acc, trig| acc + trig.signed_area_2x::<F>().abs())
  }
}

impl<T> From<Triangulation<T>> for Vec<Point<T, 2>> {
  fn from(triangulation: Triangulation<T>) -> Vec<Point<T, 2>> {
    triangulation.points
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn groups_of_three() {
    let triangulation = Triangulation::new_unchecked(vec![
      Point::new([0, 0]),
      Point::new([0, 2]),
      Point::new([2, 2]),
      Point::new([0, 0]),
      Point::new([2, 2]),
      Point::new([2, 0]),
    ]);
    assert_eq!(triangulation.len(), 2);
    assert!(!triangulation.is_empty());
    assert_eq!(triangulation.triangles().count(), 2);
    assert!(triangulation.triangles().all(|t| t.orientation().is_cw()));
    assert_eq!(triangulation.area_2x::<i64>(), 8);
    assert_eq!(Vec::from(triangulation).len(), 6);
  }

  #[test]
  fn empty() {
    let triangulation = Triangulation::<f64>::default();
    assert_eq!(triangulation.len(), 0);
    assert!(triangulation.is_empty());
    assert_eq!(triangulation.area_2x::<f64>(), 0.0);
  }
}
