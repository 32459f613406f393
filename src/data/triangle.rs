use super::{Point, PointLocation};
use crate::{Orientation, PolygonScalar, Predicate};
use num_traits::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleView<'a, T>([&'a Point<T, 2>; 3]);

impl<'a, T> TriangleView<'a, T>
where
  T: PolygonScalar,
{
  pub fn new_unchecked(pts: [&'a Point<T, 2>; 3]) -> TriangleView<'a, T> {
    TriangleView(pts)
  }

  pub fn points(&self) -> [&'a Point<T, 2>; 3] {
    self.0
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = self.0;
    a.orientation(b, c)
  }

  pub fn is_degenerate(&self) -> bool {
    self.orientation().is_colinear()
  }

  // O(1)
  pub fn locate(&self, pt: &Point<T, 2>) -> PointLocation {
    self.locate_with(Predicate::Exact, pt)
  }

  /// Works for either winding. A point is inside-or-on when it is on the same
  /// side of all three edges, counting "on the edge" as either side.
  /// Degenerate triangles report every point on their supporting line as
  /// `OnBoundary`.
  pub fn locate_with(&self, predicate: Predicate, pt: &Point<T, 2>) -> PointLocation {
    let [a, b, c] = self.0;
    let edges = [
      a.orientation_with(predicate, b, pt),
      b.orientation_with(predicate, c, pt),
      c.orientation_with(predicate, a, pt),
    ];
    let cw = edges.iter().any(|o| o.is_cw());
    let ccw = edges.iter().any(|o| o.is_ccw());
    if cw && ccw {
      PointLocation::Outside
    } else if edges.iter().any(|o| o.is_colinear()) {
      PointLocation::OnBoundary
    } else {
      PointLocation::Inside
    }
  }

  pub fn contains_or_touches(&self, predicate: Predicate, pt: &Point<T, 2>) -> bool {
    self.locate_with(predicate, pt) != PointLocation::Outside
  }

  pub fn signed_area<F>(&self) -> F
  where
    T: Into<F>,
    F: NumOps<F, F> + FromPrimitive + Clone,
  {
    self.signed_area_2x::<F>() / F::from_usize(2).unwrap()
  }

  pub fn signed_area_2x<F>(&self) -> F
  where
    T: Into<F>,
    F: NumOps<F, F> + Clone,
  {
    let [a, b, c] = self.0;
    let ax: F = a.x_coord().clone().into();
    let ay: F = a.y_coord().clone().into();
    let bx: F = b.x_coord().clone().into();
    let by: F = b.y_coord().clone().into();
    let cx: F = c.x_coord().clone().into();
    let cy: F = c.y_coord().clone().into();
    ax.clone() * by.clone() - bx.clone() * ay.clone() + bx * cy.clone() - cx.clone() * by + cx * ay
      - ax * cy
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }
}
