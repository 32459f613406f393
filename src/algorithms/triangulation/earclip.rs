//! Ear clipping with a full reclassification of the ring on every pass.
//!
//! Each pass normalizes the remaining ring to clockwise winding, tags every
//! vertex as convex or concave, and cuts the first ear it finds. Cutting an
//! ear may leave a neighbour colinear with its own neighbours; such vertices
//! are dropped on the spot so later passes never see a flat corner next to a
//! fresh cut.
//!
//! $O(n^3)$ in the worst case. The input slice is never modified.
use tracing::{debug, trace, warn};

use crate::data::{Point, Polygon, TriangleView, Triangulation};
use crate::{Error, PolygonScalar, Predicate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexType {
  /// Clockwise turn or colinear with both neighbours.
  Convex,
  /// Counter-clockwise turn in a clockwise ring.
  Concave,
}

/// Per-vertex tags for one pass, plus how many of them are concave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
  pub types: Vec<VertexType>,
  pub concave: usize,
}

impl Classification {
  pub fn is_convex_polygon(&self) -> bool {
    self.concave == 0
  }
}

/// Upper bound on the number of clipping passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationLimit {
  /// `n²` passes for `n` input vertices.
  Quadratic,
  Fixed(usize),
}

impl Default for IterationLimit {
  fn default() -> IterationLimit {
    IterationLimit::Quadratic
  }
}

impl IterationLimit {
  pub fn passes(self, vertices: usize) -> usize {
    match self {
      IterationLimit::Quadratic => vertices.saturating_mul(vertices),
      IterationLimit::Fixed(passes) => passes,
    }
  }
}

/// Ear-clipping triangulator. Holds configuration only, so one value can be
/// shared between threads and reused for any number of polygons.
///
/// ```rust
/// # use earclip::data::Point;
/// # use earclip::algorithms::triangulation::earclip::{EarClipper, IterationLimit};
/// # use earclip::Predicate;
/// let clipper = EarClipper::new()
///   .with_predicate(Predicate::Fast)
///   .with_iteration_limit(IterationLimit::Fixed(100));
/// let arrow = vec![
///   Point::new([0, 0]),
///   Point::new([4, 2]),
///   Point::new([0, 4]),
///   Point::new([1, 2]),
/// ];
/// let triangulation = clipper.triangulate(&arrow).unwrap();
/// assert_eq!(triangulation.len(), 2);
/// assert_eq!(triangulation.area_2x::<i64>(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EarClipper {
  predicate: Predicate,
  limit: IterationLimit,
}

impl EarClipper {
  pub fn new() -> EarClipper {
    EarClipper::default()
  }

  #[must_use]
  pub fn with_predicate(self, predicate: Predicate) -> EarClipper {
    EarClipper { predicate, ..self }
  }

  #[must_use]
  pub fn with_iteration_limit(self, limit: IterationLimit) -> EarClipper {
    EarClipper { limit, ..self }
  }

  pub fn predicate(&self) -> Predicate {
    self.predicate
  }

  pub fn iteration_limit(&self) -> IterationLimit {
    self.limit
  }

  /// Triangulate the simple polygon outlined by `vertices`, in either
  /// winding.
  ///
  /// Every emitted triangle winds clockwise and uses input vertices only.
  /// Colinear ears are dropped, so a polygon with `n` vertices yields at most
  /// `n - 2` triangles. A three-vertex input comes back as is unless it is
  /// degenerate, in which case the result is empty.
  pub fn triangulate<T>(&self, vertices: &[Point<T, 2>]) -> Result<Triangulation<T>, Error>
  where
    T: PolygonScalar,
  {
    let mut polygon = Polygon::new(vertices.to_vec())?;
    let n = polygon.len();
    debug!(vertices = n, predicate = ?self.predicate, "ear clipping");

    if n == 3 {
      if polygon.is_colinear_at(self.predicate, 1) {
        debug!("degenerate triangle");
        return Ok(Triangulation::new_unchecked(Vec::new()));
      }
      return Ok(Triangulation::new_unchecked(polygon.into_points()));
    }

    let limit = self.limit.passes(n);
    let mut triangles = Vec::with_capacity(3 * (n - 2));
    let mut passes = 0;
    while polygon.len() >= 3 {
      if passes >= limit {
        return Err(self.give_up(passes, polygon.len()));
      }
      passes += 1;
      let classification = self.classify(&mut polygon);
      let ear = (0..polygon.len()).find(|&idx| self.is_ear_tip(&polygon, idx, &classification));
      match ear {
        Some(idx) => self.cut_ear_tip(&mut polygon, idx, &mut triangles),
        None => return Err(self.give_up(passes, polygon.len())),
      }
    }

    debug!(triangles = triangles.len() / 3, passes, "ear clipping done");
    Ok(Triangulation::new_unchecked(triangles))
  }

  /// Reverse `polygon` unless it already winds clockwise, then tag each
  /// vertex by the turn it makes.
  pub fn classify<T>(&self, polygon: &mut Polygon<T>) -> Classification
  where
    T: PolygonScalar,
  {
    polygon.ensure_cw();
    let mut concave = 0;
    let types = (0..polygon.len())
      .map(|idx| {
        let prev = &polygon[polygon.prev_index(idx)];
        let next = &polygon[polygon.next_index(idx)];
        let turn = prev.orientation_with(self.predicate, &polygon[idx], next);
        if turn.spanned_area_sign() >= 0 {
          VertexType::Convex
        } else {
          concave += 1;
          VertexType::Concave
        }
      })
      .collect();
    Classification { types, concave }
  }

  /// Whether the vertex at `idx` can be cut off. `classification` must come
  /// from [`classify`](EarClipper::classify) on the same ring.
  ///
  /// Only concave vertices can block an ear. The ear's own corners never
  /// count, even when a concave corner sits on the triangle.
  pub fn is_ear_tip<T>(
    &self,
    polygon: &Polygon<T>,
    idx: usize,
    classification: &Classification,
  ) -> bool
  where
    T: PolygonScalar,
  {
    if classification.is_convex_polygon() {
      return true;
    }
    if classification.types[idx] == VertexType::Concave {
      return false;
    }
    let prev = polygon.prev_index(idx);
    let next = polygon.next_index(idx);
    let ear = TriangleView::new_unchecked([&polygon[prev], &polygon[idx], &polygon[next]]);
    !classification
      .types
      .iter()
      .enumerate()
      .filter(|&(other, kind)| {
        *kind == VertexType::Concave && other != prev && other != idx && other != next
      })
      .any(|(other, _)| ear.contains_or_touches(self.predicate, &polygon[other]))
  }

  fn cut_ear_tip<T>(&self, polygon: &mut Polygon<T>, idx: usize, triangles: &mut Vec<Point<T, 2>>)
  where
    T: PolygonScalar,
  {
    let prev = polygon.prev_index(idx);
    let next = polygon.next_index(idx);
    let emitted = !polygon.is_colinear_at(self.predicate, idx);
    if emitted {
      triangles.extend([prev, idx, next].iter().map(|&i| polygon[i].clone()));
    }
    trace!(index = idx, emitted, "cut ear");
    polygon.remove(idx);
    if polygon.len() >= 3 {
      self.remove_colinear_neighbours(polygon, idx);
    }
  }

  // After the cut, `cut` indexes the old successor (or wraps to 0). Drop it
  // if it went flat; otherwise check the predecessor.
  fn remove_colinear_neighbours<T>(&self, polygon: &mut Polygon<T>, cut: usize)
  where
    T: PolygonScalar,
  {
    let next = cut % polygon.len();
    let prev = polygon.prev_index(next);
    if polygon.is_colinear_at(self.predicate, next) {
      trace!(index = next, "dropped colinear vertex");
      polygon.remove(next);
      if polygon.len() > 3 {
        let prev = polygon.prev_index(next);
        if polygon.is_colinear_at(self.predicate, prev) {
          trace!(index = prev, "dropped colinear vertex");
          polygon.remove(prev);
        }
      }
    } else if polygon.is_colinear_at(self.predicate, prev) {
      trace!(index = prev, "dropped colinear vertex");
      polygon.remove(prev);
    }
  }

  fn give_up(&self, iterations: usize, remaining: usize) -> Error {
    warn!(iterations, remaining, "ear clipping made no progress");
    Error::NonTerminating {
      iterations,
      remaining,
    }
  }
}

/// $O(n^3)$ Triangulate with exact predicates and the default pass limit.
pub fn triangulate<T>(vertices: &[Point<T, 2>]) -> Result<Triangulation<T>, Error>
where
  T: PolygonScalar,
{
  EarClipper::default().triangulate(vertices)
}
