//! Triangulation of simple polygons by ear clipping.
//!
//! ```rust
//! # use earclip::data::Point;
//! # use earclip::algorithms::triangulate;
//! let square = vec![
//!   Point::new([0.0, 0.0]),
//!   Point::new([10.0, 0.0]),
//!   Point::new([10.0, 10.0]),
//!   Point::new([0.0, 10.0]),
//! ];
//! let triangulation = triangulate(&square).unwrap();
//! assert_eq!(triangulation.len(), 2);
//! assert_eq!(triangulation.area_2x::<f64>(), 200.0);
//! ```
#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
use ordered_float::NotNan;
use std::cmp::Ordering;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::{Orientation, Predicate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// A polygon needs at least three vertices.
  InvalidPolygon { vertices: usize },
  /// The vertex at `index` has a NaN or infinite coordinate.
  NonFiniteCoordinate { index: usize },
  /// No ear could be cut, or the pass limit ran out, with `remaining` vertices
  /// left. Only happens for self-intersecting or otherwise malformed input.
  NonTerminating { iterations: usize, remaining: usize },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InvalidPolygon { vertices } => write!(
        f,
        "Invalid polygon: need at least 3 vertices, got {}",
        vertices
      ),
      Error::NonFiniteCoordinate { index } => {
        write!(f, "Vertex {} has a non-finite coordinate", index)
      }
      Error::NonTerminating {
        iterations,
        remaining,
      } => write!(
        f,
        "Ear clipping made no progress after {} passes ({} vertices left)",
        iterations, remaining
      ),
    }
  }
}

impl std::error::Error for Error {}

pub trait PolygonScalar: std::fmt::Debug + Clone + PartialOrd {
  /// Orientation of `p`, `q`, `r`. `Greater` means counter-clockwise.
  ///
  /// Integers are always exact. Floats are exact as long as the products of
  /// coordinate differences stay in the normal `f64` range: differences
  /// below roughly `1e-154` underflow and report `Equal`.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;

  /// Same contract as [`cmp_slope`](PolygonScalar::cmp_slope) but evaluated
  /// in the scalar's own arithmetic. Nearly colinear float triples may be
  /// misjudged.
  fn cmp_slope_fast(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
    Self::cmp_slope(p, q, r)
  }

  fn is_finite(&self) -> bool {
    true
  }

  /// Lossy conversion used for areas and point-in-polygon tests.
  fn to_f64(&self) -> f64;
}

macro_rules! fixed_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        // Differences fit in 33 bits and products in 67, so i128 never overflows.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let (px, py) = (i128::from(p[0]), i128::from(p[1]));
          let (qx, qy) = (i128::from(q[0]), i128::from(q[1]));
          let (rx, ry) = (i128::from(r[0]), i128::from(r[1]));
          let slope1 = (qx - px) * (ry - py);
          let slope2 = (qy - py) * (rx - px);
          slope1.cmp(&slope2)
        }

        fn to_f64(&self) -> f64 {
          f64::from(*self)
        }
      }
    )*
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        // This function uses the arbitrary precision machinery of `geometry_predicates` to
        // quickly compute the orientation of three 2D points.
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let orient = geometry_predicates::predicates::orient2d(
            [p[0].into(), p[1].into()],
            [q[0].into(), q[1].into()],
            [r[0].into(), r[1].into()],
          );
          sign_to_ordering(orient)
        }

        fn cmp_slope_fast(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          let area = p[0] * (r[1] - q[1]) + q[0] * (p[1] - r[1]) + r[0] * (q[1] - p[1]);
          // The spanned area is negative for counter-clockwise turns.
          sign_to_ordering(-area)
        }

        fn is_finite(&self) -> bool {
          <$ty>::is_finite(*self)
        }

        fn to_f64(&self) -> f64 {
          f64::from(*self)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for NotNan<$ty> {
        fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          <$ty>::cmp_slope(&unwrap_nn(p), &unwrap_nn(q), &unwrap_nn(r))
        }

        fn cmp_slope_fast(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          <$ty>::cmp_slope_fast(&unwrap_nn(p), &unwrap_nn(q), &unwrap_nn(r))
        }

        fn is_finite(&self) -> bool {
          self.into_inner().is_finite()
        }

        fn to_f64(&self) -> f64 {
          f64::from(self.into_inner())
        }
      }
    )*
  };
}

fixed_precision!(i8, i16, i32);
floating_precision!(f32, f64);
wrapped_floating_precision!(f32, f64);

fn sign_to_ordering<F: num_traits::Float>(value: F) -> Ordering {
  if value > F::zero() {
    Ordering::Greater
  } else if value < F::zero() {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

fn unwrap_nn<F: num_traits::Float>(pt: &[NotNan<F>; 2]) -> [F; 2] {
  [pt[0].into_inner(), pt[1].into_inner()]
}

#[cfg(test)]
pub mod testing;
