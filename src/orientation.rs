use std::cmp::Ordering;

use crate::PolygonScalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

/// Which orientation test to run.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Predicate {
  /// Exact for integers. Floats go through `geometry_predicates`, which is
  /// exact while coordinate differences stay above roughly `1e-154`. Smaller
  /// differences underflow and every turn reads as colinear.
  Exact,
  /// The plain spanned-area formula in the scalar's own arithmetic.
  Fast,
}

impl Default for Predicate {
  fn default() -> Predicate {
    Predicate::Exact
  }
}

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// For fixed-precision types (i8,i16,i32), this function is guaranteed to
  /// work for any input and never cause any arithmetic overflows. Floating
  /// point inputs are evaluated exactly unless the spanned area underflows.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use earclip::Orientation;
  /// let p1 = [ 0, 0 ];
  /// let p2 = [ 0, 1 ]; // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &[ 0, 2 ]).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &[ -1, 2 ]).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &[ 1, 2 ]).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    from_ordering(T::cmp_slope(p1, p2, p3))
  }

  /// Like [`Orientation::new`] but without exact arithmetic.
  pub fn new_fast<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    from_ordering(T::cmp_slope_fast(p1, p2, p3))
  }

  pub fn with<T>(predicate: Predicate, p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: PolygonScalar,
  {
    match predicate {
      Predicate::Exact => Orientation::new(p1, p2, p3),
      Predicate::Fast => Orientation::new_fast(p1, p2, p3),
    }
  }

  /// Sign of `x1*(y3-y2) + x2*(y1-y3) + x3*(y2-y1)`. Positive for clockwise
  /// turns.
  ///
  /// ```rust
  /// # use earclip::Orientation;
  /// assert_eq!(Orientation::new(&[0, 0], &[0, 1], &[1, 1]).spanned_area_sign(), 1);
  /// assert_eq!(Orientation::new(&[0, 0], &[1, 0], &[1, 1]).spanned_area_sign(), -1);
  /// assert_eq!(Orientation::new(&[0, 0], &[1, 1], &[2, 2]).spanned_area_sign(), 0);
  /// ```
  pub fn spanned_area_sign(self) -> i8 {
    match self {
      ClockWise => 1,
      CoLinear => 0,
      CounterClockWise => -1,
    }
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      CounterClockWise => ClockWise,
      ClockWise => CounterClockWise,
      CoLinear => CoLinear,
    }
  }
}

fn from_ordering(ordering: Ordering) -> Orientation {
  match ordering {
    Ordering::Less => Orientation::ClockWise,
    Ordering::Equal => Orientation::CoLinear,
    Ordering::Greater => Orientation::CounterClockWise,
  }
}
