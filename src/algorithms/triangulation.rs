use crate::data::{Point, Polygon, Triangulation};
use crate::{Error, PolygonScalar};

pub mod earclip;

/// Anything that can be cut into triangles.
pub trait Triangulate {
  type Scalar;
  fn triangulate(self) -> Result<Triangulation<Self::Scalar>, Error>;
}

impl<'a, T: PolygonScalar> Triangulate for &'a Polygon<T> {
  type Scalar = T;
  fn triangulate(self) -> Result<Triangulation<T>, Error> {
    earclip::triangulate(self.points())
  }
}

impl<'a, T: PolygonScalar> Triangulate for &'a [Point<T, 2>] {
  type Scalar = T;
  fn triangulate(self) -> Result<Triangulation<T>, Error> {
    earclip::triangulate(self)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn polygon_and_slice_agree() -> Result<(), Error> {
    let pts = vec![
      Point::new([0, 0]),
      Point::new([4, 0]),
      Point::new([4, 4]),
      Point::new([0, 4]),
      Point::new([2, 2]),
    ];
    let poly = Polygon::new(pts.clone())?;
    assert_eq!(poly.triangulate()?, pts.as_slice().triangulate()?);
    Ok(())
  }
}
