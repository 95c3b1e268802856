use super::{LineString, Polygon};
use crate::error::Result;
use std::fmt::Debug;

/// A polygon with a single triangular ring: three distinct points plus the
/// closing point.
#[derive(Clone, PartialEq)]
pub struct Triangle {
	rings: Vec<LineString>,
}

impl Triangle {
	/// Validates like [`Polygon::new`]; the first ring is the patch boundary.
	pub fn new(rings: Vec<LineString>) -> Result<Self> {
		let polygon = Polygon::new(rings)?;
		Ok(Self {
			rings: polygon.into_rings(),
		})
	}

	pub(crate) fn new_unchecked(rings: Vec<LineString>) -> Self {
		Self { rings }
	}

	pub fn rings(&self) -> &[LineString] {
		&self.rings
	}

	pub fn into_rings(self) -> Vec<LineString> {
		self.rings
	}

	pub fn exterior_ring(&self) -> &LineString {
		&self.rings[0]
	}

	pub fn num_rings(&self) -> usize {
		self.rings.len()
	}

	pub fn has_z(&self) -> bool {
		self.rings[0].has_z()
	}

	pub fn has_m(&self) -> bool {
		self.rings[0].has_m()
	}

	/// The triangle's boundary as a plain polygon.
	pub fn to_polygon(&self) -> Polygon {
		Polygon::new_unchecked(self.rings.clone())
	}
}

impl Debug for Triangle {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.rings).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::GeometryError;
	use crate::geometry::types::Point;

	#[test]
	fn test_new() {
		let ring = LineString::new(vec![
			Point::new(0.0, 0.0),
			Point::new(1.0, 0.0),
			Point::new(0.5, 1.0),
			Point::new(0.0, 0.0),
		])
		.unwrap();
		let triangle = Triangle::new(vec![ring]).unwrap();
		assert_eq!(triangle.num_rings(), 1);
		assert!(triangle.exterior_ring().is_closed());
	}

	#[test]
	fn test_unclosed_fails() {
		let ring = LineString::new(vec![
			Point::new(0.0, 0.0),
			Point::new(1.0, 0.0),
			Point::new(0.5, 1.0),
		])
		.unwrap();
		assert_eq!(Triangle::new(vec![ring]), Err(GeometryError::UnclosedRing));
	}
}
