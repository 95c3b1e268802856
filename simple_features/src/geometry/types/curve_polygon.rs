use super::{Curve, check_dimensions};
use crate::error::{GeometryError, Result};
use std::fmt::Debug;

/// A planar surface whose rings may be any curve type, not just line
/// strings.
#[derive(Clone, PartialEq)]
pub struct CurvePolygon {
	rings: Vec<Curve>,
}

impl CurvePolygon {
	/// Builds a curve polygon from a ring sequence; the first ring is the
	/// exterior. Every ring must be closed.
	pub fn new(rings: Vec<Curve>) -> Result<Self> {
		if rings.is_empty() {
			return Err(GeometryError::MissingExteriorRing);
		}
		for ring in &rings {
			if !ring.is_closed() {
				return Err(GeometryError::UnclosedRing);
			}
		}
		check_dimensions(rings.iter().map(Curve::dimensions))?;
		Ok(Self { rings })
	}

	pub(crate) fn new_unchecked(rings: Vec<Curve>) -> Self {
		Self { rings }
	}

	pub fn rings(&self) -> &[Curve] {
		&self.rings
	}

	pub fn into_rings(self) -> Vec<Curve> {
		self.rings
	}

	pub fn exterior_ring(&self) -> &Curve {
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

	pub(crate) fn dimensions(&self) -> (bool, bool) {
		self.rings[0].dimensions()
	}
}

impl Debug for CurvePolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.rings).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::types::{CircularString, LineString, Point};

	#[test]
	fn test_new_with_arc_ring() {
		let arc = CircularString::new(vec![
			Point::new(0.0, 0.0),
			Point::new(1.0, 1.0),
			Point::new(2.0, 0.0),
			Point::new(1.0, -1.0),
			Point::new(0.0, 0.0),
		])
		.unwrap();
		let polygon = CurvePolygon::new(vec![Curve::from(arc)]).unwrap();
		assert_eq!(polygon.num_rings(), 1);
	}

	#[test]
	fn test_unclosed_ring_fails() {
		let open = LineString::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap();
		assert_eq!(
			CurvePolygon::new(vec![Curve::from(open)]),
			Err(GeometryError::UnclosedRing)
		);
	}

	#[test]
	fn test_no_rings_fails() {
		assert_eq!(
			CurvePolygon::new(Vec::new()),
			Err(GeometryError::MissingExteriorRing)
		);
	}
}
