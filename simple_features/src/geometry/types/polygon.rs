use super::{LineString, check_dimensions, line_string::check_ring};
use crate::error::{GeometryError, Result};
use std::fmt::Debug;

/// A planar surface bounded by one exterior ring and zero or more interior
/// rings (holes). Every ring is a closed line string.
#[derive(Clone, PartialEq)]
pub struct Polygon {
	rings: Vec<LineString>,
}

impl Polygon {
	/// Builds a polygon from a ring sequence; the first ring is the exterior.
	///
	/// Fails with [`GeometryError::MissingExteriorRing`] on an empty
	/// sequence, [`GeometryError::UnclosedRing`] if any ring's first and
	/// last points differ, [`GeometryError::InsufficientRingPoints`] if a
	/// ring has fewer than four points, and
	/// [`GeometryError::DimensionMismatch`] on inconsistent z/m dimensions.
	pub fn new(rings: Vec<LineString>) -> Result<Self> {
		if rings.is_empty() {
			return Err(GeometryError::MissingExteriorRing);
		}
		for ring in &rings {
			check_ring(ring)?;
		}
		check_dimensions(rings.iter().map(LineString::dimensions))?;
		Ok(Self { rings })
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

	pub fn interior_rings(&self) -> &[LineString] {
		&self.rings[1..]
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

impl Debug for Polygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.rings).finish()
	}
}
