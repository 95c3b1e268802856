use crate::geometry::Geometry;
use std::fmt::Debug;

/// An ordered, possibly heterogeneous collection of geometries.
///
/// Members are independent geometries, so the collection does not require a
/// uniform z/m dimensionality across them; each member is internally
/// consistent on its own.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection {
	geometries: Vec<Geometry>,
}

impl GeometryCollection {
	pub fn new(geometries: Vec<Geometry>) -> Self {
		Self { geometries }
	}

	pub fn geometries(&self) -> &[Geometry] {
		&self.geometries
	}

	pub fn into_geometries(self) -> Vec<Geometry> {
		self.geometries
	}

	pub fn num_geometries(&self) -> usize {
		self.geometries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.geometries.is_empty()
	}

	/// Whether any member carries a z value.
	pub fn has_z(&self) -> bool {
		self.geometries.iter().any(Geometry::has_z)
	}

	/// Whether any member carries an m value.
	pub fn has_m(&self) -> bool {
		self.geometries.iter().any(Geometry::has_m)
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.geometries).finish()
	}
}
