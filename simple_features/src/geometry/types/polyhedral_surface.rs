use super::{Polygon, check_dimensions};
use crate::error::Result;
use std::fmt::Debug;

/// A contiguous collection of polygon patches sharing boundary edges.
/// Patch adjacency is not verified; the value is the patch sequence.
#[derive(Clone, PartialEq)]
pub struct PolyhedralSurface {
	polygons: Vec<Polygon>,
}

impl PolyhedralSurface {
	pub fn new(polygons: Vec<Polygon>) -> Result<Self> {
		check_dimensions(polygons.iter().map(Polygon::dimensions))?;
		Ok(Self { polygons })
	}

	pub(crate) fn new_unchecked(polygons: Vec<Polygon>) -> Self {
		Self { polygons }
	}

	pub fn polygons(&self) -> &[Polygon] {
		&self.polygons
	}

	pub fn into_polygons(self) -> Vec<Polygon> {
		self.polygons
	}

	pub fn num_polygons(&self) -> usize {
		self.polygons.len()
	}

	pub fn is_empty(&self) -> bool {
		self.polygons.is_empty()
	}

	pub fn has_z(&self) -> bool {
		self.polygons.first().is_some_and(Polygon::has_z)
	}

	pub fn has_m(&self) -> bool {
		self.polygons.first().is_some_and(Polygon::has_m)
	}
}

impl Debug for PolyhedralSurface {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.polygons).finish()
	}
}
