use super::{Polygon, check_dimensions};
use crate::error::Result;
use std::fmt::Debug;

/// An ordered collection of polygons.
#[derive(Clone, PartialEq)]
pub struct MultiPolygon {
	polygons: Vec<Polygon>,
}

impl MultiPolygon {
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

impl Debug for MultiPolygon {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.polygons).finish()
	}
}
