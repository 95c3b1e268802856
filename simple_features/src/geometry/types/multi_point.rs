use super::{Point, check_dimensions};
use crate::error::Result;
use std::fmt::Debug;

/// An ordered collection of points.
#[derive(Clone, PartialEq)]
pub struct MultiPoint {
	points: Vec<Point>,
}

impl MultiPoint {
	pub fn new(points: Vec<Point>) -> Result<Self> {
		check_dimensions(points.iter().map(Point::dimensions))?;
		Ok(Self { points })
	}

	pub(crate) fn new_unchecked(points: Vec<Point>) -> Self {
		Self { points }
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn into_points(self) -> Vec<Point> {
		self.points
	}

	pub fn num_points(&self) -> usize {
		self.points.len()
	}

	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	pub fn has_z(&self) -> bool {
		self.points.first().is_some_and(Point::has_z)
	}

	pub fn has_m(&self) -> bool {
		self.points.first().is_some_and(Point::has_m)
	}
}

impl Debug for MultiPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.points).finish()
	}
}
