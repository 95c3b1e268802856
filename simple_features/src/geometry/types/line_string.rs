use super::{Point, check_dimensions};
use crate::error::{GeometryError, Result};
use std::fmt::Debug;

/// An ordered sequence of two or more points forming a curve of straight
/// segments. There is no closure requirement.
#[derive(Clone, PartialEq)]
pub struct LineString {
	points: Vec<Point>,
}

impl LineString {
	/// Builds a line string from an ordered point sequence.
	///
	/// Fails with [`GeometryError::InsufficientPoints`] if fewer than two
	/// points are supplied, and with [`GeometryError::DimensionMismatch`] if
	/// the points carry differing z/m dimensions.
	pub fn new(points: Vec<Point>) -> Result<Self> {
		if points.len() < 2 {
			return Err(GeometryError::InsufficientPoints(points.len()));
		}
		check_dimensions(points.iter().map(Point::dimensions))?;
		Ok(Self { points })
	}

	/// Builds without validation. The caller guarantees the invariants hold.
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

	pub fn start_point(&self) -> &Point {
		&self.points[0]
	}

	pub fn end_point(&self) -> &Point {
		&self.points[self.points.len() - 1]
	}

	/// Whether the first and last points are equal.
	pub fn is_closed(&self) -> bool {
		self.start_point() == self.end_point()
	}

	pub fn has_z(&self) -> bool {
		self.points[0].has_z()
	}

	pub fn has_m(&self) -> bool {
		self.points[0].has_m()
	}

	pub(crate) fn dimensions(&self) -> (bool, bool) {
		self.points[0].dimensions()
	}
}

impl Debug for LineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.points).finish()
	}
}

/// Validates one polygon ring: at least 4 points, first equal to last.
pub(crate) fn check_ring(ring: &LineString) -> Result<()> {
	if !ring.is_closed() {
		return Err(GeometryError::UnclosedRing);
	}
	if ring.num_points() < 4 {
		return Err(GeometryError::InsufficientRingPoints(ring.num_points()));
	}
	Ok(())
}
