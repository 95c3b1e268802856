use super::{LineString, check_dimensions};
use crate::error::Result;
use std::fmt::Debug;

/// A curve composed of an ordered sequence of line strings.
///
/// Continuity between consecutive members is not enforced; the value is the
/// ordered sequence itself.
#[derive(Clone, PartialEq)]
pub struct CompoundCurve {
	line_strings: Vec<LineString>,
}

impl CompoundCurve {
	/// Fails with [`crate::GeometryError::DimensionMismatch`] if the member
	/// line strings carry differing z/m dimensions.
	pub fn new(line_strings: Vec<LineString>) -> Result<Self> {
		check_dimensions(line_strings.iter().map(LineString::dimensions))?;
		Ok(Self { line_strings })
	}

	pub(crate) fn new_unchecked(line_strings: Vec<LineString>) -> Self {
		Self { line_strings }
	}

	pub fn line_strings(&self) -> &[LineString] {
		&self.line_strings
	}

	pub fn into_line_strings(self) -> Vec<LineString> {
		self.line_strings
	}

	pub fn num_line_strings(&self) -> usize {
		self.line_strings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.line_strings.is_empty()
	}

	/// Whether the start of the first member equals the end of the last.
	pub fn is_closed(&self) -> bool {
		match (self.line_strings.first(), self.line_strings.last()) {
			(Some(first), Some(last)) => first.start_point() == last.end_point(),
			_ => false,
		}
	}

	pub fn has_z(&self) -> bool {
		self.line_strings.first().is_some_and(LineString::has_z)
	}

	pub fn has_m(&self) -> bool {
		self.line_strings.first().is_some_and(LineString::has_m)
	}

	pub(crate) fn dimensions(&self) -> (bool, bool) {
		self
			.line_strings
			.first()
			.map_or((false, false), LineString::dimensions)
	}
}

impl Debug for CompoundCurve {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.line_strings).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::types::Point;

	fn line(coords: &[[f64; 2]]) -> LineString {
		LineString::new(coords.iter().map(Point::from).collect()).unwrap()
	}

	#[test]
	fn test_new() {
		let curve = CompoundCurve::new(vec![
			line(&[[0.0, 0.0], [1.0, 0.0]]),
			line(&[[1.0, 0.0], [1.0, 1.0]]),
		])
		.unwrap();
		assert_eq!(curve.num_line_strings(), 2);
		assert!(!curve.is_closed());
	}

	#[test]
	fn test_closed() {
		let curve = CompoundCurve::new(vec![
			line(&[[0.0, 0.0], [1.0, 0.0]]),
			line(&[[1.0, 0.0], [0.0, 0.0]]),
		])
		.unwrap();
		assert!(curve.is_closed());
	}

	#[test]
	fn test_empty() {
		let curve = CompoundCurve::new(Vec::new()).unwrap();
		assert!(curve.is_empty());
		assert!(!curve.has_z());
	}
}
