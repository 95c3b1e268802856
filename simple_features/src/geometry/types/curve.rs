use super::{CircularString, CompoundCurve, LineString};
use crate::geometry::GeometryType;
use std::fmt::Debug;

/// A one-dimensional geometry: one of the concrete curve types. Used where
/// the model accepts any curve, such as the rings of a curve polygon.
#[derive(Clone, PartialEq)]
pub enum Curve {
	LineString(LineString),
	CircularString(CircularString),
	CompoundCurve(CompoundCurve),
}

impl Curve {
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Curve::LineString(_) => GeometryType::LineString,
			Curve::CircularString(_) => GeometryType::CircularString,
			Curve::CompoundCurve(_) => GeometryType::CompoundCurve,
		}
	}

	pub fn is_closed(&self) -> bool {
		match self {
			Curve::LineString(c) => c.is_closed(),
			Curve::CircularString(c) => c.is_closed(),
			Curve::CompoundCurve(c) => c.is_closed(),
		}
	}

	pub fn has_z(&self) -> bool {
		match self {
			Curve::LineString(c) => c.has_z(),
			Curve::CircularString(c) => c.has_z(),
			Curve::CompoundCurve(c) => c.has_z(),
		}
	}

	pub fn has_m(&self) -> bool {
		match self {
			Curve::LineString(c) => c.has_m(),
			Curve::CircularString(c) => c.has_m(),
			Curve::CompoundCurve(c) => c.has_m(),
		}
	}

	pub(crate) fn dimensions(&self) -> (bool, bool) {
		match self {
			Curve::LineString(c) => c.dimensions(),
			Curve::CircularString(c) => c.dimensions(),
			Curve::CompoundCurve(c) => c.dimensions(),
		}
	}

	/// All points of the curve, in order.
	pub(crate) fn collect_points(&self) -> Vec<super::Point> {
		match self {
			Curve::LineString(c) => c.points().to_vec(),
			Curve::CircularString(c) => c.points().to_vec(),
			Curve::CompoundCurve(c) => c
				.line_strings()
				.iter()
				.flat_map(|l| l.points().iter().copied())
				.collect(),
		}
	}
}

impl Debug for Curve {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Curve::LineString(c) => c.fmt(f),
			Curve::CircularString(c) => c.fmt(f),
			Curve::CompoundCurve(c) => c.fmt(f),
		}
	}
}

impl From<Curve> for crate::geometry::Geometry {
	fn from(value: Curve) -> Self {
		match value {
			Curve::LineString(c) => Self::LineString(c),
			Curve::CircularString(c) => Self::CircularString(c),
			Curve::CompoundCurve(c) => Self::CompoundCurve(c),
		}
	}
}

impl From<LineString> for Curve {
	fn from(value: LineString) -> Self {
		Curve::LineString(value)
	}
}

impl From<CircularString> for Curve {
	fn from(value: CircularString) -> Self {
		Curve::CircularString(value)
	}
}

impl From<CompoundCurve> for Curve {
	fn from(value: CompoundCurve) -> Self {
		Curve::CompoundCurve(value)
	}
}
