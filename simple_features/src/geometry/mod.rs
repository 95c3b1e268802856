mod geometry_type;
pub use geometry_type::*;

pub mod types;
pub use types::*;

use crate::envelope::GeometryEnvelope;
use crate::error::WkbError;
use crate::wkb::{self, ByteOrder};
use std::fmt::Debug;

/// A geometry value of any concrete simple features type.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(Point),
	LineString(LineString),
	Polygon(Polygon),
	MultiPoint(MultiPoint),
	MultiLineString(MultiLineString),
	MultiPolygon(MultiPolygon),
	GeometryCollection(GeometryCollection),
	CircularString(CircularString),
	CompoundCurve(CompoundCurve),
	CurvePolygon(CurvePolygon),
	PolyhedralSurface(PolyhedralSurface),
	Tin(Tin),
	Triangle(Triangle),
}

impl Geometry {
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
			Geometry::CircularString(_) => GeometryType::CircularString,
			Geometry::CompoundCurve(_) => GeometryType::CompoundCurve,
			Geometry::CurvePolygon(_) => GeometryType::CurvePolygon,
			Geometry::PolyhedralSurface(_) => GeometryType::PolyhedralSurface,
			Geometry::Tin(_) => GeometryType::Tin,
			Geometry::Triangle(_) => GeometryType::Triangle,
		}
	}

	pub fn has_z(&self) -> bool {
		match self {
			Geometry::Point(g) => g.has_z(),
			Geometry::LineString(g) => g.has_z(),
			Geometry::Polygon(g) => g.has_z(),
			Geometry::MultiPoint(g) => g.has_z(),
			Geometry::MultiLineString(g) => g.has_z(),
			Geometry::MultiPolygon(g) => g.has_z(),
			Geometry::GeometryCollection(g) => g.has_z(),
			Geometry::CircularString(g) => g.has_z(),
			Geometry::CompoundCurve(g) => g.has_z(),
			Geometry::CurvePolygon(g) => g.has_z(),
			Geometry::PolyhedralSurface(g) => g.has_z(),
			Geometry::Tin(g) => g.has_z(),
			Geometry::Triangle(g) => g.has_z(),
		}
	}

	pub fn has_m(&self) -> bool {
		match self {
			Geometry::Point(g) => g.has_m(),
			Geometry::LineString(g) => g.has_m(),
			Geometry::Polygon(g) => g.has_m(),
			Geometry::MultiPoint(g) => g.has_m(),
			Geometry::MultiLineString(g) => g.has_m(),
			Geometry::MultiPolygon(g) => g.has_m(),
			Geometry::GeometryCollection(g) => g.has_m(),
			Geometry::CircularString(g) => g.has_m(),
			Geometry::CompoundCurve(g) => g.has_m(),
			Geometry::CurvePolygon(g) => g.has_m(),
			Geometry::PolyhedralSurface(g) => g.has_m(),
			Geometry::Tin(g) => g.has_m(),
			Geometry::Triangle(g) => g.has_m(),
		}
	}

	/// Whether the geometry contains no coordinates. Only container types
	/// can be empty; the structural invariants keep the others populated.
	pub fn is_empty(&self) -> bool {
		match self {
			Geometry::MultiPoint(g) => g.is_empty(),
			Geometry::MultiLineString(g) => g.is_empty(),
			Geometry::MultiPolygon(g) => g.is_empty(),
			Geometry::GeometryCollection(g) => g.is_empty(),
			Geometry::CompoundCurve(g) => g.is_empty(),
			Geometry::PolyhedralSurface(g) => g.is_empty(),
			Geometry::Tin(g) => g.is_empty(),
			_ => false,
		}
	}

	/// The topological dimension: 0 for points, 1 for curves, 2 for
	/// surfaces. A collection reports the largest dimension among its
	/// members.
	pub fn dimension(&self) -> u8 {
		match self {
			Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
			Geometry::LineString(_)
			| Geometry::CircularString(_)
			| Geometry::CompoundCurve(_)
			| Geometry::MultiLineString(_) => 1,
			Geometry::Polygon(_)
			| Geometry::Triangle(_)
			| Geometry::CurvePolygon(_)
			| Geometry::PolyhedralSurface(_)
			| Geometry::Tin(_)
			| Geometry::MultiPolygon(_) => 2,
			Geometry::GeometryCollection(g) => {
				g.geometries().iter().map(Geometry::dimension).max().unwrap_or(0)
			}
		}
	}

	/// The axis-aligned bounding box over all contained coordinates; the
	/// degenerate empty envelope for zero-coordinate geometries.
	pub fn envelope(&self) -> GeometryEnvelope {
		crate::envelope::build_envelope(self)
	}

	/// The 2D centroid, or `None` for zero-coordinate geometries.
	pub fn centroid(&self) -> Option<Point> {
		crate::centroid::centroid(self)
	}

	/// Encodes the geometry as well-known binary.
	pub fn to_wkb(&self, order: ByteOrder) -> Result<Vec<u8>, WkbError> {
		wkb::write_geometry(self, order)
	}

	/// Decodes a geometry from well-known binary.
	pub fn from_wkb(bytes: &[u8]) -> Result<Self, WkbError> {
		wkb::read_geometry(bytes)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let (type_name, inner): (&str, &dyn Debug) = match self {
			Geometry::Point(g) => ("Point", g),
			Geometry::LineString(g) => ("LineString", g),
			Geometry::Polygon(g) => ("Polygon", g),
			Geometry::MultiPoint(g) => ("MultiPoint", g),
			Geometry::MultiLineString(g) => ("MultiLineString", g),
			Geometry::MultiPolygon(g) => ("MultiPolygon", g),
			Geometry::GeometryCollection(g) => ("GeometryCollection", g),
			Geometry::CircularString(g) => ("CircularString", g),
			Geometry::CompoundCurve(g) => ("CompoundCurve", g),
			Geometry::CurvePolygon(g) => ("CurvePolygon", g),
			Geometry::PolyhedralSurface(g) => ("PolyhedralSurface", g),
			Geometry::Tin(g) => ("Tin", g),
			Geometry::Triangle(g) => ("Triangle", g),
		};
		f.debug_tuple(type_name).field(inner).finish()
	}
}

macro_rules! impl_from_geometry {
	($($variant:ident),* $(,)?) => {$(
		impl From<$variant> for Geometry {
			fn from(value: $variant) -> Self {
				Geometry::$variant(value)
			}
		}
	)*};
}

impl_from_geometry!(
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
	CircularString,
	CompoundCurve,
	CurvePolygon,
	PolyhedralSurface,
	Tin,
	Triangle,
);
