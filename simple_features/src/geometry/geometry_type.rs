use std::fmt::{Display, Formatter};

/// The geometry type taxonomy of the simple features model, including the
/// abstract types (`Geometry`, `Curve`, `Surface`, `MultiCurve`,
/// `MultiSurface`) that only appear as hierarchy nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometryType {
	Geometry,
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
	MultiCurve,
	MultiSurface,
	Curve,
	Surface,
	PolyhedralSurface,
	Tin,
	Triangle,
}

impl GeometryType {
	/// The uppercase well-known name.
	pub fn name(&self) -> &'static str {
		match self {
			GeometryType::Geometry => "GEOMETRY",
			GeometryType::Point => "POINT",
			GeometryType::LineString => "LINESTRING",
			GeometryType::Polygon => "POLYGON",
			GeometryType::MultiPoint => "MULTIPOINT",
			GeometryType::MultiLineString => "MULTILINESTRING",
			GeometryType::MultiPolygon => "MULTIPOLYGON",
			GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
			GeometryType::CircularString => "CIRCULARSTRING",
			GeometryType::CompoundCurve => "COMPOUNDCURVE",
			GeometryType::CurvePolygon => "CURVEPOLYGON",
			GeometryType::MultiCurve => "MULTICURVE",
			GeometryType::MultiSurface => "MULTISURFACE",
			GeometryType::Curve => "CURVE",
			GeometryType::Surface => "SURFACE",
			GeometryType::PolyhedralSurface => "POLYHEDRALSURFACE",
			GeometryType::Tin => "TIN",
			GeometryType::Triangle => "TRIANGLE",
		}
	}

	/// Looks a type up by its well-known name, case-insensitively.
	pub fn from_name(name: &str) -> Option<Self> {
		let upper = name.trim().to_ascii_uppercase();
		Self::all().into_iter().find(|t| t.name() == upper)
	}

	/// The base well-known binary type code, before z/m offsets.
	pub fn wkb_base_code(&self) -> u32 {
		match self {
			GeometryType::Geometry => 0,
			GeometryType::Point => 1,
			GeometryType::LineString => 2,
			GeometryType::Polygon => 3,
			GeometryType::MultiPoint => 4,
			GeometryType::MultiLineString => 5,
			GeometryType::MultiPolygon => 6,
			GeometryType::GeometryCollection => 7,
			GeometryType::CircularString => 8,
			GeometryType::CompoundCurve => 9,
			GeometryType::CurvePolygon => 10,
			GeometryType::MultiCurve => 11,
			GeometryType::MultiSurface => 12,
			GeometryType::Curve => 13,
			GeometryType::Surface => 14,
			GeometryType::PolyhedralSurface => 15,
			GeometryType::Tin => 16,
			GeometryType::Triangle => 17,
		}
	}

	/// Looks a type up by its base well-known binary code.
	pub fn from_wkb_base_code(code: u32) -> Option<Self> {
		Self::all().into_iter().find(|t| t.wkb_base_code() == code)
	}

	/// The immediate parent type, or `None` for `Geometry`.
	pub fn parent_type(&self) -> Option<GeometryType> {
		use GeometryType::*;
		match self {
			Geometry => None,
			Point | Curve | Surface | GeometryCollection => Some(Geometry),
			LineString | CompoundCurve => Some(Curve),
			CircularString => Some(LineString),
			CurvePolygon | PolyhedralSurface => Some(Surface),
			Polygon => Some(CurvePolygon),
			Triangle => Some(Polygon),
			Tin => Some(PolyhedralSurface),
			MultiPoint | MultiCurve | MultiSurface => Some(GeometryCollection),
			MultiLineString => Some(MultiCurve),
			MultiPolygon => Some(MultiSurface),
		}
	}

	/// The parent hierarchy starting with the immediate parent. Empty for
	/// `Geometry`; otherwise the final entry is always `Geometry`.
	pub fn parent_hierarchy(&self) -> Vec<GeometryType> {
		let mut hierarchy = Vec::new();
		let mut current = *self;
		while let Some(parent) = current.parent_type() {
			hierarchy.push(parent);
			current = parent;
		}
		hierarchy
	}

	/// The immediate child types; empty if the type has no children.
	pub fn child_types(&self) -> Vec<GeometryType> {
		use GeometryType::*;
		match self {
			Geometry => vec![Point, Curve, Surface, GeometryCollection],
			Curve => vec![LineString, CompoundCurve],
			LineString => vec![CircularString],
			Surface => vec![CurvePolygon, PolyhedralSurface],
			CurvePolygon => vec![Polygon],
			Polygon => vec![Triangle],
			PolyhedralSurface => vec![Tin],
			GeometryCollection => vec![MultiPoint, MultiCurve, MultiSurface],
			MultiCurve => vec![MultiLineString],
			MultiSurface => vec![MultiPolygon],
			_ => Vec::new(),
		}
	}

	/// The full child hierarchy below this type.
	pub fn child_hierarchy(&self) -> Vec<TypeHierarchy> {
		self
			.child_types()
			.into_iter()
			.map(|child| TypeHierarchy {
				geometry_type: child,
				children: child.child_hierarchy(),
			})
			.collect()
	}

	fn all() -> [GeometryType; 18] {
		use GeometryType::*;
		[
			Geometry,
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
			MultiCurve,
			MultiSurface,
			Curve,
			Surface,
			PolyhedralSurface,
			Tin,
			Triangle,
		]
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// A node in the recursive child hierarchy of a geometry type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeHierarchy {
	pub geometry_type: GeometryType,
	pub children: Vec<TypeHierarchy>,
}
