//! Conversions between the 2D subset of this model and `geo-types`
//! primitives. Z and m values are dropped on the way out and absent on the
//! way in.

use crate::error::GeometryError;
use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

impl From<&Point> for geo_types::Coord<f64> {
	fn from(point: &Point) -> Self {
		geo_types::Coord {
			x: point.x(),
			y: point.y(),
		}
	}
}

impl From<&Point> for geo_types::Point<f64> {
	fn from(point: &Point) -> Self {
		geo_types::Point::new(point.x(), point.y())
	}
}

impl From<geo_types::Coord<f64>> for Point {
	fn from(coord: geo_types::Coord<f64>) -> Self {
		Point::new(coord.x, coord.y)
	}
}

impl From<geo_types::Point<f64>> for Point {
	fn from(point: geo_types::Point<f64>) -> Self {
		Point::new(point.x(), point.y())
	}
}

impl From<&LineString> for geo_types::LineString<f64> {
	fn from(line: &LineString) -> Self {
		geo_types::LineString::new(line.points().iter().map(Into::into).collect())
	}
}

impl TryFrom<geo_types::LineString<f64>> for LineString {
	type Error = GeometryError;

	fn try_from(line: geo_types::LineString<f64>) -> Result<Self, Self::Error> {
		LineString::new(line.0.into_iter().map(Point::from).collect())
	}
}

impl From<&Polygon> for geo_types::Polygon<f64> {
	fn from(polygon: &Polygon) -> Self {
		let exterior = geo_types::LineString::from(polygon.exterior_ring());
		let interiors = polygon
			.interior_rings()
			.iter()
			.map(geo_types::LineString::from)
			.collect();
		geo_types::Polygon::new(exterior, interiors)
	}
}

impl TryFrom<geo_types::Polygon<f64>> for Polygon {
	type Error = GeometryError;

	fn try_from(polygon: geo_types::Polygon<f64>) -> Result<Self, Self::Error> {
		let (exterior, interiors) = polygon.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(LineString::try_from(exterior)?);
		for interior in interiors {
			rings.push(LineString::try_from(interior)?);
		}
		Polygon::new(rings)
	}
}

impl From<&MultiPoint> for geo_types::MultiPoint<f64> {
	fn from(multi: &MultiPoint) -> Self {
		geo_types::MultiPoint(multi.points().iter().map(Into::into).collect())
	}
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
	fn from(multi: geo_types::MultiPoint<f64>) -> Self {
		MultiPoint::new_unchecked(multi.0.into_iter().map(Point::from).collect())
	}
}

impl From<&MultiLineString> for geo_types::MultiLineString<f64> {
	fn from(multi: &MultiLineString) -> Self {
		geo_types::MultiLineString(multi.line_strings().iter().map(Into::into).collect())
	}
}

impl TryFrom<geo_types::MultiLineString<f64>> for MultiLineString {
	type Error = GeometryError;

	fn try_from(multi: geo_types::MultiLineString<f64>) -> Result<Self, Self::Error> {
		let lines = multi
			.0
			.into_iter()
			.map(LineString::try_from)
			.collect::<Result<_, _>>()?;
		MultiLineString::new(lines)
	}
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
	fn from(multi: &MultiPolygon) -> Self {
		geo_types::MultiPolygon(multi.polygons().iter().map(Into::into).collect())
	}
}

impl TryFrom<geo_types::MultiPolygon<f64>> for MultiPolygon {
	type Error = GeometryError;

	fn try_from(multi: geo_types::MultiPolygon<f64>) -> Result<Self, Self::Error> {
		let polygons = multi
			.0
			.into_iter()
			.map(Polygon::try_from)
			.collect::<Result<_, _>>()?;
		MultiPolygon::new(polygons)
	}
}
