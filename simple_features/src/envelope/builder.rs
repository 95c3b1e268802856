//! Builds envelopes from geometries.

use super::GeometryEnvelope;
use crate::geometry::{Curve, Geometry, LineString, Point, Polygon};

/// Builds the envelope of a geometry with a single O(n) coordinate scan.
pub fn build_envelope(geometry: &Geometry) -> GeometryEnvelope {
	let mut envelope = GeometryEnvelope::empty();
	expand_envelope(&mut envelope, geometry);
	envelope
}

/// Expands an existing envelope with all coordinates of a further geometry.
pub fn expand_envelope(envelope: &mut GeometryEnvelope, geometry: &Geometry) {
	match geometry {
		Geometry::Point(point) => envelope.expand_point(point),
		Geometry::LineString(line) => expand_points(envelope, line.points()),
		Geometry::CircularString(arc) => expand_points(envelope, arc.points()),
		Geometry::CompoundCurve(curve) => {
			for line in curve.line_strings() {
				expand_points(envelope, line.points());
			}
		}
		Geometry::Polygon(polygon) => expand_polygon(envelope, polygon),
		Geometry::Triangle(triangle) => expand_rings(envelope, triangle.rings()),
		Geometry::CurvePolygon(polygon) => {
			for ring in polygon.rings() {
				expand_curve(envelope, ring);
			}
		}
		Geometry::PolyhedralSurface(surface) => {
			for polygon in surface.polygons() {
				expand_polygon(envelope, polygon);
			}
		}
		Geometry::Tin(tin) => {
			for polygon in tin.polygons() {
				expand_polygon(envelope, polygon);
			}
		}
		Geometry::MultiPoint(multi) => expand_points(envelope, multi.points()),
		Geometry::MultiLineString(multi) => {
			for line in multi.line_strings() {
				expand_points(envelope, line.points());
			}
		}
		Geometry::MultiPolygon(multi) => {
			for polygon in multi.polygons() {
				expand_polygon(envelope, polygon);
			}
		}
		Geometry::GeometryCollection(collection) => {
			for member in collection.geometries() {
				expand_envelope(envelope, member);
			}
		}
	}
}

fn expand_points(envelope: &mut GeometryEnvelope, points: &[Point]) {
	for point in points {
		envelope.expand_point(point);
	}
}

fn expand_rings(envelope: &mut GeometryEnvelope, rings: &[LineString]) {
	for ring in rings {
		expand_points(envelope, ring.points());
	}
}

fn expand_polygon(envelope: &mut GeometryEnvelope, polygon: &Polygon) {
	expand_rings(envelope, polygon.rings());
}

fn expand_curve(envelope: &mut GeometryEnvelope, curve: &Curve) {
	match curve {
		Curve::LineString(line) => expand_points(envelope, line.points()),
		Curve::CircularString(arc) => expand_points(envelope, arc.points()),
		Curve::CompoundCurve(compound) => {
			for line in compound.line_strings() {
				expand_points(envelope, line.points());
			}
		}
	}
}
