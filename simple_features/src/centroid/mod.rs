//! Dimension-specific centroid calculators.
//!
//! The centroid of a geometry is the balancing point of its 2D cutout. The
//! calculation is picked by the geometry's topological dimension: averaged
//! points for dimension 0, length-weighted segment midpoints for dimension
//! 1, signed-area-weighted rings for dimension 2. The resulting point never
//! carries z or m values.

mod point_centroid;
pub use point_centroid::*;

mod curve_centroid;
pub use curve_centroid::*;

mod surface_centroid;
pub use surface_centroid::*;

use crate::geometry::{Geometry, Point};

/// The 2D centroid of a geometry, or `None` when the geometry holds no
/// coordinates (or a surface geometry has collapsed to zero area).
pub fn centroid(geometry: &Geometry) -> Option<Point> {
	if geometry.is_empty() {
		return None;
	}
	match geometry.dimension() {
		0 => {
			let mut calculator = PointCentroid::new();
			calculator.add(geometry);
			calculator.centroid()
		}
		1 => {
			let mut calculator = CurveCentroid::new();
			calculator.add(geometry);
			calculator.centroid()
		}
		_ => {
			let mut calculator = SurfaceCentroid::new();
			calculator.add(geometry);
			calculator.centroid()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::{GeometryCollection, LineString, MultiPoint, Polygon};
	use approx::assert_relative_eq;

	fn line(coords: &[[f64; 2]]) -> LineString {
		LineString::new(coords.iter().map(Point::from).collect()).unwrap()
	}

	#[test]
	fn test_point_centroid_is_identity() {
		let centroid = centroid(&Geometry::Point(Point::new(3.0, -2.0))).unwrap();
		assert_eq!(centroid, Point::new(3.0, -2.0));
	}

	#[test]
	fn test_multi_point_centroid_is_mean() {
		let multi = MultiPoint::new(vec![Point::new(0.0, 0.0), Point::new(4.0, 2.0)]).unwrap();
		let centroid = centroid(&Geometry::MultiPoint(multi)).unwrap();
		assert_eq!(centroid, Point::new(2.0, 1.0));
	}

	#[test]
	fn test_line_centroid_is_midpoint() {
		let centroid = centroid(&Geometry::LineString(line(&[[0.0, 0.0], [4.0, 0.0]]))).unwrap();
		assert_eq!(centroid, Point::new(2.0, 0.0));
	}

	#[test]
	fn test_square_centroid_is_center() {
		let square = Polygon::new(vec![line(&[
			[0.0, 0.0],
			[4.0, 0.0],
			[4.0, 4.0],
			[0.0, 4.0],
			[0.0, 0.0],
		])])
		.unwrap();
		let centroid = centroid(&Geometry::Polygon(square)).unwrap();
		assert_relative_eq!(centroid.x(), 2.0);
		assert_relative_eq!(centroid.y(), 2.0);
	}

	#[test]
	fn test_hole_shifts_centroid_away() {
		// square with a hole in its right half
		let with_hole = Polygon::new(vec![
			line(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]]),
			line(&[[2.5, 1.5], [3.5, 1.5], [3.5, 2.5], [2.5, 2.5], [2.5, 1.5]]),
		])
		.unwrap();
		let centroid = centroid(&Geometry::Polygon(with_hole)).unwrap();
		assert!(centroid.x() < 2.0);
		assert_relative_eq!(centroid.y(), 2.0);
	}

	#[test]
	fn test_empty_collection_has_no_centroid() {
		let empty = Geometry::GeometryCollection(GeometryCollection::new(Vec::new()));
		assert_eq!(centroid(&empty), None);
	}

	#[test]
	fn test_collection_uses_highest_dimension() {
		// the point member must not influence the curve centroid
		let collection = GeometryCollection::new(vec![
			Geometry::Point(Point::new(100.0, 100.0)),
			Geometry::LineString(line(&[[0.0, 0.0], [2.0, 0.0]])),
		]);
		let centroid = centroid(&Geometry::GeometryCollection(collection)).unwrap();
		assert_eq!(centroid, Point::new(1.0, 0.0));
	}
}
