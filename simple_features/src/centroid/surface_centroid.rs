use crate::geometry::{Geometry, Point, Polygon, Triangle};

/// Centroid accumulator for dimension-2 geometries: ring centroids weighted
/// by signed area, holes subtracting.
///
/// Each ring's shoelace contribution is sign-normalized, so the result is
/// independent of ring winding order.
#[derive(Debug, Default)]
pub struct SurfaceCentroid {
	sum_x: f64,
	sum_y: f64,
	total_area: f64,
}

impl SurfaceCentroid {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one closed ring. `hole` rings subtract from the accumulated
	/// area instead of adding to it.
	pub fn add_ring(&mut self, points: &[Point], hole: bool) {
		let mut area = 0.0;
		let mut sum_x = 0.0;
		let mut sum_y = 0.0;
		for pair in points.windows(2) {
			let cross = pair[0].x() * pair[1].y() - pair[1].x() * pair[0].y();
			area += cross;
			sum_x += (pair[0].x() + pair[1].x()) * cross;
			sum_y += (pair[0].y() + pair[1].y()) * cross;
		}
		area /= 2.0;
		if area == 0.0 {
			return;
		}
		let orientation = if area < 0.0 { -1.0 } else { 1.0 };
		let weight = if hole { -1.0 } else { 1.0 };
		self.total_area += weight * area.abs();
		self.sum_x += weight * orientation * sum_x / 6.0;
		self.sum_y += weight * orientation * sum_y / 6.0;
	}

	pub fn add_polygon(&mut self, polygon: &Polygon) {
		self.add_ring(polygon.exterior_ring().points(), false);
		for ring in polygon.interior_rings() {
			self.add_ring(ring.points(), true);
		}
	}

	fn add_triangle(&mut self, triangle: &Triangle) {
		self.add_ring(triangle.exterior_ring().points(), false);
		for ring in &triangle.rings()[1..] {
			self.add_ring(ring.points(), true);
		}
	}

	/// Adds all dimension-2 members of the geometry; members of other
	/// dimensions are ignored. Curve polygon rings are approximated by
	/// their control points.
	pub fn add(&mut self, geometry: &Geometry) {
		match geometry {
			Geometry::Polygon(polygon) => self.add_polygon(polygon),
			Geometry::Triangle(triangle) => self.add_triangle(triangle),
			Geometry::CurvePolygon(polygon) => {
				let mut rings = polygon.rings().iter();
				if let Some(exterior) = rings.next() {
					self.add_ring(&exterior.collect_points(), false);
				}
				for ring in rings {
					self.add_ring(&ring.collect_points(), true);
				}
			}
			Geometry::PolyhedralSurface(surface) => {
				for polygon in surface.polygons() {
					self.add_polygon(polygon);
				}
			}
			Geometry::Tin(tin) => {
				for polygon in tin.polygons() {
					self.add_polygon(polygon);
				}
			}
			Geometry::MultiPolygon(multi) => {
				for polygon in multi.polygons() {
					self.add_polygon(polygon);
				}
			}
			Geometry::GeometryCollection(collection) => {
				for member in collection.geometries() {
					self.add(member);
				}
			}
			_ => {}
		}
	}

	pub fn centroid(&self) -> Option<Point> {
		if self.total_area <= 0.0 {
			return None;
		}
		Some(Point::new(self.sum_x / self.total_area, self.sum_y / self.total_area))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn square(x: f64, y: f64, size: f64, clockwise: bool) -> Vec<Point> {
		let mut points = vec![
			Point::new(x, y),
			Point::new(x + size, y),
			Point::new(x + size, y + size),
			Point::new(x, y + size),
			Point::new(x, y),
		];
		if clockwise {
			points.reverse();
		}
		points
	}

	#[test]
	fn test_winding_independent() {
		let mut ccw = SurfaceCentroid::new();
		ccw.add_ring(&square(0.0, 0.0, 2.0, false), false);
		let mut cw = SurfaceCentroid::new();
		cw.add_ring(&square(0.0, 0.0, 2.0, true), false);

		let a = ccw.centroid().unwrap();
		let b = cw.centroid().unwrap();
		assert_relative_eq!(a.x(), 1.0);
		assert_relative_eq!(a.y(), 1.0);
		assert_eq!(a, b);
	}

	#[test]
	fn test_two_squares() {
		// unit squares centered at (0.5, 0.5) and (4.5, 0.5)
		let mut calculator = SurfaceCentroid::new();
		calculator.add_ring(&square(0.0, 0.0, 1.0, false), false);
		calculator.add_ring(&square(4.0, 0.0, 1.0, false), false);
		let centroid = calculator.centroid().unwrap();
		assert_relative_eq!(centroid.x(), 2.5);
		assert_relative_eq!(centroid.y(), 0.5);
	}

	#[test]
	fn test_zero_area_is_none() {
		let mut calculator = SurfaceCentroid::new();
		calculator.add_ring(
			&[
				Point::new(0.0, 0.0),
				Point::new(1.0, 1.0),
				Point::new(0.0, 0.0),
			],
			false,
		);
		assert_eq!(calculator.centroid(), None);
	}
}
