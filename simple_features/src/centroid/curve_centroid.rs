use crate::geometry::{Geometry, Point};
use crate::utils::distance;

/// Centroid accumulator for dimension-1 geometries: segment midpoints
/// weighted by segment length.
///
/// A degenerate curve whose total length is zero falls back to the mean of
/// its points.
#[derive(Debug, Default)]
pub struct CurveCentroid {
	sum_x: f64,
	sum_y: f64,
	total_length: f64,
	point_sum_x: f64,
	point_sum_y: f64,
	point_count: usize,
}

impl CurveCentroid {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_points(&mut self, points: &[Point]) {
		for pair in points.windows(2) {
			let length = distance(&pair[0], &pair[1]);
			self.sum_x += length * (pair[0].x() + pair[1].x()) / 2.0;
			self.sum_y += length * (pair[0].y() + pair[1].y()) / 2.0;
			self.total_length += length;
		}
		for point in points {
			self.point_sum_x += point.x();
			self.point_sum_y += point.y();
			self.point_count += 1;
		}
	}

	/// Adds all dimension-1 members of the geometry; members of other
	/// dimensions are ignored.
	pub fn add(&mut self, geometry: &Geometry) {
		match geometry {
			Geometry::LineString(line) => self.add_points(line.points()),
			Geometry::CircularString(arc) => self.add_points(arc.points()),
			Geometry::CompoundCurve(curve) => {
				for line in curve.line_strings() {
					self.add_points(line.points());
				}
			}
			Geometry::MultiLineString(multi) => {
				for line in multi.line_strings() {
					self.add_points(line.points());
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
		if self.total_length > 0.0 {
			return Some(Point::new(
				self.sum_x / self.total_length,
				self.sum_y / self.total_length,
			));
		}
		if self.point_count > 0 {
			let count = self.point_count as f64;
			return Some(Point::new(self.point_sum_x / count, self.point_sum_y / count));
		}
		None
	}
}
