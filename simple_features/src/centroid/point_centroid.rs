use crate::geometry::{Geometry, Point};

/// Centroid accumulator for dimension-0 geometries: the arithmetic mean of
/// all member points.
#[derive(Debug, Default)]
pub struct PointCentroid {
	sum_x: f64,
	sum_y: f64,
	count: usize,
}

impl PointCentroid {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_point(&mut self, point: &Point) {
		self.sum_x += point.x();
		self.sum_y += point.y();
		self.count += 1;
	}

	/// Adds all dimension-0 members of the geometry; higher-dimensional
	/// members are ignored.
	pub fn add(&mut self, geometry: &Geometry) {
		match geometry {
			Geometry::Point(point) => self.add_point(point),
			Geometry::MultiPoint(multi) => {
				for point in multi.points() {
					self.add_point(point);
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
		if self.count == 0 {
			return None;
		}
		let count = self.count as f64;
		Some(Point::new(self.sum_x / count, self.sum_y / count))
	}
}
