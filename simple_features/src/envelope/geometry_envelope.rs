use crate::geometry::{Geometry, LineString, Point, Polygon};
use std::fmt::Debug;

/// An axis-aligned bounding box over x and y, with optional z and m ranges
/// when the source coordinates carry those dimensions.
///
/// The degenerate empty envelope (`is_empty()` true) is the identity of
/// [`GeometryEnvelope::union`] and contains nothing; it is what a
/// zero-coordinate geometry yields.
#[derive(Clone, Copy, PartialEq)]
pub struct GeometryEnvelope {
	min_x: f64,
	min_y: f64,
	max_x: f64,
	max_y: f64,
	z: Option<(f64, f64)>,
	m: Option<(f64, f64)>,
}

impl GeometryEnvelope {
	/// The empty envelope: contains nothing, union identity.
	pub fn empty() -> Self {
		Self {
			min_x: f64::INFINITY,
			min_y: f64::INFINITY,
			max_x: f64::NEG_INFINITY,
			max_y: f64::NEG_INFINITY,
			z: None,
			m: None,
		}
	}

	pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
		Self {
			min_x,
			min_y,
			max_x,
			max_y,
			z: None,
			m: None,
		}
	}

	pub fn is_empty(&self) -> bool {
		self.min_x > self.max_x || self.min_y > self.max_y
	}

	pub fn min_x(&self) -> f64 {
		self.min_x
	}

	pub fn min_y(&self) -> f64 {
		self.min_y
	}

	pub fn max_x(&self) -> f64 {
		self.max_x
	}

	pub fn max_y(&self) -> f64 {
		self.max_y
	}

	pub fn z_range(&self) -> Option<(f64, f64)> {
		self.z
	}

	pub fn m_range(&self) -> Option<(f64, f64)> {
		self.m
	}

	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	pub fn has_m(&self) -> bool {
		self.m.is_some()
	}

	pub fn x_range(&self) -> f64 {
		self.max_x - self.min_x
	}

	pub fn y_range(&self) -> f64 {
		self.max_y - self.min_y
	}

	pub fn mid_x(&self) -> f64 {
		(self.min_x + self.max_x) / 2.0
	}

	pub fn mid_y(&self) -> f64 {
		(self.min_y + self.max_y) / 2.0
	}

	/// Whether the envelope spans a single coordinate.
	pub fn is_point(&self) -> bool {
		!self.is_empty() && self.min_x == self.max_x && self.min_y == self.max_y
	}

	/// Grows the envelope to include the point, tracking z/m ranges for
	/// points that carry them.
	pub fn expand_point(&mut self, point: &Point) {
		self.expand_xy(point.x(), point.y());
		if let Some(z) = point.z() {
			self.z = Some(match self.z {
				Some((min, max)) => (min.min(z), max.max(z)),
				None => (z, z),
			});
		}
		if let Some(m) = point.m() {
			self.m = Some(match self.m {
				Some((min, max)) => (min.min(m), max.max(m)),
				None => (m, m),
			});
		}
	}

	/// Grows the envelope to include the coordinate pair.
	pub fn expand_xy(&mut self, x: f64, y: f64) {
		self.min_x = self.min_x.min(x);
		self.min_y = self.min_y.min(y);
		self.max_x = self.max_x.max(x);
		self.max_y = self.max_y.max(y);
	}

	/// Grows the envelope to include another envelope.
	pub fn expand(&mut self, other: &GeometryEnvelope) {
		if other.is_empty() {
			return;
		}
		self.expand_xy(other.min_x, other.min_y);
		self.expand_xy(other.max_x, other.max_y);
		if let Some((other_min, other_max)) = other.z {
			self.z = Some(match self.z {
				Some((min, max)) => (min.min(other_min), max.max(other_max)),
				None => (other_min, other_max),
			});
		}
		if let Some((other_min, other_max)) = other.m {
			self.m = Some(match self.m {
				Some((min, max)) => (min.min(other_min), max.max(other_max)),
				None => (other_min, other_max),
			});
		}
	}

	pub fn union(&self, other: &GeometryEnvelope) -> GeometryEnvelope {
		let mut result = *self;
		result.expand(other);
		result
	}

	/// The overlapping region, or `None` if the envelopes do not intersect.
	pub fn intersection(&self, other: &GeometryEnvelope) -> Option<GeometryEnvelope> {
		if !self.intersects(other) {
			return None;
		}
		Some(GeometryEnvelope {
			min_x: self.min_x.max(other.min_x),
			min_y: self.min_y.max(other.min_y),
			max_x: self.max_x.min(other.max_x),
			max_y: self.max_y.min(other.max_y),
			z: None,
			m: None,
		})
	}

	pub fn intersects(&self, other: &GeometryEnvelope) -> bool {
		if self.is_empty() || other.is_empty() {
			return false;
		}
		self.min_x <= other.max_x
			&& self.max_x >= other.min_x
			&& self.min_y <= other.max_y
			&& self.max_y >= other.min_y
	}

	pub fn contains(&self, other: &GeometryEnvelope) -> bool {
		if self.is_empty() || other.is_empty() {
			return false;
		}
		self.min_x <= other.min_x
			&& self.max_x >= other.max_x
			&& self.min_y <= other.min_y
			&& self.max_y >= other.max_y
	}

	pub fn contains_point(&self, point: &Point) -> bool {
		self.contains_xy(point.x(), point.y())
	}

	pub fn contains_xy(&self, x: f64, y: f64) -> bool {
		!self.is_empty() && x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
	}

	/// The envelope as a geometry: `None` if empty, a point if degenerate,
	/// otherwise the boundary rectangle.
	pub fn to_geometry(&self) -> Option<Geometry> {
		if self.is_empty() {
			return None;
		}
		if self.is_point() {
			return Some(Geometry::Point(Point::new(self.min_x, self.min_y)));
		}
		let ring = LineString::new_unchecked(vec![
			Point::new(self.min_x, self.min_y),
			Point::new(self.max_x, self.min_y),
			Point::new(self.max_x, self.max_y),
			Point::new(self.min_x, self.max_y),
			Point::new(self.min_x, self.min_y),
		]);
		Some(Geometry::Polygon(Polygon::new_unchecked(vec![ring])))
	}
}

impl Default for GeometryEnvelope {
	fn default() -> Self {
		Self::empty()
	}
}

impl Debug for GeometryEnvelope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_empty() {
			return f.write_str("GeometryEnvelope(empty)");
		}
		f.debug_tuple("GeometryEnvelope")
			.field(&[self.min_x, self.min_y, self.max_x, self.max_y])
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty() {
		let empty = GeometryEnvelope::empty();
		assert!(empty.is_empty());
		assert!(!empty.contains_xy(0.0, 0.0));
		assert!(!empty.intersects(&GeometryEnvelope::new(-1.0, -1.0, 1.0, 1.0)));
	}

	#[test]
	fn test_union_identity() {
		let envelope = GeometryEnvelope::new(-10.0, -5.0, 10.0, 5.0);
		assert_eq!(GeometryEnvelope::empty().union(&envelope), envelope);
		assert_eq!(envelope.union(&GeometryEnvelope::empty()), envelope);
	}

	#[test]
	fn test_expand_point_tracks_ranges() {
		let mut envelope = GeometryEnvelope::empty();
		envelope.expand_point(&Point::with_z(1.0, 2.0, 3.0));
		envelope.expand_point(&Point::with_z(-1.0, 4.0, 7.0));
		assert_eq!(
			(envelope.min_x(), envelope.min_y(), envelope.max_x(), envelope.max_y()),
			(-1.0, 2.0, 1.0, 4.0)
		);
		assert_eq!(envelope.z_range(), Some((3.0, 7.0)));
		assert_eq!(envelope.m_range(), None);
	}

	#[test]
	fn test_intersection() {
		let a = GeometryEnvelope::new(0.0, 0.0, 10.0, 10.0);
		let b = GeometryEnvelope::new(5.0, 5.0, 15.0, 15.0);
		let overlap = a.intersection(&b).unwrap();
		assert_eq!(
			(overlap.min_x(), overlap.min_y(), overlap.max_x(), overlap.max_y()),
			(5.0, 5.0, 10.0, 10.0)
		);

		let c = GeometryEnvelope::new(20.0, 20.0, 30.0, 30.0);
		assert_eq!(a.intersection(&c), None);
	}

	#[test]
	fn test_contains() {
		let outer = GeometryEnvelope::new(0.0, 0.0, 10.0, 10.0);
		let inner = GeometryEnvelope::new(2.0, 2.0, 8.0, 8.0);
		assert!(outer.contains(&inner));
		assert!(!inner.contains(&outer));
	}

	#[test]
	fn test_to_geometry() {
		assert_eq!(GeometryEnvelope::empty().to_geometry(), None);

		let point = GeometryEnvelope::new(3.0, 4.0, 3.0, 4.0).to_geometry().unwrap();
		assert_eq!(point, Geometry::Point(Point::new(3.0, 4.0)));

		let polygon = GeometryEnvelope::new(0.0, 0.0, 2.0, 1.0).to_geometry().unwrap();
		assert_eq!(polygon.envelope(), GeometryEnvelope::new(0.0, 0.0, 2.0, 1.0));
	}
}
