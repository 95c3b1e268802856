//! Geometry utilities: distances, simplification, projection range
//! adjustment, and point containment predicates.

use crate::geometry::{
	CircularString, CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection, LineString,
	MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, PolyhedralSurface, Tin, Triangle,
};

/// Default tolerance for the point-on-line predicate family.
pub const DEFAULT_LINE_EPSILON: f64 = 0.000000000000001;

/// The Pythagorean distance between two points.
pub fn distance(point1: &Point, point2: &Point) -> f64 {
	let dx = point2.x() - point1.x();
	let dy = point2.y() - point1.y();
	dx.hypot(dy)
}

/// The distance between the point and the segment from `line_start` to
/// `line_end`, measured to the nearest point on the segment.
pub fn perpendicular_distance(point: &Point, line_start: &Point, line_end: &Point) -> f64 {
	let vx = line_end.x() - line_start.x();
	let vy = line_end.y() - line_start.y();
	let wx = point.x() - line_start.x();
	let wy = point.y() - line_start.y();

	let projection = wx * vx + wy * vy;
	let length_squared = vx * vx + vy * vy;

	let (nearest_x, nearest_y) = if projection <= 0.0 || length_squared == 0.0 {
		(line_start.x(), line_start.y())
	} else if projection >= length_squared {
		(line_end.x(), line_end.y())
	} else {
		let t = projection / length_squared;
		(line_start.x() + t * vx, line_start.y() + t * vy)
	};

	(point.x() - nearest_x).hypot(point.y() - nearest_y)
}

/// Simplifies an ordered point sequence with the Douglas-Peucker algorithm.
///
/// The first and last points are always retained. Points should be in a
/// meters unit type projection; `tolerance` is the minimum tolerated
/// deviation in those units.
pub fn simplify_points(points: &[Point], tolerance: f64) -> Vec<Point> {
	if points.len() <= 2 {
		return points.to_vec();
	}
	let mut keep = vec![false; points.len()];
	keep[0] = true;
	keep[points.len() - 1] = true;
	douglas_peucker(points, 0, points.len() - 1, tolerance, &mut keep);
	points
		.iter()
		.zip(&keep)
		.filter_map(|(point, &kept)| kept.then_some(*point))
		.collect()
}

fn douglas_peucker(points: &[Point], start: usize, end: usize, tolerance: f64, keep: &mut [bool]) {
	if end <= start + 1 {
		return;
	}
	let mut max_distance = 0.0;
	let mut max_index = start;
	for index in start + 1..end {
		let deviation = perpendicular_distance(&points[index], &points[start], &points[end]);
		if deviation > max_distance {
			max_distance = deviation;
			max_index = index;
		}
	}
	if max_distance > tolerance {
		keep[max_index] = true;
		douglas_peucker(points, start, max_index, tolerance, keep);
		douglas_peucker(points, max_index, end, tolerance, keep);
	}
}

/// Shifts each connected point run so it spans the shortest x distance,
/// wrapping by ±2·`max_x` relative to the run's first point. Resulting x
/// values lie within three times the projection range.
///
/// For WGS84 pass 180.0; for web mercator pass 20037508.342789244.
pub fn minimize(geometry: Geometry, max_x: f64) -> Geometry {
	match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => geometry,
		Geometry::LineString(line) => {
			Geometry::LineString(LineString::new_unchecked(minimize_points(line.into_points(), max_x)))
		}
		Geometry::CircularString(arc) => Geometry::CircularString(CircularString::new_unchecked(
			minimize_points(arc.into_points(), max_x),
		)),
		Geometry::CompoundCurve(curve) => {
			Geometry::CompoundCurve(minimize_compound_curve(curve, max_x))
		}
		Geometry::Polygon(polygon) => Geometry::Polygon(minimize_polygon(polygon, max_x)),
		Geometry::Triangle(triangle) => {
			let rings = triangle
				.into_rings()
				.into_iter()
				.map(|ring| LineString::new_unchecked(minimize_points(ring.into_points(), max_x)))
				.collect();
			Geometry::Triangle(Triangle::new_unchecked(rings))
		}
		Geometry::CurvePolygon(polygon) => {
			let rings = polygon
				.into_rings()
				.into_iter()
				.map(|ring| minimize_curve(ring, max_x))
				.collect();
			Geometry::CurvePolygon(CurvePolygon::new_unchecked(rings))
		}
		Geometry::PolyhedralSurface(surface) => {
			let polygons = surface
				.into_polygons()
				.into_iter()
				.map(|polygon| minimize_polygon(polygon, max_x))
				.collect();
			Geometry::PolyhedralSurface(PolyhedralSurface::new_unchecked(polygons))
		}
		Geometry::Tin(tin) => {
			let polygons = tin
				.into_polygons()
				.into_iter()
				.map(|polygon| minimize_polygon(polygon, max_x))
				.collect();
			Geometry::Tin(Tin::new_unchecked(polygons))
		}
		Geometry::MultiLineString(multi) => {
			let lines = multi
				.into_line_strings()
				.into_iter()
				.map(|line| LineString::new_unchecked(minimize_points(line.into_points(), max_x)))
				.collect();
			Geometry::MultiLineString(MultiLineString::new_unchecked(lines))
		}
		Geometry::MultiPolygon(multi) => {
			let polygons = multi
				.into_polygons()
				.into_iter()
				.map(|polygon| minimize_polygon(polygon, max_x))
				.collect();
			Geometry::MultiPolygon(MultiPolygon::new_unchecked(polygons))
		}
		Geometry::GeometryCollection(collection) => {
			let members = collection
				.into_geometries()
				.into_iter()
				.map(|member| minimize(member, max_x))
				.collect();
			Geometry::GeometryCollection(GeometryCollection::new(members))
		}
	}
}

fn minimize_points(points: Vec<Point>, max_x: f64) -> Vec<Point> {
	let first_x = points[0].x();
	points
		.into_iter()
		.map(|point| {
			if point.x() - first_x > max_x {
				point.shift_x(-2.0 * max_x)
			} else if first_x - point.x() > max_x {
				point.shift_x(2.0 * max_x)
			} else {
				point
			}
		})
		.collect()
}

fn minimize_polygon(polygon: Polygon, max_x: f64) -> Polygon {
	let rings = polygon
		.into_rings()
		.into_iter()
		.map(|ring| LineString::new_unchecked(minimize_points(ring.into_points(), max_x)))
		.collect();
	Polygon::new_unchecked(rings)
}

fn minimize_compound_curve(curve: CompoundCurve, max_x: f64) -> CompoundCurve {
	let lines = curve
		.into_line_strings()
		.into_iter()
		.map(|line| LineString::new_unchecked(minimize_points(line.into_points(), max_x)))
		.collect();
	CompoundCurve::new_unchecked(lines)
}

fn minimize_curve(curve: Curve, max_x: f64) -> Curve {
	match curve {
		Curve::LineString(line) => {
			Curve::LineString(LineString::new_unchecked(minimize_points(line.into_points(), max_x)))
		}
		Curve::CircularString(arc) => Curve::CircularString(CircularString::new_unchecked(
			minimize_points(arc.into_points(), max_x),
		)),
		Curve::CompoundCurve(compound) => Curve::CompoundCurve(minimize_compound_curve(compound, max_x)),
	}
}

/// Wraps every x value outside `[-max_x, max_x]` back into range by
/// ±2·`max_x`.
///
/// For WGS84 pass 180.0; for web mercator pass 20037508.342789244.
pub fn normalize(geometry: Geometry, max_x: f64) -> Geometry {
	map_points(geometry, &|point| {
		if point.x() < -max_x {
			point.shift_x(2.0 * max_x)
		} else if point.x() > max_x {
			point.shift_x(-2.0 * max_x)
		} else {
			point
		}
	})
}

fn map_points(geometry: Geometry, f: &impl Fn(Point) -> Point) -> Geometry {
	match geometry {
		Geometry::Point(point) => Geometry::Point(f(point)),
		Geometry::LineString(line) => Geometry::LineString(map_line(line, f)),
		Geometry::CircularString(arc) => Geometry::CircularString(CircularString::new_unchecked(
			arc.into_points().into_iter().map(f).collect(),
		)),
		Geometry::CompoundCurve(curve) => Geometry::CompoundCurve(map_compound(curve, f)),
		Geometry::Polygon(polygon) => Geometry::Polygon(map_polygon(polygon, f)),
		Geometry::Triangle(triangle) => {
			let rings = triangle.into_rings().into_iter().map(|ring| map_line(ring, f)).collect();
			Geometry::Triangle(Triangle::new_unchecked(rings))
		}
		Geometry::CurvePolygon(polygon) => {
			let rings = polygon
				.into_rings()
				.into_iter()
				.map(|ring| match ring {
					Curve::LineString(line) => Curve::LineString(map_line(line, f)),
					Curve::CircularString(arc) => Curve::CircularString(CircularString::new_unchecked(
						arc.into_points().into_iter().map(f).collect(),
					)),
					Curve::CompoundCurve(compound) => Curve::CompoundCurve(map_compound(compound, f)),
				})
				.collect();
			Geometry::CurvePolygon(CurvePolygon::new_unchecked(rings))
		}
		Geometry::PolyhedralSurface(surface) => {
			let polygons = surface
				.into_polygons()
				.into_iter()
				.map(|polygon| map_polygon(polygon, f))
				.collect();
			Geometry::PolyhedralSurface(PolyhedralSurface::new_unchecked(polygons))
		}
		Geometry::Tin(tin) => {
			let polygons = tin
				.into_polygons()
				.into_iter()
				.map(|polygon| map_polygon(polygon, f))
				.collect();
			Geometry::Tin(Tin::new_unchecked(polygons))
		}
		Geometry::MultiPoint(multi) => Geometry::MultiPoint(MultiPoint::new_unchecked(
			multi.into_points().into_iter().map(f).collect(),
		)),
		Geometry::MultiLineString(multi) => {
			let lines = multi
				.into_line_strings()
				.into_iter()
				.map(|line| map_line(line, f))
				.collect();
			Geometry::MultiLineString(MultiLineString::new_unchecked(lines))
		}
		Geometry::MultiPolygon(multi) => {
			let polygons = multi
				.into_polygons()
				.into_iter()
				.map(|polygon| map_polygon(polygon, f))
				.collect();
			Geometry::MultiPolygon(MultiPolygon::new_unchecked(polygons))
		}
		Geometry::GeometryCollection(collection) => {
			let members = collection
				.into_geometries()
				.into_iter()
				.map(|member| map_points(member, f))
				.collect();
			Geometry::GeometryCollection(GeometryCollection::new(members))
		}
	}
}

fn map_line(line: LineString, f: &impl Fn(Point) -> Point) -> LineString {
	LineString::new_unchecked(line.into_points().into_iter().map(f).collect())
}

fn map_polygon(polygon: Polygon, f: &impl Fn(Point) -> Point) -> Polygon {
	let rings = polygon
		.into_rings()
		.into_iter()
		.map(|ring| map_line(ring, f))
		.collect();
	Polygon::new_unchecked(rings)
}

fn map_compound(curve: CompoundCurve, f: &impl Fn(Point) -> Point) -> CompoundCurve {
	let lines = curve
		.into_line_strings()
		.into_iter()
		.map(|line| map_line(line, f))
		.collect();
	CompoundCurve::new_unchecked(lines)
}

/// Whether the point is inside the polygon: within the exterior ring and
/// not within any hole. Ring edges count as inside; hole edges do not.
pub fn point_in_polygon(point: &Point, polygon: &Polygon) -> bool {
	point_in_polygon_with_epsilon(point, polygon, DEFAULT_LINE_EPSILON)
}

pub fn point_in_polygon_with_epsilon(point: &Point, polygon: &Polygon, epsilon: f64) -> bool {
	let mut contains = point_in_points_with_epsilon(point, polygon.exterior_ring().points(), epsilon);
	if contains {
		for hole in polygon.interior_rings() {
			if point_in_points_with_epsilon(point, hole.points(), epsilon) {
				contains = false;
				break;
			}
		}
	}
	contains
}

/// Whether the point is inside the ring, edges included.
pub fn point_in_ring(point: &Point, ring: &LineString) -> bool {
	point_in_points_with_epsilon(point, ring.points(), DEFAULT_LINE_EPSILON)
}

pub fn point_in_ring_with_epsilon(point: &Point, ring: &LineString, epsilon: f64) -> bool {
	point_in_points_with_epsilon(point, ring.points(), epsilon)
}

/// Ray-casting containment over a raw ring point sequence, falling back to
/// an edge check for boundary points.
pub fn point_in_points_with_epsilon(point: &Point, points: &[Point], epsilon: f64) -> bool {
	// ignore an explicitly duplicated closing point
	let count = if closed_points(points) {
		points.len() - 1
	} else {
		points.len()
	};
	let mut contains = false;
	let mut j = count.saturating_sub(1);
	for i in 0..count {
		let p1 = &points[i];
		let p2 = &points[j];
		if (p1.y() > point.y()) != (p2.y() > point.y())
			&& point.x() < (p2.x() - p1.x()) * (point.y() - p1.y()) / (p2.y() - p1.y()) + p1.x()
		{
			contains = !contains;
		}
		j = i;
	}
	if !contains {
		contains = point_on_points_edge_with_epsilon(point, points, epsilon);
	}
	contains
}

/// Whether the point lies on any edge of any polygon ring.
pub fn point_on_polygon_edge(point: &Point, polygon: &Polygon) -> bool {
	point_on_polygon_edge_with_epsilon(point, polygon, DEFAULT_LINE_EPSILON)
}

pub fn point_on_polygon_edge_with_epsilon(point: &Point, polygon: &Polygon, epsilon: f64) -> bool {
	polygon
		.rings()
		.iter()
		.any(|ring| point_on_points_edge_with_epsilon(point, ring.points(), epsilon))
}

/// Whether the point lies on the edge path of a ring point sequence. The
/// closing edge is implied when the sequence is not explicitly closed.
pub fn point_on_points_edge_with_epsilon(point: &Point, points: &[Point], epsilon: f64) -> bool {
	for pair in points.windows(2) {
		if point_on_path_with_epsilon(point, &pair[0], &pair[1], epsilon) {
			return true;
		}
	}
	if points.len() >= 2 && !closed_points(points) {
		let last = &points[points.len() - 1];
		if point_on_path_with_epsilon(point, last, &points[0], epsilon) {
			return true;
		}
	}
	false
}

/// Whether the point lies on the line string.
pub fn point_on_line(point: &Point, line: &LineString) -> bool {
	point_on_line_with_epsilon(point, line, DEFAULT_LINE_EPSILON)
}

pub fn point_on_line_with_epsilon(point: &Point, line: &LineString, epsilon: f64) -> bool {
	line
		.points()
		.windows(2)
		.any(|pair| point_on_path_with_epsilon(point, &pair[0], &pair[1], epsilon))
}

/// Whether the point lies on the path between `point1` and `point2`.
pub fn point_on_path(point: &Point, point1: &Point, point2: &Point) -> bool {
	point_on_path_with_epsilon(point, point1, point2, DEFAULT_LINE_EPSILON)
}

pub fn point_on_path_with_epsilon(point: &Point, point1: &Point, point2: &Point, epsilon: f64) -> bool {
	perpendicular_distance(point, point1, point2) <= epsilon
}

/// Whether the polygon's exterior ring is explicitly closed.
pub fn closed_polygon(polygon: &Polygon) -> bool {
	closed_points(polygon.exterior_ring().points())
}

/// Whether the ring is explicitly closed, first point equal to last.
pub fn closed_ring(ring: &LineString) -> bool {
	closed_points(ring.points())
}

/// Whether a raw point sequence is explicitly closed.
pub fn closed_points(points: &[Point]) -> bool {
	match (points.first(), points.last()) {
		(Some(first), Some(last)) => points.len() > 1 && first == last,
		_ => false,
	}
}

/// Whether any of the geometries contains a z value.
pub fn has_z(geometries: &[Geometry]) -> bool {
	geometries.iter().any(Geometry::has_z)
}

/// Whether any of the geometries contains an m value.
pub fn has_m(geometries: &[Geometry]) -> bool {
	geometries.iter().any(Geometry::has_m)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn line(coords: &[[f64; 2]]) -> LineString {
		LineString::new(coords.iter().map(Point::from).collect()).unwrap()
	}

	fn square() -> Polygon {
		Polygon::new(vec![line(&[
			[0.0, 0.0],
			[10.0, 0.0],
			[10.0, 10.0],
			[0.0, 10.0],
			[0.0, 0.0],
		])])
		.unwrap()
	}

	#[test]
	fn test_distance() {
		assert_relative_eq!(distance(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0)), 5.0);
	}

	#[test]
	fn test_perpendicular_distance() {
		let start = Point::new(0.0, 0.0);
		let end = Point::new(10.0, 0.0);
		assert_relative_eq!(perpendicular_distance(&Point::new(5.0, 3.0), &start, &end), 3.0);
		// beyond the segment end, distance is to the endpoint
		assert_relative_eq!(perpendicular_distance(&Point::new(13.0, 4.0), &start, &end), 5.0);
	}

	#[test]
	fn test_simplify_keeps_endpoints() {
		let points: Vec<Point> = [[0.0, 0.0], [1.0, 0.1], [2.0, -0.1], [3.0, 0.0]]
			.iter()
			.map(Point::from)
			.collect();
		let simplified = simplify_points(&points, 0.5);
		assert_eq!(simplified.len(), 2);
		assert_eq!(simplified[0], points[0]);
		assert_eq!(simplified[1], points[3]);
	}

	#[test]
	fn test_simplify_keeps_significant_deviation() {
		let points: Vec<Point> = [[0.0, 0.0], [2.0, 5.0], [4.0, 0.0]].iter().map(Point::from).collect();
		let simplified = simplify_points(&points, 1.0);
		assert_eq!(simplified.len(), 3);
	}

	#[test]
	fn test_simplify_below_tolerance_is_identity() {
		let points: Vec<Point> = [[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]].iter().map(Point::from).collect();
		assert_eq!(simplify_points(&points, 0.5), points);
	}

	#[test]
	fn test_normalize_wraps_x() {
		let geometry = normalize(Geometry::Point(Point::new(190.0, 10.0)), 180.0);
		assert_eq!(geometry, Geometry::Point(Point::new(-170.0, 10.0)));

		let geometry = normalize(Geometry::Point(Point::new(-190.0, 10.0)), 180.0);
		assert_eq!(geometry, Geometry::Point(Point::new(170.0, 10.0)));
	}

	#[test]
	fn test_minimize_shortens_span() {
		// a line crossing the antimeridian
		let crossing = Geometry::LineString(line(&[[170.0, 0.0], [-170.0, 0.0]]));
		let minimized = minimize(crossing, 180.0);
		let Geometry::LineString(result) = minimized else {
			panic!("expected a line string");
		};
		assert_eq!(result.points()[0], Point::new(170.0, 0.0));
		assert_eq!(result.points()[1], Point::new(190.0, 0.0));
	}

	#[test]
	fn test_minimize_leaves_local_runs() {
		let local = Geometry::LineString(line(&[[10.0, 0.0], [20.0, 0.0]]));
		assert_eq!(minimize(local.clone(), 180.0), local);
	}

	#[test]
	fn test_point_in_polygon() {
		let polygon = square();
		assert!(point_in_polygon(&Point::new(5.0, 5.0), &polygon));
		assert!(!point_in_polygon(&Point::new(15.0, 5.0), &polygon));
		// boundary counts as inside
		assert!(point_in_polygon(&Point::new(0.0, 5.0), &polygon));
	}

	#[test]
	fn test_point_in_polygon_hole() {
		let with_hole = Polygon::new(vec![
			line(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]),
			line(&[[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0], [4.0, 4.0]]),
		])
		.unwrap();
		assert!(point_in_polygon(&Point::new(2.0, 2.0), &with_hole));
		assert!(!point_in_polygon(&Point::new(5.0, 5.0), &with_hole));
	}

	#[test]
	fn test_point_on_polygon_edge() {
		let polygon = square();
		assert!(point_on_polygon_edge(&Point::new(5.0, 0.0), &polygon));
		assert!(!point_on_polygon_edge(&Point::new(5.0, 5.0), &polygon));
	}

	#[test]
	fn test_point_on_line() {
		let path = line(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]]);
		assert!(point_on_line(&Point::new(10.0, 5.0), &path));
		assert!(!point_on_line(&Point::new(5.0, 5.0), &path));
		assert!(point_on_line_with_epsilon(&Point::new(5.0, 0.4), &path, 0.5));
	}

	#[test]
	fn test_closed_points() {
		let ring = line(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]);
		assert!(closed_ring(&ring));
		assert!(closed_polygon(&square()));
		assert!(!closed_points(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0)]));
		assert!(!closed_points(&[Point::new(0.0, 0.0)]));
	}

	#[test]
	fn test_has_z_has_m() {
		let geometries = vec![
			Geometry::Point(Point::new(1.0, 2.0)),
			Geometry::Point(Point::with_z(1.0, 2.0, 3.0)),
		];
		assert!(has_z(&geometries));
		assert!(!has_m(&geometries));
	}
}
