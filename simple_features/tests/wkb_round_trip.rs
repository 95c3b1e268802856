//! Well-known binary round trips across every concrete geometry type, in
//! both byte orders and every coordinate dimensionality.

use rstest::rstest;
use simple_features::wkb::ByteOrder;
use simple_features::{
	CircularString, CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection, LineString,
	MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, PolyhedralSurface, Tin, Triangle,
};

fn line(coords: &[[f64; 2]]) -> LineString {
	LineString::new(coords.iter().map(Point::from).collect()).unwrap()
}

fn line_z(coords: &[[f64; 3]]) -> LineString {
	LineString::new(coords.iter().map(|c| Point::with_z(c[0], c[1], c[2])).collect()).unwrap()
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

fn samples() -> Vec<Geometry> {
	vec![
		Geometry::Point(Point::new(1.0, 2.0)),
		Geometry::Point(Point::with_z(1.0, 2.0, 3.0)),
		Geometry::Point(Point::with_m(1.0, 2.0, 4.0)),
		Geometry::Point(Point::with_zm(1.0, 2.0, 3.0, 4.0)),
		Geometry::LineString(line(&[[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]])),
		Geometry::LineString(line_z(&[[0.0, 0.0, 5.0], [1.0, 1.0, 6.0]])),
		Geometry::Polygon(square()),
		Geometry::Polygon(
			Polygon::new(vec![
				line(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]),
				line(&[[2.0, 2.0], [4.0, 2.0], [4.0, 4.0], [2.0, 4.0], [2.0, 2.0]]),
			])
			.unwrap(),
		),
		Geometry::Triangle(
			Triangle::new(vec![line(&[[0.0, 0.0], [4.0, 0.0], [2.0, 3.0], [0.0, 0.0]])]).unwrap(),
		),
		Geometry::CircularString(
			CircularString::new(vec![
				Point::new(0.0, 0.0),
				Point::new(1.0, 1.0),
				Point::new(2.0, 0.0),
			])
			.unwrap(),
		),
		Geometry::CompoundCurve(
			CompoundCurve::new(vec![
				line(&[[0.0, 0.0], [1.0, 0.0]]),
				line(&[[1.0, 0.0], [1.0, 1.0]]),
			])
			.unwrap(),
		),
		Geometry::CurvePolygon(
			CurvePolygon::new(vec![Curve::from(CircularString::new(vec![
				Point::new(0.0, 0.0),
				Point::new(2.0, 2.0),
				Point::new(4.0, 0.0),
				Point::new(2.0, -2.0),
				Point::new(0.0, 0.0),
			])
			.unwrap())])
			.unwrap(),
		),
		Geometry::PolyhedralSurface(PolyhedralSurface::new(vec![square(), square()]).unwrap()),
		Geometry::Tin(
			Tin::new(vec![
				Polygon::new(vec![line(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]])]).unwrap(),
			])
			.unwrap(),
		),
		Geometry::MultiPoint(MultiPoint::new(vec![Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).unwrap()),
		Geometry::MultiPoint(
			MultiPoint::new(vec![
				Point::with_zm(1.0, 2.0, 3.0, 4.0),
				Point::with_zm(5.0, 6.0, 7.0, 8.0),
			])
			.unwrap(),
		),
		Geometry::MultiPoint(MultiPoint::new(Vec::new()).unwrap()),
		Geometry::MultiLineString(
			MultiLineString::new(vec![
				line(&[[0.0, 0.0], [1.0, 1.0]]),
				line(&[[2.0, 2.0], [3.0, 3.0], [4.0, 2.0]]),
			])
			.unwrap(),
		),
		Geometry::MultiPolygon(MultiPolygon::new(vec![square()]).unwrap()),
		Geometry::GeometryCollection(GeometryCollection::new(vec![
			Geometry::Point(Point::new(9.0, 9.0)),
			Geometry::LineString(line(&[[0.0, 0.0], [1.0, 1.0]])),
			Geometry::GeometryCollection(GeometryCollection::new(vec![Geometry::Point(Point::new(
				-1.0, -1.0,
			))])),
		])),
		Geometry::GeometryCollection(GeometryCollection::new(Vec::new())),
	]
}

#[rstest]
#[case(ByteOrder::BigEndian)]
#[case(ByteOrder::LittleEndian)]
fn encode_then_decode_is_identity(#[case] order: ByteOrder) {
	for geometry in samples() {
		let bytes = geometry.to_wkb(order).unwrap();
		let decoded = Geometry::from_wkb(&bytes).unwrap();
		assert_eq!(decoded, geometry, "byte order {order:?}");
	}
}

#[rstest]
#[case(ByteOrder::BigEndian)]
#[case(ByteOrder::LittleEndian)]
fn truncated_input_never_panics(#[case] order: ByteOrder) {
	for geometry in samples() {
		let bytes = geometry.to_wkb(order).unwrap();
		for len in 0..bytes.len() {
			assert!(Geometry::from_wkb(&bytes[..len]).is_err());
		}
	}
}

#[test]
fn corrupted_header_is_a_typed_error() {
	let bytes = Geometry::Point(Point::new(1.0, 2.0))
		.to_wkb(ByteOrder::BigEndian)
		.unwrap();

	let mut bad_marker = bytes.clone();
	bad_marker[0] = 7;
	assert!(matches!(
		Geometry::from_wkb(&bad_marker),
		Err(simple_features::WkbError::InvalidByteOrder(7))
	));

	let mut bad_code = bytes;
	bad_code[4] = 99;
	assert!(matches!(
		Geometry::from_wkb(&bad_code),
		Err(simple_features::WkbError::UnsupportedType(99))
	));
}

#[test]
fn mixed_byte_order_children_decode() -> anyhow::Result<()> {
	// a big-endian collection holding a little-endian point
	let child = Geometry::Point(Point::new(5.0, 6.0)).to_wkb(ByteOrder::LittleEndian)?;
	let mut bytes = vec![0u8];
	bytes.extend_from_slice(&7u32.to_be_bytes());
	bytes.extend_from_slice(&1u32.to_be_bytes());
	bytes.extend_from_slice(&child);

	let decoded = Geometry::from_wkb(&bytes)?;
	assert_eq!(
		decoded,
		Geometry::GeometryCollection(GeometryCollection::new(vec![Geometry::Point(Point::new(
			5.0, 6.0
		))]))
	);
	Ok(())
}

#[test]
fn multi_curve_decodes_as_collection() -> anyhow::Result<()> {
	let line_bytes = Geometry::LineString(line(&[[0.0, 0.0], [1.0, 1.0]])).to_wkb(ByteOrder::BigEndian)?;
	let mut bytes = vec![0u8];
	bytes.extend_from_slice(&11u32.to_be_bytes());
	bytes.extend_from_slice(&1u32.to_be_bytes());
	bytes.extend_from_slice(&line_bytes);

	let decoded = Geometry::from_wkb(&bytes)?;
	assert_eq!(
		decoded,
		Geometry::GeometryCollection(GeometryCollection::new(vec![Geometry::LineString(line(&[
			[0.0, 0.0],
			[1.0, 1.0]
		]))]))
	);
	Ok(())
}
