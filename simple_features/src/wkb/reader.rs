use super::{ByteOrder, split_type_code};
use crate::error::WkbError;
use crate::geometry::{
	CircularString, CompoundCurve, Curve, CurvePolygon, Geometry, GeometryCollection, GeometryType,
	LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, PolyhedralSurface, Tin,
	Triangle,
};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::trace;
use std::io::Cursor;

/// Decodes a geometry from well-known binary.
pub fn read_geometry(bytes: &[u8]) -> Result<Geometry, WkbError> {
	let mut reader = WkbReader::new(bytes);
	let geometry = reader.read_geometry()?;
	let remaining = reader.remaining();
	if remaining > 0 {
		trace!("ignoring {remaining} trailing bytes after geometry");
	}
	Ok(geometry)
}

struct WkbReader<'a> {
	cursor: Cursor<&'a [u8]>,
	order: ByteOrder,
}

impl<'a> WkbReader<'a> {
	fn new(bytes: &'a [u8]) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			order: ByteOrder::BigEndian,
		}
	}

	fn remaining(&self) -> u64 {
		self.cursor.get_ref().len() as u64 - self.cursor.position()
	}

	fn read_u32(&mut self) -> Result<u32, WkbError> {
		Ok(match self.order {
			ByteOrder::BigEndian => self.cursor.read_u32::<BigEndian>()?,
			ByteOrder::LittleEndian => self.cursor.read_u32::<LittleEndian>()?,
		})
	}

	fn read_f64(&mut self) -> Result<f64, WkbError> {
		Ok(match self.order {
			ByteOrder::BigEndian => self.cursor.read_f64::<BigEndian>()?,
			ByteOrder::LittleEndian => self.cursor.read_f64::<LittleEndian>()?,
		})
	}

	/// Reads one full geometry: marker, type code, payload. Every nested
	/// geometry carries its own marker, so the byte order switches here.
	fn read_geometry(&mut self) -> Result<Geometry, WkbError> {
		let marker = self.cursor.read_u8()?;
		self.order = ByteOrder::from_marker(marker).ok_or(WkbError::InvalidByteOrder(marker))?;

		let code = self.read_u32()?;
		let (base, has_z, has_m) = split_type_code(code).ok_or(WkbError::UnsupportedType(code))?;
		trace!("reading geometry type code {code}");

		match base {
			1 => Ok(Geometry::Point(self.read_coordinates(has_z, has_m)?)),
			2 => {
				let points = self.read_points(has_z, has_m)?;
				Ok(Geometry::LineString(LineString::new(points)?))
			}
			3 => Ok(Geometry::Polygon(Polygon::new(self.read_rings(has_z, has_m)?)?)),
			4 => {
				let mut points = Vec::new();
				for _ in 0..self.read_u32()? {
					match self.read_geometry()? {
						Geometry::Point(point) => points.push(point),
						other => return Err(unexpected(GeometryType::MultiPoint, &other)),
					}
				}
				Ok(Geometry::MultiPoint(MultiPoint::new(points)?))
			}
			5 => {
				let mut lines = Vec::new();
				for _ in 0..self.read_u32()? {
					match self.read_geometry()? {
						Geometry::LineString(line) => lines.push(line),
						other => return Err(unexpected(GeometryType::MultiLineString, &other)),
					}
				}
				Ok(Geometry::MultiLineString(MultiLineString::new(lines)?))
			}
			6 => {
				let mut polygons = Vec::new();
				for _ in 0..self.read_u32()? {
					match self.read_geometry()? {
						Geometry::Polygon(polygon) => polygons.push(polygon),
						other => return Err(unexpected(GeometryType::MultiPolygon, &other)),
					}
				}
				Ok(Geometry::MultiPolygon(MultiPolygon::new(polygons)?))
			}
			7 => {
				let mut members = Vec::new();
				for _ in 0..self.read_u32()? {
					members.push(self.read_geometry()?);
				}
				Ok(Geometry::GeometryCollection(GeometryCollection::new(members)))
			}
			8 => {
				let points = self.read_points(has_z, has_m)?;
				Ok(Geometry::CircularString(CircularString::new(points)?))
			}
			9 => {
				let lines = self.read_compound_members()?;
				Ok(Geometry::CompoundCurve(CompoundCurve::new(lines)?))
			}
			10 => {
				let mut rings = Vec::new();
				for _ in 0..self.read_u32()? {
					rings.push(self.read_curve(GeometryType::CurvePolygon)?);
				}
				Ok(Geometry::CurvePolygon(CurvePolygon::new(rings)?))
			}
			// the heterogeneous multi curve/surface codes decode as collections
			11 => {
				let mut members = Vec::new();
				for _ in 0..self.read_u32()? {
					members.push(Geometry::from(self.read_curve(GeometryType::MultiCurve)?));
				}
				Ok(Geometry::GeometryCollection(GeometryCollection::new(members)))
			}
			12 => {
				let mut members = Vec::new();
				for _ in 0..self.read_u32()? {
					let member = self.read_geometry()?;
					if member.dimension() != 2 {
						return Err(unexpected(GeometryType::MultiSurface, &member));
					}
					members.push(member);
				}
				Ok(Geometry::GeometryCollection(GeometryCollection::new(members)))
			}
			15 => {
				let polygons = self.read_surface_patches(GeometryType::PolyhedralSurface)?;
				Ok(Geometry::PolyhedralSurface(PolyhedralSurface::new(polygons)?))
			}
			16 => {
				let polygons = self.read_surface_patches(GeometryType::Tin)?;
				Ok(Geometry::Tin(Tin::new(polygons)?))
			}
			17 => Ok(Geometry::Triangle(Triangle::new(self.read_rings(has_z, has_m)?)?)),
			_ => Err(WkbError::UnsupportedType(code)),
		}
	}

	/// Raw coordinate values of one point, without marker or type code.
	fn read_coordinates(&mut self, has_z: bool, has_m: bool) -> Result<Point, WkbError> {
		let x = self.read_f64()?;
		let y = self.read_f64()?;
		let z = if has_z { Some(self.read_f64()?) } else { None };
		let m = if has_m { Some(self.read_f64()?) } else { None };
		Ok(match (z, m) {
			(None, None) => Point::new(x, y),
			(Some(z), None) => Point::with_z(x, y, z),
			(None, Some(m)) => Point::with_m(x, y, m),
			(Some(z), Some(m)) => Point::with_zm(x, y, z, m),
		})
	}

	fn read_points(&mut self, has_z: bool, has_m: bool) -> Result<Vec<Point>, WkbError> {
		let count = self.read_u32()?;
		let mut points = Vec::new();
		for _ in 0..count {
			points.push(self.read_coordinates(has_z, has_m)?);
		}
		Ok(points)
	}

	fn read_rings(&mut self, has_z: bool, has_m: bool) -> Result<Vec<LineString>, WkbError> {
		let count = self.read_u32()?;
		let mut rings = Vec::new();
		for _ in 0..count {
			rings.push(LineString::new(self.read_points(has_z, has_m)?)?);
		}
		Ok(rings)
	}

	fn read_compound_members(&mut self) -> Result<Vec<LineString>, WkbError> {
		let count = self.read_u32()?;
		let mut lines = Vec::new();
		for _ in 0..count {
			match self.read_geometry()? {
				Geometry::LineString(line) => lines.push(line),
				other => return Err(unexpected(GeometryType::CompoundCurve, &other)),
			}
		}
		Ok(lines)
	}

	fn read_curve(&mut self, container: GeometryType) -> Result<Curve, WkbError> {
		match self.read_geometry()? {
			Geometry::LineString(line) => Ok(Curve::LineString(line)),
			Geometry::CircularString(arc) => Ok(Curve::CircularString(arc)),
			Geometry::CompoundCurve(compound) => Ok(Curve::CompoundCurve(compound)),
			other => Err(WkbError::UnexpectedChild {
				container,
				child: other.geometry_type(),
			}),
		}
	}

	/// Patches of a polyhedral surface or TIN; triangle patches are folded
	/// into their polygon form.
	fn read_surface_patches(&mut self, container: GeometryType) -> Result<Vec<Polygon>, WkbError> {
		let count = self.read_u32()?;
		let mut polygons = Vec::new();
		for _ in 0..count {
			match self.read_geometry()? {
				Geometry::Polygon(polygon) => polygons.push(polygon),
				Geometry::Triangle(triangle) => polygons.push(triangle.to_polygon()),
				other => return Err(unexpected(container, &other)),
			}
		}
		Ok(polygons)
	}
}

fn unexpected(container: GeometryType, child: &Geometry) -> WkbError {
	WkbError::UnexpectedChild {
		container,
		child: child.geometry_type(),
	}
}
