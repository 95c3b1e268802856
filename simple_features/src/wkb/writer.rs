use super::{ByteOrder, type_code};
use crate::error::WkbError;
use crate::geometry::{Curve, Geometry, GeometryType, LineString, Point, Polygon};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

/// Encodes a geometry as well-known binary in the given byte order.
pub fn write_geometry(geometry: &Geometry, order: ByteOrder) -> Result<Vec<u8>, WkbError> {
	let mut writer = WkbWriter::new(order);
	writer.write_geometry(geometry)?;
	Ok(writer.into_bytes())
}

struct WkbWriter {
	buffer: Vec<u8>,
	order: ByteOrder,
}

impl WkbWriter {
	fn new(order: ByteOrder) -> Self {
		Self {
			buffer: Vec::new(),
			order,
		}
	}

	fn into_bytes(self) -> Vec<u8> {
		self.buffer
	}

	fn write_u32(&mut self, value: u32) -> Result<(), WkbError> {
		match self.order {
			ByteOrder::BigEndian => self.buffer.write_u32::<BigEndian>(value)?,
			ByteOrder::LittleEndian => self.buffer.write_u32::<LittleEndian>(value)?,
		}
		Ok(())
	}

	fn write_f64(&mut self, value: f64) -> Result<(), WkbError> {
		match self.order {
			ByteOrder::BigEndian => self.buffer.write_f64::<BigEndian>(value)?,
			ByteOrder::LittleEndian => self.buffer.write_f64::<LittleEndian>(value)?,
		}
		Ok(())
	}

	fn write_header(&mut self, geometry_type: GeometryType, has_z: bool, has_m: bool) -> Result<(), WkbError> {
		self.buffer.write_u8(self.order.marker())?;
		self.write_u32(type_code(geometry_type.wkb_base_code(), has_z, has_m))
	}

	fn write_geometry(&mut self, geometry: &Geometry) -> Result<(), WkbError> {
		self.write_header(geometry.geometry_type(), geometry.has_z(), geometry.has_m())?;
		match geometry {
			Geometry::Point(point) => self.write_coordinates(point),
			Geometry::LineString(line) => self.write_points(line.points()),
			Geometry::CircularString(arc) => self.write_points(arc.points()),
			Geometry::Polygon(polygon) => self.write_rings(polygon.rings()),
			Geometry::Triangle(triangle) => self.write_rings(triangle.rings()),
			Geometry::CompoundCurve(curve) => {
				self.write_u32(curve.num_line_strings() as u32)?;
				for line in curve.line_strings() {
					self.write_line_string(line)?;
				}
				Ok(())
			}
			Geometry::CurvePolygon(polygon) => {
				self.write_u32(polygon.num_rings() as u32)?;
				for ring in polygon.rings() {
					self.write_curve(ring)?;
				}
				Ok(())
			}
			Geometry::PolyhedralSurface(surface) => {
				self.write_u32(surface.num_polygons() as u32)?;
				for polygon in surface.polygons() {
					self.write_polygon(polygon)?;
				}
				Ok(())
			}
			Geometry::Tin(tin) => {
				self.write_u32(tin.num_polygons() as u32)?;
				for polygon in tin.polygons() {
					self.write_polygon(polygon)?;
				}
				Ok(())
			}
			Geometry::MultiPoint(multi) => {
				self.write_u32(multi.num_points() as u32)?;
				for point in multi.points() {
					self.write_header(GeometryType::Point, point.has_z(), point.has_m())?;
					self.write_coordinates(point)?;
				}
				Ok(())
			}
			Geometry::MultiLineString(multi) => {
				self.write_u32(multi.num_line_strings() as u32)?;
				for line in multi.line_strings() {
					self.write_line_string(line)?;
				}
				Ok(())
			}
			Geometry::MultiPolygon(multi) => {
				self.write_u32(multi.num_polygons() as u32)?;
				for polygon in multi.polygons() {
					self.write_polygon(polygon)?;
				}
				Ok(())
			}
			Geometry::GeometryCollection(collection) => {
				self.write_u32(collection.num_geometries() as u32)?;
				for member in collection.geometries() {
					self.write_geometry(member)?;
				}
				Ok(())
			}
		}
	}

	/// Raw coordinate values of one point, without marker or type code.
	fn write_coordinates(&mut self, point: &Point) -> Result<(), WkbError> {
		self.write_f64(point.x())?;
		self.write_f64(point.y())?;
		if let Some(z) = point.z() {
			self.write_f64(z)?;
		}
		if let Some(m) = point.m() {
			self.write_f64(m)?;
		}
		Ok(())
	}

	fn write_points(&mut self, points: &[Point]) -> Result<(), WkbError> {
		self.write_u32(points.len() as u32)?;
		for point in points {
			self.write_coordinates(point)?;
		}
		Ok(())
	}

	fn write_rings(&mut self, rings: &[LineString]) -> Result<(), WkbError> {
		self.write_u32(rings.len() as u32)?;
		for ring in rings {
			self.write_points(ring.points())?;
		}
		Ok(())
	}

	/// A nested line string as a full geometry encoding.
	fn write_line_string(&mut self, line: &LineString) -> Result<(), WkbError> {
		self.write_header(GeometryType::LineString, line.has_z(), line.has_m())?;
		self.write_points(line.points())
	}

	/// A nested polygon as a full geometry encoding.
	fn write_polygon(&mut self, polygon: &Polygon) -> Result<(), WkbError> {
		self.write_header(GeometryType::Polygon, polygon.has_z(), polygon.has_m())?;
		self.write_rings(polygon.rings())
	}

	/// A nested curve as a full geometry encoding.
	fn write_curve(&mut self, curve: &Curve) -> Result<(), WkbError> {
		match curve {
			Curve::LineString(line) => self.write_line_string(line),
			Curve::CircularString(arc) => {
				self.write_header(GeometryType::CircularString, arc.has_z(), arc.has_m())?;
				self.write_points(arc.points())
			}
			Curve::CompoundCurve(compound) => {
				self.write_header(GeometryType::CompoundCurve, compound.has_z(), compound.has_m())?;
				self.write_u32(compound.num_line_strings() as u32)?;
				for line in compound.line_strings() {
					self.write_line_string(line)?;
				}
				Ok(())
			}
		}
	}
}
