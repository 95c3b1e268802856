//! Error types for geometry construction and well-known binary decoding.

use crate::geometry::GeometryType;
use thiserror::Error;

/// Failures raised while constructing geometry values.
///
/// All variants are local construction-time failures. None of them are
/// retryable; the only recovery is supplying corrected input.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
	/// A coordinate value was NaN or infinite where a finite value is required.
	#[error("coordinate value {0} is not finite")]
	InvalidCoordinate(f64),

	/// A line string was constructed from fewer than two points.
	#[error("line string requires at least 2 points, got {0}")]
	InsufficientPoints(usize),

	/// A polygon ring was constructed from fewer than four points
	/// (three distinct plus the closing point).
	#[error("ring requires at least 4 points, got {0}")]
	InsufficientRingPoints(usize),

	/// A polygon ring whose first and last points differ.
	#[error("ring is not closed, first and last points differ")]
	UnclosedRing,

	/// A polygon was constructed from an empty ring sequence.
	#[error("polygon requires an exterior ring")]
	MissingExteriorRing,

	/// Component geometries carry differing z/m dimensions.
	#[error("mixed coordinate dimensions within a single geometry")]
	DimensionMismatch,
}

/// Failures raised while decoding or encoding well-known binary data.
#[derive(Debug, Error)]
pub enum WkbError {
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	/// The leading byte of a geometry was neither 0 (big-endian) nor 1
	/// (little-endian).
	#[error("invalid byte order marker {0:#04x}")]
	InvalidByteOrder(u8),

	/// A geometry type code that does not map to a decodable geometry.
	#[error("unsupported geometry type code {0}")]
	UnsupportedType(u32),

	/// A container held a child of a type it cannot contain.
	#[error("unexpected {child} inside {container}")]
	UnexpectedChild {
		container: GeometryType,
		child: GeometryType,
	},

	/// Decoded coordinate data violated a structural invariant.
	#[error(transparent)]
	Geometry(#[from] GeometryError),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
