use crate::error::{GeometryError, Result};
use std::fmt::Debug;

/// A single location in space with an x and y coordinate, optionally
/// extended with a z (elevation) and/or m (measure) value.
#[derive(Clone, Copy, PartialEq)]
pub struct Point {
	x: f64,
	y: f64,
	z: Option<f64>,
	m: Option<f64>,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None, m: None }
	}

	pub fn with_z(x: f64, y: f64, z: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: None,
		}
	}

	pub fn with_m(x: f64, y: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: None,
			m: Some(m),
		}
	}

	pub fn with_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: Some(m),
		}
	}

	/// Like [`Point::new`], but fails with [`GeometryError::InvalidCoordinate`]
	/// if any value is NaN or infinite.
	pub fn finite(x: f64, y: f64) -> Result<Self> {
		check_finite(&[x, y])?;
		Ok(Self::new(x, y))
	}

	/// Finiteness-checked variant of [`Point::with_z`].
	pub fn finite_z(x: f64, y: f64, z: f64) -> Result<Self> {
		check_finite(&[x, y, z])?;
		Ok(Self::with_z(x, y, z))
	}

	/// Finiteness-checked variant of [`Point::with_m`].
	pub fn finite_m(x: f64, y: f64, m: f64) -> Result<Self> {
		check_finite(&[x, y, m])?;
		Ok(Self::with_m(x, y, m))
	}

	/// Finiteness-checked variant of [`Point::with_zm`].
	pub fn finite_zm(x: f64, y: f64, z: f64, m: f64) -> Result<Self> {
		check_finite(&[x, y, z, m])?;
		Ok(Self::with_zm(x, y, z, m))
	}

	pub fn x(&self) -> f64 {
		self.x
	}

	pub fn y(&self) -> f64 {
		self.y
	}

	pub fn z(&self) -> Option<f64> {
		self.z
	}

	pub fn m(&self) -> Option<f64> {
		self.m
	}

	pub fn has_z(&self) -> bool {
		self.z.is_some()
	}

	pub fn has_m(&self) -> bool {
		self.m.is_some()
	}

	/// The (has_z, has_m) dimension pair, used to enforce dimensional
	/// consistency within composite geometries.
	pub(crate) fn dimensions(&self) -> (bool, bool) {
		(self.z.is_some(), self.m.is_some())
	}

	/// Returns a copy shifted along the x axis.
	pub(crate) fn shift_x(&self, offset: f64) -> Self {
		Self {
			x: self.x + offset,
			..*self
		}
	}
}

fn check_finite(values: &[f64]) -> Result<()> {
	for &value in values {
		if !value.is_finite() {
			return Err(GeometryError::InvalidCoordinate(value));
		}
	}
	Ok(())
}

impl Debug for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut list = f.debug_list();
		list.entry(&self.x).entry(&self.y);
		if let Some(z) = self.z {
			list.entry(&z);
		}
		if let Some(m) = self.m {
			list.entry(&m);
		}
		list.finish()
	}
}

impl From<[f64; 2]> for Point {
	fn from(value: [f64; 2]) -> Self {
		Self::new(value[0], value[1])
	}
}

impl From<&[f64; 2]> for Point {
	fn from(value: &[f64; 2]) -> Self {
		Self::new(value[0], value[1])
	}
}

impl From<(f64, f64)> for Point {
	fn from(value: (f64, f64)) -> Self {
		Self::new(value.0, value.1)
	}
}
