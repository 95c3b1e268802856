use super::{LineString, check_dimensions};
use crate::error::Result;
use std::fmt::Debug;

/// An ordered collection of line strings.
#[derive(Clone, PartialEq)]
pub struct MultiLineString {
	line_strings: Vec<LineString>,
}

impl MultiLineString {
	pub fn new(line_strings: Vec<LineString>) -> Result<Self> {
		check_dimensions(line_strings.iter().map(LineString::dimensions))?;
		Ok(Self { line_strings })
	}

	pub(crate) fn new_unchecked(line_strings: Vec<LineString>) -> Self {
		Self { line_strings }
	}

	pub fn line_strings(&self) -> &[LineString] {
		&self.line_strings
	}

	pub fn into_line_strings(self) -> Vec<LineString> {
		self.line_strings
	}

	pub fn num_line_strings(&self) -> usize {
		self.line_strings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.line_strings.is_empty()
	}

	pub fn has_z(&self) -> bool {
		self.line_strings.first().is_some_and(LineString::has_z)
	}

	pub fn has_m(&self) -> bool {
		self.line_strings.first().is_some_and(LineString::has_m)
	}
}

impl Debug for MultiLineString {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.line_strings).finish()
	}
}
