mod point;
pub use point::*;

mod line_string;
pub use line_string::*;

mod circular_string;
pub use circular_string::*;

mod compound_curve;
pub use compound_curve::*;

mod curve;
pub use curve::*;

mod polygon;
pub use polygon::*;

mod triangle;
pub use triangle::*;

mod curve_polygon;
pub use curve_polygon::*;

mod polyhedral_surface;
pub use polyhedral_surface::*;

mod tin;
pub use tin::*;

mod multi_point;
pub use multi_point::*;

mod multi_line_string;
pub use multi_line_string::*;

mod multi_polygon;
pub use multi_polygon::*;

mod geometry_collection;
pub use geometry_collection::*;

use crate::error::{GeometryError, Result};

/// Ensures every (has_z, has_m) pair in the iterator is identical.
pub(crate) fn check_dimensions<I>(mut dimensions: I) -> Result<()>
where
	I: Iterator<Item = (bool, bool)>,
{
	if let Some(first) = dimensions.next() {
		for dims in dimensions {
			if dims != first {
				return Err(GeometryError::DimensionMismatch);
			}
		}
	}
	Ok(())
}
