//! Simple Features geometry value types: points, curves, surfaces and their
//! collections, plus envelopes, geometry utilities and well-known binary
//! encoding.
//!
//! Geometry values are validated at construction and immutable afterwards.

pub mod centroid;

mod convert;

pub mod envelope;

mod error;
pub use error::*;

mod geometry;
pub use geometry::*;

pub use envelope::GeometryEnvelope;

pub mod utils;

pub mod wkb;
