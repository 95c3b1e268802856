mod builder;
pub use builder::*;

mod geometry_envelope;
pub use geometry_envelope::*;
