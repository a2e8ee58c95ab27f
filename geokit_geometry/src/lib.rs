//! Strongly typed geometry model shared by the geokit format adapters.
//!
//! The crate defines the closed set of geometry kinds ([`Geometry`]), the traits every kind
//! implements, the reduction rule that collapses a list of geometries into one, and the
//! [`FormatRegistry`] through which a geometry is handed to an output adapter.

mod error;
mod geo;

pub use error::*;
pub use geo::*;
