// Concrete geometry kinds of the `geokit_geometry` crate: `PointGeometry`, `LineStringGeometry`,
// `PolygonGeometry` and their multi-geometry counterparts. They share the traits in `traits.rs`
// so the codecs can read type tags and coordinate trees uniformly.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use traits::*;
