use super::{
	CompositeGeometryTrait, GeometryTrait, MultiLineStringGeometry, PointGeometry, SingleGeometryTrait,
	items_to_coord_json,
};
use crate::Geometry;
use serde_json::Value;
use std::fmt::Debug;

/// A sequence of connected points forming a line. Also used for the rings of a polygon.
///
/// An empty line string is structurally valid.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for LineStringGeometry {
	const TYPE_NAME: &'static str = "LineString";

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		items_to_coord_json(&self.0, precision)
	}

	fn into_geometry(self) -> Geometry {
		Geometry::LineString(self)
	}
}

impl CompositeGeometryTrait<PointGeometry> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PointGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PointGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PointGeometry> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, PointGeometry);
