use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry, items_to_coord_json};
use crate::Geometry;
use serde_json::Value;
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	const TYPE_NAME: &'static str = "MultiPolygon";

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		items_to_coord_json(&self.0, precision)
	}

	fn into_geometry(self) -> Geometry {
		Geometry::MultiPolygon(self)
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);
