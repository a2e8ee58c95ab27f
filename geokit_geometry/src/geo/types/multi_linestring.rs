use super::{CompositeGeometryTrait, GeometryTrait, LineStringGeometry, items_to_coord_json};
use crate::Geometry;
use serde_json::Value;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	const TYPE_NAME: &'static str = "MultiLineString";

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		items_to_coord_json(&self.0, precision)
	}

	fn into_geometry(self) -> Geometry {
		Geometry::MultiLineString(self)
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for MultiLineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<LineStringGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<LineStringGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<LineStringGeometry> {
		self.0
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
