use super::{
	CompositeGeometryTrait, GeometryTrait, LineStringGeometry, MultiPolygonGeometry, SingleGeometryTrait,
	items_to_coord_json,
};
use crate::Geometry;
use serde_json::Value;
use std::fmt::Debug;

/// A polygon made of linear rings: the first ring is the outline, any further rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for PolygonGeometry {
	const TYPE_NAME: &'static str = "Polygon";

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		items_to_coord_json(&self.0, precision)
	}

	fn into_geometry(self) -> Geometry {
		Geometry::Polygon(self)
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl CompositeGeometryTrait<LineStringGeometry> for PolygonGeometry {
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

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, LineStringGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn rings_keep_their_order() {
		let polygon = PolygonGeometry::from(vec![
			vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
			vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
		]);
		assert_eq!(polygon.len(), 2);
		assert_eq!(polygon.first().map(|ring| ring.len()), Some(4));
		assert_eq!(
			polygon.to_coord_json(None),
			json!([
				[[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				[[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]]
			])
		);
	}

	#[test]
	fn into_multi() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]);
		let multi = polygon.clone().into_multi();
		assert_eq!(multi.0, vec![polygon]);
	}
}
