use super::{CompositeGeometryTrait, GeometryTrait, PointGeometry, items_to_coord_json};
use crate::Geometry;
use serde_json::Value;
use std::fmt::Debug;

/// Represents a collection of points, used to store multiple discrete locations in 2D space.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	const TYPE_NAME: &'static str = "MultiPoint";

	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		items_to_coord_json(&self.0, precision)
	}

	fn into_geometry(self) -> Geometry {
		Geometry::MultiPoint(self)
	}
}

/// Provides methods to access and manage the internal vector of points for `MultiPointGeometry`.
impl CompositeGeometryTrait<PointGeometry> for MultiPointGeometry {
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

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPointGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn sample() -> MultiPointGeometry {
		MultiPointGeometry::from(&[[1, 2], [3, 4], [5, 6]])
	}

	#[test]
	fn to_coord_json() {
		assert_eq!(
			sample().to_coord_json(None),
			json!([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]])
		);
	}

	#[test]
	fn may_contain_empty_points() {
		let mp = MultiPointGeometry(vec![PointGeometry::from(&[1, 2]), PointGeometry::empty()]);
		assert_eq!(mp.to_coord_json(None), json!([[1.0, 2.0], []]));
	}

	#[test]
	fn composite_accessors() {
		let mut mp = MultiPointGeometry::new();
		assert!(mp.is_empty());
		mp.push(PointGeometry::from(&[1, 2]));
		mp.push(PointGeometry::from(&[3, 4]));
		assert_eq!(mp.len(), 2);
		assert_eq!(mp.first().and_then(PointGeometry::x), Some(1.0));
		assert_eq!(mp.last().and_then(PointGeometry::x), Some(3.0));
	}

	#[test]
	fn into_iter_keeps_order() {
		let xs: Vec<_> = sample().into_iter().filter_map(|p| p.x()).collect();
		assert_eq!(xs, vec![1.0, 3.0, 5.0]);
	}

	#[test]
	fn from_slice() {
		let data = [(1.0, 2.0), (3.0, 4.0)];
		assert_eq!(MultiPointGeometry::from(&data[..]).len(), 2);
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", MultiPointGeometry::from(&[[1, 2]])), "[[1.0, 2.0]]");
	}
}
