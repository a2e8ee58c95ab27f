use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use crate::Geometry;
use serde_json::Value;
use std::fmt::Debug;

/// A single position, or the "empty" point that carries no coordinates at all.
///
/// The empty point is a valid geometry: GeoJSON writes it as `"coordinates": []`.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Option<Coordinates>);

impl PointGeometry {
	/// Constructs a new `PointGeometry` at the given position.
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(Some(c))
	}
	/// Constructs the empty point.
	#[must_use]
	pub fn empty() -> Self {
		Self(None)
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_none()
	}
	/// Returns the x component, or `None` for the empty point.
	#[must_use]
	pub fn x(&self) -> Option<f64> {
		self.0.map(|c| c.x())
	}
	/// Returns the y component, or `None` for the empty point.
	#[must_use]
	pub fn y(&self) -> Option<f64> {
		self.0.map(|c| c.y())
	}
	#[must_use]
	pub fn as_coord(&self) -> Option<&Coordinates> {
		self.0.as_ref()
	}
}

impl GeometryTrait for PointGeometry {
	const TYPE_NAME: &'static str = "Point";

	/// Returns `[x, y]`, or `[]` for the empty point.
	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		match &self.0 {
			Some(c) => c.to_json(precision),
			None => Value::Array(Vec::new()),
		}
	}

	fn into_geometry(self) -> Geometry {
		Geometry::Point(self)
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.0 {
			Some(c) => c.fmt(f),
			None => f.write_str("[]"),
		}
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Some(Coordinates::from(value)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;
	use serde_json::json;

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), Some(1.0));
		assert_eq!(point.y(), Some(2.0));
		assert_eq!(point.as_coord(), Some(&Coordinates::new(1.0, 2.0)));
		assert!(!point.is_empty());
	}

	#[test]
	fn empty_point() {
		let point = PointGeometry::empty();
		assert!(point.is_empty());
		assert_eq!(point.x(), None);
		assert_eq!(point.as_coord(), None);
		assert_eq!(point.to_coord_json(None), json!([]));
		assert_eq!(format!("{point:?}"), "[]");
	}

	#[test]
	fn eq_and_ne() {
		assert_eq!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[1, 2]));
		assert_ne!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[3, 4]));
		assert_ne!(PointGeometry::from(&[0, 0]), PointGeometry::empty());
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn to_coord_json() {
		assert_eq!(PointGeometry::from([1.5, 2.5]).to_coord_json(None), json!([1.5, 2.5]));
		assert_eq!(
			PointGeometry::from([1.23456, 2.34567]).to_coord_json(Some(2)),
			json!([1.23, 2.35])
		);
	}

	#[test]
	fn type_name() {
		assert_eq!(PointGeometry::empty().type_name(), "Point");
	}

	#[test]
	fn into_multi() {
		let p = PointGeometry::from(&[1, 2]);
		let multi = p.clone().into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.first(), Some(&p));
	}
}
