use super::*;
use crate::{FormatRegistry, Result};
use serde_json::Value;
use std::fmt::Debug;

/// The closed set of geometry kinds.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(CollectionGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_empty_point() -> Self {
		Self::Point(PointGeometry::empty())
	}
	pub fn new_line_string<T>(value: Vec<T>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: Vec<Vec<T>>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: Vec<T>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: Vec<Vec<T>>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: Vec<Vec<Vec<T>>>) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	/// Builds a geometry collection; fails if `geometries` is empty.
	pub fn new_collection(geometries: Vec<Geometry>) -> Result<Self> {
		CollectionGeometry::new(geometries).map(Self::GeometryCollection)
	}

	/// Returns the GeoJSON `type` tag of the geometry.
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(g) => g.type_name(),
			Geometry::LineString(g) => g.type_name(),
			Geometry::Polygon(g) => g.type_name(),
			Geometry::MultiPoint(g) => g.type_name(),
			Geometry::MultiLineString(g) => g.type_name(),
			Geometry::MultiPolygon(g) => g.type_name(),
			Geometry::GeometryCollection(_) => CollectionGeometry::TYPE_NAME,
		}
	}

	pub fn is_collection(&self) -> bool {
		matches!(self, Geometry::GeometryCollection(_))
	}

	/// Returns the coordinate tree, or `None` for a geometry collection, which has none.
	pub fn to_coord_json(&self, precision: Option<u8>) -> Option<Value> {
		Some(match self {
			Geometry::Point(g) => g.to_coord_json(precision),
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiPoint(g) => g.to_coord_json(precision),
			Geometry::MultiLineString(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
			Geometry::GeometryCollection(_) => return None,
		})
	}

	/// Returns the ordered components as geometries.
	///
	/// Points have no components and return `None`. The components are cloned.
	pub fn components(&self) -> Option<Vec<Geometry>> {
		fn wrap<T: GeometryTrait>(items: &[T]) -> Vec<Geometry> {
			items.iter().cloned().map(T::into_geometry).collect()
		}

		match self {
			Geometry::Point(_) => None,
			Geometry::LineString(g) => Some(wrap(&g.0)),
			Geometry::Polygon(g) => Some(wrap(&g.0)),
			Geometry::MultiPoint(g) => Some(wrap(&g.0)),
			Geometry::MultiLineString(g) => Some(wrap(&g.0)),
			Geometry::MultiPolygon(g) => Some(wrap(&g.0)),
			Geometry::GeometryCollection(g) => Some(g.as_vec().clone()),
		}
	}

	/// Lifts single geometries into their multi counterpart. Multi geometries and collections
	/// are returned unchanged.
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => self,
			Geometry::GeometryCollection(_) => self,
		}
	}

	/// Renders the geometry with the writer registered for `format` in `registry`.
	pub fn output_as(&self, registry: &FormatRegistry, format: &str) -> Result<Value> {
		registry.write(self, format)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_into_geometry {
	($($t:ty),*) => {$(
		impl From<$t> for Geometry {
			fn from(geometry: $t) -> Self {
				geometry.into_geometry()
			}
		}
	)*}
}

impl_into_geometry!(
	PointGeometry,
	LineStringGeometry,
	PolygonGeometry,
	MultiPointGeometry,
	MultiLineStringGeometry,
	MultiPolygonGeometry
);

impl From<CollectionGeometry> for Geometry {
	fn from(geometry: CollectionGeometry) -> Self {
		Geometry::GeometryCollection(geometry)
	}
}
