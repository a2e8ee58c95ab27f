use crate::Geometry;
use serde_json::Value;
use std::fmt::Debug;

/// Defines the basic interface shared by every concrete geometry kind.
pub trait GeometryTrait: Debug + Clone + PartialEq + Sized {
	/// The GeoJSON `type` tag of this geometry kind, e.g. `"MultiPolygon"`.
	const TYPE_NAME: &'static str;

	/// Converts the geometry into its JSON coordinate tree.
	/// Optionally rounds coordinate values to the given precision.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;

	/// Wraps the geometry into the matching [`Geometry`] variant.
	fn into_geometry(self) -> Geometry;

	/// Returns the GeoJSON `type` tag of this geometry.
	fn type_name(&self) -> &'static str {
		Self::TYPE_NAME
	}
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `PointGeometry` can be converted into a `MultiPointGeometry`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Represents composite geometries that are sequences of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns an iterator over owned elements of the composite geometry.
	fn into_iter(self) -> impl Iterator<Item = Item> {
		self.into_inner().into_iter()
	}

	/// Checks whether the composite geometry contains no elements.
	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Builds the JSON coordinate tree of a composite geometry from the trees of its items.
pub(crate) fn items_to_coord_json<T: GeometryTrait>(items: &[T], precision: Option<u8>) -> Value {
	Value::Array(items.iter().map(|item| item.to_coord_json(precision)).collect())
}
