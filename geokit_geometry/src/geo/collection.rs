use super::Geometry;
use crate::{GeometryError, Result};
use std::fmt::Debug;

/// A heterogeneous, ordered collection of geometries, possibly containing nested collections.
///
/// A collection always holds at least one geometry.
#[derive(Clone, PartialEq)]
pub struct CollectionGeometry(Vec<Geometry>);

impl CollectionGeometry {
	pub const TYPE_NAME: &'static str = "GeometryCollection";

	/// Wraps `geometries` into a collection. Fails with `InvalidGeometry` if the list is empty.
	pub fn new(geometries: Vec<Geometry>) -> Result<Self> {
		if geometries.is_empty() {
			return Err(GeometryError::invalid(
				"GeometryCollection with no component geometries",
			));
		}
		Ok(Self(geometries))
	}

	pub fn as_vec(&self) -> &Vec<Geometry> {
		&self.0
	}

	pub fn into_inner(self) -> Vec<Geometry> {
		self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Geometry> {
		self.0.iter()
	}

	pub fn push(&mut self, geometry: Geometry) {
		self.0.push(geometry);
	}
}

impl<'a> IntoIterator for &'a CollectionGeometry {
	type Item = &'a Geometry;
	type IntoIter = std::slice::Iter<'a, Geometry>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl Debug for CollectionGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rejects_empty_list() {
		let err = CollectionGeometry::new(Vec::new()).unwrap_err();
		assert_eq!(
			err.to_string(),
			"invalid geometry: GeometryCollection with no component geometries"
		);
	}

	#[test]
	fn keeps_order_and_nesting() -> anyhow::Result<()> {
		let inner = CollectionGeometry::new(vec![
			Geometry::new_point([1.0, 1.0]),
			Geometry::new_point([2.0, 2.0]),
		])?;
		let mut outer = CollectionGeometry::new(vec![Geometry::new_point([0.0, 0.0]), inner.into()])?;
		outer.push(Geometry::new_line_string(vec![[0.0, 0.0], [3.0, 3.0]]));

		let names: Vec<_> = outer.iter().map(Geometry::type_name).collect();
		assert_eq!(names, vec!["Point", "GeometryCollection", "LineString"]);
		assert_eq!(outer.as_vec().len(), 3);
		Ok(())
	}
}
