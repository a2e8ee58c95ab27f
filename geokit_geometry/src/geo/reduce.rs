use super::*;
use crate::{GeometryError, Result};
use itertools::Itertools;

impl Geometry {
	/// Collapses a list of geometries into a single geometry.
	///
	/// - a single geometry is returned unwrapped,
	/// - geometries sharing one type are merged into the matching multi geometry
	///   (points into a `MultiPoint`, multi points into one `MultiPoint`, and so on),
	/// - geometry collections, and lists mixing types, are wrapped into a `GeometryCollection`
	///   as they are.
	///
	/// Fails with `InvalidGeometry` if `geometries` is empty.
	pub fn reduce(geometries: Vec<Geometry>) -> Result<Geometry> {
		use Geometry::*;

		if geometries.len() <= 1 {
			return geometries
				.into_iter()
				.next()
				.ok_or_else(|| GeometryError::invalid("cannot reduce an empty list of geometries"));
		}

		if !geometries.iter().map(std::mem::discriminant).all_equal() {
			log::debug!("reduce {} mixed geometries into a GeometryCollection", geometries.len());
			return Geometry::new_collection(geometries);
		}

		log::debug!(
			"reduce {} geometries of type {}",
			geometries.len(),
			geometries[0].type_name()
		);

		let mut rest = geometries.into_iter();
		let Some(first) = rest.next() else {
			return Err(GeometryError::invalid("cannot reduce an empty list of geometries"));
		};

		Ok(match first {
			Point(p) => MultiPoint(MultiPointGeometry(merge(vec![p], rest, |g| match g {
				Point(p) => Ok(vec![p]),
				other => Err(other),
			})?)),
			MultiPoint(m) => MultiPoint(MultiPointGeometry(merge(m.0, rest, |g| match g {
				MultiPoint(m) => Ok(m.0),
				other => Err(other),
			})?)),
			LineString(l) => MultiLineString(MultiLineStringGeometry(merge(vec![l], rest, |g| match g {
				LineString(l) => Ok(vec![l]),
				other => Err(other),
			})?)),
			MultiLineString(m) => MultiLineString(MultiLineStringGeometry(merge(m.0, rest, |g| match g {
				MultiLineString(m) => Ok(m.0),
				other => Err(other),
			})?)),
			Polygon(p) => MultiPolygon(MultiPolygonGeometry(merge(vec![p], rest, |g| match g {
				Polygon(p) => Ok(vec![p]),
				other => Err(other),
			})?)),
			MultiPolygon(m) => MultiPolygon(MultiPolygonGeometry(merge(m.0, rest, |g| match g {
				MultiPolygon(m) => Ok(m.0),
				other => Err(other),
			})?)),
			GeometryCollection(c) => {
				return Geometry::new_collection(std::iter::once(GeometryCollection(c)).chain(rest).collect());
			}
		})
	}
}

/// Appends the parts of every remaining geometry to `merged`. Fails on a geometry `parts` rejects.
fn merge<T>(
	mut merged: Vec<T>,
	rest: impl Iterator<Item = Geometry>,
	parts: impl Fn(Geometry) -> Result<Vec<T>, Geometry>,
) -> Result<Vec<T>> {
	for geometry in rest {
		merged.extend(parts(geometry).map_err(|other| {
			GeometryError::invalid(format!("cannot merge {} with other geometry types", other.type_name()))
		})?);
	}
	Ok(merged)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn empty_list_fails() {
		assert!(matches!(
			Geometry::reduce(vec![]),
			Err(GeometryError::InvalidGeometry(_))
		));
	}

	#[test]
	fn single_geometry_is_unwrapped() -> anyhow::Result<()> {
		let point = Geometry::new_point([1.0, 2.0]);
		assert_eq!(Geometry::reduce(vec![point.clone()])?, point);

		let collection = Geometry::new_collection(vec![point])?;
		assert_eq!(Geometry::reduce(vec![collection.clone()])?, collection);
		Ok(())
	}

	#[test]
	fn points_become_multi_point() -> anyhow::Result<()> {
		let reduced = Geometry::reduce(vec![
			Geometry::new_point([0.0, 0.0]),
			Geometry::new_point([1.0, 1.0]),
			Geometry::new_point([2.0, 2.0]),
		])?;
		assert_eq!(
			reduced,
			Geometry::new_multi_point(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])
		);
		Ok(())
	}

	#[test]
	fn lines_and_polygons_become_multi() -> anyhow::Result<()> {
		let a = vec![[0.0, 0.0], [1.0, 1.0]];
		let b = vec![[2.0, 2.0], [3.0, 3.0]];
		assert_eq!(
			Geometry::reduce(vec![
				Geometry::new_line_string(a.clone()),
				Geometry::new_line_string(b.clone())
			])?,
			Geometry::new_multi_line_string(vec![a.clone(), b.clone()])
		);
		assert_eq!(
			Geometry::reduce(vec![
				Geometry::new_polygon(vec![a.clone()]),
				Geometry::new_polygon(vec![b.clone()])
			])?,
			Geometry::new_multi_polygon(vec![vec![a], vec![b]])
		);
		Ok(())
	}

	#[test]
	fn multi_geometries_are_merged() -> anyhow::Result<()> {
		let reduced = Geometry::reduce(vec![
			Geometry::new_multi_point(vec![[0.0, 0.0], [1.0, 1.0]]),
			Geometry::new_multi_point(vec![[2.0, 2.0]]),
		])?;
		assert_eq!(
			reduced,
			Geometry::new_multi_point(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]])
		);

		let reduced = Geometry::reduce(vec![Geometry::new_example(), Geometry::new_example()])?;
		assert_eq!(reduced.components().map(|c| c.len()), Some(4));
		Ok(())
	}

	#[test]
	fn mixed_geometries_become_collection() -> anyhow::Result<()> {
		let point = Geometry::new_point([0.0, 0.0]);
		let line = Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]);
		let reduced = Geometry::reduce(vec![point.clone(), line.clone()])?;
		assert_eq!(reduced, Geometry::new_collection(vec![point, line])?);
		Ok(())
	}

	#[test]
	fn collections_are_wrapped_as_is() -> anyhow::Result<()> {
		let a = Geometry::new_collection(vec![Geometry::new_point([0.0, 0.0])])?;
		let b = Geometry::new_collection(vec![Geometry::new_empty_point()])?;
		let reduced = Geometry::reduce(vec![a.clone(), b.clone()])?;
		assert_eq!(reduced, Geometry::new_collection(vec![a, b])?);
		Ok(())
	}

	#[rstest]
	#[case::point(Geometry::new_point([1.0, 2.0]), "MultiPoint", 3)]
	#[case::line_string(Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]]), "MultiLineString", 3)]
	#[case::polygon(Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [0.0, 0.0]]]), "MultiPolygon", 3)]
	#[case::multi_point(Geometry::new_multi_point(vec![[0.0, 0.0], [1.0, 1.0]]), "MultiPoint", 6)]
	#[case::multi_line_string(Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]]]), "MultiLineString", 3)]
	#[case::multi_polygon(Geometry::new_example(), "MultiPolygon", 6)]
	#[case::collection(Geometry::new_collection(vec![Geometry::new_empty_point()]).unwrap(), "GeometryCollection", 3)]
	fn homogeneous_kinds(#[case] geometry: Geometry, #[case] type_name: &str, #[case] components: usize) -> anyhow::Result<()> {
		let reduced = Geometry::reduce(vec![geometry.clone(), geometry.clone(), geometry])?;
		assert_eq!(reduced.type_name(), type_name);
		assert_eq!(reduced.components().map(|c| c.len()), Some(components));
		Ok(())
	}
}
