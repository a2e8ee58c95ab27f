use geokit_geometry::{Geometry, GeometryWriter, Result};
use serde_json::{Map, Value};

/// Writes geometries as GeoJSON geometry objects.
///
/// Features and feature collections are never produced; only `{"type", "coordinates"}` and
/// `{"type": "GeometryCollection", "geometries"}` objects.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoJsonWriter {
	precision: Option<u8>,
}

impl GeoJsonWriter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Rounds every coordinate to `precision` decimal places.
	#[must_use]
	pub fn with_precision(mut self, precision: u8) -> Self {
		self.precision = Some(precision);
		self
	}

	pub fn write(&self, geometry: &Geometry) -> Value {
		let mut object = Map::new();
		object.insert("type".to_owned(), Value::from(geometry.type_name()));

		if let Geometry::GeometryCollection(collection) = geometry {
			let geometries = collection.iter().map(|component| self.write(component)).collect();
			object.insert("geometries".to_owned(), geometries);
		} else if let Some(coordinates) = geometry.to_coord_json(self.precision) {
			object.insert("coordinates".to_owned(), coordinates);
		}

		Value::Object(object)
	}

	/// Writes the geometry as compact GeoJSON text.
	pub fn write_string(&self, geometry: &Geometry) -> String {
		self.write(geometry).to_string()
	}
}

impl GeometryWriter for GeoJsonWriter {
	fn write_geometry(&self, geometry: &Geometry) -> Result<Value> {
		Ok(self.write(geometry))
	}
}
