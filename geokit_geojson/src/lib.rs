//! GeoJSON reader and writer for the `geokit_geometry` model.
//!
//! [`GeoJsonReader`] turns GeoJSON text or an already decoded [`serde_json::Value`] into a single
//! [`Geometry`]. Features are unwrapped to their geometry, and feature collections are reduced
//! into one geometry with [`Geometry::reduce`]. [`GeoJsonWriter`] is the inverse for bare
//! geometries and is registered as the `"json"` format in [`default_registry`].

mod parse;
mod read;
mod write;

pub use read::*;
pub use write::*;

use geokit_geometry::{FormatRegistry, Geometry, Result};
use serde_json::Value;

/// The format tag the GeoJSON writer is registered under.
pub const JSON_FORMAT: &str = "json";

/// Returns a registry with the GeoJSON writer registered as `"json"`.
pub fn default_registry() -> FormatRegistry {
	FormatRegistry::new().with_writer(JSON_FORMAT, GeoJsonWriter::new())
}

/// Reads GeoJSON text with the default reader configuration.
pub fn read_geojson(json: &str) -> Result<Geometry> {
	GeoJsonReader::new().read_str(json)
}

/// Reads an already decoded GeoJSON value with the default reader configuration.
pub fn read_geojson_value(value: &Value) -> Result<Geometry> {
	GeoJsonReader::new().read_value(value)
}

/// Writes a geometry as a GeoJSON geometry object.
pub fn write_geojson(geometry: &Geometry) -> Value {
	GeoJsonWriter::new().write(geometry)
}

#[cfg(test)]
mod tests {
	use super::*;
	use geokit_geometry::GeometryError;
	use serde_json::json;

	#[test]
	fn output_as_json() -> anyhow::Result<()> {
		let registry = default_registry();
		let point = Geometry::new_point([1.0, 2.0]);
		assert_eq!(
			point.output_as(&registry, JSON_FORMAT)?,
			json!({"type": "Point", "coordinates": [1.0, 2.0]})
		);
		Ok(())
	}

	#[test]
	fn output_as_unregistered_format() {
		let result = Geometry::new_point([1.0, 2.0]).output_as(&default_registry(), "wkt");
		assert!(matches!(result, Err(GeometryError::UnsupportedFormat(_))));
	}

	#[test]
	fn free_functions_round_trip() -> anyhow::Result<()> {
		let geometry = read_geojson(r#"{"type":"LineString","coordinates":[[0,0],[1,2]]}"#)?;
		assert_eq!(read_geojson_value(&write_geojson(&geometry))?, geometry);
		Ok(())
	}
}
