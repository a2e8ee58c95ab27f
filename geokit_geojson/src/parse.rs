use crate::GeoJsonReader;
use geokit_geometry::{
	CollectionGeometry, Coordinates, Geometry, GeometryError, LineStringGeometry, MultiLineStringGeometry,
	MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, Result,
};
use serde_json::{Map, Value};

type JsonObject = Map<String, Value>;

impl GeoJsonReader {
	/// Reads any GeoJSON object: a feature collection, a feature or a bare geometry.
	pub(crate) fn read_object(&self, value: &Value, depth: usize) -> Result<Geometry> {
		self.check_depth(depth)?;
		let (object, object_type) = expect_object(value)?;

		match object_type {
			"FeatureCollection" => {
				let features = object
					.get("features")
					.and_then(Value::as_array)
					.ok_or_else(|| GeometryError::invalid("FeatureCollection must have a 'features' array"))?;
				log::trace!("read FeatureCollection with {} features", features.len());

				let geometries = features
					.iter()
					.map(|feature| self.read_feature(feature, depth + 1))
					.collect::<Result<Vec<_>>>()?;
				Geometry::reduce(geometries)
			}
			"Feature" => self.read_feature_geometry(object, depth),
			_ => self.read_geometry_object(object, object_type, depth),
		}
	}

	fn read_feature(&self, value: &Value, depth: usize) -> Result<Geometry> {
		self.check_depth(depth)?;
		let (object, object_type) = expect_object(value)?;
		if object_type != "Feature" {
			return Err(GeometryError::invalid(format!(
				"FeatureCollection entries must be of type 'Feature', found '{object_type}'"
			)));
		}
		self.read_feature_geometry(object, depth)
	}

	/// Everything of a feature except its geometry is ignored.
	fn read_feature_geometry(&self, feature: &JsonObject, depth: usize) -> Result<Geometry> {
		let geometry = feature
			.get("geometry")
			.filter(|geometry| !geometry.is_null())
			.ok_or_else(|| GeometryError::invalid("Feature is missing 'geometry'"))?;
		self.read_object(geometry, depth + 1)
	}

	fn read_geometry(&self, value: &Value, depth: usize) -> Result<Geometry> {
		self.check_depth(depth)?;
		let (object, geometry_type) = expect_object(value)?;
		self.read_geometry_object(object, geometry_type, depth)
	}

	fn read_geometry_object(&self, object: &JsonObject, geometry_type: &str, depth: usize) -> Result<Geometry> {
		log::trace!("read geometry '{geometry_type}'");

		if geometry_type == CollectionGeometry::TYPE_NAME {
			return self.read_collection(object, depth);
		}

		let coordinates = || {
			object
				.get("coordinates")
				.ok_or_else(|| GeometryError::invalid(format!("{geometry_type} must have 'coordinates'")))
		};

		Ok(match geometry_type {
			"Point" => Geometry::Point(match object.get("coordinates") {
				Some(value) => self.read_point(value)?,
				None => PointGeometry::empty(),
			}),
			"LineString" => Geometry::LineString(self.read_line_string(coordinates()?)?),
			"Polygon" => Geometry::Polygon(self.read_polygon(coordinates()?)?),
			"MultiPoint" => Geometry::MultiPoint(MultiPointGeometry(self.read_points(coordinates()?)?)),
			"MultiLineString" => Geometry::MultiLineString(MultiLineStringGeometry(
				read_list(coordinates()?, |v| self.read_line_string(v))?,
			)),
			"MultiPolygon" => Geometry::MultiPolygon(MultiPolygonGeometry(
				read_list(coordinates()?, |v| self.read_polygon(v))?,
			)),
			_ => return Err(GeometryError::UnsupportedGeometryType(geometry_type.to_owned())),
		})
	}

	fn read_collection(&self, object: &JsonObject, depth: usize) -> Result<Geometry> {
		let geometries: &[Value] = match object.get("geometries") {
			Some(Value::Array(list)) => list,
			None | Some(Value::Null) => &[],
			Some(other) => {
				return Err(GeometryError::invalid(format!(
					"'geometries' must be an array, found {}",
					type_name(other)
				)));
			}
		};

		let components = geometries
			.iter()
			.map(|geometry| self.read_geometry(geometry, depth + 1))
			.collect::<Result<Vec<_>>>()?;
		CollectionGeometry::new(components).map(Geometry::GeometryCollection)
	}

	/// Builds a point from the first two numbers of a position. `null` and `[]` give the empty point.
	fn read_point(&self, value: &Value) -> Result<PointGeometry> {
		let numbers = match value {
			Value::Null => return Ok(PointGeometry::empty()),
			Value::Array(numbers) => numbers,
			other => {
				return Err(GeometryError::invalid(format!(
					"a position must be an array, found {}",
					type_name(other)
				)));
			}
		};

		match numbers.as_slice() {
			[] => Ok(PointGeometry::empty()),
			[x, y, rest @ ..] => {
				if !rest.is_empty() {
					log::trace!("ignore {} extra values of position", rest.len());
				}
				let point = PointGeometry::new(Coordinates::new(as_number(x)?, as_number(y)?));
				Ok(match &self.point_transform {
					Some(transform) => transform.as_ref()(point),
					None => point,
				})
			}
			[_] => Err(GeometryError::invalid("a position must have at least two values")),
		}
	}

	fn read_points(&self, value: &Value) -> Result<Vec<PointGeometry>> {
		read_list(value, |v| self.read_point(v))
	}

	fn read_line_string(&self, value: &Value) -> Result<LineStringGeometry> {
		self.read_points(value).map(LineStringGeometry)
	}

	fn read_polygon(&self, value: &Value) -> Result<PolygonGeometry> {
		read_list(value, |v| self.read_line_string(v)).map(PolygonGeometry)
	}

	fn check_depth(&self, depth: usize) -> Result<()> {
		if depth > self.max_depth {
			return Err(GeometryError::invalid(format!(
				"GeoJSON objects are nested deeper than {} levels",
				self.max_depth
			)));
		}
		Ok(())
	}
}

/// Reads every entry of a coordinate array with `read_item`.
fn read_list<T>(value: &Value, read_item: impl Fn(&Value) -> Result<T>) -> Result<Vec<T>> {
	match value {
		Value::Array(list) => list.iter().map(read_item).collect(),
		other => Err(GeometryError::invalid(format!(
			"coordinates must be an array, found {}",
			type_name(other)
		))),
	}
}

/// Checks that `value` is an object with a string `type` and returns both.
fn expect_object(value: &Value) -> Result<(&JsonObject, &str)> {
	let object = value.as_object().ok_or_else(|| {
		GeometryError::invalid(format!("expected a GeoJSON object, found {}", type_name(value)))
	})?;
	let object_type = object
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| GeometryError::invalid("GeoJSON object must have a string 'type'"))?;
	Ok((object, object_type))
}

fn as_number(value: &Value) -> Result<f64> {
	value
		.as_f64()
		.ok_or_else(|| GeometryError::invalid(format!("expected a number, found {}", type_name(value))))
}

fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Array(_) => "an array",
		Value::Bool(_) => "a boolean",
		Value::Null => "null",
		Value::Number(_) => "a number",
		Value::Object(_) => "an object",
		Value::String(_) => "a string",
	}
}
