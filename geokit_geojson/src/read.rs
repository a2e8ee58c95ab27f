use geokit_geometry::{Geometry, PointGeometry, Result};
use serde_json::Value;
use std::{fmt::Debug, io::Read, sync::Arc};

/// Nesting limit of GeoJSON objects, matching the recursion limit of `serde_json`.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// A pure function applied to every decoded, non-empty point.
pub type PointTransform = Arc<dyn Fn(PointGeometry) -> PointGeometry + Send + Sync>;

/// Input accepted by [`GeoJsonReader::read`]: GeoJSON text or an already decoded value.
#[derive(Clone, Copy, Debug)]
pub enum GeoJsonSource<'a> {
	Text(&'a str),
	Value(&'a Value),
}

impl<'a> From<&'a str> for GeoJsonSource<'a> {
	fn from(text: &'a str) -> Self {
		GeoJsonSource::Text(text)
	}
}

impl<'a> From<&'a String> for GeoJsonSource<'a> {
	fn from(text: &'a String) -> Self {
		GeoJsonSource::Text(text)
	}
}

impl<'a> From<&'a Value> for GeoJsonSource<'a> {
	fn from(value: &'a Value) -> Self {
		GeoJsonSource::Value(value)
	}
}

/// Reads GeoJSON into a single [`Geometry`].
///
/// Configure it once and share it freely: the reader holds no mutable state.
#[derive(Clone)]
pub struct GeoJsonReader {
	pub(crate) point_transform: Option<PointTransform>,
	pub(crate) max_depth: usize,
}

impl GeoJsonReader {
	#[must_use]
	pub fn new() -> Self {
		Self {
			point_transform: None,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}

	/// Applies `transform` exactly once to every non-empty point the reader constructs,
	/// e.g. to reproject coordinates.
	#[must_use]
	pub fn with_point_transform<F>(mut self, transform: F) -> Self
	where
		F: Fn(PointGeometry) -> PointGeometry + Send + Sync + 'static,
	{
		self.point_transform = Some(Arc::new(transform));
		self
	}

	/// Limits how deeply GeoJSON objects may be nested before reading fails.
	#[must_use]
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Reads GeoJSON text or an already decoded value.
	pub fn read<'a>(&self, input: impl Into<GeoJsonSource<'a>>) -> Result<Geometry> {
		match input.into() {
			GeoJsonSource::Text(text) => self.read_str(text),
			GeoJsonSource::Value(value) => self.read_value(value),
		}
	}

	/// Decodes `json` and reads the result. Fails with `MalformedInput` if `json` is not valid JSON.
	pub fn read_str(&self, json: &str) -> Result<Geometry> {
		let value: Value = serde_json::from_str(json)?;
		self.read_value(&value)
	}

	pub fn read_value(&self, value: &Value) -> Result<Geometry> {
		self.read_object(value, 0)
	}

	/// Reads all of `reader` and parses it as GeoJSON text. Fails with `Io` if reading fails and
	/// with `MalformedInput` if the bytes are not valid UTF-8 JSON.
	pub fn read_reader(&self, mut reader: impl Read) -> Result<Geometry> {
		let mut buffer = Vec::new();
		reader.read_to_end(&mut buffer)?;
		let value: Value = serde_json::from_slice(&buffer)?;
		self.read_value(&value)
	}
}

impl Default for GeoJsonReader {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for GeoJsonReader {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("GeoJsonReader")
			.field("point_transform", &self.point_transform.is_some())
			.field("max_depth", &self.max_depth)
			.finish()
	}
}
