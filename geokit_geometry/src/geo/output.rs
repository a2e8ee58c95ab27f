//! The output seam: geometries are rendered by writers registered under a format tag.

use super::Geometry;
use crate::{GeometryError, Result};
use serde_json::Value;
use std::{collections::BTreeMap, fmt::Debug};

/// An output adapter that renders a geometry into its external representation.
pub trait GeometryWriter: Send + Sync {
	fn write_geometry(&self, geometry: &Geometry) -> Result<Value>;
}

/// Maps format tags such as `"json"` to the writers that produce them.
///
/// The registry is built once by the outer system and only read afterwards.
#[derive(Default)]
pub struct FormatRegistry {
	writers: BTreeMap<String, Box<dyn GeometryWriter>>,
}

impl FormatRegistry {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `writer` under `format`, replacing any writer registered before.
	pub fn register(&mut self, format: &str, writer: impl GeometryWriter + 'static) {
		log::debug!("register geometry writer for format '{format}'");
		self.writers.insert(format.to_owned(), Box::new(writer));
	}

	/// Builder variant of [`FormatRegistry::register`].
	#[must_use]
	pub fn with_writer(mut self, format: &str, writer: impl GeometryWriter + 'static) -> Self {
		self.register(format, writer);
		self
	}

	pub fn contains(&self, format: &str) -> bool {
		self.writers.contains_key(format)
	}

	/// Returns the registered format tags in sorted order.
	pub fn formats(&self) -> impl Iterator<Item = &str> {
		self.writers.keys().map(String::as_str)
	}

	/// Renders `geometry` with the writer registered for `format`.
	pub fn write(&self, geometry: &Geometry, format: &str) -> Result<Value> {
		let writer = self
			.writers
			.get(format)
			.ok_or_else(|| GeometryError::UnsupportedFormat(format.to_owned()))?;
		writer.write_geometry(geometry)
	}
}

impl Debug for FormatRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FormatRegistry")
			.field("formats", &self.formats().collect::<Vec<_>>())
			.finish()
	}
}
