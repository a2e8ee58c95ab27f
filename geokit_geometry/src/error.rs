use thiserror::Error;

/// Errors raised while building, reading or writing geometries.
///
/// Every variant is terminal for the call that produced it.
#[derive(Debug, Error)]
pub enum GeometryError {
	/// The input text could not be decoded as JSON.
	#[error("malformed input: {0}")]
	MalformedInput(#[from] serde_json::Error),
	/// The decoded value does not describe a valid geometry.
	#[error("invalid geometry: {0}")]
	InvalidGeometry(String),
	/// The `type` tag does not name a known geometry kind.
	#[error("unsupported geometry type '{0}'")]
	UnsupportedGeometryType(String),
	/// No writer is registered for the requested output format.
	#[error("unsupported output format '{0}'")]
	UnsupportedFormat(String),
	/// Reading the input failed.
	#[error("failed to read input")]
	Io(#[from] std::io::Error),
}

impl GeometryError {
	/// Shorthand for [`GeometryError::InvalidGeometry`].
	pub fn invalid(message: impl Into<String>) -> Self {
		GeometryError::InvalidGeometry(message.into())
	}
}

pub type Result<T, E = GeometryError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_messages() {
		assert_eq!(
			GeometryError::invalid("no type").to_string(),
			"invalid geometry: no type"
		);
		assert_eq!(
			GeometryError::UnsupportedGeometryType("Circle".into()).to_string(),
			"unsupported geometry type 'Circle'"
		);
		assert_eq!(
			GeometryError::UnsupportedFormat("wkt".into()).to_string(),
			"unsupported output format 'wkt'"
		);
	}

	#[test]
	fn from_serde_json_error() {
		let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		assert!(matches!(GeometryError::from(err), GeometryError::MalformedInput(_)));
	}
}
