//! Crate-wide error type.

/// Everything that can stop a diagram from being drawn.
///
/// Load failures keep only the rendered message so the error can live inside a
/// reactive resource, which requires `Clone`.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
	/// No browser `window` is available.
	#[error("no window object available")]
	NoWindow,
	/// The request itself failed (network, CORS, aborted).
	#[error("failed to fetch {url}: {message}")]
	Fetch {
		/// Requested resource.
		url: String,
		/// Browser-reported reason.
		message: String,
	},
	/// The server answered with a non-success status.
	#[error("request for {url} returned HTTP {status}")]
	Status {
		/// Requested resource.
		url: String,
		/// HTTP status code.
		status: u16,
	},
	/// The body was not the JSON shape we expected.
	#[error("failed to decode {url}: {message}")]
	Decode {
		/// Requested resource.
		url: String,
		/// Decoder message.
		message: String,
	},
	/// Two nodes share the same `name`.
	#[error("duplicate node name: {name}")]
	DuplicateNode {
		/// The repeated name.
		name: String,
	},
	/// A link references a node name that is not in the node set.
	#[error("missing node: {name}")]
	MissingNode {
		/// The unresolved name.
		name: String,
	},
	/// The link graph contains a cycle.
	#[error("circular link")]
	CircularLink,
	/// `sample_path` and `path_type` have different lengths.
	#[error("metapath has {labels} sample labels but {types} path types")]
	MetapathShape {
		/// Length of `sample_path`.
		labels: usize,
		/// Length of `path_type`.
		types: usize,
	},
}

/// Result alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
