//! Canvas sizes and data locations, read once from the host page.

use log::{debug, warn};

/// Page-level settings.
///
/// Every field can be overridden from a `data-*` attribute on `<body>`:
///
/// ```html
/// <body data-sankey-width="1200" data-graph-url="/data/ngly1.json">
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
	/// Width of the Sankey canvas.
	pub sankey_width: f64,
	/// Height of the Sankey canvas.
	pub sankey_height: f64,
	/// Width of the metapath strip canvas.
	pub strip_width: f64,
	/// Height of the metapath strip canvas.
	pub strip_height: f64,
	/// Graph document (`{nodes, links}`).
	pub graph_url: String,
	/// Auxiliary document, fetched alongside the graph and only logged.
	pub aux_url: String,
	/// Metapath sample document.
	pub metapath_url: String,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			sankey_width: 960.0,
			sankey_height: 600.0,
			strip_width: 960.0,
			strip_height: 150.0,
			graph_url: "/data/test.json".into(),
			aux_url: "/data/sm.json".into(),
			metapath_url: "/data/test-metapaths.json".into(),
		}
	}
}

impl AppConfig {
	/// Reads overrides from the document body, falling back to defaults.
	pub fn from_document() -> Self {
		let body = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body());
		let config = match body {
			Some(body) => Self::default().with_attributes(|name| body.get_attribute(name)),
			None => Self::default(),
		};
		debug!("config: {config:?}");
		config
	}

	/// Applies overrides from `lookup`, which maps an attribute name to its value.
	/// Sizes that don't parse as positive numbers are ignored.
	pub fn with_attributes(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		let size = |name: &str, current: &mut f64| {
			let Some(raw) = lookup(name) else {
				return;
			};
			match raw.trim().parse::<f64>() {
				Ok(v) if v.is_finite() && v > 0.0 => *current = v,
				_ => warn!("ignoring {name}={raw:?}: not a positive number"),
			}
		};
		size("data-sankey-width", &mut self.sankey_width);
		size("data-sankey-height", &mut self.sankey_height);
		size("data-strip-width", &mut self.strip_width);
		size("data-strip-height", &mut self.strip_height);

		if let Some(url) = lookup("data-graph-url") {
			self.graph_url = url;
		}
		if let Some(url) = lookup("data-aux-url") {
			self.aux_url = url;
		}
		if let Some(url) = lookup("data-metapath-url") {
			self.metapath_url = url;
		}
		self
	}
}
