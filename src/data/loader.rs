use log::{debug, info, warn};
use serde_json::Value;

use super::fetch::fetch_json;
use crate::components::metapath::{MetapathSample, StripScene};
use crate::components::sankey::{GraphDocument, SankeyGraph, SankeyLayout};
use crate::config::AppConfig;
use crate::error::Result;

/// Lays `doc` out for the configured Sankey canvas.
pub fn prepare_graph(doc: &GraphDocument, config: &AppConfig) -> Result<SankeyGraph> {
	SankeyLayout::for_canvas(config.sankey_width, config.sankey_height).compute(doc)
}

/// Fetches the graph and auxiliary documents together and lays out the graph
/// once both have settled. Only the graph document is required.
pub async fn load_graph(config: &AppConfig) -> Result<SankeyGraph> {
	let (graph, aux) = futures::join!(
		fetch_json::<GraphDocument>(&config.graph_url),
		fetch_json::<Value>(&config.aux_url),
	);

	match aux {
		Ok(value) => debug!(
			"auxiliary document {}: {} top-level entries",
			config.aux_url,
			entry_count(&value)
		),
		Err(err) => warn!("auxiliary document unavailable: {err}"),
	}

	let doc = graph?;
	info!(
		"loaded {}: {} nodes, {} links",
		config.graph_url,
		doc.nodes.len(),
		doc.links.len()
	);
	prepare_graph(&doc, config)
}

/// Fetches the metapath sample and computes the strip geometry.
pub async fn load_metapath(config: &AppConfig) -> Result<StripScene> {
	let sample = fetch_json::<MetapathSample>(&config.metapath_url).await?;
	info!(
		"loaded metapath {} ({} paths, {} steps)",
		sample.path_string,
		sample.count,
		sample.len()
	);
	StripScene::build(&sample)
}

fn entry_count(value: &Value) -> usize {
	match value {
		Value::Object(map) => map.len(),
		Value::Array(items) => items.len(),
		Value::Null => 0,
		_ => 1,
	}
}
