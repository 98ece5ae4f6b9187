use serde::Deserialize;

/// A node as it arrives in the graph document.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NodeRecord {
	/// Unique node identity.
	pub name: String,
	/// Magnitude driving the rectangle width.
	#[serde(default)]
	pub n: f64,
}

/// A link as it arrives in the graph document, endpoints named by node `name`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LinkRecord {
	/// Name of the source node.
	pub source: String,
	/// Name of the target node.
	pub target: String,
	/// Flow magnitude.
	pub value: f64,
}

/// The `{nodes, links}` document consumed by the layout.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct GraphDocument {
	/// Input nodes, in render order.
	#[serde(default)]
	pub nodes: Vec<NodeRecord>,
	/// Input links, in render order.
	#[serde(default)]
	pub links: Vec<LinkRecord>,
}

/// A node after layout, occupying `x0..x1` by `y0..y1`.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	/// Position in [`SankeyGraph::nodes`].
	pub index: usize,
	pub name: String,
	/// Magnitude copied from the input record.
	pub n: f64,
	/// Larger of the incoming and outgoing flow totals.
	pub value: f64,
	/// Steps from the furthest source.
	pub depth: usize,
	/// Steps to the furthest sink.
	pub height: usize,
	/// Column the node was placed in.
	pub layer: usize,
	pub x0: f64,
	pub y0: f64,
	pub x1: f64,
	pub y1: f64,
	/// Indices of links leaving this node.
	pub source_links: Vec<usize>,
	/// Indices of links entering this node.
	pub target_links: Vec<usize>,
}

/// A link after layout, endpoints resolved to node indices.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	/// Position in [`SankeyGraph::links`].
	pub index: usize,
	/// Index of the source node.
	pub source: usize,
	/// Index of the target node.
	pub target: usize,
	/// Flow magnitude.
	pub value: f64,
	/// Stroke width assigned by the layout.
	pub width: f64,
	/// Vertical centre where the link leaves its source.
	pub y0: f64,
	/// Vertical centre where the link enters its target.
	pub y1: f64,
}

/// Laid-out graph. Every link endpoint indexes into `nodes`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SankeyGraph {
	/// Positioned nodes.
	pub nodes: Vec<GraphNode>,
	/// Links with widths and attachment points.
	pub links: Vec<GraphLink>,
}

impl SankeyGraph {
	/// Source node of `link`.
	pub fn source(&self, link: &GraphLink) -> &GraphNode {
		&self.nodes[link.source]
	}

	/// Target node of `link`.
	pub fn target(&self, link: &GraphLink) -> &GraphNode {
		&self.nodes[link.target]
	}

	/// Looks a node up by name.
	pub fn node(&self, name: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|node| node.name == name)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_graph_document() {
		let doc: GraphDocument = serde_json::from_str(
			r#"{
				"nodes": [{"name": "NGLY1", "n": 12}, {"name": "ENGASE"}],
				"links": [{"source": "NGLY1", "target": "ENGASE", "value": 3.5}]
			}"#,
		)
		.unwrap();
		assert_eq!(doc.nodes.len(), 2);
		assert_eq!(doc.nodes[0].n, 12.0);
		assert_eq!(doc.nodes[1].n, 0.0);
		assert_eq!(doc.links[0].target, "ENGASE");
		assert_eq!(doc.links[0].value, 3.5);
	}

	#[test]
	fn missing_value_is_a_decode_error() {
		let res = serde_json::from_str::<GraphDocument>(
			r#"{"nodes": [], "links": [{"source": "a", "target": "b"}]}"#,
		);
		assert!(res.is_err());
	}
}
