use super::format::{fmt, link_title, node_title};
use super::types::{GraphLink, GraphNode, SankeyGraph};

/// Rectangle fill shared by every node.
pub const NODE_FILL: &str = "#ff6574";
/// Opacity applied to every link path.
pub const LINK_OPACITY: f64 = 0.05;
/// Gap between a rectangle and its label.
const LABEL_GAP: f64 = 6.0;
/// Rectangle width for nodes whose magnitude exceeds [`MAX_UNCAPPED_N`].
const CAPPED_WIDTH: f64 = 15.0;
const MAX_UNCAPPED_N: f64 = 400.0;
const WIDTH_PER_N: f64 = 0.6;

/// SVG `text-anchor` values used by the diagrams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	/// Text starts at `x`.
	Start,
	/// Text is centred on `x`.
	Middle,
	/// Text ends at `x`.
	End,
}

impl TextAnchor {
	/// Attribute value.
	pub fn as_str(self) -> &'static str {
		match self {
			TextAnchor::Start => "start",
			TextAnchor::Middle => "middle",
			TextAnchor::End => "end",
		}
	}
}

/// Where a node's label goes. `y` is the vertical centre of the rectangle.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct LabelPlacement {
	pub x: f64,
	pub y: f64,
	pub anchor: TextAnchor,
}

/// One link ready to bind to a `<path>`.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct LinkShape {
	pub index: usize,
	pub d: String,
	/// Never below 1.
	pub stroke_width: f64,
	pub title: String,
}

/// One node ready to bind to a `<g><rect/><text/><title/></g>` group.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct NodeShape {
	pub index: usize,
	/// Rectangle `id`, the node name.
	pub id: String,
	pub x: f64,
	pub y: f64,
	/// From the magnitude encoding, not the layout.
	pub width: f64,
	pub height: f64,
	pub label: LabelPlacement,
	pub title: String,
}

/// Everything the diagram draws, computed from a laid-out graph. Both lists
/// keep graph order.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SankeyScene {
	pub links: Vec<LinkShape>,
	pub nodes: Vec<NodeShape>,
}

/// Magnitude-to-width encoding, capped for very large nodes.
pub fn node_rect_width(n: f64) -> f64 {
	if n > MAX_UNCAPPED_N {
		CAPPED_WIDTH
	} else {
		n * WIDTH_PER_N
	}
}

/// Labels sit left of their node, except on the left half of the canvas where
/// they flip to the right so they stay on screen.
pub fn label_placement(node: &GraphNode, canvas_width: f64) -> LabelPlacement {
	let y = (node.y0 + node.y1) / 2.0;
	if node.x0 < canvas_width / 2.0 {
		LabelPlacement {
			x: node.x1 + LABEL_GAP,
			y,
			anchor: TextAnchor::Start,
		}
	} else {
		LabelPlacement {
			x: node.x0 - LABEL_GAP,
			y,
			anchor: TextAnchor::End,
		}
	}
}

/// Horizontal cubic from the source's right edge to the target's left edge.
pub fn link_horizontal(graph: &SankeyGraph, link: &GraphLink) -> String {
	let sx = graph.source(link).x1;
	let tx = graph.target(link).x0;
	let mx = (sx + tx) / 2.0;
	format!(
		"M{sx},{y0}C{mx},{y0},{mx},{y1},{tx},{y1}",
		sx = fmt(sx),
		y0 = fmt(link.y0),
		mx = fmt(mx),
		y1 = fmt(link.y1),
		tx = fmt(tx),
	)
}

impl SankeyScene {
	/// Applies the visual encodings to every link and node.
	pub fn build(graph: &SankeyGraph, canvas_width: f64) -> Self {
		let links = graph
			.links
			.iter()
			.map(|link| LinkShape {
				index: link.index,
				d: link_horizontal(graph, link),
				stroke_width: link.width.max(1.0),
				title: link_title(&graph.source(link).name, &graph.target(link).name, link.value),
			})
			.collect();

		let nodes = graph
			.nodes
			.iter()
			.map(|node| NodeShape {
				index: node.index,
				id: node.name.clone(),
				x: node.x0,
				y: node.y0,
				width: node_rect_width(node.n),
				height: node.y1 - node.y0,
				label: label_placement(node, canvas_width),
				title: node_title(&node.name, node.value),
			})
			.collect();

		Self { links, nodes }
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::sankey::layout::SankeyLayout;
	use crate::components::sankey::types::{GraphDocument, LinkRecord, NodeRecord};

	fn node_at(x0: f64) -> GraphNode {
		GraphNode {
			index: 0,
			name: "n".into(),
			n: 10.0,
			value: 0.0,
			depth: 0,
			height: 0,
			layer: 0,
			x0,
			y0: 10.0,
			x1: x0 + 15.0,
			y1: 30.0,
			source_links: Vec::new(),
			target_links: Vec::new(),
		}
	}

	#[test]
	fn width_encoding_caps_strictly_above_400() {
		assert_eq!(node_rect_width(400.0), 240.0);
		assert_eq!(node_rect_width(400.5), 15.0);
		assert_eq!(node_rect_width(401.0), 15.0);
		assert_eq!(node_rect_width(10.0), 6.0);
		assert_eq!(node_rect_width(0.0), 0.0);
	}

	#[test]
	fn label_flips_left_of_midpoint() {
		let left = label_placement(&node_at(100.0), 960.0);
		assert_eq!(left.anchor, TextAnchor::Start);
		assert_eq!(left.x, 121.0);
		assert_eq!(left.y, 20.0);

		let right = label_placement(&node_at(700.0), 960.0);
		assert_eq!(right.anchor, TextAnchor::End);
		assert_eq!(right.x, 694.0);
	}

	#[test]
	fn midpoint_itself_anchors_end() {
		assert_eq!(label_placement(&node_at(480.0), 960.0).anchor, TextAnchor::End);
		assert_eq!(
			label_placement(&node_at(479.999), 960.0).anchor,
			TextAnchor::Start
		);
	}

	#[test]
	fn scene_from_layout() {
		let doc = GraphDocument {
			nodes: vec![
				NodeRecord {
					name: "Foo".into(),
					n: 500.0,
				},
				NodeRecord {
					name: "Bar".into(),
					n: 20.0,
				},
			],
			links: vec![LinkRecord {
				source: "Foo".into(),
				target: "Bar".into(),
				value: 1234.5,
			}],
		};
		let graph = SankeyLayout::for_canvas(960.0, 600.0).compute(&doc).unwrap();
		let scene = SankeyScene::build(&graph, 960.0);

		assert_eq!(scene.links.len(), 1);
		assert_eq!(scene.links[0].title, "Foo → Bar\n1,235 TWh");
		assert!(scene.links[0].d.starts_with("M16,"));
		assert!(scene.links[0].d.contains(",745,"));
		assert!(scene.links[0].stroke_width >= 1.0);

		let foo = &scene.nodes[0];
		assert_eq!(foo.id, "Foo");
		assert_eq!(foo.width, 15.0);
		assert_eq!(foo.label.anchor, TextAnchor::Start);
		assert_eq!(foo.title, "Foo\n1,235 TWh");
		let bar = &scene.nodes[1];
		assert_eq!(bar.width, 12.0);
		assert_eq!(bar.label.anchor, TextAnchor::End);
	}

	#[test]
	fn thin_links_keep_a_visible_stroke() {
		let doc = GraphDocument {
			nodes: vec![
				NodeRecord {
					name: "a".into(),
					n: 1.0,
				},
				NodeRecord {
					name: "b".into(),
					n: 1.0,
				},
				NodeRecord {
					name: "c".into(),
					n: 1.0,
				},
			],
			links: vec![
				LinkRecord {
					source: "a".into(),
					target: "b".into(),
					value: 10000.0,
				},
				LinkRecord {
					source: "a".into(),
					target: "c".into(),
					value: 0.001,
				},
			],
		};
		let graph = SankeyLayout::for_canvas(960.0, 600.0).compute(&doc).unwrap();
		let scene = SankeyScene::build(&graph, 960.0);
		assert!(graph.links[1].width < 1.0);
		assert_eq!(scene.links[1].stroke_width, 1.0);
	}
}
