use std::collections::HashMap;

use super::types::SankeyGraph;

/// Click and hover state of a rendered diagram.
///
/// Rectangles and labels each carry their own `off` bit. Links carry a
/// `highlight` bit driven by hovering over an incident node's rectangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionState {
	rect_off: Vec<bool>,
	label_off: Vec<bool>,
	highlighted: Vec<bool>,
	links_by_node: HashMap<String, Vec<usize>>,
}

#[allow(missing_docs)]
impl InteractionState {
	/// Builds the node name to incident-links index for `graph`.
	pub fn new(graph: &SankeyGraph) -> Self {
		let mut links_by_node: HashMap<String, Vec<usize>> = graph
			.nodes
			.iter()
			.map(|node| (node.name.clone(), Vec::new()))
			.collect();
		for link in &graph.links {
			let source = &graph.source(link).name;
			let target = &graph.target(link).name;
			if let Some(links) = links_by_node.get_mut(source) {
				links.push(link.index);
			}
			if target != source {
				if let Some(links) = links_by_node.get_mut(target) {
					links.push(link.index);
				}
			}
		}

		Self {
			rect_off: vec![false; graph.nodes.len()],
			label_off: vec![false; graph.nodes.len()],
			highlighted: vec![false; graph.links.len()],
			links_by_node,
		}
	}

	/// Flips the `off` bit of a node's rectangle.
	pub fn toggle_rect(&mut self, node: usize) {
		if let Some(off) = self.rect_off.get_mut(node) {
			*off = !*off;
		}
	}

	/// Flips the `off` bit of a node's label.
	pub fn toggle_label(&mut self, node: usize) {
		if let Some(off) = self.label_off.get_mut(node) {
			*off = !*off;
		}
	}

	pub fn is_rect_off(&self, node: usize) -> bool {
		self.rect_off.get(node).copied().unwrap_or(false)
	}

	pub fn is_label_off(&self, node: usize) -> bool {
		self.label_off.get(node).copied().unwrap_or(false)
	}

	/// Highlights every link whose source or target is named `name`.
	pub fn hover_enter(&mut self, name: &str) {
		self.set_incident(name, true);
	}

	/// Clears the highlight set by [`hover_enter`](Self::hover_enter).
	pub fn hover_leave(&mut self, name: &str) {
		self.set_incident(name, false);
	}

	fn set_incident(&mut self, name: &str, value: bool) {
		let Some(links) = self.links_by_node.get(name) else {
			return;
		};
		for &li in links {
			self.highlighted[li] = value;
		}
	}

	pub fn is_highlighted(&self, link: usize) -> bool {
		self.highlighted.get(link).copied().unwrap_or(false)
	}

	pub fn highlighted_count(&self) -> usize {
		self.highlighted.iter().filter(|&&h| h).count()
	}

	/// Links incident to the node named `name`.
	pub fn incident_links(&self, name: &str) -> &[usize] {
		self.links_by_node
			.get(name)
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}
}
