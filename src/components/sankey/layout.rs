use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use super::types::{GraphDocument, GraphLink, GraphNode, SankeyGraph};
use crate::error::{Error, Result};

/// Node rectangle width used by the app.
pub const NODE_WIDTH: f64 = 15.0;
/// Vertical gap between nodes in the same column.
pub const NODE_PADDING: f64 = 10.0;
/// Space kept free right of the layout for node labels.
pub const LABEL_MARGIN: f64 = 200.0;

/// Bounding box the layout fits into, `(x0, y0)` top-left to `(x1, y1)`.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
	pub x0: f64,
	pub y0: f64,
	pub x1: f64,
	pub y1: f64,
}

/// Sankey layout configuration.
///
/// Columns follow the "justify" alignment: a node sits at its depth unless it
/// is a sink, in which case it is pushed to the last column. With
/// `iterations(0)` nodes keep the order they have in the input document.
#[derive(Clone, Debug, PartialEq)]
pub struct SankeyLayout {
	node_width: f64,
	node_padding: f64,
	extent: Extent,
	iterations: usize,
}

impl Default for SankeyLayout {
	fn default() -> Self {
		Self {
			node_width: 24.0,
			node_padding: 8.0,
			extent: Extent {
				x0: 0.0,
				y0: 0.0,
				x1: 1.0,
				y1: 1.0,
			},
			iterations: 32,
		}
	}
}

fn f64_cmp(a: f64, b: f64) -> Ordering {
	a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

fn center(node: &GraphNode) -> f64 {
	(node.y0 + node.y1) / 2.0
}

#[derive(Clone, Copy)]
enum Direction {
	Downstream,
	Upstream,
}

impl SankeyLayout {
	/// The configuration the diagram uses for a canvas of the given size.
	pub fn for_canvas(width: f64, height: f64) -> Self {
		Self::default()
			.node_width(NODE_WIDTH)
			.node_padding(NODE_PADDING)
			.extent(Extent {
				x0: 1.0,
				y0: 1.0,
				x1: width - LABEL_MARGIN,
				y1: height - 6.0,
			})
			.iterations(0)
	}

	/// Sets the rectangle width of every node.
	pub fn node_width(mut self, width: f64) -> Self {
		self.node_width = width;
		self
	}

	/// Sets the vertical gap between nodes of a column.
	pub fn node_padding(mut self, padding: f64) -> Self {
		self.node_padding = padding;
		self
	}

	/// Sets the bounding box.
	pub fn extent(mut self, extent: Extent) -> Self {
		self.extent = extent;
		self
	}

	/// Sets the number of relaxation passes.
	pub fn iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	/// The configured bounding box.
	pub fn bounds(&self) -> Extent {
		self.extent
	}

	/// Lays out `doc`, returning a new graph. `doc` itself is not modified.
	pub fn compute(&self, doc: &GraphDocument) -> Result<SankeyGraph> {
		debug!(
			"sankey layout: {} nodes, {} links, node_width={}, padding={}, iterations={}",
			doc.nodes.len(),
			doc.links.len(),
			self.node_width,
			self.node_padding,
			self.iterations
		);

		let mut graph = build_graph(doc)?;
		if graph.nodes.is_empty() {
			return Ok(graph);
		}
		compute_node_values(&mut graph);
		let depths = breadth_levels(&graph, Direction::Downstream)?;
		let heights = breadth_levels(&graph, Direction::Upstream)?;
		for (node, (depth, height)) in graph.nodes.iter_mut().zip(depths.into_iter().zip(heights)) {
			node.depth = depth;
			node.height = height;
		}
		let mut columns = self.place_columns(&mut graph);
		self.compute_node_breadths(&mut graph, &mut columns);
		compute_link_breadths(&mut graph);
		Ok(graph)
	}

	fn place_columns(&self, graph: &mut SankeyGraph) -> Vec<Vec<usize>> {
		let count = graph.nodes.iter().map(|n| n.depth).max().unwrap_or(0) + 1;
		let kx = if count > 1 {
			(self.extent.x1 - self.extent.x0 - self.node_width) / (count as f64 - 1.0)
		} else {
			0.0
		};

		let mut columns = vec![Vec::new(); count];
		for node in &mut graph.nodes {
			let layer = if node.source_links.is_empty() {
				count - 1
			} else {
				node.depth.min(count - 1)
			};
			node.layer = layer;
			node.x0 = self.extent.x0 + layer as f64 * kx;
			node.x1 = node.x0 + self.node_width;
			columns[layer].push(node.index);
		}
		columns.retain(|column| !column.is_empty());
		columns
	}

	fn compute_node_breadths(&self, graph: &mut SankeyGraph, columns: &mut [Vec<usize>]) {
		let py = self.node_padding;
		let span = self.extent.y1 - self.extent.y0;

		let mut ky = f64::INFINITY;
		for column in columns.iter() {
			let total: f64 = column.iter().map(|&i| graph.nodes[i].value).sum();
			if total > 0.0 {
				ky = ky.min((span - (column.len() as f64 - 1.0) * py) / total);
			}
		}
		if !ky.is_finite() {
			ky = 0.0;
		}

		for column in columns.iter() {
			for (i, &ni) in column.iter().enumerate() {
				let node = &mut graph.nodes[ni];
				node.y0 = i as f64;
				node.y1 = node.y0 + node.value * ky;
			}
		}
		for link in &mut graph.links {
			link.width = link.value * ky;
		}

		self.resolve_collisions(graph, columns);
		let mut alpha = 1.0;
		for _ in 0..self.iterations {
			alpha *= 0.99;
			relax(graph, columns, alpha, Direction::Upstream);
			self.resolve_collisions(graph, columns);
			relax(graph, columns, alpha, Direction::Downstream);
			self.resolve_collisions(graph, columns);
		}
	}

	fn resolve_collisions(&self, graph: &mut SankeyGraph, columns: &mut [Vec<usize>]) {
		let py = self.node_padding;
		let nodes = &mut graph.nodes;
		for column in columns.iter_mut() {
			column.sort_by(|&a, &b| f64_cmp(nodes[a].y0, nodes[b].y0));

			// Push overlapping nodes down.
			let mut y = self.extent.y0;
			for &ni in column.iter() {
				let dy = y - nodes[ni].y0;
				if dy > 0.0 {
					nodes[ni].y0 += dy;
					nodes[ni].y1 += dy;
				}
				y = nodes[ni].y1 + py;
			}

			// If the bottom node overflows, push back up.
			let dy = y - py - self.extent.y1;
			if dy > 0.0 {
				let Some((&last, rest)) = column.split_last() else {
					continue;
				};
				nodes[last].y0 -= dy;
				nodes[last].y1 -= dy;
				let mut y = nodes[last].y0;
				for &ni in rest.iter().rev() {
					let dy = nodes[ni].y1 + py - y;
					if dy > 0.0 {
						nodes[ni].y0 -= dy;
						nodes[ni].y1 -= dy;
					}
					y = nodes[ni].y0;
				}
			}
		}
	}
}

fn build_graph(doc: &GraphDocument) -> Result<SankeyGraph> {
	let mut by_name: HashMap<&str, usize> = HashMap::with_capacity(doc.nodes.len());
	let mut nodes = Vec::with_capacity(doc.nodes.len());
	for (i, record) in doc.nodes.iter().enumerate() {
		if by_name.insert(record.name.as_str(), i).is_some() {
			return Err(Error::DuplicateNode {
				name: record.name.clone(),
			});
		}
		nodes.push(GraphNode {
			index: i,
			name: record.name.clone(),
			n: record.n,
			value: 0.0,
			depth: 0,
			height: 0,
			layer: 0,
			x0: 0.0,
			y0: 0.0,
			x1: 0.0,
			y1: 0.0,
			source_links: Vec::new(),
			target_links: Vec::new(),
		});
	}

	let resolve = |name: &str| {
		by_name
			.get(name)
			.copied()
			.ok_or_else(|| Error::MissingNode {
				name: name.to_string(),
			})
	};

	let mut links = Vec::with_capacity(doc.links.len());
	for (i, record) in doc.links.iter().enumerate() {
		let source = resolve(&record.source)?;
		let target = resolve(&record.target)?;
		nodes[source].source_links.push(i);
		nodes[target].target_links.push(i);
		links.push(GraphLink {
			index: i,
			source,
			target,
			value: record.value,
			width: 0.0,
			y0: 0.0,
			y1: 0.0,
		});
	}

	Ok(SankeyGraph { nodes, links })
}

fn compute_node_values(graph: &mut SankeyGraph) {
	let links = &graph.links;
	for node in &mut graph.nodes {
		let out: f64 = node.source_links.iter().map(|&li| links[li].value).sum();
		let inc: f64 = node.target_links.iter().map(|&li| links[li].value).sum();
		node.value = out.max(inc);
	}
}

/// Breadth-first level of every node, walking links forwards (depth) or
/// backwards (height). A walk longer than the node count means a cycle.
fn breadth_levels(graph: &SankeyGraph, direction: Direction) -> Result<Vec<usize>> {
	let n = graph.nodes.len();
	let mut levels = vec![0; n];
	let mut current: Vec<usize> = (0..n).collect();
	let mut seen = vec![false; n];
	let mut level = 0;

	while !current.is_empty() {
		let mut next = Vec::new();
		for &ni in &current {
			levels[ni] = level;
			let node = &graph.nodes[ni];
			let edges = match direction {
				Direction::Downstream => &node.source_links,
				Direction::Upstream => &node.target_links,
			};
			for &li in edges {
				let link = &graph.links[li];
				let other = match direction {
					Direction::Downstream => link.target,
					Direction::Upstream => link.source,
				};
				if !seen[other] {
					seen[other] = true;
					next.push(other);
				}
			}
		}
		level += 1;
		if level > n {
			return Err(Error::CircularLink);
		}
		seen.fill(false);
		current = next;
	}
	Ok(levels)
}

/// Moves each node toward the weighted centre of its neighbours. `Upstream`
/// walks columns right to left against outgoing links, `Downstream` walks left
/// to right against incoming links.
fn relax(graph: &mut SankeyGraph, columns: &[Vec<usize>], alpha: f64, direction: Direction) {
	let order: Vec<&Vec<usize>> = match direction {
		Direction::Upstream => columns.iter().rev().collect(),
		Direction::Downstream => columns.iter().collect(),
	};
	for column in order {
		for &ni in column {
			let node = &graph.nodes[ni];
			let edges = match direction {
				Direction::Upstream => &node.source_links,
				Direction::Downstream => &node.target_links,
			};
			let (mut weighted, mut total) = (0.0, 0.0);
			for &li in edges {
				let link = &graph.links[li];
				let other = match direction {
					Direction::Upstream => link.target,
					Direction::Downstream => link.source,
				};
				weighted += center(&graph.nodes[other]) * link.value;
				total += link.value;
			}
			if !(total > 0.0) {
				continue;
			}
			let dy = (weighted / total - center(node)) * alpha;
			let node = &mut graph.nodes[ni];
			node.y0 += dy;
			node.y1 += dy;
		}
	}
}

fn compute_link_breadths(graph: &mut SankeyGraph) {
	let node_y0: Vec<f64> = graph.nodes.iter().map(|n| n.y0).collect();
	let links = &mut graph.links;
	for node in &mut graph.nodes {
		node.source_links.sort_by(|&a, &b| {
			f64_cmp(node_y0[links[a].target], node_y0[links[b].target]).then(a.cmp(&b))
		});
		node.target_links.sort_by(|&a, &b| {
			f64_cmp(node_y0[links[a].source], node_y0[links[b].source]).then(a.cmp(&b))
		});

		let mut y = node.y0;
		for &li in &node.source_links {
			links[li].y0 = y + links[li].width / 2.0;
			y += links[li].width;
		}
		let mut y = node.y0;
		for &li in &node.target_links {
			links[li].y1 = y + links[li].width / 2.0;
			y += links[li].width;
		}
	}
}
