use leptos::prelude::*;
use log::info;

use super::format::fmt;
use super::render::{LINK_OPACITY, NODE_FILL, SankeyScene};
use super::state::InteractionState;
use super::types::SankeyGraph;

/// Draws a laid-out graph and owns its click/hover state.
///
/// Clicking a rectangle or label toggles the `off` class on that element.
/// Hovering a rectangle puts `highlight` on every link touching that node.
#[component]
pub fn SankeyDiagram(
	/// Output of [`SankeyLayout::compute`](super::SankeyLayout::compute).
	graph: SankeyGraph,
	/// Canvas width; also decides which side labels sit on.
	width: f64,
	/// Canvas height.
	height: f64,
) -> impl IntoView {
	let scene = SankeyScene::build(&graph, width);
	let state = RwSignal::new(InteractionState::new(&graph));
	info!(
		"rendering sankey: {} nodes, {} links",
		scene.nodes.len(),
		scene.links.len()
	);
	diagram_view(scene, state, width, height)
}

fn diagram_view(
	scene: SankeyScene,
	state: RwSignal<InteractionState>,
	width: f64,
	height: f64,
) -> impl IntoView {
	let links = scene
		.links
		.into_iter()
		.map(|link| {
			let index = link.index;
			view! {
				<path
					d=link.d
					opacity=fmt(LINK_OPACITY)
					stroke-width=fmt(link.stroke_width)
					class:highlight=move || state.with(|s| s.is_highlighted(index))
				>
					<title>{link.title}</title>
				</path>
			}
		})
		.collect_view();

	let nodes = scene
		.nodes
		.into_iter()
		.map(|node| {
			let index = node.index;
			let label = node.id.clone();
			let (enter_id, leave_id) = (node.id.clone(), node.id.clone());
			view! {
				<g>
					<rect
						id=node.id
						x=fmt(node.x)
						y=fmt(node.y)
						height=fmt(node.height)
						width=fmt(node.width)
						fill=NODE_FILL
						stroke="#000"
						class:off=move || state.with(|s| s.is_rect_off(index))
						on:click=move |_| state.update(|s| s.toggle_rect(index))
						on:mouseenter=move |_| state.update(|s| s.hover_enter(&enter_id))
						on:mouseleave=move |_| state.update(|s| s.hover_leave(&leave_id))
					/>
					<text
						x=fmt(node.label.x)
						y=fmt(node.label.y)
						dy="0.35em"
						text-anchor=node.label.anchor.as_str()
						class:off=move || state.with(|s| s.is_label_off(index))
						on:click=move |_| state.update(|s| s.toggle_label(index))
					>
						{label}
					</text>
					<title>{node.title}</title>
				</g>
			}
		})
		.collect_view();

	view! {
		<svg id="sankey" class="sankey" width=fmt(width) height=fmt(height)>
			<g class="links" fill="none" stroke="#000" stroke-opacity="0.4">
				{links}
			</g>
			<g class="nodes" font-family="sans-serif" font-size="10">
				{nodes}
			</g>
		</svg>
	}
}

#[cfg(test)]
mod tests {
	use leptos::tachys::view::RenderHtml;

	use super::*;
	use crate::components::sankey::{GraphDocument, LinkRecord, NodeRecord, SankeyLayout};

	fn graph() -> SankeyGraph {
		let doc = GraphDocument {
			nodes: vec![
				NodeRecord { name: "NGLY1".into(), n: 520.0 },
				NodeRecord { name: "Alacrima".into(), n: 10.0 },
				NodeRecord { name: "ENGASE".into(), n: 400.0 },
			],
			links: vec![
				LinkRecord { source: "NGLY1".into(), target: "Alacrima".into(), value: 1640.0 },
				LinkRecord { source: "ENGASE".into(), target: "Alacrima".into(), value: 20.0 },
			],
		};
		SankeyLayout::for_canvas(960.0, 600.0).compute(&doc).unwrap()
	}

	/// Opening tags in document order, without the angle brackets.
	fn open_tags(html: &str) -> Vec<&str> {
		html.split('<')
			.skip(1)
			.filter_map(|chunk| chunk.split_once('>').map(|(tag, _)| tag))
			.filter(|tag| !tag.starts_with('/') && !tag.starts_with('!'))
			.collect()
	}

	fn render(prepare: impl FnOnce(&mut InteractionState)) -> String {
		let owner = Owner::new();
		owner.with(|| {
			let graph = graph();
			let mut initial = InteractionState::new(&graph);
			prepare(&mut initial);
			let state = RwSignal::new(initial);
			diagram_view(SankeyScene::build(&graph, 960.0), state, 960.0, 600.0).to_html()
		})
	}

	#[test]
	fn links_are_faint_paths_with_tooltips() {
		let html = render(|_| {});
		let tags = open_tags(&html);
		let paths: Vec<_> = tags
			.iter()
			.enumerate()
			.filter(|(_, t)| t.starts_with("path"))
			.collect();
		assert_eq!(paths.len(), 2);
		for (i, path) in paths {
			assert!(path.contains(r#"opacity="0.05""#), "{path}");
			assert!(path.contains("stroke-width="), "{path}");
			assert!(path.contains(r#" d="M"#), "{path}");
			assert_eq!(tags[i + 1], "title");
		}
		assert!(html.contains("<title>NGLY1 → Alacrima\n1,640 TWh"));
		assert!(html.contains(r#"stroke-opacity="0.4""#));
	}

	#[test]
	fn node_rects_carry_name_fill_and_stroke() {
		let html = render(|_| {});
		let rects: Vec<_> = open_tags(&html)
			.into_iter()
			.filter(|t| t.starts_with("rect"))
			.collect();
		assert_eq!(rects.len(), 3);
		for (rect, name) in rects.iter().zip(["NGLY1", "Alacrima", "ENGASE"]) {
			assert!(rect.contains(&format!(r#"id="{name}""#)), "{rect}");
			assert!(rect.contains(r##"fill="#ff6574""##), "{rect}");
			assert!(rect.contains(r##"stroke="#000""##), "{rect}");
		}
		assert!(html.contains("<title>Alacrima\n1,660 TWh"));
		assert!(!html.contains("off"));
		assert!(!html.contains("highlight"));
	}

	#[test]
	fn toggled_elements_render_off() {
		let html = render(|state| {
			state.toggle_rect(0);
			state.toggle_label(2);
		});
		let off: Vec<_> = open_tags(&html)
			.into_iter()
			.filter(|t| t.contains(r#"class="off""#))
			.collect();
		assert_eq!(off.len(), 2);
		assert!(off[0].starts_with("rect") && off[0].contains(r#"id="NGLY1""#));
		assert!(off[1].starts_with("text"));
	}

	#[test]
	fn hovered_node_highlights_its_links() {
		let html = render(|state| state.hover_enter("NGLY1"));
		let highlighted: Vec<_> = open_tags(&html)
			.into_iter()
			.filter(|t| t.contains(r#"class="highlight""#))
			.collect();
		assert_eq!(highlighted.len(), 1);
		assert!(highlighted[0].starts_with("path"));

		let html = render(|state| state.hover_enter("Alacrima"));
		assert_eq!(html.matches(r#"class="highlight""#).count(), 2);
	}
}
