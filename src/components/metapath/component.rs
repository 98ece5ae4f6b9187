use leptos::prelude::*;

use super::render::{Arrow, MARKER_ID, MARKER_PATH, StripScene};
use crate::components::sankey::format::fmt;

/// Draws one example metapath as a row of category boxes over a row of node
/// labels, with arrows between consecutive steps. Static, no interaction.
#[component]
pub fn MetapathStrip(
	/// Output of [`StripScene::build`].
	scene: StripScene,
	/// Canvas width.
	width: f64,
	/// Canvas height.
	height: f64,
) -> impl IntoView {
	let StripScene {
		labels,
		boxes,
		type_labels,
		type_arrows,
		path_arrows,
	} = scene;

	let labels = labels
		.into_iter()
		.map(|mark| {
			view! {
				<text class="example" x=fmt(mark.x) y=fmt(mark.y) text-anchor=mark.anchor.as_str()>
					{mark.text}
				</text>
			}
		})
		.collect_view();

	let boxes = boxes
		.into_iter()
		.map(|mark| {
			view! {
				<rect
					class="node-type"
					data-category=mark.category
					x=fmt(mark.x)
					y=fmt(mark.y)
					width=fmt(mark.width)
					height=fmt(mark.height)
					fill=mark.fill
				/>
			}
		})
		.collect_view();

	let type_labels = type_labels
		.into_iter()
		.map(|mark| {
			view! {
				<text class="node-type" x=fmt(mark.x) y=fmt(mark.y) text-anchor=mark.anchor.as_str()>
					{mark.text}
				</text>
			}
		})
		.collect_view();

	let type_arrows = arrow_lines("node-type", type_arrows);
	let path_arrows = arrow_lines("example", path_arrows);

	view! {
		<svg id="metapaths" class="metapaths" width=fmt(width) height=fmt(height)>
			{labels}
			{boxes}
			{type_labels}
			{type_arrows}
			{path_arrows}
			<defs>
				<marker
					id=MARKER_ID
					refX="12"
					refY="6"
					markerWidth="30"
					markerHeight="30"
					orient="auto"
				>
					<path d=MARKER_PATH />
				</marker>
			</defs>
		</svg>
	}
}

fn arrow_lines(class: &'static str, arrows: Vec<Arrow>) -> impl IntoView {
	let marker_url = format!("url(#{MARKER_ID})");
	arrows
		.into_iter()
		.map(|arrow| {
			view! {
				<line
					class=class
					x1=fmt(arrow.x1)
					x2=fmt(arrow.x2)
					y1=fmt(arrow.y)
					y2=fmt(arrow.y)
					marker-end=marker_url.clone()
				/>
			}
		})
		.collect_view()
}
