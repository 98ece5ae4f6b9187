use leptos::prelude::*;
use log::error;

use crate::components::metapath::MetapathStrip;
use crate::components::sankey::SankeyDiagram;
use crate::config::AppConfig;
use crate::data::{load_graph, load_metapath};

/// Metapath strip above the Sankey diagram.
///
/// The two load independently: the strip may appear before or after the
/// diagram. A failed load only reaches the console.
#[component]
pub fn Home() -> impl IntoView {
	let config = AppConfig::from_document();
	let (sankey_w, sankey_h) = (config.sankey_width, config.sankey_height);
	let (strip_w, strip_h) = (config.strip_width, config.strip_height);

	let strip_config = config.clone();
	let strip = LocalResource::new(move || {
		let config = strip_config.clone();
		async move { load_metapath(&config).await }
	});
	let graph = LocalResource::new(move || {
		let config = config.clone();
		async move { load_graph(&config).await }
	});

	view! {
		<div class="metapath-sankey">
			<Suspense fallback=|| ()>
				{move || Suspend::new(async move {
					match strip.await {
						Ok(scene) => {
							view! { <MetapathStrip scene width=strip_w height=strip_h /> }.into_any()
						}
						Err(err) => {
							error!("metapath strip not rendered: {err}");
							().into_any()
						}
					}
				})}
			</Suspense>
			<Suspense fallback=|| ()>
				{move || Suspend::new(async move {
					match graph.await {
						Ok(graph) => {
							view! { <SankeyDiagram graph width=sankey_w height=sankey_h /> }.into_any()
						}
						Err(err) => {
							error!("sankey diagram not rendered: {err}");
							().into_any()
						}
					}
				})}
			</Suspense>
		</div>
	}
}
