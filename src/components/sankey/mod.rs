//! Sankey diagram: layout, visual encodings, interaction state and the component.

mod component;
pub mod format;
mod layout;
mod render;
mod state;
mod types;

pub use component::SankeyDiagram;
pub use layout::{Extent, LABEL_MARGIN, NODE_PADDING, NODE_WIDTH, SankeyLayout};
pub use render::{
	LabelPlacement, LinkShape, NodeShape, SankeyScene, TextAnchor, label_placement,
	link_horizontal, node_rect_width,
};
pub use state::InteractionState;
pub use types::{GraphDocument, GraphLink, GraphNode, LinkRecord, NodeRecord, SankeyGraph};
