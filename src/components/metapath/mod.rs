//! The metapath strip drawn above the diagram.

mod component;
mod render;
mod types;

pub use component::MetapathStrip;
pub use render::{
	Arrow, BOX_HEIGHT, BOX_WIDTH, BoxMark, EXAMPLE_Y, MARKER_ID, MARKER_PATH, StripScene, TYPE_Y,
	TextMark, X_POS,
};
pub use types::MetapathSample;
