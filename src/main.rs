//! Browser entry point.

use leptos::prelude::*;
use metapath_sankey::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
