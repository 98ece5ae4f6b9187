//! Fetching and preparing the two datasets.

mod fetch;
mod loader;

pub use fetch::{decode, fetch_json, fetch_text};
pub use loader::{load_graph, load_metapath, prepare_graph};
