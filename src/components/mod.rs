//! SVG components and the pure scene builders behind them.

pub mod metapath;
pub mod sankey;
