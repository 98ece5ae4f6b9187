use std::collections::HashMap;

use super::types::MetapathSample;
use crate::components::sankey::TextAnchor;
use crate::error::Result;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

/// Horizontal distance between consecutive steps.
pub const X_POS: f64 = 150.0;
/// Width of a category box.
pub const BOX_WIDTH: f64 = X_POS * 0.65;
/// Height of a category box.
pub const BOX_HEIGHT: f64 = 50.0;
/// Baseline of category labels and category arrows.
pub const TYPE_Y: f64 = 25.0;
/// Baseline of sample labels and sample arrows.
pub const EXAMPLE_Y: f64 = 100.0;
/// Id of the shared arrowhead marker.
pub const MARKER_ID: &str = "triangle";
/// Arrowhead outline.
pub const MARKER_PATH: &str = "M 0 0 12 6 0 12 3 6";

/// A positioned text label.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
	pub x: f64,
	/// Baseline.
	pub y: f64,
	pub anchor: TextAnchor,
	pub text: String,
}

/// A category box.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub struct BoxMark {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
	/// Fill from the category scale.
	pub fill: &'static str,
	pub category: String,
}

/// A horizontal arrow from `x1` to `x2`, ending in the shared marker.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
	pub x1: f64,
	pub x2: f64,
	pub y: f64,
}

/// Geometry of the metapath strip, listed in draw order.
#[allow(missing_docs)]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StripScene {
	pub labels: Vec<TextMark>,
	pub boxes: Vec<BoxMark>,
	/// Category codes centred over the boxes.
	pub type_labels: Vec<TextMark>,
	/// Box-to-box.
	pub type_arrows: Vec<Arrow>,
	/// Label-to-label.
	pub path_arrows: Vec<Arrow>,
}

/// Ordinal color scale: categories keep the color of their first appearance.
#[derive(Default)]
struct CategoryColors<'a> {
	seen: HashMap<&'a str, usize>,
}

impl<'a> CategoryColors<'a> {
	fn color(&mut self, category: &'a str) -> &'static str {
		let next = self.seen.len();
		let idx = *self.seen.entry(category).or_insert(next);
		COLORS[idx % COLORS.len()]
	}
}

fn step_x(i: usize) -> f64 {
	i as f64 * X_POS
}

/// Arrows from the right edge of step `i` to the left edge of step `i + 1`.
fn arrows(len: usize, y: f64) -> Vec<Arrow> {
	(1..len)
		.map(|i| Arrow {
			x1: step_x(i - 1) + BOX_WIDTH,
			x2: step_x(i),
			y,
		})
		.collect()
}

impl StripScene {
	/// Lays out `sample`, rejecting it when labels and categories don't pair up.
	pub fn build(sample: &MetapathSample) -> Result<Self> {
		sample.validate()?;

		let labels = sample
			.sample_path
			.iter()
			.enumerate()
			.map(|(i, text)| TextMark {
				x: step_x(i),
				y: EXAMPLE_Y,
				anchor: TextAnchor::Start,
				text: text.clone(),
			})
			.collect();

		let mut colors = CategoryColors::default();
		let boxes = sample
			.path_type
			.iter()
			.enumerate()
			.map(|(i, category)| BoxMark {
				x: step_x(i),
				y: 0.0,
				width: BOX_WIDTH,
				height: BOX_HEIGHT,
				fill: colors.color(category),
				category: category.clone(),
			})
			.collect();

		let type_labels = sample
			.path_type
			.iter()
			.enumerate()
			.map(|(i, category)| TextMark {
				x: step_x(i) + BOX_WIDTH / 2.0,
				y: TYPE_Y,
				anchor: TextAnchor::Middle,
				text: category.clone(),
			})
			.collect();

		Ok(Self {
			labels,
			boxes,
			type_labels,
			type_arrows: arrows(sample.path_type.len(), TYPE_Y),
			path_arrows: arrows(sample.sample_path.len(), EXAMPLE_Y),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;

	fn sample(labels: &[&str], types: &[&str]) -> MetapathSample {
		MetapathSample {
			sample_path: labels.iter().map(|s| s.to_string()).collect(),
			path_type: types.iter().map(|s| s.to_string()).collect(),
			..Default::default()
		}
	}

	#[test]
	fn three_step_strip() {
		let scene = StripScene::build(&sample(&["A", "B", "C"], &["T1", "T1", "T2"])).unwrap();
		assert_eq!(scene.labels.len(), 3);
		assert_eq!(scene.boxes.len(), 3);
		assert_eq!(scene.type_labels.len(), 3);
		assert_eq!(scene.type_arrows.len(), 2);
		assert_eq!(scene.path_arrows.len(), 2);

		for i in 0..3 {
			let x = i as f64 * 150.0;
			assert_eq!(scene.labels[i].x, x);
			assert_eq!(scene.labels[i].y, 100.0);
			assert_eq!(scene.boxes[i].x, x);
			assert_eq!(scene.boxes[i].y, 0.0);
			assert_eq!(scene.type_labels[i].x, x + BOX_WIDTH / 2.0);
		}
		assert_eq!(scene.labels[1].text, "B");
		assert_eq!(scene.type_labels[2].text, "T2");
		assert_eq!(scene.type_labels[0].anchor, TextAnchor::Middle);
	}

	#[test]
	fn box_geometry() {
		let scene = StripScene::build(&sample(&["A"], &["DISO"])).unwrap();
		let b = &scene.boxes[0];
		assert!((b.width - 97.5).abs() < 1e-9);
		assert_eq!(b.height, 50.0);
		assert!(scene.type_arrows.is_empty());
		assert!(scene.path_arrows.is_empty());
	}

	#[test]
	fn arrows_join_consecutive_steps() {
		let scene = StripScene::build(&sample(&["A", "B", "C"], &["T1", "T1", "T2"])).unwrap();
		for (i, arrow) in scene.type_arrows.iter().enumerate() {
			assert_eq!(arrow.x1, i as f64 * 150.0 + BOX_WIDTH);
			assert_eq!(arrow.x2, (i + 1) as f64 * 150.0);
			assert_eq!(arrow.y, TYPE_Y);
		}
		for arrow in &scene.path_arrows {
			assert_eq!(arrow.y, EXAMPLE_Y);
			assert!(arrow.x1 < arrow.x2);
		}
	}

	#[test]
	fn categories_share_colors() {
		let scene =
			StripScene::build(&sample(&["A", "B", "C", "D"], &["DISO", "GENE", "DISO", "PHYS"]))
				.unwrap();
		let fills: Vec<&str> = scene.boxes.iter().map(|b| b.fill).collect();
		assert_eq!(fills, vec!["#1f77b4", "#ff7f0e", "#1f77b4", "#2ca02c"]);
	}

	#[test]
	fn empty_sample_draws_nothing() {
		let scene = StripScene::build(&MetapathSample::default()).unwrap();
		assert_eq!(scene, StripScene::default());
	}

	#[test]
	fn mismatched_sample_is_rejected() {
		let err = StripScene::build(&sample(&["A", "B"], &["T1"])).unwrap_err();
		assert_eq!(err, Error::MetapathShape { labels: 2, types: 1 });
	}
}
