use serde::Deserialize;

use crate::error::{Error, Result};

/// One example path through typed node categories.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MetapathSample {
	/// Row index in the source table.
	#[serde(default)]
	pub index: u64,
	/// Category codes joined by `-`, e.g. `DISO-DISO-PHYS`.
	#[serde(default)]
	pub path_string: String,
	/// How many paths share this pattern.
	#[serde(default)]
	pub count: u64,
	/// Node labels along the example path.
	pub sample_path: Vec<String>,
	/// Category code of each label, same length as `sample_path`.
	pub path_type: Vec<String>,
}

impl MetapathSample {
	/// Checks that every label has exactly one category.
	pub fn validate(&self) -> Result<()> {
		if self.sample_path.len() != self.path_type.len() {
			return Err(Error::MetapathShape {
				labels: self.sample_path.len(),
				types: self.path_type.len(),
			});
		}
		Ok(())
	}

	/// Number of steps in the path.
	pub fn len(&self) -> usize {
		self.path_type.len()
	}

	/// True when the path has no steps.
	pub fn is_empty(&self) -> bool {
		self.path_type.is_empty()
	}
}
