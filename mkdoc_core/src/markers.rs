use serde::Deserialize;
use serde::Serialize;

/// Token opening a documentation region.
pub const DEFAULT_START_MARKER: &str = "/*back_start*/";
/// Token closing a documentation region.
pub const DEFAULT_END_MARKER: &str = "/*back_end*/";
/// Prefix every documented macro name must carry.
pub const DEFAULT_PREFIX: &str = "MKML";

/// The pair of tokens bounding a documentation region.
///
/// ```toml
/// [markers]
/// start = "/*back_start*/"
/// end = "/*back_end*/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
	#[serde(default = "default_start")]
	pub start: String,
	#[serde(default = "default_end")]
	pub end: String,
}

impl Markers {
	pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
		Self {
			start: start.into(),
			end: end.into(),
		}
	}

	/// Both tokens must be non-empty for extraction to make progress.
	pub fn is_valid(&self) -> bool {
		!self.start.is_empty() && !self.end.is_empty()
	}
}

impl Default for Markers {
	fn default() -> Self {
		Self::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)
	}
}

fn default_start() -> String {
	DEFAULT_START_MARKER.to_string()
}

fn default_end() -> String {
	DEFAULT_END_MARKER.to_string()
}
