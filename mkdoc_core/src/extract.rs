use std::iter::FusedIterator;

use crate::markers::Markers;

/// Return the text of every documentation region in `content`, joined with
/// newlines, using the default `/*back_start*/` and `/*back_end*/` markers.
pub fn extract_back_sections(content: &str) -> String {
	extract_regions(content, &Markers::default())
}

/// Return the text strictly between each start marker and the next end
/// marker, in document order, joined with `\n`.
///
/// A start marker without a following end marker ends the extraction: the
/// dangling tail is dropped rather than reported. When no region is found the
/// result is empty.
pub fn extract_regions(content: &str, markers: &Markers) -> String {
	regions(content, markers).collect::<Vec<_>>().join("\n")
}

/// Iterate lazily over the regions of `content` without copying them.
pub fn regions<'a>(content: &'a str, markers: &'a Markers) -> Regions<'a> {
	Regions {
		content,
		markers,
		cursor: 0,
	}
}

/// Iterator over the non-overlapping regions of a source file.
#[derive(Debug, Clone)]
pub struct Regions<'a> {
	content: &'a str,
	markers: &'a Markers,
	cursor: usize,
}

impl<'a> Iterator for Regions<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		if !self.markers.is_valid() {
			return None;
		}

		let rest = self.content.get(self.cursor..)?;
		let Some(open) = rest.find(&self.markers.start) else {
			self.cursor = self.content.len();
			return None;
		};

		let body_start = self.cursor + open + self.markers.start.len();
		let Some(close) = self.content[body_start..].find(&self.markers.end) else {
			self.cursor = self.content.len();
			return None;
		};

		let body_end = body_start + close;
		self.cursor = body_end + self.markers.end.len();

		Some(&self.content[body_start..body_end])
	}
}

impl FusedIterator for Regions<'_> {}
